//! Feature types and per-document feature counts.
use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// Output category of a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureType {
    Org,
    Loc,
    Person,
    Source,
}

impl FeatureType {
    /// Feature types, in output order.
    pub const ALL: [FeatureType; 4] = [
        FeatureType::Org,
        FeatureType::Loc,
        FeatureType::Person,
        FeatureType::Source,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureType::Org => "org",
            FeatureType::Loc => "loc",
            FeatureType::Person => "person",
            FeatureType::Source => "source",
        }
    }
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Occurrence counts of feature values, iterated in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Counts {
    index: HashMap<String, usize>,
    entries: Vec<(String, u64)>,
}

impl Counts {
    /// Add 1 to a value count, creating the entry if the value is not counted yet.
    pub fn add(&mut self, value: &str) {
        match self.index.get(value) {
            Some(&idx) => self.entries[idx].1 += 1,
            None => {
                self.index.insert(value.to_string(), self.entries.len());
                self.entries.push((value.to_string(), 1));
            }
        }
    }

    pub fn get(&self, value: &str) -> Option<u64> {
        self.index.get(value).map(|&idx| self.entries[idx].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries
            .iter()
            .map(|(value, count)| (value.as_str(), *count))
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Feature counts of a single document, one [Counts] per [FeatureType].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Features {
    org: Counts,
    loc: Counts,
    person: Counts,
    source: Counts,
}

impl Features {
    pub fn get(&self, feature_type: FeatureType) -> &Counts {
        match feature_type {
            FeatureType::Org => &self.org,
            FeatureType::Loc => &self.loc,
            FeatureType::Person => &self.person,
            FeatureType::Source => &self.source,
        }
    }

    pub fn get_mut(&mut self, feature_type: FeatureType) -> &mut Counts {
        match feature_type {
            FeatureType::Org => &mut self.org,
            FeatureType::Loc => &mut self.loc,
            FeatureType::Person => &mut self.person,
            FeatureType::Source => &mut self.source,
        }
    }

    /// Iterate over `(type, value, count)`, grouped by type in [FeatureType::ALL] order.
    pub fn iter(&self) -> impl Iterator<Item = (FeatureType, &str, u64)> {
        FeatureType::ALL.into_iter().flat_map(move |feature_type| {
            self.get(feature_type)
                .iter()
                .map(move |(value, count)| (feature_type, value, count))
        })
    }

    pub fn is_empty(&self) -> bool {
        FeatureType::ALL
            .iter()
            .all(|feature_type| self.get(*feature_type).is_empty())
    }
}

/// A line of the feature table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureRow {
    pub article_id: String,
    pub author: String,
    pub date: String,
    pub feature_type: FeatureType,
    pub feature: String,
    pub count: u64,
}
