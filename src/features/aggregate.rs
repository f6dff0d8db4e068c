/*! Entity aggregation

Counts features of a document from its annotated tokens.

A named entity usually spans several tokens, so tokens are not counted one by one:
the token stream is cut into runs, a run being a maximal sequence of consecutive tokens
that share the same value for a given [NameField].
Each run is classified by its first token, and counts as a single occurrence of its value.

Classification follows an ordered list of [Rule]s, first match wins:

1. `ner` is `ORGANIZATION`: `org`, runs on the entity name
1. `ner` is `LOCATION`: `loc`, runs on the entity name
1. a character name is present: `person`, runs on the character name
1. an attribution name is present: `source`, runs on the attribution name

Tokens that match no rule are skipped one at a time.

Runs on the entity name only compare entity names, not `ner` tags:
a token with the same entity name and a different tag still extends an organization run.
!*/
use log::trace;

use super::feature::{FeatureType, Features};
use super::token::{AnnotatedToken, NameField, Ner};

/// A classification rule: tokens matching `applies` start a run on `field`,
/// counted under `feature`.
#[derive(Clone, Copy)]
pub struct Rule {
    applies: fn(&AnnotatedToken) -> bool,
    field: NameField,
    feature: FeatureType,
}

impl Rule {
    pub fn new(
        applies: fn(&AnnotatedToken) -> bool,
        field: NameField,
        feature: FeatureType,
    ) -> Self {
        Self {
            applies,
            field,
            feature,
        }
    }

    pub fn applies(&self, token: &AnnotatedToken) -> bool {
        (self.applies)(token)
    }

    pub fn field(&self) -> NameField {
        self.field
    }

    pub fn feature(&self) -> FeatureType {
        self.feature
    }
}

fn is_organization(token: &AnnotatedToken) -> bool {
    token.ner() == Ner::Organization
}

fn is_location(token: &AnnotatedToken) -> bool {
    token.ner() == Ner::Location
}

fn has_character(token: &AnnotatedToken) -> bool {
    token.character_name().is_some()
}

fn has_attribution(token: &AnnotatedToken) -> bool {
    token.attribution_name().is_some()
}

/// A run of tokens, `start..end` in the document.
///
/// `feature` is `None` for single tokens that matched no rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run<'a> {
    pub start: usize,
    pub end: usize,
    pub feature: Option<(FeatureType, &'a str)>,
}

impl Run<'_> {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Returns the position of the first token after `start`
/// whose `field` differs from the one of the token at `start`,
/// or `tokens.len()`.
pub fn skip_run(tokens: &[AnnotatedToken], start: usize, field: NameField) -> usize {
    let value = field.value(&tokens[start]);
    tokens[start..]
        .iter()
        .position(|token| field.value(token) != value)
        .map_or(tokens.len(), |offset| start + offset)
}

/// Iterator over the [Run]s of a token sequence. See [EntityAggregator::runs].
pub struct Runs<'a> {
    rules: &'a [Rule],
    tokens: &'a [AnnotatedToken],
    cursor: usize,
}

impl<'a> Iterator for Runs<'a> {
    type Item = Run<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (rules, tokens) = (self.rules, self.tokens);
        let start = self.cursor;
        let token = tokens.get(start)?;

        let run = match rules.iter().find(|rule| rule.applies(token)) {
            Some(rule) => {
                // an entity-tagged token may lack a name, it is then counted under ""
                let value = rule.field().value(token).unwrap_or_default();
                let end = skip_run(tokens, start, rule.field());
                Run {
                    start,
                    end,
                    feature: Some((rule.feature(), value)),
                }
            }
            None => Run {
                start,
                end: start + 1,
                feature: None,
            },
        };

        self.cursor = run.end;
        Some(run)
    }
}

/// Aggregates annotated tokens into [Features].
///
/// The default aggregator uses the organization > location > character > attribution precedence.
pub struct EntityAggregator {
    rules: Vec<Rule>,
}

impl EntityAggregator {
    /// Build an aggregator from rules, evaluated in order.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Cut `tokens` into consecutive runs covering the whole sequence.
    pub fn runs<'a>(&'a self, tokens: &'a [AnnotatedToken]) -> Runs<'a> {
        Runs {
            rules: &self.rules,
            tokens,
            cursor: 0,
        }
    }

    /// Count each classified run once under its feature type and value.
    pub fn aggregate(&self, tokens: &[AnnotatedToken]) -> Features {
        let mut features = Features::default();
        for run in self.runs(tokens) {
            if let Some((feature_type, value)) = run.feature {
                trace!(
                    "{} {:?} at {}..{}",
                    feature_type,
                    value,
                    run.start,
                    run.end
                );
                features.get_mut(feature_type).add(value);
            }
        }
        features
    }
}

impl Default for EntityAggregator {
    fn default() -> Self {
        Self::new(vec![
            Rule::new(is_organization, NameField::Entity, FeatureType::Org),
            Rule::new(is_location, NameField::Entity, FeatureType::Loc),
            Rule::new(has_character, NameField::Character, FeatureType::Person),
            Rule::new(has_attribution, NameField::Attribution, FeatureType::Source),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn org(name: &str) -> AnnotatedToken {
        AnnotatedToken::new(name, Ner::Organization).with_entity_name(name)
    }

    fn loc(name: &str) -> AnnotatedToken {
        AnnotatedToken::new(name, Ner::Location).with_entity_name(name)
    }

    fn blank() -> AnnotatedToken {
        AnnotatedToken::new("the", Ner::None)
    }

    #[test]
    fn empty_sequence() {
        let f = EntityAggregator::default().aggregate(&[]);
        for feature_type in FeatureType::ALL {
            assert!(f.get(feature_type).is_empty());
        }
    }

    #[test]
    fn run_collapsing() {
        let tokens = vec![org("Acme"), org("Acme"), org("Acme")];
        let f = EntityAggregator::default().aggregate(&tokens);
        assert_eq!(f.get(FeatureType::Org).get("Acme"), Some(1));
        assert_eq!(f.get(FeatureType::Org).len(), 1);
    }

    #[test]
    fn run_boundary() {
        let tokens = vec![org("Acme"), org("Globex")];
        let f = EntityAggregator::default().aggregate(&tokens);
        assert_eq!(f.get(FeatureType::Org).get("Acme"), Some(1));
        assert_eq!(f.get(FeatureType::Org).get("Globex"), Some(1));
    }

    #[test]
    fn non_contiguous_repeats() {
        let tokens = vec![org("Acme"), blank(), org("Acme")];
        let f = EntityAggregator::default().aggregate(&tokens);
        assert_eq!(f.get(FeatureType::Org).get("Acme"), Some(2));
    }

    #[test]
    fn organization_precedence() {
        let tokens = vec![org("Acme")
            .with_character_name("Wile E. Coyote")
            .with_attribution_name("Acme spokesperson")];
        let f = EntityAggregator::default().aggregate(&tokens);
        assert_eq!(f.get(FeatureType::Org).get("Acme"), Some(1));
        assert!(f.get(FeatureType::Loc).is_empty());
        assert!(f.get(FeatureType::Person).is_empty());
        assert!(f.get(FeatureType::Source).is_empty());
    }

    #[test]
    fn location_precedence() {
        let tokens = vec![loc("Paris")
            .with_character_name("Paris Hilton")
            .with_attribution_name("Paris")];
        let f = EntityAggregator::default().aggregate(&tokens);
        assert_eq!(f.get(FeatureType::Loc).get("Paris"), Some(1));
        assert!(f.get(FeatureType::Org).is_empty());
        assert!(f.get(FeatureType::Person).is_empty());
        assert!(f.get(FeatureType::Source).is_empty());
    }

    #[test]
    fn character_over_attribution() {
        let tokens = vec![AnnotatedToken::new("Holmes", Ner::Person)
            .with_character_name("Sherlock Holmes")
            .with_attribution_name("Holmes")];
        let f = EntityAggregator::default().aggregate(&tokens);
        assert_eq!(f.get(FeatureType::Person).get("Sherlock Holmes"), Some(1));
        assert!(f.get(FeatureType::Source).is_empty());
    }

    #[test]
    fn all_feature_types() {
        let tokens = vec![
            org("Acme"),
            blank(),
            loc("Paris"),
            loc("Paris"),
            AnnotatedToken::new("Jane", Ner::Person).with_character_name("Jane"),
            AnnotatedToken::new("said", Ner::None).with_attribution_name("Jane Doe"),
            AnnotatedToken::new("today", Ner::None).with_attribution_name("Jane Doe"),
        ];
        let f = EntityAggregator::default().aggregate(&tokens);
        let entries: Vec<_> = f.iter().collect();
        assert_eq!(
            entries,
            vec![
                (FeatureType::Org, "Acme", 1),
                (FeatureType::Loc, "Paris", 1),
                (FeatureType::Person, "Jane", 1),
                (FeatureType::Source, "Jane Doe", 1),
            ]
        );
    }

    #[test]
    fn values_are_case_sensitive() {
        let tokens = vec![org("Acme"), org("ACME")];
        let f = EntityAggregator::default().aggregate(&tokens);
        assert_eq!(f.get(FeatureType::Org).len(), 2);
    }

    #[test]
    fn entity_run_ignores_ner() {
        // second token carries the same entity name with another tag: swallowed in the run
        let tokens = vec![
            org("Georgia"),
            AnnotatedToken::new("Georgia", Ner::Location).with_entity_name("Georgia"),
        ];
        let f = EntityAggregator::default().aggregate(&tokens);
        assert_eq!(f.get(FeatureType::Org).get("Georgia"), Some(1));
        assert!(f.get(FeatureType::Loc).is_empty());
    }

    #[test]
    fn run_tokens_not_reclassified() {
        // the character run goes on while the character name stays the same,
        // even over a token tagged as an organization
        let tokens = vec![
            AnnotatedToken::new("Mr", Ner::None).with_character_name("Mr Acme"),
            AnnotatedToken::new("Acme", Ner::Organization)
                .with_entity_name("Acme")
                .with_character_name("Mr Acme"),
        ];
        let f = EntityAggregator::default().aggregate(&tokens);
        assert_eq!(f.get(FeatureType::Person).get("Mr Acme"), Some(1));
        assert!(f.get(FeatureType::Org).is_empty());
    }

    #[test]
    fn unnamed_organization() {
        let tokens = vec![
            AnnotatedToken::new("Corp", Ner::Organization),
            AnnotatedToken::new("Inc", Ner::Organization),
        ];
        let f = EntityAggregator::default().aggregate(&tokens);
        assert_eq!(f.get(FeatureType::Org).get(""), Some(1));
    }

    #[test]
    fn runs_cover_sequence() {
        let tokens = vec![
            blank(),
            org("Acme"),
            org("Acme"),
            blank(),
            blank(),
            loc("Paris"),
            AnnotatedToken::new("he", Ner::None).with_character_name("Bob"),
            blank(),
        ];
        let aggregator = EntityAggregator::default();
        let runs: Vec<Run> = aggregator.runs(&tokens).collect();

        assert_eq!(runs.iter().map(Run::len).sum::<usize>(), tokens.len());
        assert!(runs.iter().all(|run| !run.is_empty()));
        for (prev, next) in runs.iter().zip(runs.iter().skip(1)) {
            assert_eq!(prev.end, next.start);
        }
        assert_eq!(runs.len(), 7);
    }

    #[test]
    fn skip_run_bounds() {
        let tokens = vec![org("Acme"), org("Acme"), blank(), org("Acme")];
        assert_eq!(skip_run(&tokens, 0, NameField::Entity), 2);
        assert_eq!(skip_run(&tokens, 1, NameField::Entity), 2);
        assert_eq!(skip_run(&tokens, 3, NameField::Entity), 4);
        // blank tokens all share an absent entity name
        assert_eq!(skip_run(&tokens, 2, NameField::Character), 4);
    }

    #[test]
    fn custom_rules() {
        let aggregator = EntityAggregator::new(vec![Rule::new(
            has_attribution,
            NameField::Attribution,
            FeatureType::Source,
        )]);
        let tokens = vec![org("Acme").with_attribution_name("Acme")];
        let f = aggregator.aggregate(&tokens);
        assert!(f.get(FeatureType::Org).is_empty());
        assert_eq!(f.get(FeatureType::Source).get("Acme"), Some(1));
    }
}
