//! Annotated tokens, as emitted by the annotator.
use serde::Deserialize;

/// Named entity tag of a token.
///
/// Only organizations and locations are used as features;
/// the other tags are kept so that the tag vocabulary stays closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum Ner {
    Organization,
    Location,
    Person,
    Other,
    #[default]
    None,
}

impl From<&str> for Ner {
    fn from(tag: &str) -> Self {
        match tag {
            "ORGANIZATION" => Ner::Organization,
            "LOCATION" => Ner::Location,
            "PERSON" => Ner::Person,
            "" | "O" => Ner::None,
            _ => Ner::Other,
        }
    }
}

impl From<String> for Ner {
    fn from(tag: String) -> Self {
        Ner::from(tag.as_str())
    }
}

/// One token and its annotations.
///
/// Name fields are `None` when the column is absent or the cell is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AnnotatedToken {
    #[serde(skip)]
    position: usize,
    #[serde(rename = "originalWord")]
    original_word: String,
    ner: Ner,
    #[serde(rename = "entityName", default)]
    entity_name: Option<String>,
    #[serde(rename = "characterName", default)]
    character_name: Option<String>,
    #[serde(rename = "attributionName", default)]
    attribution_name: Option<String>,
}

/// Selects one of the name fields of an [AnnotatedToken].
///
/// Runs are detected by comparing the selected field of consecutive tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    Entity,
    Character,
    Attribution,
}

impl NameField {
    pub fn value<'a>(&self, token: &'a AnnotatedToken) -> Option<&'a str> {
        match self {
            NameField::Entity => token.entity_name(),
            NameField::Character => token.character_name(),
            NameField::Attribution => token.attribution_name(),
        }
    }
}

fn non_empty(name: &Option<String>) -> Option<&str> {
    name.as_deref().filter(|name| !name.is_empty())
}

impl AnnotatedToken {
    pub fn new(original_word: &str, ner: Ner) -> Self {
        Self {
            original_word: original_word.to_string(),
            ner,
            ..Default::default()
        }
    }

    pub fn with_entity_name(mut self, name: &str) -> Self {
        self.entity_name = Some(name.to_string());
        self
    }

    pub fn with_character_name(mut self, name: &str) -> Self {
        self.character_name = Some(name.to_string());
        self
    }

    pub fn with_attribution_name(mut self, name: &str) -> Self {
        self.attribution_name = Some(name.to_string());
        self
    }

    /// Get the token's index in its document.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    /// Get a reference to the token's surface text.
    pub fn original_word(&self) -> &str {
        self.original_word.as_ref()
    }

    pub fn ner(&self) -> Ner {
        self.ner
    }

    pub fn entity_name(&self) -> Option<&str> {
        non_empty(&self.entity_name)
    }

    pub fn character_name(&self) -> Option<&str> {
        non_empty(&self.character_name)
    }

    pub fn attribution_name(&self) -> Option<&str> {
        non_empty(&self.attribution_name)
    }
}
