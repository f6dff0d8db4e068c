use serde::Deserialize;
use serde::Serialize;

/// Article metadata, one row of the metadata table.
///
/// `filename` identifies the article, and is the name of its text file in the data folder.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct ArticleMetadata {
    #[serde(rename = "Filename")]
    pub filename: String,
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "Date")]
    pub date: String,
}

impl ArticleMetadata {
    pub fn new(filename: &str, author: &str, date: &str) -> Self {
        Self {
            filename: filename.to_string(),
            author: author.to_string(),
            date: date.to_string(),
        }
    }
}
