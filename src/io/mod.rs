/*!
# IO utilities

Reading of metadata and annotator token tables, writing of annotator input and feature tables.

Articles are sent to the annotator as a single text, each article being preceded by a boundary token
made of [SPLIT_PREFIX] and the article index (its position in the metadata table).
!*/
pub mod reader;
pub mod writer;

/// Prefix of document boundary tokens.
pub const SPLIT_PREFIX: &str = "ARTICLE_ID_";
