/*! Articles

An article is the pairing of a metadata row with the token sequence of the same index.
!*/
use log::{debug, warn};

use crate::error::Error;
use crate::features::{AnnotatedToken, EntityAggregator, FeatureRow};
use crate::io::reader::TokenStore;
use crate::metadata::ArticleMetadata;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    metadata: ArticleMetadata,
    tokens: Vec<AnnotatedToken>,
}

impl Document {
    pub fn new(metadata: ArticleMetadata, tokens: Vec<AnnotatedToken>) -> Self {
        Self { metadata, tokens }
    }

    /// Pair the `i`-th metadata row with the `i`-th token sequence.
    ///
    /// Fails with [Error::MissingDocument] if a metadata row has no token sequence.
    /// Token sequences without metadata are ignored.
    pub fn join(metadata: Vec<ArticleMetadata>, mut store: TokenStore) -> Result<Vec<Self>, Error> {
        if metadata.len() != store.len() {
            warn!(
                "{} metadata rows for {} token sequences",
                metadata.len(),
                store.len()
            );
        }

        metadata
            .into_iter()
            .enumerate()
            .map(|(idx, metadata)| {
                let tokens = store.take(idx).ok_or(Error::MissingDocument(idx))?;
                Ok(Self::new(metadata, tokens))
            })
            .collect()
    }

    /// Get the article id (its file name).
    pub fn article_id(&self) -> &str {
        &self.metadata.filename
    }

    pub fn metadata(&self) -> &ArticleMetadata {
        &self.metadata
    }

    pub fn tokens(&self) -> &[AnnotatedToken] {
        &self.tokens
    }

    /// Aggregate the document's tokens into feature rows,
    /// grouped by feature type then by first occurrence of values.
    pub fn features(&self, aggregator: &EntityAggregator) -> Vec<FeatureRow> {
        let features = aggregator.aggregate(&self.tokens);
        let rows: Vec<FeatureRow> = features
            .iter()
            .map(|(feature_type, feature, count)| FeatureRow {
                article_id: self.metadata.filename.clone(),
                author: self.metadata.author.clone(),
                date: self.metadata.date.clone(),
                feature_type,
                feature: feature.to_string(),
                count,
            })
            .collect();

        debug!("[{}] {} feature rows", self.article_id(), rows.len());
        rows
    }
}
