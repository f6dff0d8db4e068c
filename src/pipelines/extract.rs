//! Feature extraction from annotator output.
//!
//! Documents are aggregated in parallel, and written in metadata order.
use std::path::PathBuf;

use log::info;
use rayon::prelude::*;

use crate::document::Document;
use crate::error::Error;
use crate::features::{EntityAggregator, FeatureRow};
use crate::io::reader::{MetaReader, TokenStore};
use crate::io::writer::{FeatureWriter, WriterTrait};
use crate::metadata::ArticleMetadata;
use crate::pipelines::pipeline::Pipeline;

pub struct Extract {
    metadata: PathBuf,
    tokens: PathBuf,
    dst: PathBuf,
}

impl Extract {
    pub fn new(metadata: PathBuf, tokens: PathBuf, dst: PathBuf) -> Self {
        Self {
            metadata,
            tokens,
            dst,
        }
    }

    /// Compute the feature rows of each document, keeping document order.
    pub fn features(documents: &[Document], aggregator: &EntityAggregator) -> Vec<FeatureRow> {
        documents
            .par_iter()
            .map(|document| document.features(aggregator))
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect()
    }
}

impl Pipeline<usize> for Extract {
    fn version() -> &'static str {
        "0.1.0"
    }

    /// Returns the number of written feature rows.
    fn run(&self) -> Result<usize, Error> {
        let metadata = MetaReader::from_path(&self.metadata)?
            .collect::<Result<Vec<ArticleMetadata>, Error>>()?;
        info!("{} metadata rows read", metadata.len());

        let store = TokenStore::from_path(&self.tokens)?;
        info!("{} token sequences read", store.len());

        let documents = Document::join(metadata, store)?;
        let rows = Self::features(&documents, &EntityAggregator::default());
        let nb_rows = rows.len();

        let mut writer = FeatureWriter::from_path(&self.dst)?;
        writer.write(rows)?;
        writer.flush()?;

        info!("{} feature rows written to {:?}", nb_rows, self.dst);
        Ok(nb_rows)
    }
}
