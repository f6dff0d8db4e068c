//! Annotator input preparation.
use std::path::PathBuf;

use log::{debug, info};

use crate::error::Error;
use crate::io::reader::MetaReader;
use crate::io::writer::{ConcatWriter, WriterTrait};
use crate::pipelines::pipeline::Pipeline;

/// Concatenates the articles listed in `metadata` (read from `data_folder`) into `dst`,
/// each one preceded by its boundary token.
pub struct Concat {
    metadata: PathBuf,
    data_folder: PathBuf,
    dst: PathBuf,
}

impl Concat {
    pub fn new(metadata: PathBuf, data_folder: PathBuf, dst: PathBuf) -> Self {
        Self {
            metadata,
            data_folder,
            dst,
        }
    }
}

impl Pipeline<usize> for Concat {
    fn version() -> &'static str {
        "0.1.0"
    }

    /// Returns the number of concatenated articles.
    fn run(&self) -> Result<usize, Error> {
        let mut writer = ConcatWriter::from_path(&self.dst)?;

        for metadata in MetaReader::from_path(&self.metadata)? {
            let metadata = metadata?;
            let src = self.data_folder.join(&metadata.filename);
            debug!("adding {:?}", src);
            let content = std::fs::read_to_string(&src)?;
            writer.write_single(&content)?;
        }
        writer.flush()?;

        info!(
            "{} articles concatenated into {:?}",
            writer.nb_documents(),
            self.dst
        );
        Ok(writer.nb_documents())
    }
}
