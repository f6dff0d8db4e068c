//! Concatenation, annotation and extraction in one go.
use std::path::PathBuf;

use log::info;

use crate::annotator::BookNlp;
use crate::error::Error;
use crate::pipelines::pipeline::Pipeline;
use crate::pipelines::{Concat, Extract};

pub struct Full {
    metadata: PathBuf,
    data_folder: PathBuf,
    dst: PathBuf,
    annotator: BookNlp,
}

impl Full {
    pub fn new(metadata: PathBuf, data_folder: PathBuf, dst: PathBuf, annotator: BookNlp) -> Self {
        Self {
            metadata,
            data_folder,
            dst,
            annotator,
        }
    }

    /// Annotator input location: `<metadata stem>-concat.txt`, next to the metadata file.
    pub fn concat_path(&self) -> Result<PathBuf, Error> {
        let stem = self.metadata.file_stem().ok_or_else(|| {
            Error::Custom(format!("no file name in metadata path {:?}", self.metadata))
        })?;
        let filename = format!("{}-concat.txt", stem.to_string_lossy());
        Ok(self.metadata.with_file_name(filename))
    }
}

impl Pipeline<usize> for Full {
    fn version() -> &'static str {
        "0.1.0"
    }

    /// Returns the number of written feature rows.
    fn run(&self) -> Result<usize, Error> {
        let concat = self.concat_path()?;
        Concat::new(
            self.metadata.clone(),
            self.data_folder.clone(),
            concat.clone(),
        )
        .run()?;

        let tokens = self.annotator.process(&concat)?;
        info!("annotation done, extracting features");

        Extract::new(self.metadata.clone(), tokens, self.dst.clone()).run()
    }
}
