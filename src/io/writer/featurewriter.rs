use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Error;
use crate::features::FeatureRow;

use super::WriterTrait;

const HEADER: [&str; 6] = [
    "article_id",
    "author",
    "date",
    "feature_type",
    "feature",
    "count",
];

/// Comma-separated feature table writer.
///
/// The header is written on creation, so that a table without features still has one.
/// Records end with `\r\n`.
pub struct FeatureWriter<W: Write> {
    handle: csv::Writer<W>,
}

impl FeatureWriter<File> {
    pub fn from_path(dst: &Path) -> Result<Self, Error> {
        let handle = File::create(dst)?;
        Self::new(handle)
    }
}

impl<W: Write> FeatureWriter<W> {
    pub fn new(writer: W) -> Result<Self, Error> {
        let mut handle = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::CRLF)
            .from_writer(writer);
        handle.write_record(HEADER)?;
        Ok(Self { handle })
    }

    pub fn into_inner(self) -> Result<W, Error> {
        self.handle
            .into_inner()
            .map_err(|e| Error::Io(e.into_error()))
    }
}

impl<W: Write> WriterTrait for FeatureWriter<W> {
    type Item = FeatureRow;

    fn write_single(&mut self, row: &FeatureRow) -> Result<(), Error> {
        Ok(self.handle.serialize(row)?)
    }

    fn flush(&mut self) -> Result<(), Error> {
        Ok(self.handle.flush()?)
    }
}
