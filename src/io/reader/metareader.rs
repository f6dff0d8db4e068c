use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::Error;
use crate::metadata::ArticleMetadata;

/// Iterates over [ArticleMetadata] rows of a comma-separated table with headers.
pub struct MetaReader<T>
where
    T: Read,
{
    records: csv::DeserializeRecordsIntoIter<T, ArticleMetadata>,
}

impl MetaReader<File> {
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        let handle = File::open(src)?;
        Ok(Self::new(handle))
    }
}

impl<T> MetaReader<T>
where
    T: Read,
{
    pub fn new(reader: T) -> Self {
        let records = csv::Reader::from_reader(reader).into_deserialize();
        Self { records }
    }
}

impl<T> Iterator for MetaReader<T>
where
    T: Read,
{
    type Item = Result<ArticleMetadata, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.records.next().map(|r| r.map_err(Error::Csv))
    }
}
