/*! Annotator input writer

Articles are numbered in writing order, starting at 0.
Each one is written after a boundary token, surrounded by blank lines
so that the annotator sees it as its own paragraph.
!*/
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Error;
use crate::io::SPLIT_PREFIX;

use super::WriterTrait;

pub struct ConcatWriter<W: Write> {
    handle: W,
    nb_documents: usize,
}

impl ConcatWriter<BufWriter<File>> {
    pub fn from_path(dst: &Path) -> Result<Self, Error> {
        let handle = File::create(dst)?;
        Ok(Self::new(BufWriter::new(handle)))
    }
}

impl<W: Write> ConcatWriter<W> {
    pub fn new(handle: W) -> Self {
        Self {
            handle,
            nb_documents: 0,
        }
    }

    /// Number of documents written so far.
    pub fn nb_documents(&self) -> usize {
        self.nb_documents
    }

    pub fn into_inner(self) -> W {
        self.handle
    }
}

impl<W: Write> WriterTrait for ConcatWriter<W> {
    type Item = String;

    fn write_single(&mut self, content: &String) -> Result<(), Error> {
        write!(self.handle, "\n\n{}{}\n\n", SPLIT_PREFIX, self.nb_documents)?;
        self.handle.write_all(content.as_bytes())?;
        self.nb_documents += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Error> {
        Ok(self.handle.flush()?)
    }
}
