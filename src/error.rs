//! Error enum
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Csv(csv::Error),
    Custom(String),
    /// A document boundary token whose suffix is not a document index.
    InvalidSentinel(String),
    /// No token sequence was found for the metadata row at this position.
    MissingDocument(usize),
    Annotator(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Csv(e) => write!(f, "table format error: {}", e),
            Error::Custom(s) => write!(f, "{}", s),
            Error::InvalidSentinel(s) => write!(f, "invalid document boundary token: {:?}", s),
            Error::MissingDocument(i) => write!(f, "no tokens for document {}", i),
            Error::Annotator(s) => write!(f, "annotator failure: {}", s),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
