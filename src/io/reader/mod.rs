/*! Annotator output and metadata reading

- [MetaReader] iterates over the rows of the metadata table.
- [TokenStore] splits the annotator token table into per-document token sequences.
!*/
mod metareader;
mod tokenreader;

pub use metareader::MetaReader;
pub use tokenreader::TokenStore;
