/*! Token table reader

The annotator is run once on all the articles, concatenated and separated by boundary tokens
(see [crate::io::SPLIT_PREFIX]). Its token table is read back here and split at these boundary tokens.
!*/
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, warn};

use crate::error::Error;
use crate::features::AnnotatedToken;
use crate::io::SPLIT_PREFIX;

/// Token sequences, by document index.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct TokenStore {
    documents: BTreeMap<usize, Vec<AnnotatedToken>>,
}

impl TokenStore {
    /// Split `tokens` at boundary tokens.
    ///
    /// Tokens that precede the first boundary token are discarded.
    /// A repeated document index starts the document over.
    pub fn load<I>(tokens: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = AnnotatedToken>,
    {
        let mut documents: BTreeMap<usize, Vec<AnnotatedToken>> = BTreeMap::new();
        let mut current: Option<usize> = None;
        let mut discarded = 0;

        for mut token in tokens {
            if let Some(index) = token.original_word().strip_prefix(SPLIT_PREFIX) {
                let index = index
                    .parse::<usize>()
                    .map_err(|_| Error::InvalidSentinel(token.original_word().to_string()))?;
                if documents.insert(index, Vec::new()).is_some() {
                    warn!("document {} appears more than once, keeping the last one", index);
                }
                current = Some(index);
                continue;
            }

            match current.and_then(|index| documents.get_mut(&index)) {
                Some(document) => {
                    token.set_position(document.len());
                    document.push(token);
                }
                None => discarded += 1,
            }
        }

        if discarded > 0 {
            warn!(
                "{} tokens found before the first document boundary were discarded",
                discarded
            );
        }
        debug!("loaded {} documents", documents.len());

        Ok(Self { documents })
    }

    /// Read a tab-separated token table (with headers, without quoting) and split it.
    ///
    /// Fails on the first malformed row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .quoting(false)
            .from_reader(reader);

        let tokens = rdr
            .deserialize::<AnnotatedToken>()
            .collect::<Result<Vec<_>, _>>()?;

        Self::load(tokens)
    }

    pub fn from_path(src: &Path) -> Result<Self, Error> {
        let handle = File::open(src)?;
        Self::from_reader(handle)
    }

    pub fn get(&self, index: usize) -> Option<&[AnnotatedToken]> {
        self.documents.get(&index).map(Vec::as_slice)
    }

    /// Take ownership of a document's tokens, removing them from the store.
    pub fn take(&mut self, index: usize) -> Option<Vec<AnnotatedToken>> {
        self.documents.remove(&index)
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Iterate over documents, by increasing index.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[AnnotatedToken])> {
        self.documents
            .iter()
            .map(|(index, tokens)| (*index, tokens.as_slice()))
    }
}
