//! Removal-word set - tokens stripped from names during normalization
//!
//! Loaded once per run and read-only afterwards. Entries are compared
//! case-sensitively against already-lowercased tokens, so an entry with
//! uppercase letters or embedded whitespace can never match anything.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::loader::for_each_line;
use crate::{Error, Result};

/// Set of whole tokens removed by the normalizer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovalWords {
    words: HashSet<String>,
}

impl RemovalWords {
    /// Empty set: normalization then only lowercases and strips punctuation
    pub fn new() -> Self {
        Self::default()
    }

    /// Load removal words from a file, one per line
    ///
    /// # Errors
    /// `RemovalWordsUnreadable` if the file is missing or cannot be read,
    /// `Decoding` if a line is not valid UTF-8.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(unreadable(path))?;
        let words = Self::from_reader(BufReader::new(file), path)?;
        debug!(path = %path.display(), count = words.len(), "loaded removal words");
        Ok(words)
    }

    /// Read removal words from any buffered source
    ///
    /// Lines are trimmed; blank lines are skipped. `path` is only used to
    /// label errors.
    pub fn from_reader<R: BufRead>(reader: R, path: &Path) -> Result<Self> {
        let mut words = HashSet::new();
        for_each_line(reader, path, unreadable(path), |line| {
            let word = line.trim();
            if word.is_empty() {
                return;
            }
            if word.chars().any(|c| c.is_uppercase() || c.is_whitespace()) {
                warn!(word, "removal word can never match a lowercased token");
            }
            words.insert(word.to_string());
        })?;
        Ok(Self { words })
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn unreadable(path: &Path) -> impl Fn(io::Error) -> Error + '_ {
    move |source| Error::RemovalWordsUnreadable {
        path: path.to_path_buf(),
        source,
    }
}

impl<S: Into<String>> FromIterator<S> for RemovalWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}
