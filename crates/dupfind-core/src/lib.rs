//! dupfind core - duplicate company name detection
//!
//! Finds names in a flat list that become identical once normalized.
//! There is no fuzzy matching: two names are duplicates exactly when their
//! canonical keys are byte-identical.
//!
//! # Architecture
//!
//! ```text
//! input file → Loader → Records → Grouper → Groups (≥ 2 members) → Emitter → output file
//!                 ↑
//!             Normalizer ← RemovalWords
//! ```
//!
//! # Guarantees
//!
//! - **Deterministic**: same input and removal words always produce the same output
//! - **Stable**: groups and pairs follow input order, never sorted
//! - **Atomic**: the output file is replaced only after a complete write

pub mod emitter;
pub mod error;
pub mod finder;
pub mod grouper;
pub mod loader;
pub mod normalizer;
pub mod removal_words;

pub use error::{Error, Result};
pub use finder::{DuplicateFinder, FinderConfig, RunSummary};
pub use removal_words::RemovalWords;

/// A company name and its canonical key
///
/// The key is computed once at construction and is a pure function of the
/// name and the removal words.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Record {
    original: String,
    canonical: String,
}

impl Record {
    /// Build a record from a trimmed name
    pub fn new(original: &str, removal_words: &RemovalWords) -> Self {
        Self {
            original: original.to_string(),
            canonical: normalizer::normalize(original, removal_words),
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn canonical(&self) -> &str {
        &self.canonical
    }
}

/// Records sharing one canonical key, in input order
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Group {
    pub(crate) canonical: String,
    pub(crate) members: Vec<Record>,
}

impl Group {
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    pub fn members(&self) -> &[Record] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false for groups produced by the grouper
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
