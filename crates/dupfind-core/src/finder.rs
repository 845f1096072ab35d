//! Duplicate finder - runs load → group → write for one input file

use std::io::BufRead;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::removal_words::RemovalWords;
use crate::{emitter, grouper, loader, Group, Result};

/// Where the finder reads removal words from and writes pairs to
///
/// No defaults live here; callers choose the paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderConfig {
    pub output_path: PathBuf,
    pub removal_words_path: PathBuf,
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Non-blank input lines
    pub records: usize,
    /// Duplicate groups written
    pub groups: usize,
    /// Pair lines written
    pub pairs: usize,
    pub output_path: PathBuf,
}

/// Finds duplicate company names in an input file
#[derive(Debug, Clone)]
pub struct DuplicateFinder {
    output_path: PathBuf,
    removal_words: RemovalWords,
}

impl DuplicateFinder {
    /// Create a finder, loading removal words from the configured file
    ///
    /// # Errors
    /// `RemovalWordsUnreadable` or `Decoding` if the removal-words file
    /// cannot be loaded.
    pub fn new(config: FinderConfig) -> Result<Self> {
        let removal_words = RemovalWords::load(&config.removal_words_path)?;
        Ok(Self::with_removal_words(config.output_path, removal_words))
    }

    /// Create a finder from an in-memory removal-word set
    pub fn with_removal_words(output_path: impl Into<PathBuf>, removal_words: RemovalWords) -> Self {
        Self {
            output_path: output_path.into(),
            removal_words,
        }
    }

    pub fn removal_words(&self) -> &RemovalWords {
        &self.removal_words
    }

    /// Read `input_path`, group duplicates and write every pair
    ///
    /// # Errors
    /// `InputNotFound`, `InputUnreadable` or `Decoding` while loading;
    /// `OutputUnwritable` while writing. Nothing is written on a load error.
    pub fn find_duplicates(&self, input_path: &Path) -> Result<RunSummary> {
        let records = loader::load_records(input_path, &self.removal_words)?;
        let record_count = records.len();
        let groups = grouper::group(records);

        info!(
            input = %input_path.display(),
            output = %self.output_path.display(),
            groups = groups.len(),
            pairs = emitter::pair_count(&groups),
            "writing duplicate groups"
        );
        let pairs = emitter::write_pairs(&self.output_path, &groups)?;

        Ok(RunSummary {
            records: record_count,
            groups: groups.len(),
            pairs,
            output_path: self.output_path.clone(),
        })
    }

    /// Load and group names from any reader without touching the filesystem
    ///
    /// `label` names the source in errors.
    pub fn find_groups<R: BufRead>(&self, reader: R, label: &Path) -> Result<Vec<Group>> {
        let records = loader::read_records(reader, label, &self.removal_words)?;
        Ok(grouper::group(records))
    }
}
