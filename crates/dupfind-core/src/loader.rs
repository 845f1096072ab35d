//! Loader - reads company names from an input source into records
//!
//! One name per line; `\n`, `\r\n` and a lone `\r` all end a line.
//! Lines are trimmed and blank lines are dropped without
//! being counted. Input must be UTF-8; a malformed line aborts the load.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::removal_words::RemovalWords;
use crate::{Error, Record, Result};

/// Load every non-blank line of `path` as a normalized record
///
/// # Errors
/// `InputNotFound` if the file does not exist, `InputUnreadable` for other
/// I/O failures, `Decoding` for a non-UTF-8 line.
pub fn load_records(path: &Path, removal_words: &RemovalWords) -> Result<Vec<Record>> {
    let file = File::open(path).map_err(|source| input_error(path, source))?;
    read_records(BufReader::new(file), path, removal_words)
}

/// Read records from any buffered source, preserving line order
///
/// `path` labels errors only; nothing is opened.
pub fn read_records<R: BufRead>(
    reader: R,
    path: &Path,
    removal_words: &RemovalWords,
) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for_each_line(reader, path, |source| input_error(path, source), |line| {
        let name = line.trim();
        if name.is_empty() {
            skipped += 1;
        } else {
            records.push(Record::new(name, removal_words));
        }
    })?;

    debug!(
        path = %path.display(),
        records = records.len(),
        skipped,
        "loaded input records"
    );
    Ok(records)
}

/// Visit each line as UTF-8 text
///
/// Line endings are `\n`, `\r\n` or a lone `\r`. `Decoding` errors carry
/// the 1-based number of the offending line.
pub(crate) fn for_each_line<R, E, F>(reader: R, path: &Path, io_error: E, mut visit: F) -> Result<()>
where
    R: BufRead,
    E: Fn(io::Error) -> Error,
    F: FnMut(&str),
{
    let mut number = 0usize;
    for chunk in reader.split(b'\n') {
        let chunk = chunk.map_err(&io_error)?;
        let chunk = chunk.strip_suffix(b"\r").unwrap_or(&chunk);
        for bytes in chunk.split(|&b| b == b'\r') {
            number += 1;
            let line = std::str::from_utf8(bytes).map_err(|_| Error::Decoding {
                path: path.to_path_buf(),
                line: number,
            })?;
            visit(line);
        }
    }
    Ok(())
}

fn input_error(path: &Path, source: io::Error) -> Error {
    if source.kind() == io::ErrorKind::NotFound {
        Error::InputNotFound {
            path: path.to_path_buf(),
        }
    } else {
        Error::InputUnreadable {
            path: path.to_path_buf(),
            source,
        }
    }
}
