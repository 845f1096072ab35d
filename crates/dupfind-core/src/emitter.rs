//! Emitter - renders every pair of names within each duplicate group
//!
//! For a group `[a, b, c]` the pairs are `(a, b)`, `(a, c)`, `(b, c)`:
//! combinations in index order, groups in grouper order.
//!
//! # Output
//!
//! One line per pair, `"<original1>, <original2>\n"`, no header or footer.
//! The destination is replaced atomically: lines go to a temporary file in
//! the same directory, which is renamed over the destination only after
//! everything has been flushed. A failed run leaves any previous output
//! file untouched. A replaced file keeps its permissions; a new one gets
//! the mode a plain create would give it under the current umask.

use std::fmt;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tempfile::{Builder, NamedTempFile};
use tracing::debug;

use crate::{Error, Group, Record, Result};

/// One output line: two records sharing a canonical key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicatePair<'a> {
    pub first: &'a Record,
    pub second: &'a Record,
}

impl fmt::Display for DuplicatePair<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.first.original(), self.second.original())
    }
}

/// Every unordered pair within each group, lazily, in emission order
pub fn pairs(groups: &[Group]) -> impl Iterator<Item = DuplicatePair<'_>> {
    groups.iter().flat_map(|group| {
        let members = group.members();
        members.iter().enumerate().flat_map(move |(i, first)| {
            members[i + 1..]
                .iter()
                .map(move |second| DuplicatePair { first, second })
        })
    })
}

/// Number of pairs `pairs` yields: n·(n−1)/2 per group
pub fn pair_count(groups: &[Group]) -> usize {
    groups.iter().map(|g| g.len() * (g.len() - 1) / 2).sum()
}

/// Write all pair lines to any sink, returning the number of lines
pub fn emit<W: Write>(out: &mut W, groups: &[Group]) -> io::Result<usize> {
    let mut written = 0;
    for pair in pairs(groups) {
        writeln!(out, "{pair}")?;
        written += 1;
    }
    Ok(written)
}

/// Atomically replace `path` with the pair lines for `groups`
///
/// # Errors
/// `OutputUnwritable` if the directory is missing or not writable, or if
/// writing, flushing or renaming fails.
pub fn write_pairs(path: &Path, groups: &[Group]) -> Result<usize> {
    let unwritable = |source: io::Error| Error::OutputUnwritable {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let temp = create_temp(dir).map_err(unwritable)?;
    if let Ok(existing) = fs::metadata(path) {
        temp.as_file()
            .set_permissions(existing.permissions())
            .map_err(unwritable)?;
    }
    let mut writer = BufWriter::new(temp);
    let written = emit(&mut writer, groups).map_err(unwritable)?;
    let temp = writer.into_inner().map_err(|e| unwritable(e.into_error()))?;
    temp.as_file().sync_all().map_err(unwritable)?;
    temp.persist(path).map_err(|e| unwritable(e.error))?;

    debug!(path = %path.display(), lines = written, "wrote duplicate pairs");
    Ok(written)
}

/// Temp file in `dir` created with mode 0666, masked by the umask
#[cfg(unix)]
fn create_temp(dir: &Path) -> io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn create_temp(dir: &Path) -> io::Result<NamedTempFile> {
    Builder::new().tempfile_in(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouper::group;
    use crate::removal_words::RemovalWords;

    fn groups(names: &[&str], removal: &[&str]) -> Vec<Group> {
        let words: RemovalWords = removal.iter().copied().collect();
        group(names.iter().map(|n| Record::new(n, &words)).collect())
    }

    fn lines(groups: &[Group]) -> Vec<String> {
        pairs(groups).map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_acme_scenario() {
        let g = groups(
            &["Acme Inc.", "ACME", "The Acme LLC", "Zeta Corp"],
            &["inc", "llc", "the"],
        );
        assert_eq!(
            lines(&g),
            vec![
                "Acme Inc., ACME",
                "Acme Inc., The Acme LLC",
                "ACME, The Acme LLC",
            ]
        );
    }

    #[test]
    fn test_url_scenario() {
        let g = groups(&["www.foo.com", "Foo"], &[]);
        assert_eq!(lines(&g), vec!["www.foo.com, Foo"]);
    }

    #[test]
    fn test_pairs_follow_group_order() {
        let g = groups(&["B", "A", "b.", "a!", "A?"], &[]);
        assert_eq!(lines(&g), vec!["B, b.", "A, a!", "A, A?", "a!, A?"]);
    }

    #[test]
    fn test_pair_count_is_n_choose_2() {
        for n in 2..8usize {
            let names: Vec<String> = (0..n).map(|i| format!("Acme{}", ".".repeat(i))).collect();
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let g = groups(&refs, &[]);
            assert_eq!(g.len(), 1);
            assert_eq!(pairs(&g).count(), n * (n - 1) / 2);
            assert_eq!(pair_count(&g), n * (n - 1) / 2);
        }
    }

    #[test]
    fn test_no_groups_no_lines() {
        let g = groups(&["Acme", "Beta"], &[]);
        assert!(lines(&g).is_empty());
        assert_eq!(pair_count(&g), 0);
    }

    #[test]
    fn test_emit_terminates_every_line() {
        let g = groups(&["Acme", "ACME"], &[]);
        let mut buf = Vec::new();
        let written = emit(&mut buf, &g).unwrap();
        assert_eq!(written, 1);
        assert_eq!(String::from_utf8(buf).unwrap(), "Acme, ACME\n");
    }

    #[test]
    fn test_write_pairs_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("duplicates.txt");
        std::fs::write(&path, "stale content\n").unwrap();

        let g = groups(&["Acme", "ACME"], &[]);
        assert_eq!(write_pairs(&path, &g).unwrap(), 1);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Acme, ACME\n");

        let leftovers = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1, "temporary file should have been renamed");
    }

    #[cfg(unix)]
    #[test]
    fn test_write_pairs_keeps_existing_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("duplicates.txt");
        for mode in [0o644, 0o640] {
            std::fs::write(&path, "old\n").unwrap();
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(mode)).unwrap();

            write_pairs(&path, &[]).unwrap();
            let after = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
            assert_eq!(after, mode, "mode {mode:o} should survive replacement");
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_write_pairs_new_file_follows_umask() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let reference = dir.path().join("reference.txt");
        std::fs::write(&reference, "").unwrap();
        let path = dir.path().join("duplicates.txt");

        write_pairs(&path, &[]).unwrap();
        let mode = |p: &Path| std::fs::metadata(p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&path), mode(&reference));
    }

    #[test]
    fn test_write_pairs_empty_groups_writes_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("duplicates.txt");
        assert_eq!(write_pairs(&path, &[]).unwrap(), 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_write_pairs_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("duplicates.txt");
        let err = write_pairs(&path, &[]).unwrap_err();
        assert!(matches!(err, Error::OutputUnwritable { .. }));
        assert!(err.to_string().contains("duplicates.txt"));
        assert!(!path.exists());
    }
}
