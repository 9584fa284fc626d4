//! Unused-path allocation by linear probe.
//!
//! The probe is a plain `metadata` call, so there is no exclusivity between
//! finding a free name and creating it. Two callers racing on the same
//! pattern can be handed the same path.

use std::io;
use std::path::{Path, PathBuf};

use crate::api::error::{Result, TempFileError};
use crate::api::naming::NamingScheme;
use crate::diagnostics::{emit_with_context, trace_event, TS001, TS003};

/// Return the first unused path of the form `dir/<prefix>NNN<suffix>`,
/// probing `001` through `9999`.
///
/// Nothing is created. Calling this twice without creating the first
/// result returns the same path.
///
/// # Example
///
/// ```rust,no_run
/// let path = tempsweep::allocate("/tmp/x", "profile", ".pb")?;
/// assert!(path.ends_with("profile001.pb"));
/// # Ok::<(), tempsweep::TempFileError>(())
/// ```
pub fn allocate(dir: impl AsRef<Path>, prefix: &str, suffix: &str) -> Result<PathBuf> {
    allocate_with(&NamingScheme::DEFAULT, dir, prefix, suffix)
}

/// [`allocate`] with an explicit naming scheme.
pub fn allocate_with(
    scheme: &NamingScheme,
    dir: impl AsRef<Path>,
    prefix: &str,
    suffix: &str,
) -> Result<PathBuf> {
    let dir = dir.as_ref();

    for index in scheme.indices() {
        let path = scheme.candidate(dir, prefix, index, suffix);
        if is_available(&path) {
            trace_event!("allocated {}", path.display());
            return Ok(path);
        }
    }

    // Give up
    let pattern = scheme.pattern(prefix, suffix);
    emit_with_context(&TS001, &format!("{} in {}", pattern, dir.display()));
    Err(TempFileError::Exhausted {
        dir: dir.to_path_buf(),
        pattern,
    })
}

/// A candidate is available when probing it fails for any reason.
fn is_available(path: &Path) -> bool {
    match path.metadata() {
        Ok(_) => false,
        Err(err) if err.kind() == io::ErrorKind::NotFound => true,
        Err(err) => {
            emit_with_context(&TS003, &format!("{}: {}", path.display(), err));
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn test_first_candidate_in_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = allocate(dir.path(), "profile", ".pb").unwrap();
        assert_eq!(path, dir.path().join("profile001.pb"));
        assert!(!path.exists());
    }

    #[test]
    fn test_skips_existing() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("profile001.pb")).unwrap();
        File::create(dir.path().join("profile002.pb")).unwrap();

        let path = allocate(dir.path(), "profile", ".pb").unwrap();
        assert_eq!(path, dir.path().join("profile003.pb"));
    }

    #[test]
    fn test_fills_gaps() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("p002")).unwrap();

        let path = allocate(dir.path(), "p", "").unwrap();
        assert_eq!(path, dir.path().join("p001"));
    }

    #[test]
    fn test_no_hidden_state() {
        let dir = tempfile::tempdir().unwrap();
        let first = allocate(dir.path(), "a", ".txt").unwrap();
        let second = allocate(dir.path(), "a", ".txt").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_directories_count_as_taken() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("out001")).unwrap();

        let path = allocate(dir.path(), "out", "").unwrap();
        assert_eq!(path, dir.path().join("out002"));
    }

    #[test]
    fn test_missing_dir_is_not_validated() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        let path = allocate(&missing, "x", ".log").unwrap();
        assert_eq!(path, missing.join("x001.log"));
    }

    #[test]
    fn test_absolute_prefix_allocates_inside_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = allocate(dir.path(), "/tmp/escape_", ".pb").unwrap();
        assert!(path.starts_with(dir.path()));
        assert_eq!(path, dir.path().join("tmp").join("escape_001.pb"));
    }

    #[cfg(unix)]
    #[test]
    fn test_stat_error_counts_as_available() {
        crate::diagnostics::suppress_diagnostics(true);
        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("plain");
        File::create(&plain).unwrap();

        // Stat under a regular file fails with ENOTDIR, not NotFound
        let err = plain.join("x001").metadata().unwrap_err();
        assert_ne!(err.kind(), io::ErrorKind::NotFound);

        let path = allocate(&plain, "x", "").unwrap();
        assert_eq!(path, plain.join("x001"));
    }

    #[cfg(unix)]
    #[test]
    fn test_create_under_regular_file_is_io_error() {
        crate::diagnostics::suppress_diagnostics(true);
        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("plain");
        File::create(&plain).unwrap();

        let err = crate::api::create::create(&plain, "x", "").unwrap_err();
        assert!(matches!(err, TempFileError::Io(_)));
        assert!(plain.is_file());
    }

    #[test]
    fn test_exhaustion() {
        let dir = tempfile::tempdir().unwrap();
        let scheme = NamingScheme::default().with_range(1, 3);
        for i in 1..=3 {
            File::create(dir.path().join(format!("t{:03}.tmp", i))).unwrap();
        }

        let err = allocate_with(&scheme, dir.path(), "t", ".tmp").unwrap_err();
        match err {
            TempFileError::Exhausted { dir: d, pattern } => {
                assert_eq!(d, dir.path());
                assert_eq!(pattern, "t001.tmp");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
