//! Error type for path allocation and file creation.

use std::io;
use std::path::PathBuf;

/// Errors returned by [`allocate`](crate::allocate) and
/// [`create`](crate::create).
///
/// Deferred deletion and cleanup never fail, so they have no error type.
#[derive(Debug)]
pub enum TempFileError {
    /// Every candidate index for the pattern is already taken.
    Exhausted {
        /// Directory that was probed.
        dir: PathBuf,
        /// First candidate name of the pattern, e.g. `profile001.pb`.
        pattern: String,
    },
    /// Creating the file failed.
    Io(io::Error),
}

impl TempFileError {
    /// The underlying I/O error kind, if this is a filesystem failure.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            TempFileError::Io(err) => Some(err.kind()),
            TempFileError::Exhausted { .. } => None,
        }
    }

    /// Whether this is a naming-exhaustion failure.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, TempFileError::Exhausted { .. })
    }
}

impl std::fmt::Display for TempFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TempFileError::Exhausted { dir, pattern } => write!(
                f,
                "could not create file of the form {} in {}",
                pattern,
                dir.display()
            ),
            TempFileError::Io(err) => write!(f, "failed to create temporary file: {}", err),
        }
    }
}

impl std::error::Error for TempFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TempFileError::Io(err) => Some(err),
            TempFileError::Exhausted { .. } => None,
        }
    }
}

impl From<io::Error> for TempFileError {
    fn from(err: io::Error) -> Self {
        TempFileError::Io(err)
    }
}

impl From<TempFileError> for io::Error {
    fn from(err: TempFileError) -> Self {
        match err {
            TempFileError::Io(err) => err,
            exhausted @ TempFileError::Exhausted { .. } => {
                io::Error::new(io::ErrorKind::AlreadyExists, exhausted.to_string())
            }
        }
    }
}

/// Result alias for temporary file operations.
pub type Result<T> = std::result::Result<T, TempFileError>;
