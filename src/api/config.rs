//! Temporary space configuration.

use std::path::PathBuf;

use crate::api::naming::NamingScheme;

/// Environment variable overriding the default temporary directory.
pub const DIR_ENV_VAR: &str = "TEMPSWEEP_DIR";

/// Configuration for a [`TempSpace`](crate::TempSpace).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TempConfig {
    /// Directory new files are allocated in (default: `std::env::temp_dir()`)
    pub dir: PathBuf,

    /// Candidate numbering (default: `001` through `9999`)
    pub naming: NamingScheme,
}

impl Default for TempConfig {
    fn default() -> Self {
        Self {
            dir: std::env::temp_dir(),
            naming: NamingScheme::DEFAULT,
        }
    }
}

impl TempConfig {
    /// Create a config rooted at `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            naming: NamingScheme::DEFAULT,
        }
    }

    /// Create a config from the environment.
    ///
    /// Uses `TEMPSWEEP_DIR` when set and non-empty, the system temporary
    /// directory otherwise.
    pub fn from_env() -> Self {
        match std::env::var_os(DIR_ENV_VAR) {
            Some(dir) if !dir.is_empty() => Self::in_dir(dir),
            _ => Self::default(),
        }
    }

    /// Builder pattern: set the directory.
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = dir.into();
        self
    }

    /// Builder pattern: set the naming scheme.
    pub fn with_naming(mut self, naming: NamingScheme) -> Self {
        self.naming = naming;
        self
    }
}
