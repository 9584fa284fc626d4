//! The main temporary space type.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::api::config::TempConfig;
use crate::api::create::{create_with, NamedFile};
use crate::api::error::Result;
use crate::api::path::allocate_with;
use crate::api::registry::TempRegistry;
use crate::api::scope::{CleanupGuard, CleanupScope};
use crate::api::stats::RegistryStats;

/// A directory plus naming scheme plus a shared deletion registry.
///
/// Cheap to clone; clones share the registry, so files registered through
/// any clone are removed by a single [`cleanup`](Self::cleanup).
///
/// # Example
///
/// ```rust,no_run
/// use tempsweep::{TempConfig, TempSpace};
///
/// let space = TempSpace::new(TempConfig::in_dir("/tmp/x"));
///
/// let out = space.create_deferred("profile", ".pb")?;
/// // ... write to out ...
/// drop(out);
///
/// space.cleanup();
/// # Ok::<(), tempsweep::TempFileError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TempSpace {
    config: Arc<TempConfig>,
    registry: Arc<TempRegistry>,
}

impl TempSpace {
    /// Create a space with its own registry.
    pub fn new(config: TempConfig) -> Self {
        Self::with_registry(config, Arc::new(TempRegistry::new()))
    }

    /// Create a space that registers into an existing registry.
    pub fn with_registry(config: TempConfig, registry: Arc<TempRegistry>) -> Self {
        Self {
            config: Arc::new(config),
            registry,
        }
    }

    /// Create a space configured from the environment.
    pub fn from_env() -> Self {
        Self::new(TempConfig::from_env())
    }

    /// The configuration.
    pub fn config(&self) -> &TempConfig {
        &self.config
    }

    /// Directory files are allocated in.
    pub fn dir(&self) -> &Path {
        &self.config.dir
    }

    /// The shared registry.
    pub fn registry(&self) -> &Arc<TempRegistry> {
        &self.registry
    }

    /// Find an unused path in the configured directory.
    pub fn allocate(&self, prefix: &str, suffix: &str) -> Result<PathBuf> {
        allocate_with(&self.config.naming, &self.config.dir, prefix, suffix)
    }

    /// Create a file in the configured directory.
    pub fn create(&self, prefix: &str, suffix: &str) -> Result<NamedFile> {
        create_with(&self.config.naming, &self.config.dir, prefix, suffix)
    }

    /// Create a file and register it for deferred deletion.
    pub fn create_deferred(&self, prefix: &str, suffix: &str) -> Result<NamedFile> {
        let file = self.create(prefix, suffix)?;
        self.registry.defer_delete(file.path());
        Ok(file)
    }

    /// Mark `path` for deletion by the next cleanup.
    pub fn defer_delete(&self, path: impl Into<PathBuf>) {
        self.registry.defer_delete(path);
    }

    /// Remove everything registered so far. Never fails.
    pub fn cleanup(&self) {
        self.registry.cleanup();
    }

    /// Get registry statistics.
    pub fn stats(&self) -> RegistryStats {
        self.registry.stats()
    }
}

impl Default for TempSpace {
    fn default() -> Self {
        Self::new(TempConfig::default())
    }
}

impl CleanupScope for TempSpace {
    fn cleanup_scope(&self) -> CleanupGuard<'_> {
        self.registry.cleanup_on_drop()
    }
}
