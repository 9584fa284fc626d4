//! Cleanup guards for RAII-style cleanup.

use crate::api::registry::TempRegistry;

/// A guard that cleans up a registry when dropped.
///
/// # Example
///
/// ```rust,no_run
/// use tempsweep::TempRegistry;
///
/// let registry = TempRegistry::new();
///
/// {
///     let _cleanup = registry.cleanup_on_drop();
///     registry.defer_delete("/tmp/x/profile001.pb");
/// } // profile001.pb is removed here
/// ```
#[must_use = "the registry is cleaned up as soon as the guard is dropped"]
pub struct CleanupGuard<'a> {
    registry: Option<&'a TempRegistry>,
}

impl<'a> CleanupGuard<'a> {
    /// Create a new cleanup guard.
    pub(crate) fn new(registry: &'a TempRegistry) -> Self {
        Self {
            registry: Some(registry),
        }
    }

    /// Drop the guard without cleaning up.
    pub fn disarm(mut self) {
        self.registry = None;
    }
}

impl<'a> Drop for CleanupGuard<'a> {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.take() {
            registry.cleanup();
        }
    }
}

/// A trait for types that can hand out a cleanup guard.
pub trait CleanupScope {
    /// Create a guard that runs cleanup on drop.
    fn cleanup_scope(&self) -> CleanupGuard<'_>;
}

impl CleanupScope for TempRegistry {
    fn cleanup_scope(&self) -> CleanupGuard<'_> {
        self.cleanup_on_drop()
    }
}
