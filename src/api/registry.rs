//! Deferred deletion registry.
//!
//! Paths are appended from any thread and removed together by a single
//! [`TempRegistry::cleanup`] call, typically at the end of a run. The pending
//! list is only touched while its lock is held.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::api::scope::CleanupGuard;
use crate::api::stats::RegistryStats;
use crate::diagnostics::{emit_with_context, trace_event, TS002};
use crate::sync::mutex::Mutex;

/// A list of paths to delete later.
///
/// # Example
///
/// ```rust,no_run
/// use tempsweep::{create, TempRegistry};
///
/// let registry = TempRegistry::new();
/// let file = create("/tmp/x", "profile", ".pb")?;
/// registry.defer_delete(file.path());
///
/// // ... later, once ...
/// registry.cleanup();
/// # Ok::<(), tempsweep::TempFileError>(())
/// ```
#[derive(Debug, Default)]
pub struct TempRegistry {
    pending: Mutex<Vec<PathBuf>>,
    deferred_total: AtomicU64,
    cleanup_runs: AtomicU64,
    removed: AtomicU64,
    failed: AtomicU64,
}

impl TempRegistry {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            pending: Mutex::new(Vec::new()),
            deferred_total: AtomicU64::new(0),
            cleanup_runs: AtomicU64::new(0),
            removed: AtomicU64::new(0),
            failed: AtomicU64::new(0),
        }
    }

    /// Mark `path` for deletion by the next [`cleanup`](Self::cleanup).
    ///
    /// The path is not checked; it need not exist.
    pub fn defer_delete(&self, path: impl Into<PathBuf>) {
        let path = path.into();
        trace_event!("deferred {}", path.display());
        self.pending.lock().push(path);
        self.deferred_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Remove every pending path, ignoring failures, and empty the list.
    ///
    /// Never fails. Paths that are already gone, or cannot be removed, are
    /// dropped from the list all the same. With nothing pending this is a
    /// no-op apart from the run counter.
    pub fn cleanup(&self) {
        let mut pending = self.pending.lock();

        let mut removed = 0u64;
        let mut failed = 0u64;
        for path in pending.iter() {
            match std::fs::remove_file(path) {
                Ok(()) => removed += 1,
                Err(err) => {
                    failed += 1;
                    emit_with_context(&TS002, &format!("{}: {}", path.display(), err));
                }
            }
        }
        *pending = Vec::new();
        drop(pending);

        self.cleanup_runs.fetch_add(1, Ordering::Relaxed);
        self.removed.fetch_add(removed, Ordering::Relaxed);
        self.failed.fetch_add(failed, Ordering::Relaxed);
        trace_event!("cleanup removed {} path(s), {} failed", removed, failed);
    }

    /// Snapshot of the pending paths, in registration order.
    pub fn pending(&self) -> Vec<PathBuf> {
        self.pending.lock().clone()
    }

    /// Number of pending paths.
    pub fn len(&self) -> usize {
        self.pending.lock().len()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.lock().is_empty()
    }

    /// Run [`cleanup`](Self::cleanup) when the returned guard drops.
    pub fn cleanup_on_drop(&self) -> CleanupGuard<'_> {
        CleanupGuard::new(self)
    }

    /// Get current statistics.
    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            deferred_total: self.deferred_total.load(Ordering::Relaxed),
            cleanup_runs: self.cleanup_runs.load(Ordering::Relaxed),
            removed: self.removed.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            pending: self.len(),
        }
    }
}
