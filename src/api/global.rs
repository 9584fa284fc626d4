//! Process-wide registry.
//!
//! For callers that register files in one place and clean up somewhere
//! unrelated, usually right before exit. Code that can pass a
//! [`TempRegistry`] around should prefer that.

use std::path::PathBuf;

use crate::api::registry::TempRegistry;

static GLOBAL: TempRegistry = TempRegistry::new();

/// The process-wide registry.
pub fn global_registry() -> &'static TempRegistry {
    &GLOBAL
}

/// Mark `path` for deletion by the next [`cleanup`].
pub fn defer_delete(path: impl Into<PathBuf>) {
    GLOBAL.defer_delete(path);
}

/// Remove every path registered with [`defer_delete`]. Never fails.
pub fn cleanup() {
    GLOBAL.cleanup();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    // Only this test touches the global registry.
    #[test]
    fn test_global_defer_and_cleanup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("global001");
        File::create(&path).unwrap();

        defer_delete(&path);
        assert!(global_registry().pending().contains(&path));

        cleanup();
        assert!(!path.exists());
        assert!(global_registry().is_empty());
    }
}
