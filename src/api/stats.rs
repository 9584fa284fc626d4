//! Registry statistics.

/// Counters for a [`TempRegistry`](crate::TempRegistry).
///
/// Removal failures are counted here but never returned from
/// [`cleanup`](crate::TempRegistry::cleanup).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryStats {
    /// Total paths ever registered for deferred deletion.
    pub deferred_total: u64,

    /// Number of cleanup passes run.
    pub cleanup_runs: u64,

    /// Paths successfully removed.
    pub removed: u64,

    /// Paths whose removal failed (missing, permission denied, ...).
    pub failed: u64,

    /// Paths currently pending.
    pub pending: usize,
}

impl RegistryStats {
    /// Create empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths that went through a cleanup pass, removed or not.
    pub fn attempted(&self) -> u64 {
        self.removed + self.failed
    }
}

impl std::fmt::Display for RegistryStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Temp Registry Statistics:")?;
        writeln!(f, "  Deferred:     {}", self.deferred_total)?;
        writeln!(f, "  Pending:      {}", self.pending)?;
        writeln!(f, "  Cleanup runs: {}", self.cleanup_runs)?;
        writeln!(f, "  Removed:      {}", self.removed)?;
        write!(f, "  Failed:       {}", self.failed)
    }
}
