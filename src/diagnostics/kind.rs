//! Diagnostic kinds and core types.

/// The severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A hard error - an operation failed.
    Error,
    /// Something went wrong but was absorbed.
    Warning,
    /// Informational.
    Note,
}

impl DiagnosticKind {
    /// Get the display prefix for this kind.
    pub fn prefix(&self) -> &'static str {
        match self {
            DiagnosticKind::Error => "error",
            DiagnosticKind::Warning => "warning",
            DiagnosticKind::Note => "note",
        }
    }
}

/// A diagnostic message with code, message, and optional context.
///
/// Diagnostic codes follow the pattern:
/// - `TS0xx` - naming, probing and registry issues
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level.
    pub kind: DiagnosticKind,
    /// Diagnostic code (e.g., "TS001").
    pub code: &'static str,
    /// Primary message.
    pub message: &'static str,
    /// Optional additional context.
    pub note: Option<&'static str>,
    /// Optional fix suggestion.
    pub help: Option<&'static str>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub const fn error(code: &'static str, message: &'static str) -> Self {
        Self {
            kind: DiagnosticKind::Error,
            code,
            message,
            note: None,
            help: None,
        }
    }

    /// Create a new warning diagnostic.
    pub const fn warning(code: &'static str, message: &'static str) -> Self {
        Self {
            kind: DiagnosticKind::Warning,
            code,
            message,
            note: None,
            help: None,
        }
    }

    /// Add a note to this diagnostic.
    pub const fn with_note(mut self, note: &'static str) -> Self {
        self.note = Some(note);
        self
    }

    /// Add a help message to this diagnostic.
    pub const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[tempsweep][{}] {}: {}", self.code, self.kind.prefix(), self.message)
    }
}

// =============================================================================
// Predefined diagnostics
// =============================================================================

/// TS001: Every index of a naming pattern is already taken.
pub const TS001: Diagnostic = Diagnostic::error(
    "TS001",
    "temporary file naming pattern exhausted"
).with_note("every numbered candidate in the directory already exists")
 .with_help("remove stale files or use a different prefix/suffix");

/// TS002: A deferred removal failed during cleanup.
pub const TS002: Diagnostic = Diagnostic::warning(
    "TS002",
    "deferred temporary file could not be removed"
).with_note("cleanup is best-effort; the path was dropped from the pending list");

/// TS003: Probing a candidate failed for a reason other than "not found".
pub const TS003: Diagnostic = Diagnostic::warning(
    "TS003",
    "candidate probe failed; treating path as available"
).with_note("the real state of the path is unknown")
 .with_help("check permissions on the temporary directory");

/// TS004: The pending-deletion lock was poisoned and has been recovered.
pub const TS004: Diagnostic = Diagnostic::warning(
    "TS004",
    "pending-deletion lock was poisoned; recovering"
).with_note("a thread panicked while holding the registry lock");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predefined_kinds() {
        assert_eq!(TS001.kind, DiagnosticKind::Error);
        assert_eq!(TS002.kind, DiagnosticKind::Warning);
        assert!(TS003.help.is_some());
        assert!(TS004.note.is_some());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            TS001.to_string(),
            "[tempsweep][TS001] error: temporary file naming pattern exhausted"
        );
    }
}
