//! Diagnostic emission backend.
//!
//! Routes diagnostics to the `log` crate when the `log` feature is on.
//! Otherwise they go to stderr in debug builds, and in release builds with
//! the `diagnostics` feature. Release builds with neither are silent.

use std::sync::atomic::{AtomicBool, Ordering};

use super::kind::Diagnostic;
#[cfg(any(feature = "log", debug_assertions, feature = "diagnostics"))]
use super::kind::DiagnosticKind;

/// Global flag to suppress diagnostic output (for testing).
static DIAGNOSTICS_SUPPRESSED: AtomicBool = AtomicBool::new(false);

/// Whether diagnostics are written to stderr in this build.
pub const fn stderr_enabled() -> bool {
    cfg!(all(
        any(debug_assertions, feature = "diagnostics"),
        not(feature = "log")
    ))
}

/// Suppress all diagnostic output.
pub fn suppress_diagnostics(suppress: bool) {
    DIAGNOSTICS_SUPPRESSED.store(suppress, Ordering::Relaxed);
}

/// Check if diagnostics are suppressed.
pub fn is_suppressed() -> bool {
    DIAGNOSTICS_SUPPRESSED.load(Ordering::Relaxed)
}

/// Emit a diagnostic.
pub fn emit(diag: &Diagnostic) {
    if is_suppressed() {
        return;
    }

    #[cfg(feature = "log")]
    emit_to_log(diag, None);

    #[cfg(all(any(debug_assertions, feature = "diagnostics"), not(feature = "log")))]
    emit_to_stderr(diag, None);

    #[cfg(not(any(feature = "log", debug_assertions, feature = "diagnostics")))]
    let _ = diag;
}

/// Emit a diagnostic with additional runtime context (usually a path and
/// the underlying error).
pub fn emit_with_context(diag: &Diagnostic, context: &str) {
    if is_suppressed() {
        return;
    }

    #[cfg(feature = "log")]
    emit_to_log(diag, Some(context));

    #[cfg(all(any(debug_assertions, feature = "diagnostics"), not(feature = "log")))]
    emit_to_stderr(diag, Some(context));

    #[cfg(not(any(feature = "log", debug_assertions, feature = "diagnostics")))]
    let _ = (diag, context);
}

#[cfg(feature = "log")]
fn emit_to_log(diag: &Diagnostic, context: Option<&str>) {
    let level = match diag.kind {
        DiagnosticKind::Error => log::Level::Error,
        DiagnosticKind::Warning => log::Level::Warn,
        DiagnosticKind::Note => log::Level::Info,
    };

    match context {
        Some(ctx) => log::log!(level, "[{}] {} ({})", diag.code, diag.message, ctx),
        None => log::log!(level, "[{}] {}", diag.code, diag.message),
    }

    if let Some(note) = diag.note {
        log::debug!("  note: {}", note);
    }
    if let Some(help) = diag.help {
        log::debug!("  help: {}", help);
    }
}

#[cfg(all(any(debug_assertions, feature = "diagnostics"), not(feature = "log")))]
fn emit_to_stderr(diag: &Diagnostic, context: Option<&str>) {
    use std::io::Write;

    let mut stderr = std::io::stderr().lock();

    let _ = writeln!(stderr, "{}", diag);

    if let Some(ctx) = context {
        let _ = writeln!(stderr, "  context: {}", ctx);
    }
    if let Some(note) = diag.note {
        let _ = writeln!(stderr, "  note: {}", note);
    }
    if let Some(help) = diag.help {
        if diag.kind == DiagnosticKind::Error {
            let _ = writeln!(stderr, "  help: {}", help);
        }
    }
}

/// Trace-level event for the normal operation path.
///
/// Compiles to nothing without the `log` feature.
macro_rules! trace_event {
    ($($arg:tt)+) => {{
        #[cfg(feature = "log")]
        {
            log::trace!(target: "tempsweep", $($arg)+);
        }
    }};
}

pub(crate) use trace_event;
