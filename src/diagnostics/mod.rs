//! Diagnostics for conditions the library absorbs instead of returning.
//!
//! Cleanup never fails and probing treats every stat error as "available",
//! so the only way these conditions become visible is through a diagnostic.
//!
//! ## Diagnostic Codes
//!
//! | Code  | Meaning                                      |
//! |-------|----------------------------------------------|
//! | TS001 | Naming pattern exhausted                     |
//! | TS002 | Deferred removal failed during cleanup       |
//! | TS003 | Probe error other than not-found             |
//! | TS004 | Pending-deletion lock poisoned and recovered |
//!
//! ## Backends
//!
//! - `log` feature: routed through the `log` crate
//! - otherwise, debug builds: written to stderr
//! - otherwise, release builds: stderr with the `diagnostics` feature, silent without

pub mod emit;
pub mod kind;

pub use emit::{emit, emit_with_context, is_suppressed, suppress_diagnostics};
pub use kind::{Diagnostic, DiagnosticKind};
pub use kind::{TS001, TS002, TS003, TS004};

pub(crate) use emit::trace_event;
