//! # tempsweep
//!
//! Numbered temporary files with deferred, best-effort batch cleanup.
//!
//! ## Features
//!
//! - Unique path allocation by probing `prefix001suffix` .. `prefix9999suffix`
//! - File creation at the first free path
//! - A mutex-guarded registry of paths to delete later
//! - One-shot cleanup that never fails
//! - Optional `log` integration and `parking_lot` locking
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tempsweep::{create, TempRegistry};
//!
//! let registry = TempRegistry::new();
//!
//! let file = create("/tmp/x", "profile", ".pb")?;   // /tmp/x/profile001.pb
//! registry.defer_delete(file.path());
//! drop(file);
//!
//! // End of run
//! registry.cleanup();
//! # Ok::<(), tempsweep::TempFileError>(())
//! ```
//!
//! Probing and creation are not atomic with respect to each other, and
//! nothing coordinates between processes.

pub mod api;
pub mod diagnostics;

mod sync;

// Re-export public API at crate root for convenience
pub use api::config::{TempConfig, DIR_ENV_VAR};
pub use api::create::{create, create_with, NamedFile};
pub use api::error::{Result, TempFileError};
pub use api::global::{cleanup, defer_delete, global_registry};
pub use api::naming::NamingScheme;
pub use api::path::{allocate, allocate_with};
pub use api::registry::TempRegistry;
pub use api::scope::{CleanupGuard, CleanupScope};
pub use api::space::TempSpace;
pub use api::stats::RegistryStats;

// Diagnostics
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use diagnostics::{suppress_diagnostics, TS001, TS002, TS003, TS004};
