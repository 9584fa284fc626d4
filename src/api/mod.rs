//! Public API for tempsweep.
//!
//! This module contains all user-facing types and functions.
//! Most users only need the re-exports at the crate root.

pub mod config;
pub mod create;
pub mod error;
pub mod global;
pub mod naming;
pub mod path;
pub mod registry;
pub mod scope;
pub mod space;
pub mod stats;
