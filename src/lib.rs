//! Tambola book generator (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tambola::{core, term, types}` and hosts the command-line
//! configuration used by the `tambola` binary.

pub mod config;

pub use tambola_core as core;
pub use tambola_term as term;
pub use tambola_types as types;
