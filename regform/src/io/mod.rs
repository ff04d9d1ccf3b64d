//! I/O helpers for the command-line adapter.

pub mod config;
pub mod reference_store;
pub mod snapshot;
