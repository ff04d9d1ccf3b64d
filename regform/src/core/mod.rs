//! Deterministic, pure logic for the registration engine.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! snapshots and immutable reference tables and return deterministic outputs.

pub mod aggregate;
pub mod cascade;
pub mod derived;
pub mod form;
pub mod keys;
pub mod reference;
pub mod strength;
pub mod types;
pub mod validators;
