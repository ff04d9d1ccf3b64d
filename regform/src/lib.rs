//! Validation and derived-state engine for a registration form.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic rules (field validators, password strength,
//!   location cascade, form aggregation). No I/O.
//! - **[`gate`]**: The submission state machine, which awaits an injected
//!   processing step.
//! - **[`io`]**: Config, snapshot and reference-data loading for the CLI adapter.
//!
//! [`cli`] implements the `regform` commands on top of these.

pub mod cli;
pub mod core;
pub mod exit_codes;
pub mod gate;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use crate::core::aggregate::{ValidationSummary, can_submit, validate_all};
pub use crate::core::cascade::{cities_for, countries, states_for};
pub use crate::core::derived::{DerivedState, derive_state};
pub use crate::core::form::{FieldValue, FormState};
pub use crate::core::reference::ReferenceData;
pub use crate::core::strength::classify_strength;
pub use crate::core::types::{Field, Gender, StrengthTier, ValidationResult};
pub use crate::gate::{GateState, Processing, SubmissionGate, SubmitRejection};
