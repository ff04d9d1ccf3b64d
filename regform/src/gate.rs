//! Submission gate: decides when a registration may be submitted and keeps at
//! most one submission in flight.
//!
//! ```text
//! Idle --begin (form valid)--> Submitting --complete--> Success --(form cleared)--> Idle
//! ```
//!
//! There is no failure edge out of `Submitting`: the processing step is a local
//! mock with nothing to fail. A real backend would add `Submitting -> Failed`
//! with retry and error surfacing.

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::aggregate::{ValidationSummary, validate_all};
use crate::core::form::FormState;
use crate::core::reference::ReferenceData;

/// The step awaited between `Submitting` and `Success`.
///
/// Injected by the caller so tests can complete instantly. `process` blocks the
/// calling thread; event-loop adapters skip [`SubmissionGate::submit`] and call
/// [`SubmissionGate::begin`], schedule their own wait, then
/// [`SubmissionGate::complete`].
pub trait Processing {
    fn process(&self, form: &FormState);
}

/// Simulated backend latency.
#[derive(Debug, Clone, Copy)]
pub struct MockLatency {
    delay: Duration,
}

impl MockLatency {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Processing for MockLatency {
    fn process(&self, _form: &FormState) {
        debug!(delay_ms = self.delay.as_millis() as u64, "simulating submission latency");
        std::thread::sleep(self.delay);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GateState {
    #[default]
    Idle,
    Submitting,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejection {
    #[error("form has {} failing field(s)", .0.failing_fields.len())]
    Invalid(ValidationSummary),
    #[error("a submission is already in flight")]
    InFlight,
    #[error("ticket {0} does not match the in-flight submission")]
    StaleTicket(u64),
}

/// Proof that `begin` accepted a submission. Single use.
#[derive(Debug, PartialEq, Eq)]
pub struct SubmitTicket {
    id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitReceipt {
    /// 1-based, increasing per gate.
    pub submission: u64,
}

#[derive(Debug, Default)]
pub struct SubmissionGate {
    state: GateState,
    in_flight: Option<u64>,
    issued: u64,
    completed: u64,
}

impl SubmissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// Number of submissions that reached `Success`.
    pub fn completed(&self) -> u64 {
        self.completed
    }

    /// Move `Idle -> Submitting` if the form is valid.
    ///
    /// Rejected while another submission is in flight, whatever the form holds.
    pub fn begin(
        &mut self,
        form: &FormState,
        data: &ReferenceData,
    ) -> Result<SubmitTicket, SubmitRejection> {
        if self.state != GateState::Idle {
            warn!(state = ?self.state, "submit ignored: submission in flight");
            return Err(SubmitRejection::InFlight);
        }
        let summary = validate_all(form, data);
        if !summary.valid {
            warn!(failing = ?summary.failing_fields, "submit rejected: form invalid");
            return Err(SubmitRejection::Invalid(summary));
        }

        self.issued += 1;
        self.in_flight = Some(self.issued);
        self.state = GateState::Submitting;
        info!(submission = self.issued, "submission started");
        Ok(SubmitTicket { id: self.issued })
    }

    /// Move `Submitting -> Success -> Idle`, clearing the form.
    pub fn complete(
        &mut self,
        ticket: SubmitTicket,
        form: &mut FormState,
    ) -> Result<SubmitReceipt, SubmitRejection> {
        if self.state != GateState::Submitting || self.in_flight != Some(ticket.id) {
            warn!(ticket = ticket.id, state = ?self.state, "stale submission ticket");
            return Err(SubmitRejection::StaleTicket(ticket.id));
        }

        self.state = GateState::Success;
        self.in_flight = None;
        self.completed += 1;
        info!(submission = ticket.id, "submission succeeded");

        form.clear();
        self.state = GateState::Idle;
        debug!(submission = ticket.id, "form reset, gate idle");
        Ok(SubmitReceipt {
            submission: ticket.id,
        })
    }

    /// `begin`, await `processing`, then `complete`.
    pub fn submit<P: Processing>(
        &mut self,
        form: &mut FormState,
        data: &ReferenceData,
        processing: &P,
    ) -> Result<SubmitReceipt, SubmitRejection> {
        let ticket = self.begin(form, data)?;
        processing.process(form);
        self.complete(ticket, form)
    }
}
