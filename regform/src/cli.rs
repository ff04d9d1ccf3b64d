//! CLI command implementations.
//!
//! Each command prints its result to stdout and returns an exit code from
//! [`crate::exit_codes`]. Rendering is split into pure `render_*` helpers.

use std::borrow::Cow;
use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info};

use crate::core::cascade::{cities_for, countries, states_for};
use crate::core::derived::{DerivedState, derive_state};
use crate::core::keys::LocationOption;
use crate::core::reference::ReferenceData;
use crate::core::strength::{classify_strength, strength_score};
use crate::exit_codes;
use crate::gate::{MockLatency, SubmissionGate, SubmitRejection};
use crate::io::config::{RegformConfig, load_config};
use crate::io::reference_store::reference_for;
use crate::io::snapshot::load_form_state;

/// Config plus the reference tables it selects.
#[derive(Debug)]
pub struct Environment {
    pub config: RegformConfig,
    pub data: Cow<'static, ReferenceData>,
}

impl Environment {
    pub fn load(config_path: &Path) -> Result<Self> {
        let config = load_config(config_path).context("load config")?;
        let data = reference_for(&config).context("load reference data")?;
        Ok(Self { config, data })
    }
}

/// Print per-field results and the fix message; `INVALID` if any field fails.
pub fn validate_form(env: &Environment, form_path: &Path) -> Result<i32> {
    let form = load_form_state(form_path)?;
    let derived = derive_state(&form, &env.data);
    debug!(failing = ?derived.summary.failing_fields, "form validated");
    print!("{}", render_validation(&derived));
    Ok(if derived.can_submit {
        exit_codes::OK
    } else {
        exit_codes::INVALID
    })
}

/// Print the full derived state as JSON.
pub fn derive_form(env: &Environment, form_path: &Path) -> Result<i32> {
    let form = load_form_state(form_path)?;
    let derived = derive_state(&form, &env.data);
    let payload = serde_json::to_string_pretty(&derived).context("serialize derived state")?;
    println!("{payload}");
    Ok(exit_codes::OK)
}

pub fn list_countries(env: &Environment) -> i32 {
    print_options(&countries(&env.data))
}

pub fn list_states(env: &Environment, country: &str) -> i32 {
    print_options(&states_for(&env.data, country))
}

pub fn list_cities(env: &Environment, country: &str, state: &str) -> i32 {
    print_options(&cities_for(&env.data, country, state))
}

pub fn show_strength(password: &str) -> i32 {
    println!(
        "{} {}",
        classify_strength(password).as_str(),
        strength_score(password)
    );
    exit_codes::OK
}

/// Run the submission gate over a snapshot with the configured mock latency.
pub fn submit_form(env: &Environment, form_path: &Path) -> Result<i32> {
    let mut form = load_form_state(form_path)?;
    let mut gate = SubmissionGate::new();
    let processing = MockLatency::new(env.config.submit_delay());

    match gate.submit(&mut form, &env.data, &processing) {
        Ok(receipt) => {
            info!(submission = receipt.submission, "registration submitted");
            println!("submitted: submission={}", receipt.submission);
            Ok(exit_codes::OK)
        }
        Err(SubmitRejection::Invalid(summary)) => {
            if let Some(message) = summary.fix_message() {
                println!("{message}");
            }
            Ok(exit_codes::INVALID)
        }
        Err(other) => Err(anyhow!(other).context("submit form")),
    }
}

/// One line per validated field (`name: ok` or `name: message`), then the fix
/// message when invalid.
pub fn render_validation(derived: &DerivedState) -> String {
    let mut out = String::new();
    for report in &derived.fields {
        let status = if report.result.is_valid() {
            "ok"
        } else {
            report.result.message()
        };
        let _ = writeln!(out, "{}: {}", report.field, status);
    }
    if let Some(message) = derived.summary.fix_message() {
        let _ = writeln!(out, "{message}");
    }
    out
}

pub fn render_options(options: &[LocationOption]) -> String {
    options
        .iter()
        .map(|option| format!("{}\t{}\n", option.key, option.label))
        .collect()
}

fn print_options(options: &[LocationOption]) -> i32 {
    print!("{}", render_options(options));
    if options.is_empty() {
        exit_codes::INVALID
    } else {
        exit_codes::OK
    }
}
