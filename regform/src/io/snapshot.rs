//! Form snapshot loading with schema validation.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result, anyhow};
use jsonschema::Validator;
use serde_json::Value;
use tracing::debug;

use crate::core::form::FormState;

const FORM_STATE_SCHEMA: &str = include_str!("../../schemas/form_state.v1.schema.json");

static SCHEMA: LazyLock<Validator> = LazyLock::new(|| {
    let schema: Value =
        serde_json::from_str(FORM_STATE_SCHEMA).expect("embedded form schema is valid json");
    jsonschema::validator_for(&schema).expect("embedded form schema compiles")
});

/// Parse a snapshot from JSON text: schema conformance, then deserialization.
pub fn parse_form_state(raw: &str) -> Result<FormState> {
    let value: Value = serde_json::from_str(raw).context("parse form snapshot json")?;
    let messages: Vec<String> = SCHEMA
        .iter_errors(&value)
        .map(|err| err.to_string())
        .collect();
    if !messages.is_empty() {
        return Err(anyhow!(
            "form snapshot schema validation failed:\n- {}",
            messages.join("\n- ")
        ));
    }
    serde_json::from_value(value).context("deserialize form snapshot")
}

/// Load a snapshot file.
pub fn load_form_state(path: &Path) -> Result<FormState> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read form snapshot {}", path.display()))?;
    let form =
        parse_form_state(&contents).with_context(|| format!("load {}", path.display()))?;
    debug!(path = %path.display(), "form snapshot loaded");
    Ok(form)
}
