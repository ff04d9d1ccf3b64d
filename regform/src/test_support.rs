//! Test-only helpers for constructing snapshots and scratch workspaces.

use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::core::form::FormState;
use crate::core::types::Gender;
use crate::gate::Processing;

/// A snapshot that satisfies every validator against the built-in tables.
pub fn valid_form() -> FormState {
    FormState {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: "john.doe@example.com".to_string(),
        phone: "+11234567890".to_string(),
        age: "25".to_string(),
        gender: Some(Gender::Male),
        address: "123 Main Street".to_string(),
        country: Some("usa".to_string()),
        state: Some("california".to_string()),
        city: Some("losangeles".to_string()),
        password: "SecurePass123!".to_string(),
        confirm_password: "SecurePass123!".to_string(),
        terms: true,
    }
}

/// Processing step that returns immediately and counts invocations.
#[derive(Debug, Default)]
pub struct CountingProcessing {
    calls: Cell<u32>,
}

impl CountingProcessing {
    pub fn calls(&self) -> u32 {
        self.calls.get()
    }
}

impl Processing for CountingProcessing {
    fn process(&self, _form: &FormState) {
        self.calls.set(self.calls.get() + 1);
    }
}

/// Temporary directory holding snapshot and config files for CLI tests.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir().context("create tempdir")?,
        })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `form` as a JSON snapshot named `name`.
    pub fn write_form(&self, name: &str, form: &FormState) -> Result<PathBuf> {
        let payload = serde_json::to_string_pretty(form).context("serialize form")?;
        self.write_file(name, &payload)
    }

    pub fn write_file(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.root().join(name);
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }
}
