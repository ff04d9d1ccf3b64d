//! Engine configuration stored in `regform.toml`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use tracing::debug;

pub const DEFAULT_CONFIG_PATH: &str = "regform.toml";

/// Upper bound for the mock submission latency.
pub const MAX_SUBMIT_DELAY_MS: u64 = 60_000;

/// Engine configuration (TOML).
///
/// Missing fields fall back to the defaults the form shipped with.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RegformConfig {
    /// Simulated processing time between submit and success.
    pub submit_delay_ms: u64,

    /// Alternative reference-data JSON. Relative paths resolve against the
    /// config file's directory. Built-in tables are used when unset.
    pub reference_data: Option<PathBuf>,
}

impl Default for RegformConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1_500,
            reference_data: None,
        }
    }
}

impl RegformConfig {
    pub fn validate(&self) -> Result<()> {
        if self.submit_delay_ms > MAX_SUBMIT_DELAY_MS {
            return Err(anyhow!(
                "submit_delay_ms must be <= {MAX_SUBMIT_DELAY_MS} (got {})",
                self.submit_delay_ms
            ));
        }
        if let Some(path) = &self.reference_data {
            if path.as_os_str().is_empty() {
                return Err(anyhow!("reference_data must be a non-empty path when set"));
            }
        }
        Ok(())
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `RegformConfig::default()`.
pub fn load_config(path: &Path) -> Result<RegformConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = RegformConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let mut cfg: RegformConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    if let Some(reference) = cfg.reference_data.take() {
        cfg.reference_data = Some(resolve_relative(path, reference));
    }
    debug!(path = %path.display(), ?cfg, "config loaded");
    Ok(cfg)
}

fn resolve_relative(config_path: &Path, reference: PathBuf) -> PathBuf {
    if reference.is_absolute() {
        return reference;
    }
    match config_path.parent() {
        Some(parent) => parent.join(reference),
        None => reference,
    }
}
