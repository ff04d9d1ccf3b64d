//! Reference-data selection: built-in tables or a configured JSON file.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::reference::ReferenceData;
use crate::io::config::RegformConfig;

/// Load and validate reference tables from a JSON file.
pub fn load_reference_data(path: &Path) -> Result<ReferenceData> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read reference data {}", path.display()))?;
    ReferenceData::from_json(&contents).with_context(|| format!("load {}", path.display()))
}

/// Tables named by `cfg`, falling back to the built-in set.
pub fn reference_for(cfg: &RegformConfig) -> Result<Cow<'static, ReferenceData>> {
    match &cfg.reference_data {
        Some(path) => {
            debug!(path = %path.display(), "loading reference data override");
            Ok(Cow::Owned(load_reference_data(path)?))
        }
        None => Ok(Cow::Borrowed(ReferenceData::builtin())),
    }
}
