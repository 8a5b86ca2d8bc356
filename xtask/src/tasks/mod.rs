pub mod firmware;
pub mod tooling;

use crate::config::BuildConfig;
use anyhow::{Context, Result};
use std::path::Path;

/// Load the config file (defaults when absent) and apply `--target`.
pub(crate) fn load_config(path: &Path, target: Option<&str>) -> Result<BuildConfig> {
    let mut config =
        BuildConfig::load(path).with_context(|| format!("Loading {}", path.display()))?;
    if let Some(t) = target {
        config.target = t.to_string();
        config.validate().context("--target")?;
    }
    Ok(config)
}
