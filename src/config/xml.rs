//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - A missing default file means "use defaults"; nothing is ever created here.
//!
//! Notes:
//! - This module only reads the config file; directory checks happen in the commands.
//! - Unknown XML fields are rejected to surface misconfigurations early.

use anyhow::{Context, Result, bail};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::paths::default_config_path;
use super::types::{Config, LogLevel};
use super::CONFIG_ENV;

/// Struct mirroring the XML config for deserialization.
/// Values are read as text and parsed afterwards so errors can name the tag.
#[derive(Debug, Default, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    log_level: Option<String>,
    log_file: Option<String>,
    seed: Option<String>,
    train_ratio: Option<String>,
    corpus_root: Option<String>,
    archive_name: Option<String>,
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|t| !t.is_empty())
}

// Map XmlConfig -> Config, starting from defaults.
fn xml_to_config(parsed: XmlConfig) -> Result<Config> {
    let mut cfg = Config::default();

    if let Some(s) = non_empty(parsed.log_level.as_deref()) {
        cfg.log_level = s
            .parse::<LogLevel>()
            .map_err(|e| anyhow::anyhow!("<log_level>: {e}"))?;
    }
    if let Some(s) = non_empty(parsed.log_file.as_deref()) {
        cfg.log_file = Some(PathBuf::from(s));
    }
    if let Some(s) = non_empty(parsed.seed.as_deref()) {
        cfg.seed = Some(
            s.parse::<u64>()
                .with_context(|| format!("<seed>: '{s}' is not an unsigned integer"))?,
        );
    }
    if let Some(s) = non_empty(parsed.train_ratio.as_deref()) {
        cfg.train_ratio = s
            .parse::<f64>()
            .with_context(|| format!("<train_ratio>: '{s}' is not a number"))?;
    }
    if let Some(s) = non_empty(parsed.corpus_root.as_deref()) {
        cfg.corpus_root = PathBuf::from(s);
    }
    if let Some(s) = non_empty(parsed.archive_name.as_deref()) {
        cfg.archive_name = s.to_string();
    }

    Ok(cfg)
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    xml_to_config(parsed).with_context(|| format!("invalid value in '{}'", path.display()))
}

/// Load the config in effect.
///
/// - `$CORPUS_TOOLS_CONFIG` set: that file must exist and parse.
/// - Otherwise the OS default path is used when present; `Ok(None)` when it is not.
pub fn load_config() -> Result<Option<Config>> {
    let explicit = env::var_os(CONFIG_ENV).is_some();
    let path = default_config_path()?;

    if !path.exists() {
        if explicit {
            bail!(
                "{CONFIG_ENV} points to '{}', which does not exist",
                path.display()
            );
        }
        debug!(path = %path.display(), "no config file; using defaults");
        return Ok(None);
    }

    debug!(path = %path.display(), "loading config");
    load_config_from_xml_path(&path).map(Some)
}
