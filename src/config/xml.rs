//! XML configuration support.
//!
//! An optional file of defaults, e.g.:
//! <config>
//!   <strip>()[]</strip>
//!   <spaces>underscore</spaces>
//!   <verbose>true</verbose>
//!   <log_level>normal</log_level>
//! </config>
//!
//! Command-line flags override every value read here. Unknown fields are an
//! error so typos surface instead of being ignored.

use anyhow::{Context, Result, bail};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::paths::{CONFIG_ENV, default_config_path};
use super::types::{Config, LogLevel};
use crate::naming::SpacePolicy;

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    strip: Option<String>,
    spaces: Option<String>,
    backup: Option<bool>,
    interactive: Option<bool>,
    verbose: Option<bool>,
    log_level: Option<String>,
    log_file: Option<String>,
}

// Map XmlConfig -> Config, validating enumerated values.
fn xml_to_config(parsed: XmlConfig) -> Result<Config> {
    let mut cfg = Config::default();

    if let Some(s) = parsed.strip.as_deref() {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            cfg.strip = Some(trimmed.to_owned());
        }
    }

    if let Some(s) = parsed.spaces.as_deref() {
        match s.parse::<SpacePolicy>() {
            Ok(SpacePolicy::Remove) => {}
            Ok(SpacePolicy::Underscore) => cfg.underscore = true,
            Ok(SpacePolicy::Dash) => cfg.dash = true,
            Err(e) => bail!(e),
        }
    }

    cfg.backup = parsed.backup.unwrap_or(false);
    cfg.interactive = parsed.interactive.unwrap_or(false);
    cfg.verbose = parsed.verbose.unwrap_or(false);

    if let Some(s) = parsed.log_level.as_deref() {
        cfg.log_level = s.trim().parse::<LogLevel>().map_err(anyhow::Error::msg)?;
    }
    if let Some(s) = parsed.log_file.as_deref() {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            cfg.log_file = Some(PathBuf::from(trimmed));
        }
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

/// Load the effective file configuration.
///
/// - `$SPACERM_CONFIG` set: that file must exist and parse.
/// - otherwise the default location is used when present, else built-in defaults.
pub fn load_config() -> Result<Config> {
    let explicit = env::var_os(CONFIG_ENV).is_some_and(|v| !v.is_empty());
    let Some(path) = default_config_path() else {
        return Ok(Config::default());
    };

    if !path.exists() {
        if explicit {
            bail!("{CONFIG_ENV} points to a missing file: {}", path.display());
        }
        debug!(path = %path.display(), "no config file; using defaults");
        return Ok(Config::default());
    }

    load_config_from_xml_path(&path)
}
