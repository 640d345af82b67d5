use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "aviv.toml";

/// Top-level Aviv configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct AvivConfig {
    /// Observance-day rule.
    #[serde(default)]
    pub observance: ObservanceToml,

    /// Observation site for the sunset rule.
    #[serde(default)]
    pub site: SiteToml,

    /// Search windows.
    #[serde(default)]
    pub search: SearchToml,
}

impl AvivConfig {
    /// Loads the configuration.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
    /// read if present and the built-in defaults are used otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let p = PathBuf::from(DEFAULT_CONFIG_PATH);
                if !p.exists() {
                    debug!("no config file; using defaults");
                    return Ok(Self::default());
                }
                p
            }
        };
        let toml_str = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: AvivConfig = toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObservanceToml {
    #[serde(default = "default_rule")]
    pub rule: String,
    #[serde(default = "default_cutoff_hour")]
    pub cutoff_hour: u32,
}

impl Default for ObservanceToml {
    fn default() -> Self {
        Self {
            rule: default_rule(),
            cutoff_hour: default_cutoff_hour(),
        }
    }
}

fn default_rule() -> String {
    "fixed".to_string()
}
fn default_cutoff_hour() -> u32 {
    18
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteToml {
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
}

impl Default for SiteToml {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
        }
    }
}

fn default_latitude() -> f64 {
    13.6929
}
fn default_longitude() -> f64 {
    -89.2182
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchToml {
    #[serde(default = "default_aviv_window_end")]
    pub aviv_window_end: [u32; 2],
    #[serde(default = "default_month7_window_days")]
    pub month7_window_days: [u32; 2],
    #[serde(default = "default_month_padding_days")]
    pub month_padding_days: [u32; 2],
}

impl Default for SearchToml {
    fn default() -> Self {
        Self {
            aviv_window_end: default_aviv_window_end(),
            month7_window_days: default_month7_window_days(),
            month_padding_days: default_month_padding_days(),
        }
    }
}

fn default_aviv_window_end() -> [u32; 2] {
    [4, 30]
}
fn default_month7_window_days() -> [u32; 2] {
    [160, 200]
}
fn default_month_padding_days() -> [u32; 2] {
    [5, 32]
}
