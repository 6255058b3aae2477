//! Tool configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults
//! target the Azure Public Service Icons distribution; a user config file in
//! the working directory overrides just the values it names.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [source]
//! archive_url = "https://arch-center.azureedge.net/icons/Azure_Public_Service_Icons_V{version}.zip"
//! version = 19
//! icons_subdir = "Azure_Public_Service_Icons/Icons"
//!
//! [output]
//! components_dir = "components"  # Subdirectory for generated components
//! default_size = "18"            # Default width/height of rendered icons
//!
//! [processing]
//! max_workers = 4                # Max parallel workers (omit for auto = CPU cores)
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! # Only pin a different icon set release
//! [source]
//! version = 21
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Tool configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Where the vendor archive comes from and what to scan inside it.
    pub source: SourceConfig,
    /// Shape of the generated output tree.
    pub output: OutputConfig,
    /// Parallel processing settings.
    pub processing: ProcessingConfig,
}

impl BuildConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source.archive_url.is_empty() {
            return Err(ConfigError::Validation(
                "source.archive_url must not be empty".into(),
            ));
        }
        if self.source.version == 0 {
            return Err(ConfigError::Validation(
                "source.version must be at least 1".into(),
            ));
        }
        if self.output.components_dir.is_empty() || self.output.components_dir.contains('/') {
            return Err(ConfigError::Validation(
                "output.components_dir must be a single directory name".into(),
            ));
        }
        if self.output.default_size.is_empty() {
            return Err(ConfigError::Validation(
                "output.default_size must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Vendor archive settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    /// Download URL template; `{version}` is replaced with `version`.
    pub archive_url: String,
    /// Icon set release to download.
    pub version: u32,
    /// Directory inside the extracted archive that holds the category tree.
    pub icons_subdir: String,
}

impl SourceConfig {
    /// The concrete download URL with `{version}` substituted.
    pub fn resolved_url(&self) -> String {
        self.archive_url
            .replace("{version}", &self.version.to_string())
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            archive_url:
                "https://arch-center.azureedge.net/icons/Azure_Public_Service_Icons_V{version}.zip"
                    .to_string(),
            version: 19,
            icons_subdir: "Azure_Public_Service_Icons/Icons".to_string(),
        }
    }
}

/// Output tree settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Name of the subdirectory (under the output root) that holds the
    /// generated component files. Also the first segment of every record's
    /// relative path.
    pub components_dir: String,
    /// Default `width`/`height` the rendered components fall back to when no
    /// `size` prop is passed.
    pub default_size: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            components_dir: "components".to_string(),
            default_size: "18".to_string(),
        }
    }
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel component generation workers.
    /// When absent or null, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_workers: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config.max_workers.map(|n| n.min(cores)).unwrap_or(cores)
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(BuildConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(dir: &Path) -> Result<BuildConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = match load_raw_config(dir)? {
        Some(overlay) => merge_toml(base, overlay),
        None => base,
    };
    let config: BuildConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# icon-mill Configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file as config.toml in the directory you run icon-mill from.
# Each section only needs the keys it wants to override.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Vendor archive
# ---------------------------------------------------------------------------
[source]
# Download URL template; {version} is substituted with the release below.
archive_url = "https://arch-center.azureedge.net/icons/Azure_Public_Service_Icons_V{version}.zip"

# Icon set release to download.
version = 19

# Directory inside the extracted archive that holds the category tree.
icons_subdir = "Azure_Public_Service_Icons/Icons"

# ---------------------------------------------------------------------------
# Output tree
# ---------------------------------------------------------------------------
[output]
# Subdirectory (under the output root) for generated component files.
components_dir = "components"

# Default width/height of rendered icons when no size prop is passed.
default_size = "18"

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Max parallel component generation workers. Omit for auto (= CPU cores).
# Values above the core count are clamped down.
#max_workers = 4
"##
}
