// SPDX-License-Identifier: MPL-2.0
//! This module handles the viewer configuration, including loading and saving
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[viewer]` - Drag axis and sensitivity
//! - `[hint]` - Drag hint overlay
//! - `[catalog]` - Location of the product sprite catalog
//!
//! # Examples
//!
//! ```no_run
//! use sprite360::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.viewer.sensitivity = Some(60.0);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::domain::ui::{DragAxis, HintTimeout};
use crate::error::{Error, Result};
use crate::ui::viewer::AttachOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Drag interaction settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    /// Axis drag distance is measured on (`"x"` or `"y"`).
    #[serde(
        default = "default_drag_axis",
        deserialize_with = "deserialize_drag_axis",
        serialize_with = "serialize_drag_axis"
    )]
    pub drag_axis: DragAxis,

    /// Pixels of drag per frame.
    #[serde(default = "default_sensitivity", skip_serializing_if = "Option::is_none")]
    pub sensitivity: Option<f32>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            drag_axis: default_drag_axis(),
            sensitivity: default_sensitivity(),
        }
    }
}

/// Drag hint overlay settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HintConfig {
    #[serde(default = "default_hint_enabled", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Fade-out delay in milliseconds.
    #[serde(default = "default_hint_timeout_ms", skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u32>,
}

impl Default for HintConfig {
    fn default() -> Self {
        Self {
            enabled: default_hint_enabled(),
            timeout_ms: default_hint_timeout_ms(),
        }
    }
}

/// Product catalog location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CatalogConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Viewer configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub viewer: ViewerConfig,

    #[serde(default)]
    pub hint: HintConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl Config {
    /// Builds attach options, replacing an unusable sensitivity with the default.
    #[must_use]
    pub fn attach_options(&self) -> AttachOptions {
        let sensitivity = match self.viewer.sensitivity {
            Some(value) if value.is_finite() && value > 0.0 => value,
            Some(value) => {
                log::warn!(
                    "invalid sensitivity {}, using {}",
                    value,
                    DEFAULT_SENSITIVITY_PX
                );
                DEFAULT_SENSITIVITY_PX
            }
            None => DEFAULT_SENSITIVITY_PX,
        };
        AttachOptions {
            drag_axis: self.viewer.drag_axis,
            sensitivity,
        }
    }

    #[must_use]
    pub fn hint_enabled(&self) -> bool {
        self.hint.enabled.unwrap_or(DEFAULT_HINT_ENABLED)
    }

    #[must_use]
    pub fn hint_timeout(&self) -> HintTimeout {
        HintTimeout::new(self.hint.timeout_ms.unwrap_or(DEFAULT_HINT_TIMEOUT_MS))
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_drag_axis() -> DragAxis {
    DragAxis::parse(DEFAULT_DRAG_AXIS).unwrap_or_default()
}

fn default_sensitivity() -> Option<f32> {
    Some(DEFAULT_SENSITIVITY_PX)
}

fn default_hint_enabled() -> Option<bool> {
    Some(DEFAULT_HINT_ENABLED)
}

fn default_hint_timeout_ms() -> Option<u32> {
    Some(DEFAULT_HINT_TIMEOUT_MS)
}

fn deserialize_drag_axis<'de, D>(deserializer: D) -> std::result::Result<DragAxis, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    DragAxis::parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid drag_axis: {}", raw)))
}

fn serialize_drag_axis<S>(axis: &DragAxis, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(axis.as_str())
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    let warning = format!("ignoring {}: {}", path.display(), err);
                    log::warn!("{}", warning);
                    return (Config::default(), Some(warning));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
