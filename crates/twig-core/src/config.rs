// SPDX-License-Identifier: Apache-2.0

//! Configuration management for Twig.
//!
//! Provides layered configuration from files and environment variables.
//! Uses XDG-compliant paths with environment variable support.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables (prefix: `TWIG_`)
//! 2. Config file: `~/.config/twig/config.toml`
//! 3. Built-in defaults
//!
//! # Examples
//!
//! ```bash
//! # Flag "load more" one level earlier
//! TWIG_TREE__MAX_DEPTH=5 twig tree build comments.json
//! ```

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::TwigError;
use crate::tree::DEFAULT_MAX_DEPTH;

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Tree building settings.
    pub tree: TreeConfig,
    /// UI preferences.
    pub ui: UiConfig,
}

/// Tree building settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Depth at which the comment API stops nesting replies.
    ///
    /// Comments at this depth that still have replies get the "load more" flag.
    pub max_depth: u32,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// UI preferences.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable colored output.
    pub color: bool,
    /// Spaces per nesting level in text output.
    pub indent_width: usize,
    /// Show tombstones for ancestors missing from the input.
    pub show_placeholders: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: true,
            indent_width: 2,
            show_placeholders: true,
        }
    }
}

/// Returns the Twig configuration directory.
///
/// Respects the `XDG_CONFIG_HOME` environment variable if set,
/// otherwise defaults to `~/.config/twig`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return PathBuf::from(xdg_config).join("twig");
    }
    dirs::home_dir()
        .unwrap_or_default()
        .join(".config")
        .join("twig")
}

/// Returns the path to the configuration file.
#[must_use]
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Load application configuration.
///
/// Loads from config file (if exists) and environment variables.
/// Environment variables use the prefix `TWIG_` and double underscore
/// for nested keys (e.g., `TWIG_TREE__MAX_DEPTH`).
///
/// # Errors
///
/// Returns `TwigError::Config` if the config file exists but is invalid.
pub fn load_config() -> Result<AppConfig, TwigError> {
    let config_path = config_file_path();

    let config = Config::builder()
        // Load from config file (optional - may not exist)
        .add_source(File::with_name(config_path.to_string_lossy().as_ref()).required(false))
        // Override with environment variables
        .add_source(
            Environment::with_prefix("TWIG")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    Ok(app_config)
}
