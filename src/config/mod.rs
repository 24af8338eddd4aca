//! Configuration system for mutpath.
//!
//! This module provides the configuration structure for the `mutpath` binary
//! with sensible defaults and support for serialization/deserialization via
//! serde. Configuration is loaded from a TOML file and merged with
//! command-line arguments, which take precedence.
//!
//! # Example
//!
//! ```
//! use mutpath::config::Config;
//! use mutpath::path::QuoteStyle;
//! use mutpath::report::OutputFormat;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.quote_style, QuoteStyle::Double);
//! assert_eq!(config.output_format, OutputFormat::Text);
//!
//! // Create custom configuration
//! let custom = Config {
//!     quote_style: QuoteStyle::Single,
//!     ..Config::default()
//! };
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::path::{QuoteStyle, RenderOptions};
use crate::report::OutputFormat;

/// Configuration for the mutpath binary.
///
/// # Fields
///
/// * `quote_style` - Delimiter used when rendering needs quotes (default: "double")
/// * `output_format` - How `parse` prints a path: "text", "yaml" or "json" (default: "text")
/// * `comment_prefix` - Lines starting with this are skipped by `check` (default: "#")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Quote delimiter for rendered paths
    #[serde(default)]
    pub quote_style: QuoteStyle,

    /// Output format for the `parse` command
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Comment marker in expression files
    #[serde(default = "default_comment_prefix")]
    pub comment_prefix: String,
}

/// Returns the default comment prefix.
fn default_comment_prefix() -> String {
    "#".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quote_style: QuoteStyle::default(),
            output_format: OutputFormat::default(),
            comment_prefix: default_comment_prefix(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/mutpath/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("mutpath");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        let config_path = match Self::config_path() {
            Some(path) => path,
            None => return Self::default(),
        };

        if !config_path.exists() {
            return Self::default();
        }

        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring config {}: {:#}", config_path.display(), err);
                Self::default()
            }
        }
    }

    /// Loads configuration from a specific file.
    pub fn load_from<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(config_path)
    }

    /// Saves configuration to a specific file.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::with_quote(self.quote_style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str("quote_style = \"single\"").unwrap();
        assert_eq!(config.quote_style, QuoteStyle::Single);
        assert_eq!(config.output_format, OutputFormat::Text);
        assert_eq!(config.comment_prefix, "#");
    }

    #[test]
    fn test_render_options_follow_quote_style() {
        let config = Config {
            quote_style: QuoteStyle::Single,
            ..Default::default()
        };
        assert_eq!(config.render_options().quote, QuoteStyle::Single);
    }
}
