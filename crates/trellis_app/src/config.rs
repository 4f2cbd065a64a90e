//! Application configuration
//!
//! Read from a TOML file with three sections, every field optional:
//!
//! ```toml
//! [logging]
//! filter = "info,trellis_widgets=debug"
//! ansi = false
//!
//! [protocol]
//! value_param = "cv"
//!
//! [widgets]
//! switch_on_text = "ON"
//! switch_off_text = "OFF"
//! text_box_cols = 20
//! text_box_rows = 1
//! tab_bar_placement = "top"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use trellis_widgets::WidgetDefaults;

/// Complete application configuration
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub protocol: ProtocolConfig,
    #[serde(default)]
    pub widgets: WidgetDefaults,
}

/// `[logging]` section
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directives, used when `RUST_LOG` is not set
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Colored output
    #[serde(default = "default_true")]
    pub ansi: bool,
}

fn default_filter() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            ansi: true,
        }
    }
}

/// `[protocol]` section
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProtocolConfig {
    /// Form parameter carrying the component value
    #[serde(default = "default_value_param")]
    pub value_param: String,
}

fn default_value_param() -> String {
    "cv".to_string()
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            value_param: default_value_param(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}
