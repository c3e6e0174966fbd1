//! Configuration file loading.

use crate::error::{HighlightError, Result};
use crate::highlight::{Highlighter, Markup};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File names searched when no explicit path is given.
const CONFIG_CANDIDATES: [&str; 3] = [
    ".ac-highlight.toml",
    "ac-highlight.toml",
    ".config/ac-highlight.toml",
];

/// Highlight configuration schema.
///
/// ```toml
/// fields = ["title", "genre", "director", "year"]
///
/// [markup]
/// style = "classed_span"
/// tag = "span"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightConfig {
    /// How matched spans are wrapped
    #[serde(default)]
    pub markup: Markup,

    /// Record fields to render, all fields when empty
    #[serde(default)]
    pub fields: Vec<String>,

    /// Path the configuration was loaded from
    #[serde(skip)]
    pub path: Option<String>,
}

impl HighlightConfig {
    /// Load configuration from a file path or use defaults.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = path.map(String::from).or_else(find_config_file);

        match config_path {
            Some(p) => {
                let mut config = load_config_file(&p)?;
                tracing::debug!(path = %p, "loaded highlight config");
                config.path = Some(p);
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| HighlightError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Builds the highlighter described by this configuration.
    pub fn highlighter(&self) -> Highlighter {
        Highlighter::new(self.markup.clone())
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<String> {
    CONFIG_CANDIDATES
        .into_iter()
        .find(|candidate| Path::new(candidate).exists())
        .map(String::from)
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &str) -> Result<HighlightConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| HighlightError::Config(format!("Failed to read config file {}: {}", path, e)))?;

    toml::from_str(&content)
        .map_err(|e| HighlightError::Config(format!("Failed to parse config file {}: {}", path, e)))
}
