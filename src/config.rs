//! Widget Configuration
//!
//! Optional JSON block embedded by the host page:
//!
//! ```html
//! <script type="application/json" id="todo-config">
//!   { "title": "Groceries", "log_level": "debug" }
//! </script>
//! ```
//!
//! Missing fields fall back to their defaults; a missing block means defaults.

use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

/// Id of the host page element carrying the configuration
pub const CONFIG_ELEMENT_ID: &str = "todo-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown log level: {0:?}")]
    UnknownLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Heading above the input row
    pub title: String,
    /// Placeholder of the new-todo input
    pub placeholder: String,
    /// Console log level: off, error, warn, info, debug or trace
    pub log_level: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            title: "Todas las Notas gg".to_string(),
            placeholder: "Add a new task...".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl WidgetConfig {
    /// Parse and validate a JSON config block
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: WidgetConfig = serde_json::from_str(json)?;
        config.parse_level()?;
        Ok(config)
    }

    fn parse_level(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::UnknownLogLevel(self.log_level.clone()))
    }

    /// Validated in `from_json`; defaults to info otherwise
    pub fn level_filter(&self) -> LevelFilter {
        self.parse_level().unwrap_or(LevelFilter::Info)
    }
}

/// Read the config block from the current document, if any
pub fn load() -> Result<WidgetConfig, ConfigError> {
    let text = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match text {
        Some(json) if !json.trim().is_empty() => WidgetConfig::from_json(&json),
        _ => Ok(WidgetConfig::default()),
    }
}
