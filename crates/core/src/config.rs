//! Editor configuration.
//!
//! Loaded from TOML; every key is optional:
//!
//! ```toml
//! history_limit = 200
//! node_id_prefix = "N"
//! path_id_prefix = "P"
//! path_label_prefix = "Path"
//! clamp_to_image = true
//! log_level = "info"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{TraceError, TraceResult};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Tunables for an editing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Maximum undo depth. `None` keeps every snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_limit: Option<usize>,
    /// Prefix of generated node ids.
    pub node_id_prefix: String,
    /// Prefix of generated path ids.
    pub path_id_prefix: String,
    /// New paths are labeled `"<prefix> <n>"`.
    pub path_label_prefix: String,
    /// Clamp node moves to the image bounds when dimensions are known.
    pub clamp_to_image: bool,
    /// Log level used by the shell.
    pub log_level: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_limit: None,
            node_id_prefix: "N".to_string(),
            path_id_prefix: "P".to_string(),
            path_label_prefix: "Path".to_string(),
            clamp_to_image: true,
            log_level: "info".to_string(),
        }
    }
}

impl EditorConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> TraceResult<Self> {
        let config: EditorConfig = toml::from_str(s)
            .map_err(|e| TraceError::invalid_input(format!("config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> TraceResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> TraceResult<String> {
        toml::to_string(self).map_err(|e| TraceError::Serialization {
            message: e.to_string(),
        })
    }

    /// Check cross-field constraints.
    ///
    /// Id prefixes must be non-empty and digit-free so the numeric suffix of
    /// a generated id can always be recovered.
    pub fn validate(&self) -> TraceResult<()> {
        for (name, prefix) in [
            ("node_id_prefix", &self.node_id_prefix),
            ("path_id_prefix", &self.path_id_prefix),
        ] {
            if prefix.is_empty() || prefix.chars().any(|c| c.is_ascii_digit()) {
                return Err(TraceError::invalid_input(format!(
                    "{} must be non-empty and contain no digits",
                    name
                )));
            }
        }
        if self.node_id_prefix == self.path_id_prefix {
            return Err(TraceError::invalid_input(
                "node_id_prefix and path_id_prefix must differ",
            ));
        }
        if self.history_limit == Some(0) {
            return Err(TraceError::invalid_input(
                "history_limit must be at least 1 (omit it for unbounded history)",
            ));
        }
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(TraceError::invalid_input(format!(
                "log_level must be one of {}",
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }
}
