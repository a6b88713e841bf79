//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file
//! and are deserialized directly.

use crate::gemini::client::DEFAULT_MODEL;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Generation service settings
    pub generation: FileGenerationConfig,
    /// Structured logging settings
    pub logging: FileLoggingConfig,
    /// Chat/REPL settings
    pub chat: FileChatConfig,
}

impl FileConfig {
    /// Resolve the generation credential: the `GEMINI_API_KEY` environment
    /// variable wins over the config file. `None` leaves the gateway
    /// unconfigured; the session still runs with generation disabled.
    pub fn resolve_api_key(&self) -> Option<String> {
        std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| {
                self.generation
                    .api_key
                    .clone()
                    .filter(|k| !k.trim().is_empty())
            })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Model identifier sent to the generation service
    pub model: String,
    /// API key; prefer the GEMINI_API_KEY environment variable
    pub api_key: Option<String>,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Path of the JSONL conversation log; unset disables it
    pub conversation_log: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Show a spinner while a generation call is in flight
    pub show_progress: bool,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
        }
    }
}
