//! Infrastructure layer for wellness-coach
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, plus configuration file loading.

pub mod config;
pub mod gemini;
pub mod logging;

// Re-export commonly used types
pub use config::{ConfigLoader, FileChatConfig, FileConfig, FileGenerationConfig, FileLoggingConfig};
pub use gemini::{CredentialError, GeminiClient};
pub use logging::JsonlConversationLogger;
