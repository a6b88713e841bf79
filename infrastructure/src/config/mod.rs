//! Configuration loading

pub mod file_config;
pub mod loader;

pub use file_config::{FileChatConfig, FileConfig, FileGenerationConfig, FileLoggingConfig};
pub use loader::ConfigLoader;
