//! Presentation layer for wellness-coach
//!
//! This crate contains the CLI definition, the interactive chat REPL with
//! its profile form, output formatting, and the generation spinner.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::SpinnerReporter;
