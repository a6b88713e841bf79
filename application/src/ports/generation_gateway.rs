//! Generation gateway port
//!
//! Defines the interface for the remote text-generation service. The
//! conversation treats it as a blocking, single-shot call: awaited to
//! completion, no retry, no timeout beyond the client default. The
//! configured-or-not distinction is carried by the caller holding an
//! `Option` of this trait, so every call site handles the absent case.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during a generation call
///
/// Messages are opaque to the core; no subtype is acted on, every
/// failure is a terminal outcome for that one turn.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Gateway to the text-generation service
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait GenerationGateway: Send + Sync {
    /// Send a prompt and return the generated text.
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError>;
}
