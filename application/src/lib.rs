//! Application layer for wellness-coach
//!
//! This crate contains the conversation use case and the port definitions
//! it drives. It depends only on the domain layer; adapters live in the
//! infrastructure layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    generation_gateway::{GatewayError, GenerationGateway},
};
pub use use_cases::conversation::{Conversation, ConversationError, ProfileOutcome};
