//! Gemini generation service adapter

pub mod client;
pub mod protocol;

pub use client::{CredentialError, GeminiClient, DEFAULT_MODEL};
