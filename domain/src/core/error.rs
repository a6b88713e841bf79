//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Profile is locked: a plan has already been generated for this session")]
    ProfileLocked,
}
