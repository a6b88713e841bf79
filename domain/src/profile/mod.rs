//! User profile and derived metrics

pub mod entities;
pub mod metrics;

pub use entities::{ProfileSubmission, UserProfile};
pub use metrics::{Bmi, body_mass_index};
