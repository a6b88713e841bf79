//! Progress indication

pub mod reporter;

pub use reporter::SpinnerReporter;
