//! Spinner shown while a generation call is in flight

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Wraps an indicatif spinner around the single in-flight generation
/// call. At most one call is active at a time, so one spinner is enough.
pub struct SpinnerReporter {
    bar: Option<ProgressBar>,
}

impl SpinnerReporter {
    /// Start a spinner with the given message.
    pub fn start(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar: Some(bar) }
    }

    /// A reporter that renders nothing (quiet mode).
    pub fn disabled() -> Self {
        Self { bar: None }
    }

    /// Stop and clear the spinner before printing the result.
    pub fn finish(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_reporter_finishes_quietly() {
        let reporter = SpinnerReporter::disabled();
        reporter.finish();
    }
}
