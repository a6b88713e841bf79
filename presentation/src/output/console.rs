//! Console output formatter for the conversation

use coach_domain::profile::metrics::Bmi;
use coach_domain::session::entities::{Speaker, TranscriptEntry};
use coach_domain::AdvisorRole;
use colored::Colorize;

/// Formats conversation output for the terminal
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// One transcript entry, speaker-tagged.
    pub fn transcript_entry(entry: &TranscriptEntry) -> String {
        match entry.speaker {
            Speaker::User => format!("{} {}", "You:".cyan().bold(), entry.text),
            Speaker::Assistant => format!("{} {}", "Coach:".green().bold(), entry.text),
        }
    }

    /// Ordered replay of the whole transcript.
    pub fn transcript(entries: &[TranscriptEntry]) -> String {
        entries
            .iter()
            .map(Self::transcript_entry)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn bmi_line(bmi: Bmi) -> String {
        format!("{} {}", "Your BMI is:".cyan().bold(), bmi)
    }

    pub fn error_line(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }

    pub fn notice_line(message: &str) -> String {
        format!("{} {}", "Note:".yellow().bold(), message)
    }

    pub fn role_line(role: AdvisorRole) -> String {
        format!("{} {}", "Advisor:".cyan().bold(), role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_entry_is_speaker_tagged() {
        let user = ConsoleFormatter::transcript_entry(&TranscriptEntry::user("hi"));
        assert!(user.contains("You:"));
        assert!(user.contains("hi"));

        let assistant = ConsoleFormatter::transcript_entry(&TranscriptEntry::assistant("hello"));
        assert!(assistant.contains("Coach:"));
        assert!(assistant.contains("hello"));
    }

    #[test]
    fn test_transcript_preserves_order() {
        let entries = vec![
            TranscriptEntry::assistant("plan"),
            TranscriptEntry::user("q1"),
            TranscriptEntry::assistant("a1"),
        ];
        let output = ConsoleFormatter::transcript(&entries);
        let plan_at = output.find("plan").unwrap();
        let q1_at = output.find("q1").unwrap();
        let a1_at = output.find("a1").unwrap();
        assert!(plan_at < q1_at && q1_at < a1_at);
    }

    #[test]
    fn test_bmi_line_shows_two_decimals() {
        let line = ConsoleFormatter::bmi_line(Bmi::from_measurements(70.0, 175.0));
        assert!(line.contains("22.86"));
    }

    #[test]
    fn test_error_line_carries_message() {
        let line = ConsoleFormatter::error_line("quota exceeded");
        assert!(line.contains("quota exceeded"));
    }
}
