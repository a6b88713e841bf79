//! Session domain entities

use crate::advisor::AdvisorRole;
use crate::core::error::DomainError;
use crate::profile::entities::UserProfile;
use crate::session::phase::ConversationPhase;
use serde::{Deserialize, Serialize};

/// Who produced a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

/// One exchange in the conversation (Entity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub speaker: Speaker,
    pub text: String,
}

impl TranscriptEntry {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Assistant,
            text: text.into(),
        }
    }
}

/// State of one interactive session (Entity)
///
/// Owns the profile, the selected advisor role, and the append-only
/// transcript. All mutation goes through the methods below; the
/// conversation use case is the only caller, so no presentation code
/// writes fields directly.
///
/// Invariant: `plan_generated` flips false to true exactly once, at the
/// moment the first assistant entry is appended, and never reverts.
#[derive(Debug, Clone)]
pub struct SessionState {
    profile: Option<UserProfile>,
    role: AdvisorRole,
    transcript: Vec<TranscriptEntry>,
    plan_generated: bool,
}

impl SessionState {
    pub fn new(role: AdvisorRole) -> Self {
        Self {
            profile: None,
            role,
            transcript: Vec::new(),
            plan_generated: false,
        }
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn role(&self) -> AdvisorRole {
        self.role
    }

    /// Select the advisor role. Last write wins; earlier selections leave
    /// no trace in later prompts.
    pub fn select_role(&mut self, role: AdvisorRole) {
        self.role = role;
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    pub fn plan_generated(&self) -> bool {
        self.plan_generated
    }

    pub fn phase(&self) -> ConversationPhase {
        if self.plan_generated {
            ConversationPhase::PlanReady
        } else if self.profile.is_some() {
            ConversationPhase::PlanPending
        } else {
            ConversationPhase::Collecting
        }
    }

    /// Record a submitted profile.
    ///
    /// Allowed while no plan exists (resubmitting in `PlanPending` is the
    /// retry path after a failed generation). Rejected once a plan has
    /// been generated: the profile is immutable for the rest of the
    /// session.
    pub fn record_profile(&mut self, profile: UserProfile) -> Result<(), DomainError> {
        if self.plan_generated {
            return Err(DomainError::ProfileLocked);
        }
        self.profile = Some(profile);
        Ok(())
    }

    pub fn append_user(&mut self, text: impl Into<String>) {
        self.transcript.push(TranscriptEntry::user(text));
    }

    pub fn append_assistant(&mut self, text: impl Into<String>) {
        self.transcript.push(TranscriptEntry::assistant(text));
        self.plan_generated = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::entities::ProfileSubmission;

    fn sample_profile() -> UserProfile {
        UserProfile::from_submission(ProfileSubmission {
            age: 30,
            weight_kg: 80.0,
            height_cm: 180.0,
            expected_weight_kg: 70.0,
        })
    }

    #[test]
    fn test_new_session_is_collecting() {
        let state = SessionState::new(AdvisorRole::NutritionExpert);
        assert_eq!(state.phase(), ConversationPhase::Collecting);
        assert!(state.transcript().is_empty());
        assert!(!state.plan_generated());
    }

    #[test]
    fn test_profile_submission_moves_to_plan_pending() {
        let mut state = SessionState::new(AdvisorRole::NutritionExpert);
        state.record_profile(sample_profile()).unwrap();
        assert_eq!(state.phase(), ConversationPhase::PlanPending);
        assert!(state.profile().is_some());
    }

    #[test]
    fn test_resubmission_allowed_while_plan_pending() {
        let mut state = SessionState::new(AdvisorRole::NutritionExpert);
        state.record_profile(sample_profile()).unwrap();
        // A failed generation leaves the session here; resubmitting retries.
        assert!(state.record_profile(sample_profile()).is_ok());
    }

    #[test]
    fn test_profile_locked_after_plan_generated() {
        let mut state = SessionState::new(AdvisorRole::NutritionExpert);
        state.record_profile(sample_profile()).unwrap();
        state.append_assistant("your plan");
        assert_eq!(
            state.record_profile(sample_profile()),
            Err(DomainError::ProfileLocked)
        );
    }

    #[test]
    fn test_plan_generated_flips_on_first_assistant_entry() {
        let mut state = SessionState::new(AdvisorRole::FitnessCoach);
        state.record_profile(sample_profile()).unwrap();
        assert!(!state.plan_generated());
        state.append_assistant("your plan");
        assert!(state.plan_generated());
        assert_eq!(state.phase(), ConversationPhase::PlanReady);
        // Stays true regardless of what follows.
        state.append_user("a question");
        state.append_assistant("an answer");
        assert!(state.plan_generated());
    }

    #[test]
    fn test_transcript_is_append_only_and_ordered() {
        let mut state = SessionState::new(AdvisorRole::NutritionExpert);
        state.record_profile(sample_profile()).unwrap();
        state.append_assistant("plan");
        state.append_user("q1");
        state.append_assistant("a1");
        state.append_user("q2");

        let speakers: Vec<Speaker> = state.transcript().iter().map(|e| e.speaker).collect();
        assert_eq!(
            speakers,
            vec![
                Speaker::Assistant,
                Speaker::User,
                Speaker::Assistant,
                Speaker::User
            ]
        );
    }

    #[test]
    fn test_role_selection_last_write_wins() {
        let mut state = SessionState::new(AdvisorRole::NutritionExpert);
        state.select_role(AdvisorRole::FitnessCoach);
        state.select_role(AdvisorRole::NutritionExpert);
        state.select_role(AdvisorRole::FitnessCoach);
        assert_eq!(state.role(), AdvisorRole::FitnessCoach);
    }
}
