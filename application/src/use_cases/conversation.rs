//! Conversation use case.
//!
//! Owns the session state and funnels every mutation through its
//! transition methods: profile submission (which triggers the one-time
//! plan generation) and free-text follow-up questions. The presentation
//! layer only reads state and renders results; it never writes fields.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::generation_gateway::{GatewayError, GenerationGateway};
use coach_domain::core::error::DomainError;
use coach_domain::profile::entities::{ProfileSubmission, UserProfile};
use coach_domain::profile::metrics::Bmi;
use coach_domain::prompt::PromptTemplate;
use coach_domain::session::entities::{SessionState, TranscriptEntry};
use coach_domain::session::phase::ConversationPhase;
use coach_domain::util::truncate_str;
use coach_domain::AdvisorRole;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors surfaced by conversation transitions.
///
/// All of these become user-visible messages; none terminate the session.
#[derive(Error, Debug)]
pub enum ConversationError {
    #[error("Generation failed: {0}")]
    Generation(#[from] GatewayError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("No plan has been generated yet")]
    PlanNotReady,

    #[error("Question is empty")]
    EmptyQuestion,
}

/// Result of a profile submission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProfileOutcome {
    /// A plan was generated and appended to the transcript.
    PlanGenerated { bmi: Bmi },
    /// No generation gateway is configured; only the BMI was computed and
    /// the session stays at plan-pending indefinitely.
    BmiOnly { bmi: Bmi },
}

impl ProfileOutcome {
    pub fn bmi(&self) -> Bmi {
        match self {
            ProfileOutcome::PlanGenerated { bmi } | ProfileOutcome::BmiOnly { bmi } => *bmi,
        }
    }
}

/// The conversation state machine.
///
/// Phases: collecting (no profile) -> plan-pending (profile submitted,
/// BMI computed) -> plan-ready (plan generated, follow-ups accepted).
/// A failed plan generation stays at plan-pending; resubmitting the form
/// is the retry path. A failed follow-up leaves the user's question in
/// the transcript with no assistant reply for that turn.
pub struct Conversation {
    state: SessionState,
    gateway: Option<Arc<dyn GenerationGateway>>,
    logger: Arc<dyn ConversationLogger>,
}

impl Conversation {
    pub fn new(role: AdvisorRole, gateway: Option<Arc<dyn GenerationGateway>>) -> Self {
        Self {
            state: SessionState::new(role),
            gateway,
            logger: Arc::new(NoConversationLogger),
        }
    }

    /// Attach a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn phase(&self) -> ConversationPhase {
        self.state.phase()
    }

    pub fn role(&self) -> AdvisorRole {
        self.state.role()
    }

    /// Select the advisor role. Read at the moment a prompt is built, so
    /// the last selection before each call wins.
    pub fn select_role(&mut self, role: AdvisorRole) {
        self.state.select_role(role);
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        self.state.transcript()
    }

    pub fn profile_bmi(&self) -> Option<Bmi> {
        self.state.profile().map(|p| p.bmi())
    }

    pub fn plan_generated(&self) -> bool {
        self.state.plan_generated()
    }

    pub fn generation_available(&self) -> bool {
        self.gateway.is_some()
    }

    /// Submit the profile form: compute the BMI and, when a gateway is
    /// configured, generate the one-time plan.
    ///
    /// Rejected with [`DomainError::ProfileLocked`] once a plan exists.
    /// On a generation failure the profile (and BMI) are kept and the
    /// session stays at plan-pending so the user can resubmit.
    pub async fn submit_profile(
        &mut self,
        submission: ProfileSubmission,
    ) -> Result<ProfileOutcome, ConversationError> {
        let profile = UserProfile::from_submission(submission);
        self.state.record_profile(profile.clone())?;
        let bmi = profile.bmi();
        info!(age = profile.age(), bmi = %bmi, "Profile submitted");

        let Some(gateway) = self.gateway.clone() else {
            warn!("No generation gateway configured; staying at plan-pending");
            return Ok(ProfileOutcome::BmiOnly { bmi });
        };

        let role = self.state.role();
        let prompt = PromptTemplate::weekly_plan(role, &profile);
        debug!("Plan prompt: {}", truncate_str(&prompt, 120));

        let plan = gateway.generate(&prompt).await?;
        self.state.append_assistant(&plan);

        info!(role = %role, bytes = plan.len(), "Plan generated");
        self.logger.log(ConversationEvent::new(
            "plan_generated",
            serde_json::json!({
                "role": role.display_name(),
                "bmi": format!("{}", bmi),
                "bytes": plan.len(),
            }),
        ));

        Ok(ProfileOutcome::PlanGenerated { bmi })
    }

    /// Ask a free-text follow-up question (plan-ready self-loop).
    ///
    /// The user entry is appended before the generation call, so a failed
    /// turn records the question and nothing else.
    pub async fn ask(&mut self, question: &str) -> Result<String, ConversationError> {
        if self.state.phase() != ConversationPhase::PlanReady {
            return Err(ConversationError::PlanNotReady);
        }
        let question = question.trim();
        if question.is_empty() {
            return Err(ConversationError::EmptyQuestion);
        }
        // The unconfigured case cannot reach plan-ready, but keep the
        // check so the invariant doesn't rest on that alone.
        let gateway = self
            .gateway
            .clone()
            .ok_or(ConversationError::PlanNotReady)?;

        self.state.append_user(question);

        let role = self.state.role();
        let prompt = PromptTemplate::follow_up(role, question);
        debug!("Follow-up prompt: {}", truncate_str(&prompt, 120));

        let reply = gateway.generate(&prompt).await?;
        self.state.append_assistant(&reply);

        info!(role = %role, bytes = reply.len(), "Follow-up answered");
        self.logger.log(ConversationEvent::new(
            "follow_up_response",
            serde_json::json!({
                "role": role.display_name(),
                "question": truncate_str(question, 200),
                "bytes": reply.len(),
            }),
        ));

        Ok(reply)
    }
}
