//! Conversation phase

/// Where the session currently is in its lifecycle.
///
/// `Collecting` until a profile is submitted, `PlanPending` once the BMI
/// is known but no plan exists yet, `PlanReady` for the rest of the
/// session. There is no terminal phase; `PlanReady` is the steady state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationPhase {
    Collecting,
    PlanPending,
    PlanReady,
}

impl std::fmt::Display for ConversationPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ConversationPhase::Collecting => "collecting",
            ConversationPhase::PlanPending => "plan-pending",
            ConversationPhase::PlanReady => "plan-ready",
        };
        write!(f, "{}", name)
    }
}
