use crate::model::result::SimulationResult;
use serde::Serialize;

/// Lifecycle state of the simulation request, owned by the
/// [`Simulator`](crate::simulator::Simulator).
///
/// `Idle -> Loading -> {Success, Failed}`, and `{Success, Failed} -> Loading` on the next
/// submission. A new terminal state replaces the previous one entirely.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success(SimulationResult),
    Failed(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    /// Determines if this state is `Success` or `Failed`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestState::Success(_) | RequestState::Failed(_))
    }

    /// A new submission is only permitted outside `Loading`. Input controls should be disabled
    /// exactly when this is false.
    pub fn can_submit(&self) -> bool {
        !self.is_loading()
    }

    pub fn result(&self) -> Option<&SimulationResult> {
        match self {
            RequestState::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Short name of the state, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            RequestState::Idle => "idle",
            RequestState::Loading => "loading",
            RequestState::Success(_) => "success",
            RequestState::Failed(_) => "failed",
        }
    }
}
