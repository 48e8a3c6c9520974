/// Lifecycle of one user-triggered asynchronous action.
///
/// `Idle -> Pending -> Succeeded | Failed`. A finished action stays in its
/// terminal phase until the user starts the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionPhase {
    Idle,
    Pending,
    Succeeded,
    /// Holds the message that was surfaced to the user
    Failed(String),
}

#[allow(clippy::derivable_impls)]
impl Default for ActionPhase {
    fn default() -> Self {
        ActionPhase::Idle
    }
}

impl ActionPhase {
    /// Whether a request is in flight. Trigger controls are disabled while true.
    pub fn is_pending(&self) -> bool {
        matches!(self, ActionPhase::Pending)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ActionPhase::Failed(message) => Some(message),
            _ => None,
        }
    }
}
