use crate::errors::ShortenError;
use crate::events::AppEvent;
use crate::models::InputEdit;

use super::SessionState;

/// User-triggered events the session reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddInput,
    EditInput { index: usize, edit: InputEdit },
    Submit,
    Redirect { shortcode: String },
}

/// Side effects requested by a transition, run by the session in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Log(AppEvent),
    Open(String),
}

/// What a transition did with its action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The action changed the session as requested
    Applied,
    /// A redirect counted its click; carries the target that was opened
    Opened(String),
    /// The action was refused; the message is now in the error banner
    Rejected(ShortenError),
    /// The action had nothing to act on and left the state untouched
    Ignored,
}

/// Result of a pure transition
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: SessionState,
    pub effects: Vec<Effect>,
    pub outcome: Outcome,
}

impl Transition {
    pub fn ignored(state: &SessionState) -> Self {
        Self {
            state: state.clone(),
            effects: Vec::new(),
            outcome: Outcome::Ignored,
        }
    }
}
