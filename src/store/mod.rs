mod actions;
pub mod reducer;
mod session;
mod state;

pub use actions::{Action, Effect, Outcome, Transition};
pub use session::Session;
pub use state::{SessionState, ShortenerSettings};
