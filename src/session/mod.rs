//! Game sessions: round state, lifecycle, and serialized access.

pub mod game;
pub mod shared;
pub mod state;

pub use game::GameSession;
pub use shared::SharedSession;
pub use state::{SessionSnapshot, SessionState};
