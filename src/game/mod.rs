//! Turn and game orchestration.
//!
//! - `Turn`: one player's turn as a state machine over [`TurnPhase`]
//! - `Game`: round-robin turns, winner and leaderboard
//! - `Collaborator`: the decision maker the engine blocks on
//! - `GameEvent`/`EventLog`: everything that happened, in order

pub mod action;
pub mod collaborator;
pub mod event;
#[allow(clippy::module_inception)]
pub mod game;
pub mod turn;

pub use action::TurnAction;
pub use collaborator::Collaborator;
pub use event::{EventLog, GameEvent};
pub use game::{Game, GameOutcome};
pub use turn::{Turn, TurnOutcome, TurnPhase, TurnSummary};
