pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Reason a movement, rotation or drop command was rejected.
///
/// A rejected command never mutates the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    #[display("no falling pair to control while a chain is resolving")]
    NoFallingPair,
    #[display("game is paused")]
    Paused,
    #[display("game is over")]
    GameOver,
    #[display("falling pair colliding at the requested position")]
    Collision,
}

/// Reason a pause toggle was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PauseError {
    #[display("cannot toggle pause while a chain is resolving")]
    ChainInProgress,
    #[display("cannot toggle pause after game over")]
    GameOver,
}
