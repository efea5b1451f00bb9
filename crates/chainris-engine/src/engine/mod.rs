//! Game rules built on top of [`core`](crate::core).
//!
//! - [`GameSession`] - one game: falling pair, lock delay, chain resolution, game over
//! - [`ChainResolver`] - the Dropping/Clearing state machine run after each lock
//! - [`LockDelay`] - grace frames before a grounded pair locks
//! - [`GameStats`] - score, level and drop speed
//! - [`PairGenerator`] - seeded source of falling pairs
//!
//! # Game Flow
//!
//! 1. A pair spawns above the center column
//! 2. The player moves and rotates it while gravity pulls it down
//! 3. Once grounded for [`LockDelay::THRESHOLD`] frames (or right after a hard
//!    drop) the pair is merged into the board
//! 4. Gravity and group clearing alternate until nothing is left to clear
//! 5. The chain is scored and the next pair spawns; a blocked spawn ends the game

pub use self::{
    chain_resolver::*, game_session::*, game_stats::*, lock_delay::*, pair_generator::*,
};

mod chain_resolver;
mod game_session;
mod game_stats;
mod lock_delay;
mod pair_generator;
