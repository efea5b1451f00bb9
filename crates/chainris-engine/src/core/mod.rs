//! Board geometry and the falling pair.
//!
//! Coordinates are signed: `x` grows rightward from the left wall, `y` grows
//! downward from the top playable row. Rows with `y < 0` form the spawn buffer,
//! which is never stored but always reads as empty.

pub use self::{board::*, piece::*};

pub(crate) mod board;
pub(crate) mod piece;

/// Number of playable columns.
pub const BOARD_WIDTH: usize = 6;
/// Number of playable rows.
pub const BOARD_HEIGHT: usize = 12;
/// Number of materialized cells.
pub const CELL_COUNT: usize = BOARD_WIDTH * BOARD_HEIGHT;
/// Smallest connected same-color group that is removed.
pub const MIN_GROUP_SIZE: usize = 4;

/// Column where the main cell of a new pair appears.
pub(crate) const SPAWN_X: i32 = 3;
/// Row where the main cell of a new pair appears.
pub(crate) const SPAWN_Y: i32 = 0;

#[expect(clippy::cast_sign_loss)]
const _: () = assert!(SPAWN_X >= 0 && SPAWN_X as usize == BOARD_WIDTH / 2);
