use super::{
    SPAWN_X, SPAWN_Y,
    board::{Board, Color},
};

/// Colors of the two cells of a falling pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair {
    main: Color,
    sub: Color,
}

impl Pair {
    #[must_use]
    pub const fn new(main: Color, sub: Color) -> Self {
        Self { main, sub }
    }

    /// Color of the cell the pair rotates around.
    #[must_use]
    pub const fn main(self) -> Color {
        self.main
    }

    /// Color of the cell orbiting the main cell.
    #[must_use]
    pub const fn sub(self) -> Color {
        self.sub
    }
}

/// Signed board coordinate of a cell.
///
/// Negative `y` lies in the spawn buffer above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    x: i32,
    y: i32,
}

impl Position {
    pub const SPAWN: Self = Self::new(SPAWN_X, SPAWN_Y);

    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn x(self) -> i32 {
        self.x
    }

    #[must_use]
    pub const fn y(self) -> i32 {
        self.y
    }

    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Rotation state of a pair.
///
/// The state decides where the sub cell sits relative to the main cell:
///
/// - `0`: above
/// - `1`: right
/// - `2`: below
/// - `3`: left
///
/// Rotation operations wrap around modulo 4.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rotation(u8);

impl Rotation {
    pub const UP: Self = Self(0);
    pub const RIGHT: Self = Self(1);
    pub const DOWN: Self = Self(2);
    pub const LEFT: Self = Self(3);

    #[must_use]
    pub const fn rotated_right(self) -> Self {
        Self((self.0 + 1) % 4)
    }

    #[must_use]
    pub const fn rotated_left(self) -> Self {
        Self((self.0 + 3) % 4)
    }

    #[must_use]
    pub const fn rotated(self, turn: Turn) -> Self {
        match turn {
            Turn::Clockwise => self.rotated_right(),
            Turn::CounterClockwise => self.rotated_left(),
        }
    }

    /// Offset of the sub cell from the main cell.
    #[must_use]
    pub const fn sub_offset(self) -> (i32, i32) {
        match self.0 {
            1 => (1, 0),
            2 => (0, 1),
            3 => (-1, 0),
            _ => (0, -1),
        }
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }
}

/// Direction of a rotation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Clockwise,
    CounterClockwise,
}

/// Shifts tried, in order, when a rotation does not fit: left, right, up.
const KICK_OFFSETS: [(i32, i32); 3] = [(-1, 0), (1, 0), (0, -1)];

/// A falling pair at a specific location and orientation.
///
/// Pieces are immutable: every move returns a new `Piece`, or `None` when the
/// candidate does not fit on the board. Both cells are validated together, so
/// a move is either taken entirely or not at all.
///
/// # Example
///
/// ```
/// use chainris_engine::{Board, Color, Pair, Piece, Turn};
///
/// let board = Board::EMPTY;
/// let piece = Piece::new(Pair::new(Color::Red, Color::Blue));
///
/// let moved = piece.left(&board).unwrap();
/// let rotated = moved.rotated(&board, Turn::Clockwise).unwrap();
/// assert_eq!(rotated.sub_position().x(), moved.position().x() + 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    position: Position,
    rotation: Rotation,
    pair: Pair,
}

impl Piece {
    /// Creates a piece at the spawn position with the sub cell above the main cell.
    #[must_use]
    pub fn new(pair: Pair) -> Self {
        Self {
            position: Position::SPAWN,
            rotation: Rotation::default(),
            pair,
        }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    #[must_use]
    pub fn pair(&self) -> Pair {
        self.pair
    }

    #[must_use]
    pub fn sub_position(&self) -> Position {
        let (dx, dy) = self.rotation.sub_offset();
        self.position.offset(dx, dy)
    }

    /// Returns both cells with their colors, main cell first.
    #[must_use]
    pub fn cells(&self) -> [(Position, Color); 2] {
        [
            (self.position, self.pair.main()),
            (self.sub_position(), self.pair.sub()),
        ]
    }

    /// Whether both cells are vacant on the board.
    #[must_use]
    pub fn fits(&self, board: &Board) -> bool {
        self.cells()
            .iter()
            .all(|(pos, _)| board.is_vacant(pos.x(), pos.y()))
    }

    fn shifted(self, dx: i32, dy: i32, turn: Option<Turn>) -> Self {
        Self {
            position: self.position.offset(dx, dy),
            rotation: turn.map_or(self.rotation, |turn| self.rotation.rotated(turn)),
            pair: self.pair,
        }
    }

    /// Moves and optionally rotates the piece as one atomic step.
    ///
    /// If a rotation does not fit, the kick offsets are tried in order on top of
    /// `(dx, dy)` and the first fitting candidate is taken. Translations alone
    /// are never kicked.
    #[must_use]
    pub fn moved(self, board: &Board, dx: i32, dy: i32, turn: Option<Turn>) -> Option<Self> {
        let candidate = self.shifted(dx, dy, turn);
        if candidate.fits(board) {
            return Some(candidate);
        }
        if turn.is_none() {
            return None;
        }
        KICK_OFFSETS
            .iter()
            .map(|&(kx, ky)| self.shifted(dx + kx, dy + ky, turn))
            .find(|piece| piece.fits(board))
    }

    #[must_use]
    pub fn left(self, board: &Board) -> Option<Self> {
        self.moved(board, -1, 0, None)
    }

    #[must_use]
    pub fn right(self, board: &Board) -> Option<Self> {
        self.moved(board, 1, 0, None)
    }

    #[must_use]
    pub fn down(self, board: &Board) -> Option<Self> {
        self.moved(board, 0, 1, None)
    }

    #[must_use]
    pub fn rotated(self, board: &Board, turn: Turn) -> Option<Self> {
        self.moved(board, 0, 0, Some(turn))
    }

    /// Whether the piece cannot move down by one row.
    #[must_use]
    pub fn is_grounded(&self, board: &Board) -> bool {
        self.down(board).is_none()
    }

    /// Returns the piece moved down as far as it goes.
    #[must_use]
    pub fn dropped(self, board: &Board) -> Self {
        let mut dropped = self;
        while let Some(piece) = dropped.down(board) {
            dropped = piece;
        }
        dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece_at(x: i32, y: i32, rotation: Rotation) -> Piece {
        Piece {
            position: Position::new(x, y),
            rotation,
            pair: Pair::new(Color::Red, Color::Green),
        }
    }

    #[test]
    fn test_spawn_position() {
        let piece = Piece::new(Pair::new(Color::Red, Color::Green));
        assert_eq!(piece.position(), Position::new(3, 0));
        assert_eq!(piece.rotation(), Rotation::UP);
        assert_eq!(piece.sub_position(), Position::new(3, -1));
        assert!(piece.fits(&Board::EMPTY));
    }

    #[test]
    fn test_sub_offsets() {
        let expected = [(0, -1), (1, 0), (0, 1), (-1, 0)];
        let mut rotation = Rotation::UP;
        for offset in expected {
            assert_eq!(rotation.sub_offset(), offset);
            rotation = rotation.rotated_right();
        }
        assert_eq!(Rotation::LEFT.rotated_left(), Rotation::DOWN);
        assert_eq!(Rotation::UP.rotated_left(), Rotation::LEFT);
    }

    #[test]
    fn test_four_rotations_restore_offset() {
        let board = Board::EMPTY;
        for rotation in [Rotation::UP, Rotation::RIGHT, Rotation::DOWN, Rotation::LEFT] {
            let start = piece_at(2, 5, rotation);
            let mut piece = start;
            for _ in 0..4 {
                piece = piece.rotated(&board, Turn::Clockwise).unwrap();
            }
            assert_eq!(piece.rotation().sub_offset(), start.rotation().sub_offset());
            assert_eq!(piece, start);
        }
    }

    #[test]
    fn test_move_left_right() {
        let board = Board::EMPTY;
        let piece = Piece::new(Pair::new(Color::Red, Color::Green));
        let left = piece.left(&board).unwrap();
        assert_eq!(left.position(), Position::new(2, 0));
        let right = piece.right(&board).unwrap();
        assert_eq!(right.position(), Position::new(4, 0));
    }

    #[test]
    fn test_move_blocked_by_walls() {
        let board = Board::EMPTY;
        assert!(piece_at(0, 5, Rotation::UP).left(&board).is_none());
        assert!(piece_at(5, 5, Rotation::UP).right(&board).is_none());
        // Sub cell to the right touches the wall first.
        assert!(piece_at(4, 5, Rotation::RIGHT).right(&board).is_none());
    }

    #[test]
    fn test_partial_fit_is_rejected() {
        let mut board = Board::EMPTY;
        // Main cell would fit at (2, 5) but the sub cell at (2, 4) is taken.
        board.place(2, 4, Color::Blue);
        let piece = piece_at(3, 5, Rotation::UP);
        assert!(piece.left(&board).is_none());
    }

    #[test]
    fn test_down_blocked_by_floor_and_cells() {
        let mut board = Board::EMPTY;
        assert!(piece_at(1, 11, Rotation::UP).down(&board).is_none());
        assert!(piece_at(1, 10, Rotation::DOWN).down(&board).is_none());

        board.place(1, 6, Color::Blue);
        assert!(piece_at(1, 5, Rotation::UP).is_grounded(&board));
        assert!(!piece_at(1, 4, Rotation::UP).is_grounded(&board));
    }

    #[test]
    fn test_wall_kick_left() {
        let board = Board::EMPTY;
        // Rotating right at the right wall pushes the sub cell out; kick shifts left.
        let piece = piece_at(5, 5, Rotation::UP);
        let rotated = piece.rotated(&board, Turn::Clockwise).unwrap();
        assert_eq!(rotated.position(), Position::new(4, 5));
        assert_eq!(rotated.rotation(), Rotation::RIGHT);
    }

    #[test]
    fn test_wall_kick_right() {
        let board = Board::EMPTY;
        // Rotating left at the left wall; shifting left fails, shifting right succeeds.
        let piece = piece_at(0, 5, Rotation::UP);
        let rotated = piece.rotated(&board, Turn::CounterClockwise).unwrap();
        assert_eq!(rotated.position(), Position::new(1, 5));
        assert_eq!(rotated.rotation(), Rotation::LEFT);
    }

    #[test]
    fn test_floor_kick() {
        let board = Board::EMPTY;
        // Sub cell would go below the floor; only the upward kick fits.
        let piece = piece_at(2, 11, Rotation::RIGHT);
        let rotated = piece.rotated(&board, Turn::Clockwise).unwrap();
        assert_eq!(rotated.rotation(), Rotation::DOWN);
        assert_eq!(rotated.position(), Position::new(2, 10));
    }

    #[test]
    fn test_kick_order_prefers_left() {
        let mut board = Board::EMPTY;
        // Target of the plain rotation is blocked, both sideways kicks fit.
        board.place(3, 6, Color::Blue);
        let piece = piece_at(3, 5, Rotation::RIGHT);
        let rotated = piece.rotated(&board, Turn::Clockwise).unwrap();
        assert_eq!(rotated.position(), Position::new(2, 5));
    }

    #[test]
    fn test_rotation_fails_when_all_kicks_fail() {
        let mut board = Board::EMPTY;
        // Pair standing in a one-wide shaft at the bottom.
        for y in 8..12 {
            board.place(0, y, Color::Blue);
            board.place(2, y, Color::Blue);
        }
        let piece = piece_at(1, 11, Rotation::UP);
        assert!(piece.rotated(&board, Turn::Clockwise).is_none());
        assert!(piece.rotated(&board, Turn::CounterClockwise).is_none());
    }

    #[test]
    fn test_translation_is_never_kicked() {
        let mut board = Board::EMPTY;
        board.place(2, 5, Color::Blue);
        let piece = piece_at(3, 5, Rotation::RIGHT);
        assert!(piece.left(&board).is_none());
    }

    #[test]
    fn test_dropped_lands_on_stack() {
        let mut board = Board::EMPTY;
        board.place(3, 11, Color::Blue);
        let piece = Piece::new(Pair::new(Color::Red, Color::Green)).dropped(&board);
        assert_eq!(piece.position(), Position::new(3, 10));
        assert!(piece.is_grounded(&board));
    }
}
