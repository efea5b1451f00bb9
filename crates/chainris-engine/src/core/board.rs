use std::fmt;

use arrayvec::ArrayVec;

use super::{BOARD_HEIGHT, BOARD_WIDTH, CELL_COUNT, MIN_GROUP_SIZE};

/// Content of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Color {
    /// Unoccupied cell.
    #[default]
    Empty,
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
}

impl Color {
    /// Every playable color, in palette order.
    pub const PLAYABLE: [Self; 5] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::Purple,
    ];

    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }

    /// Returns the single character representation of this color.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainris_engine::Color;
    ///
    /// assert_eq!(Color::Red.as_char(), 'R');
    /// assert_eq!(Color::Empty.as_char(), '.');
    /// ```
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Yellow => 'Y',
            Self::Purple => 'P',
        }
    }

    /// Parses a color from its single character representation.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Self::Empty),
            'R' => Some(Self::Red),
            'G' => Some(Self::Green),
            'B' => Some(Self::Blue),
            'Y' => Some(Self::Yellow),
            'P' => Some(Self::Purple),
            _ => None,
        }
    }
}

/// A maximal 4-connected set of cells sharing one non-empty color.
///
/// Cells are stored as `(x, y)` board coordinates in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    color: Color,
    cells: ArrayVec<(usize, usize), CELL_COUNT>,
}

impl Group {
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the group is large enough to be removed.
    #[must_use]
    pub fn is_clearable(&self) -> bool {
        self.len() >= MIN_GROUP_SIZE
    }
}

/// Fixed-size occupancy grid.
///
/// Only the `BOARD_WIDTH`×`BOARD_HEIGHT` playable cells are stored. Accessors
/// accept any signed coordinate:
///
/// - `y < 0` (spawn buffer) always reads as empty, provided `x` is in range
/// - `x` outside `0..BOARD_WIDTH` or `y >= BOARD_HEIGHT` reads as invalid
/// - writes outside the stored cells are silently dropped
///
/// # Example
///
/// ```
/// use chainris_engine::{Board, Color};
///
/// let mut board = Board::EMPTY;
/// board.place(0, 11, Color::Red);
/// assert_eq!(board.query(0, 11), Some(Color::Red));
///
/// // The spawn buffer is never stored.
/// board.place(0, -1, Color::Red);
/// assert_eq!(board.query(0, -1), Some(Color::Empty));
///
/// // Walls and floor are invalid.
/// assert_eq!(board.query(-1, 0), None);
/// assert_eq!(board.query(0, 12), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: [[Color; BOARD_WIDTH]; BOARD_HEIGHT],
}

impl Default for Board {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Board {
    pub const WIDTH: usize = BOARD_WIDTH;
    pub const HEIGHT: usize = BOARD_HEIGHT;

    pub const EMPTY: Self = Self {
        rows: [[Color::Empty; BOARD_WIDTH]; BOARD_HEIGHT],
    };

    fn column(x: i32) -> Option<usize> {
        usize::try_from(x).ok().filter(|&x| x < BOARD_WIDTH)
    }

    fn row(y: i32) -> Option<usize> {
        usize::try_from(y).ok().filter(|&y| y < BOARD_HEIGHT)
    }

    /// Returns the content of a cell, or `None` if the coordinate is outside
    /// the walls or below the floor.
    #[must_use]
    pub fn query(&self, x: i32, y: i32) -> Option<Color> {
        let x = Self::column(x)?;
        if y < 0 {
            return Some(Color::Empty);
        }
        let y = Self::row(y)?;
        Some(self.rows[y][x])
    }

    /// Whether a pair cell may occupy the coordinate.
    #[must_use]
    pub fn is_vacant(&self, x: i32, y: i32) -> bool {
        self.query(x, y).is_some_and(Color::is_empty)
    }

    /// Writes a cell, overwriting any previous content.
    ///
    /// Coordinates outside the stored cells (including the spawn buffer) are ignored.
    pub fn place(&mut self, x: i32, y: i32, color: Color) {
        if let (Some(x), Some(y)) = (Self::column(x), Self::row(y)) {
            self.rows[y][x] = color;
        }
    }

    /// Returns an iterator over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color; BOARD_WIDTH]> {
        self.rows.iter()
    }

    /// Returns the number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|color| !color.is_empty())
            .count()
    }

    /// Compacts every column toward the floor.
    ///
    /// Occupied cells keep their relative order; vacated cells become empty.
    /// Returns whether any cell moved.
    pub fn apply_gravity(&mut self) -> bool {
        let mut moved = false;
        for x in 0..BOARD_WIDTH {
            let mut write_y = BOARD_HEIGHT;
            for y in (0..BOARD_HEIGHT).rev() {
                let color = self.rows[y][x];
                if color.is_empty() {
                    continue;
                }
                write_y -= 1;
                if write_y != y {
                    self.rows[write_y][x] = color;
                    self.rows[y][x] = Color::Empty;
                    moved = true;
                }
            }
        }
        moved
    }

    /// Returns an iterator over every connected group of occupied cells.
    ///
    /// Seeds are taken in row-major order; a cell belongs to exactly one group.
    #[must_use]
    pub fn groups(&self) -> Groups<'_> {
        Groups {
            board: self,
            visited: [[false; BOARD_WIDTH]; BOARD_HEIGHT],
            next_seed: 0,
        }
    }

    /// Whether any group is large enough to be removed.
    #[must_use]
    pub fn has_clearable_group(&self) -> bool {
        self.groups().any(|group| group.is_clearable())
    }

    /// Returns every group large enough to be removed.
    #[must_use]
    pub fn clearable_groups(&self) -> Vec<Group> {
        self.groups().filter(Group::is_clearable).collect()
    }

    /// Empties the cells of all given groups at once and returns the number
    /// of cells removed.
    pub fn clear_groups(&mut self, groups: &[Group]) -> usize {
        let mut count = 0;
        for &(x, y) in groups.iter().flat_map(Group::cells) {
            if !self.rows[y][x].is_empty() {
                self.rows[y][x] = Color::Empty;
                count += 1;
            }
        }
        count
    }

    fn neighbors(x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> {
        let left = x.checked_sub(1).map(|x| (x, y));
        let right = (x + 1 < BOARD_WIDTH).then_some((x + 1, y));
        let up = y.checked_sub(1).map(|y| (x, y));
        let down = (y + 1 < BOARD_HEIGHT).then_some((x, y + 1));
        [left, right, up, down].into_iter().flatten()
    }

    // Each cell is marked when pushed, so the stack never exceeds CELL_COUNT.
    fn collect_group(
        &self,
        seed: (usize, usize),
        visited: &mut [[bool; BOARD_WIDTH]; BOARD_HEIGHT],
    ) -> Group {
        let color = self.rows[seed.1][seed.0];
        let mut cells = ArrayVec::new();
        let mut stack = ArrayVec::<(usize, usize), CELL_COUNT>::new();

        visited[seed.1][seed.0] = true;
        stack.push(seed);
        while let Some((x, y)) = stack.pop() {
            cells.push((x, y));
            for (nx, ny) in Self::neighbors(x, y) {
                if !visited[ny][nx] && self.rows[ny][nx] == color {
                    visited[ny][nx] = true;
                    stack.push((nx, ny));
                }
            }
        }

        Group { color, cells }
    }

    /// Builds a board from rows of [`Color::as_char`] characters, top to bottom.
    ///
    /// Missing rows at the top are left empty.
    #[cfg(test)]
    pub(crate) fn from_ascii(rows: &[&str]) -> Self {
        assert!(rows.len() <= BOARD_HEIGHT);
        let mut board = Self::EMPTY;
        let offset = BOARD_HEIGHT - rows.len();
        for (dy, row) in rows.iter().enumerate() {
            assert_eq!(row.chars().count(), BOARD_WIDTH, "bad row: {row:?}");
            for (x, c) in row.chars().enumerate() {
                board.rows[offset + dy][x] = Color::from_char(c).expect("invalid color char");
            }
        }
        board
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for color in row {
                write!(f, "{}", color.as_char())?;
            }
        }
        Ok(())
    }
}

/// Iterator over the connected groups of a [`Board`].
///
/// Created by [`Board::groups`].
#[derive(Debug)]
pub struct Groups<'a> {
    board: &'a Board,
    visited: [[bool; BOARD_WIDTH]; BOARD_HEIGHT],
    next_seed: usize,
}

impl Iterator for Groups<'_> {
    type Item = Group;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next_seed < CELL_COUNT {
            let (x, y) = (self.next_seed % BOARD_WIDTH, self.next_seed / BOARD_WIDTH);
            self.next_seed += 1;
            if self.visited[y][x] || self.board.rows[y][x].is_empty() {
                continue;
            }
            return Some(self.board.collect_group((x, y), &mut self.visited));
        }
        None
    }
}
