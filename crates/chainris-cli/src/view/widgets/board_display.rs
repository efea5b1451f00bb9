use std::iter;

use chainris_engine::{BOARD_HEIGHT, BOARD_WIDTH, Board, Color, Piece};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};

use crate::view::widgets::CellDisplay;

#[derive(Debug)]
enum Overlay {
    Ghost,
    Cell(Color),
}

#[derive(Debug)]
pub struct BoardDisplay<'a> {
    board: &'a Board,
    ghost: Option<Piece>,
    falling_piece: Option<Piece>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            ghost: None,
            falling_piece: None,
            block: None,
        }
    }

    pub fn ghost(self, piece: Option<Piece>) -> Self {
        Self {
            ghost: piece,
            ..self
        }
    }

    pub fn falling_piece(self, piece: Option<&Piece>) -> Self {
        Self {
            falling_piece: piece.copied(),
            ..self
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn width(&self) -> u16 {
        BOARD_WIDTH as u16 * CellDisplay::width()
            + super::block_horizontal_margin(self.block.as_ref())
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn height(&self) -> u16 {
        BOARD_HEIGHT as u16 * CellDisplay::height()
            + super::block_vertical_margin(self.block.as_ref())
    }

    /// Falling cells win over the ghost, which only shows on empty cells.
    fn overlay_at(&self, x: usize, y: usize) -> Option<Overlay> {
        let at = |piece: &Piece| {
            piece.cells().into_iter().find_map(|(pos, color)| {
                let matches = usize::try_from(pos.x()).is_ok_and(|px| px == x)
                    && usize::try_from(pos.y()).is_ok_and(|py| py == y);
                matches.then_some(color)
            })
        };
        if let Some(color) = self.falling_piece.as_ref().and_then(at) {
            return Some(Overlay::Cell(color));
        }
        self.ghost
            .as_ref()
            .and_then(at)
            .map(|_| Overlay::Ghost)
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let col_constraints = (0..BOARD_WIDTH).map(|_| Constraint::Length(CellDisplay::width()));
        let row_constraints = (0..BOARD_HEIGHT).map(|_| Constraint::Length(CellDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        let grid_cells = area
            .layout::<BOARD_HEIGHT>(&vertical)
            .into_iter()
            .map(|row| row.layout::<BOARD_WIDTH>(&horizontal));

        for (y, (grid_row, row)) in iter::zip(grid_cells, self.board.rows()).enumerate() {
            for (x, (grid_cell, color)) in iter::zip(grid_row, row).enumerate() {
                let cell = match self.overlay_at(x, y) {
                    Some(Overlay::Cell(color)) => CellDisplay::from_color(color, true),
                    Some(Overlay::Ghost) if color.is_empty() => CellDisplay::ghost(),
                    Some(Overlay::Ghost) | None => CellDisplay::from_color(*color, true),
                };
                cell.render(grid_cell, buf);
            }
        }
    }
}
