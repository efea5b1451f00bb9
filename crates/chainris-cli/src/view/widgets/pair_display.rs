use chainris_engine::Pair;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::view::widgets::CellDisplay;

/// Upcoming pair, drawn in spawn orientation (sub cell on top).
#[derive(Debug)]
pub struct PairDisplay<'a> {
    pair: Pair,
    block: Option<BlockWidget<'a>>,
}

impl<'a> PairDisplay<'a> {
    pub fn new(pair: Pair) -> Self {
        Self { pair, block: None }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        2 * CellDisplay::width() + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        2 * CellDisplay::height() + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for PairDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &PairDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let pair_area = area.centered(
            Constraint::Length(CellDisplay::width()),
            Constraint::Length(2 * CellDisplay::height()),
        );
        let [sub_area, main_area] = pair_area.layout(&Layout::vertical([
            Constraint::Length(CellDisplay::height()),
            Constraint::Length(CellDisplay::height()),
        ]));

        CellDisplay::from_color(self.pair.sub(), false).render(sub_area, buf);
        CellDisplay::from_color(self.pair.main(), false).render(main_area, buf);
    }
}
