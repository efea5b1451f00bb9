use chainris_engine::Color;
use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

use crate::view::widgets::style;

/// A single board cell, two terminal columns wide.
#[derive(Debug)]
pub struct CellDisplay {
    style: Style,
    symbol: &'static str,
}

impl CellDisplay {
    pub const fn new(style: Style, symbol: &'static str) -> Self {
        Self { style, symbol }
    }

    pub fn width() -> u16 {
        2
    }

    pub fn height() -> u16 {
        1
    }

    pub fn from_color(color: Color, show_dots: bool) -> Self {
        let style = match color {
            Color::Empty if show_dots => return Self::new(style::EMPTY_DOT, "."),
            Color::Empty => return Self::new(style::EMPTY, ""),
            Color::Red => style::RED_CELL,
            Color::Green => style::GREEN_CELL,
            Color::Blue => style::BLUE_CELL,
            Color::Yellow => style::YELLOW_CELL,
            Color::Purple => style::PURPLE_CELL,
        };
        Self::new(style, "")
    }

    /// Landing preview of a falling cell.
    pub fn ghost() -> Self {
        Self::new(style::GHOST, "[]")
    }
}

impl Widget for CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        // Use a Paragraph to fill the whole area, not just the cells with the symbol
        Paragraph::new(self.symbol)
            .style(self.style)
            .centered()
            .render(area, buf);
    }
}
