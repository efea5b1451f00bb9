use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub use self::{
    board_display::*, cell_display::*, key_binding_display::*, pair_display::*,
    session_display::*, session_stats_display::*,
};

mod board_display;
mod cell_display;
mod key_binding_display;
mod pair_display;
mod session_display;
mod session_stats_display;

pub mod color {
    use ratatui::style::Color;

    pub const RED: Color = Color::Rgb(255, 64, 64);
    pub const GREEN: Color = Color::Rgb(64, 224, 64);
    pub const BLUE: Color = Color::Rgb(64, 96, 255);
    pub const YELLOW: Color = Color::Rgb(255, 224, 0);
    pub const PURPLE: Color = Color::Rgb(192, 64, 255);
    pub const CYAN: Color = Color::Rgb(0, 255, 255);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const DARK_GRAY: Color = Color::Rgb(64, 64, 64);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use ratatui::style::{Color, Modifier, Style};

    use crate::view::widgets::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    const fn bg_only(color: Color) -> Style {
        Style::new().fg(color).bg(color)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const TITLE: Style = fg_bg(color::YELLOW, color::BLACK).add_modifier(Modifier::BOLD);
    pub const SELECTED: Style = fg_bg(color::BLACK, color::WHITE).add_modifier(Modifier::BOLD);
    pub const HINT: Style = fg_bg(color::GRAY, color::BLACK);
    pub const KEY: Style = fg_bg(color::CYAN, color::BLACK);
    pub const CHAIN: Style = fg_bg(color::YELLOW, color::BLACK).add_modifier(Modifier::BOLD);

    pub const EMPTY: Style = bg_only(color::BLACK);
    pub const EMPTY_DOT: Style = fg_bg(color::DARK_GRAY, color::BLACK);
    pub const GHOST: Style = fg_bg(color::GRAY, color::BLACK);

    pub const RED_CELL: Style = bg_only(color::RED);
    pub const GREEN_CELL: Style = bg_only(color::GREEN);
    pub const BLUE_CELL: Style = bg_only(color::BLUE);
    pub const YELLOW_CELL: Style = bg_only(color::YELLOW);
    pub const PURPLE_CELL: Style = bg_only(color::PURPLE);
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}
