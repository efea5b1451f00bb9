use chainris_engine::Palette;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    text::Line,
};

use crate::view::widgets::{KeyBinding, KeyBindingDisplay, style};

const OPTIONS: [Palette; 2] = [Palette::Four, Palette::Five];

const HELP: &[KeyBinding] = &[
    (&["↑", "↓"], "Select"),
    (&["Enter"], "Start"),
    (&["4", "5"], "Quick Start"),
];

/// What the menu decided after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Stay,
    Start(Palette),
}

/// Start menu choosing how many colors to play with.
#[derive(Debug, Default)]
pub struct ColorSelectScreen {
    selected: usize,
}

impl ColorSelectScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Palette {
        OPTIONS[self.selected]
    }

    pub fn handle_event(&mut self, event: &Event) -> MenuAction {
        let Some(key) = event.as_key_event() else {
            return MenuAction::Stay;
        };
        if key.kind != KeyEventKind::Press {
            return MenuAction::Stay;
        }
        match key.code {
            KeyCode::Up => {
                self.selected = (self.selected + OPTIONS.len() - 1) % OPTIONS.len();
                MenuAction::Stay
            }
            KeyCode::Down => {
                self.selected = (self.selected + 1) % OPTIONS.len();
                MenuAction::Stay
            }
            KeyCode::Enter => MenuAction::Start(self.selected()),
            KeyCode::Char('4') => MenuAction::Start(Palette::Four),
            KeyCode::Char('5') => MenuAction::Start(Palette::Five),
            // Leaving the menu keeps the default palette.
            KeyCode::Esc | KeyCode::Char('q' | 'Q') => MenuAction::Start(Palette::default()),
            _ => MenuAction::Stay,
        }
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let mut lines = vec![
            Line::styled("CHAINRIS", style::TITLE).centered(),
            Line::default(),
            Line::styled("Choose the number of colors:", style::DEFAULT).centered(),
            Line::default(),
        ];
        for (i, palette) in OPTIONS.iter().enumerate() {
            let label = format!("{} colors", palette.color_count());
            let line = if i == self.selected {
                Line::styled(format!("▶ {label}"), style::SELECTED)
            } else {
                Line::styled(format!("  {label}"), style::DEFAULT)
            };
            lines.push(line.centered());
        }

        let [_, menu_area, _, help_area] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(u16::try_from(lines.len()).unwrap_or(u16::MAX)),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        for (line, area) in lines.into_iter().zip(menu_area.rows()) {
            frame.render_widget(line, area);
        }
        frame.render_widget(KeyBindingDisplay::new(HELP), help_area);
    }
}
