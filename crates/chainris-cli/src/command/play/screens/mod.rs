use chainris_engine::{GameSession, PairSeed, Palette};
use crossterm::event::Event;
use ratatui::Frame;

use crate::{
    command::play::scoreboard::Scoreboard,
    tui::{Timer, Tui},
};

pub use self::{
    color_select::{ColorSelectScreen, MenuAction},
    session::{FRAME_RATE, SessionScreen},
};

mod color_select;
mod session;

#[derive(Debug)]
pub enum Screen {
    ColorSelect(ColorSelectScreen),
    Session(SessionScreen),
}

impl Screen {
    pub fn color_select() -> Self {
        Screen::ColorSelect(ColorSelectScreen::new())
    }

    pub fn session(palette: Palette, seed: Option<PairSeed>) -> Self {
        let session = match seed {
            Some(seed) => GameSession::with_seed(palette, seed),
            None => GameSession::new(palette),
        };
        Screen::Session(SessionScreen::new(session))
    }

    pub fn should_exit(&self) -> bool {
        match self {
            Screen::ColorSelect(_) => false,
            Screen::Session(screen) => screen.is_exiting(),
        }
    }

    /// Configures the timers this screen runs on.
    pub fn activate(&self, tui: &mut Tui) {
        match self {
            Screen::ColorSelect(_) => tui.stop_timers(),
            Screen::Session(screen) => screen.start_timers(tui),
        }
    }

    pub fn draw(&self, frame: &mut Frame<'_>, scoreboard: &Scoreboard) {
        match self {
            Screen::ColorSelect(screen) => screen.draw(frame),
            Screen::Session(screen) => screen.draw(frame, scoreboard),
        }
    }

    /// Handles a terminal event, returning the palette chosen in the menu if any.
    pub fn handle_event(&mut self, tui: &mut Tui, event: &Event) -> Option<Palette> {
        match self {
            Screen::ColorSelect(screen) => match screen.handle_event(event) {
                MenuAction::Start(palette) => Some(palette),
                MenuAction::Stay => None,
            },
            Screen::Session(screen) => {
                screen.handle_event(tui, event);
                None
            }
        }
    }

    pub fn update(&mut self, tui: &mut Tui, timer: Timer, scoreboard: &mut Scoreboard) {
        match self {
            Screen::ColorSelect(_) => {}
            Screen::Session(screen) => screen.update(tui, timer, scoreboard),
        }
    }
}
