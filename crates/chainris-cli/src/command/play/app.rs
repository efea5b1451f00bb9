use chainris_engine::{PairSeed, Palette};
use crossterm::event::Event;
use ratatui::Frame;

use crate::{
    command::play::{
        scoreboard::{Notice, Scoreboard},
        screens::{FRAME_RATE, Screen},
    },
    tui::{App, RenderMode, Timer, Tui},
};

#[derive(Debug)]
pub struct PlayApp {
    screen: Screen,
    seed: Option<PairSeed>,
    scoreboard: Scoreboard,
}

impl PlayApp {
    /// Starts in the color menu unless `palette` is already decided.
    pub fn new(palette: Option<Palette>, seed: Option<PairSeed>, scoreboard: Scoreboard) -> Self {
        let screen = match palette {
            Some(palette) => Screen::session(palette, seed),
            None => Screen::color_select(),
        };
        Self {
            screen,
            seed,
            scoreboard,
        }
    }

    pub fn into_notices(self) -> Vec<Notice> {
        self.scoreboard.into_notices()
    }
}

impl App for PlayApp {
    fn init(&mut self, tui: &mut Tui) {
        tui.set_render_mode(RenderMode::throttled_from_rate(FRAME_RATE));
        self.screen.activate(tui);
    }

    fn should_exit(&self) -> bool {
        self.screen.should_exit()
    }

    fn handle_event(&mut self, tui: &mut Tui, event: Event) {
        if let Some(palette) = self.screen.handle_event(tui, &event) {
            self.screen = Screen::session(palette, self.seed);
            self.screen.activate(tui);
        }
    }

    fn draw(&self, frame: &mut Frame) {
        self.screen.draw(frame, &self.scoreboard);
    }

    fn update(&mut self, tui: &mut Tui, timer: Timer) {
        self.screen.update(tui, timer, &mut self.scoreboard);
    }
}
