use std::time::Duration;

use chainris_engine::{ChainStep, GameSession, SessionState};
use crossterm::event::Event;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use crate::{
    command::play::scoreboard::Scoreboard,
    input::PlayerInput,
    tui::{Timer, Tui},
    view::widgets::{KeyBinding, KeyBindingDisplay, SessionDisplay},
};

const PLAYING_HELP: &[KeyBinding] = &[
    (&["←", "→"], "Move"),
    (&["↓"], "Soft Drop"),
    (&["↑", "Space"], "Hard Drop"),
    (&["Z", "X"], "Rotate"),
    (&["P"], "Pause"),
    (&["Q"], "Quit"),
];
const PAUSED_HELP: &[KeyBinding] = &[(&["P"], "Resume"), (&["Q"], "Quit")];
const GAME_OVER_HELP: &[KeyBinding] = &[(&["R"], "Restart"), (&["Q"], "Quit")];

/// Lock-delay frames per second.
pub const FRAME_RATE: f64 = 60.0;
/// Pause between two chain-resolution steps.
pub const CHAIN_STEP_INTERVAL: Duration = Duration::from_millis(300);

#[derive(Debug)]
pub struct SessionScreen {
    session: GameSession,
    is_exiting: bool,
}

impl SessionScreen {
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            is_exiting: false,
        }
    }

    pub fn is_exiting(&self) -> bool {
        self.is_exiting
    }

    /// Starts the three game timers for the current drop speed.
    pub fn start_timers(&self, tui: &mut Tui) {
        tui.set_timer_interval(Timer::Drop, Some(self.session.stats().drop_interval()));
        tui.set_timer_rate(Timer::Frame, FRAME_RATE);
        tui.set_timer_interval(Timer::Chain, Some(CHAIN_STEP_INTERVAL));
    }

    pub fn handle_event(&mut self, tui: &mut Tui, event: &Event) {
        let Some(input) = event.as_key_event().and_then(|key| PlayerInput::from_key(&key)) else {
            return;
        };
        let is_game_over = self.session.session_state().is_game_over();
        match input {
            PlayerInput::Quit => self.is_exiting = true,
            PlayerInput::Restart if is_game_over => {
                self.session.restart();
                self.start_timers(tui);
            }
            PlayerInput::Restart => {}
            PlayerInput::TogglePause => _ = self.session.toggle_pause(),
            PlayerInput::MoveLeft => _ = self.session.try_move_left(),
            PlayerInput::MoveRight => _ = self.session.try_move_right(),
            PlayerInput::RotateLeft => _ = self.session.try_rotate_left(),
            PlayerInput::RotateRight => _ = self.session.try_rotate_right(),
            PlayerInput::SoftDrop => _ = self.session.soft_drop(),
            PlayerInput::HardDrop => _ = self.session.hard_drop(),
        }
    }

    pub fn update(&mut self, tui: &mut Tui, timer: Timer, scoreboard: &mut Scoreboard) {
        match timer {
            Timer::Drop => {
                self.session.drop_tick();
            }
            Timer::Frame => {
                self.session.frame_tick();
            }
            Timer::Chain => {
                let interval = self.session.stats().drop_interval();
                if let ChainStep::Settled { .. } = self.session.chain_tick() {
                    let new_interval = self.session.stats().drop_interval();
                    if new_interval != interval {
                        tui.set_timer_interval(Timer::Drop, Some(new_interval));
                    }
                    if self.session.session_state().is_game_over() {
                        scoreboard.record_game_over(self.session.stats());
                    }
                }
            }
        }
    }

    pub fn draw(&self, frame: &mut Frame<'_>, scoreboard: &Scoreboard) {
        let session_display =
            SessionDisplay::new(&self.session).high_score(scoreboard.best().score);
        let help = match self.session.session_state() {
            SessionState::Playing => PLAYING_HELP,
            SessionState::Paused => PAUSED_HELP,
            SessionState::GameOver => GAME_OVER_HELP,
        };

        let [main_area, help_area] = Layout::vertical([
            Constraint::Length(session_display.height()),
            Constraint::Length(1),
        ])
        .spacing(1)
        .areas(frame.area());
        frame.render_widget(&session_display, main_area);
        frame.render_widget(KeyBindingDisplay::new(help), help_area);
    }
}
