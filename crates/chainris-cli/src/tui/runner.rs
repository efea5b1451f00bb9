use std::time::Duration;

use crate::tui::{
    App, Timer,
    event::TuiEvent,
    event_loop::{EventLoop, RenderMode},
};

/// Owns the terminal session and feeds [`TuiEvent`]s to an [`App`].
#[derive(Default, Debug)]
pub struct Tui {
    events: EventLoop,
}

impl Tui {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fires `timer` `rate` times per second.
    pub fn set_timer_rate(&mut self, timer: Timer, rate: f64) {
        let interval = Duration::from_secs_f64(1.0 / rate);
        self.events.set_timer_interval(timer, Some(interval));
    }

    /// Restarts `timer` with a new interval. `None` stops it.
    pub fn set_timer_interval(&mut self, timer: Timer, interval: Option<Duration>) {
        self.events.set_timer_interval(timer, interval);
    }

    #[cfg(test)]
    pub fn timer_interval(&self, timer: Timer) -> Option<Duration> {
        self.events.timer_interval(timer)
    }

    pub fn stop_timers(&mut self) {
        for timer in Timer::ALL {
            self.events.set_timer_interval(timer, None);
        }
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.events.set_render_mode(mode);
    }

    /// Enters the alternate screen and runs `app` until it asks to exit.
    ///
    /// The terminal is restored before returning, also on error.
    pub fn run<A>(mut self, app: &mut A) -> anyhow::Result<()>
    where
        A: App,
    {
        app.init(&mut self);

        ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.events.next()? {
                    TuiEvent::Timer(timer) => app.update(&mut self, timer),
                    TuiEvent::Render => {
                        terminal.draw(|frame| app.draw(frame))?;
                    }
                    TuiEvent::Crossterm(event) => app.handle_event(&mut self, event),
                }
            }
            Ok(())
        })
    }
}
