use std::time::{Duration, Instant};

use crossterm::event;

use crate::tui::event::{Timer, TuiEvent};

/// When the screen gets redrawn.
#[derive(Debug, Clone, Copy, Default)]
pub enum RenderMode {
    /// Redraw as soon as a timer or terminal event changed something.
    #[default]
    OnDirty,
    /// Like `OnDirty`, but at most once per interval.
    ///
    /// Changes arriving faster than the interval share one redraw.
    Throttled(Duration),
}

impl RenderMode {
    /// `Throttled` mode redrawing at most `rate` times per second.
    #[must_use]
    pub fn throttled_from_rate(rate: f64) -> Self {
        Self::Throttled(Duration::from_secs_f64(1.0 / rate))
    }

    fn next_render_at(self, last_render: Instant, now: Instant) -> Instant {
        match self {
            Self::OnDirty => now,
            Self::Throttled(interval) => last_render + interval,
        }
    }
}

/// Periodic timer. Stopped while `interval` is `None`.
#[derive(Debug, Clone, Copy)]
struct TimerSlot {
    interval: Option<Duration>,
    last_fired: Instant,
}

impl TimerSlot {
    fn stopped(now: Instant) -> Self {
        Self {
            interval: None,
            last_fired: now,
        }
    }

    fn deadline(&self) -> Option<Instant> {
        Some(self.last_fired + self.interval?)
    }
}

/// Multiplexes the game timers, redraws and terminal input into one stream
/// of [`TuiEvent`]s.
#[derive(Debug)]
pub(super) struct EventLoop {
    slots: [TimerSlot; Timer::ALL.len()],
    render_mode: RenderMode,
    last_render: Instant,
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    /// All timers stopped, rendering `OnDirty`, first frame pending.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            slots: [TimerSlot::stopped(now); Timer::ALL.len()],
            render_mode: RenderMode::default(),
            last_render: now.checked_sub(Duration::from_secs(86400)).unwrap_or(now),
            dirty: true,
        }
    }

    /// Restarts `timer` with a new interval. `None` stops it.
    pub(super) fn set_timer_interval(&mut self, timer: Timer, interval: Option<Duration>) {
        self.slots[timer.index()] = TimerSlot {
            interval,
            last_fired: Instant::now(),
        };
    }

    #[cfg(test)]
    pub(super) fn timer_interval(&self, timer: Timer) -> Option<Duration> {
        self.slots[timer.index()].interval
    }

    pub(super) fn set_render_mode(&mut self, render_mode: RenderMode) {
        self.render_mode = render_mode;
    }

    /// Blocks until a timer fires, a redraw is due or the terminal reports an event.
    ///
    /// Due timers fire one per call, in [`Timer::ALL`] order, before any redraw.
    pub(super) fn next(&mut self) -> anyhow::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if let Some(timer) = self.due_timer(now) {
                self.slots[timer.index()].last_fired = now;
                self.dirty = true;
                return Ok(TuiEvent::Timer(timer));
            }
            if self.render_due(now) {
                self.last_render = now;
                self.dirty = false;
                return Ok(TuiEvent::Render);
            }

            let timeout = self
                .next_wakeup(now)
                .map(|at| at.saturating_duration_since(now));
            if let Some(timeout) = timeout
                && !event::poll(timeout)?
            {
                continue;
            }
            self.dirty = true;
            return Ok(event::read()?.into());
        }
    }

    fn due_timer(&self, now: Instant) -> Option<Timer> {
        Timer::ALL.into_iter().find(|timer| {
            self.slots[timer.index()]
                .deadline()
                .is_some_and(|deadline| deadline <= now)
        })
    }

    fn render_due(&self, now: Instant) -> bool {
        self.dirty && self.render_mode.next_render_at(self.last_render, now) <= now
    }

    /// Earliest instant something other than terminal input needs attention.
    fn next_wakeup(&self, now: Instant) -> Option<Instant> {
        let render = self
            .dirty
            .then(|| self.render_mode.next_render_at(self.last_render, now));
        self.slots
            .iter()
            .filter_map(TimerSlot::deadline)
            .chain(render)
            .min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewind(events: &mut EventLoop, timer: Timer, by: Duration) {
        let slot = &mut events.slots[timer.index()];
        slot.last_fired = slot.last_fired.checked_sub(by).unwrap();
    }

    #[test]
    fn test_stopped_timers_never_fire() {
        let events = EventLoop::new();
        let later = Instant::now() + Duration::from_secs(3600);
        assert_eq!(events.due_timer(later), None);
    }

    #[test]
    fn test_due_timers_fire_in_order() {
        let mut events = EventLoop::new();
        events.set_timer_interval(Timer::Chain, Some(Duration::from_millis(300)));
        events.set_timer_interval(Timer::Frame, Some(Duration::from_millis(16)));
        rewind(&mut events, Timer::Chain, Duration::from_secs(1));
        rewind(&mut events, Timer::Frame, Duration::from_secs(1));

        let now = Instant::now();
        assert_eq!(events.due_timer(now), Some(Timer::Frame));
        events.slots[Timer::Frame.index()].last_fired = now;
        assert_eq!(events.due_timer(now), Some(Timer::Chain));
    }

    #[test]
    fn test_setting_interval_restarts_timer() {
        let mut events = EventLoop::new();
        events.set_timer_interval(Timer::Drop, Some(Duration::from_secs(60)));
        rewind(&mut events, Timer::Drop, Duration::from_secs(120));
        assert_eq!(events.due_timer(Instant::now()), Some(Timer::Drop));

        events.set_timer_interval(Timer::Drop, Some(Duration::from_secs(60)));
        assert_eq!(events.due_timer(Instant::now()), None);
    }

    #[test]
    fn test_throttled_render_waits_for_interval() {
        let mut events = EventLoop::new();
        events.set_render_mode(RenderMode::Throttled(Duration::from_secs(60)));
        let now = Instant::now();
        assert!(events.render_due(now));

        events.last_render = now;
        events.dirty = true;
        assert!(!events.render_due(now));
        assert_eq!(
            events.next_wakeup(now),
            Some(now + Duration::from_secs(60))
        );

        events.dirty = false;
        assert_eq!(events.next_wakeup(now), None);
    }
}
