mod app;
mod event;
mod event_loop;
mod runner;

pub use self::{app::App, event::Timer, event_loop::RenderMode, runner::Tui};
