use crossterm::event::Event as CrosstermEvent;

/// Independent cadences driving the game logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// Automatic gravity, retimed on level changes.
    Drop,
    /// Lock-delay frame counting.
    Frame,
    /// One chain-resolution step.
    Chain,
}

impl Timer {
    /// All timers, in the order they are checked when several are due.
    pub const ALL: [Self; 3] = [Self::Drop, Self::Frame, Self::Chain];

    pub(super) const fn index(self) -> usize {
        self as usize
    }
}

/// Events processed by TUI applications.
#[derive(Debug, Clone, derive_more::From)]
pub(super) enum TuiEvent {
    /// A game logic timer fired.
    #[from(ignore)]
    Timer(Timer),
    /// Screen render timing.
    Render,
    /// Terminal events such as key input, mouse, and resize.
    Crossterm(CrosstermEvent),
}
