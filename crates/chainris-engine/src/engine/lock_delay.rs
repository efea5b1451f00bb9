/// Frames a grounded pair has spent waiting to lock.
///
/// The counter is driven by the scheduler's frame cadence and never exceeds
/// [`LockDelay::THRESHOLD`]. Reaching the threshold means the pair must be
/// merged into the board.
///
/// # Example
///
/// ```
/// use chainris_engine::LockDelay;
///
/// let mut delay = LockDelay::new();
/// for _ in 0..LockDelay::THRESHOLD - 1 {
///     delay.increment();
/// }
/// assert!(!delay.should_lock());
/// delay.increment();
/// assert!(delay.should_lock());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LockDelay {
    frames: u32,
}

impl LockDelay {
    /// Grace frames before a grounded pair locks.
    pub const THRESHOLD: u32 = 32;

    #[must_use]
    pub const fn new() -> Self {
        Self { frames: 0 }
    }

    #[must_use]
    pub const fn frames(&self) -> u32 {
        self.frames
    }

    pub fn increment(&mut self) {
        self.frames = u32::min(self.frames + 1, Self::THRESHOLD);
    }

    pub fn reset(&mut self) {
        self.frames = 0;
    }

    /// Skips the remaining grace frames.
    pub fn expire(&mut self) {
        self.frames = Self::THRESHOLD;
    }

    #[must_use]
    pub const fn should_lock(&self) -> bool {
        self.frames >= Self::THRESHOLD
    }
}
