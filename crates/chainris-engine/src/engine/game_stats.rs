use std::time::Duration;

/// Base score of a single-link chain.
const CHAIN_BASE_SCORE: usize = 100;
/// Cleared chains needed to advance one level.
const CHAINS_PER_LEVEL: usize = 10;
/// Level from which the drop interval stops shrinking.
const MAX_SPEED_LEVEL: usize = 20;

/// Drop interval at level 1.
pub const INITIAL_DROP_INTERVAL: Duration = Duration::from_millis(500);
/// Drop interval from [`MAX_SPEED_LEVEL`] on.
pub const MIN_DROP_INTERVAL: Duration = Duration::from_millis(100);

/// Points awarded for a chain sequence of the given depth.
///
/// `100 * depth * 2^(depth - 1)`, so depths 1 to 4 score 100, 400, 1200 and
/// 3200. A depth of zero scores nothing.
#[must_use]
pub fn chain_score(depth: usize) -> usize {
    if depth == 0 {
        return 0;
    }
    let multiplier = u32::try_from(depth - 1)
        .ok()
        .and_then(|exp| 1_usize.checked_shl(exp))
        .unwrap_or(usize::MAX);
    CHAIN_BASE_SCORE
        .saturating_mul(depth)
        .saturating_mul(multiplier)
}

/// Automatic drop interval used once `level` has been reached.
///
/// Level 1 keeps the initial 500ms. Levels 2 to 19 use `5000ms / (10 + level)`
/// and every later level is clamped to 100ms.
#[must_use]
pub fn drop_interval_for_level(level: usize) -> Duration {
    if level <= 1 {
        return INITIAL_DROP_INTERVAL;
    }
    if level >= MAX_SPEED_LEVEL {
        return MIN_DROP_INTERVAL;
    }
    let divisor = u32::try_from(10 + level).unwrap_or(u32::MAX);
    Duration::from_millis(5000) / divisor
}

/// Score and progression of a session.
///
/// Updated once per settled chain sequence through
/// [`complete_pair`](Self::complete_pair), and once per clearing pass through
/// [`record_clear`](Self::record_clear).
///
/// # Example
///
/// ```
/// use chainris_engine::GameStats;
///
/// let mut stats = GameStats::new();
/// stats.complete_pair(2);
///
/// assert_eq!(stats.score(), 400);
/// assert_eq!(stats.cleared_chains(), 2);
/// assert_eq!(stats.level(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStats {
    score: usize,
    level: usize,
    cleared_chains: usize,
    total_chains: usize,
    max_chain: usize,
    completed_pairs: usize,
    drop_interval: Duration,
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            level: 1,
            cleared_chains: 0,
            total_chains: 0,
            max_chain: 0,
            completed_pairs: 0,
            drop_interval: INITIAL_DROP_INTERVAL,
        }
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Current level, starting at 1.
    #[must_use]
    pub const fn level(&self) -> usize {
        self.level
    }

    /// Sum of the depths of every scored chain sequence.
    #[must_use]
    pub const fn cleared_chains(&self) -> usize {
        self.cleared_chains
    }

    /// Number of clearing passes performed over the whole session.
    #[must_use]
    pub const fn total_chains(&self) -> usize {
        self.total_chains
    }

    /// Deepest chain sequence seen so far.
    #[must_use]
    pub const fn max_chain(&self) -> usize {
        self.max_chain
    }

    /// Pairs that were locked and fully resolved.
    #[must_use]
    pub const fn completed_pairs(&self) -> usize {
        self.completed_pairs
    }

    #[must_use]
    pub const fn drop_interval(&self) -> Duration {
        self.drop_interval
    }

    /// Accounts for one clearing pass.
    pub const fn record_clear(&mut self) {
        self.total_chains += 1;
    }

    /// Accounts for a settled chain sequence of the given depth.
    ///
    /// Returns `true` if the level went up, in which case the drop interval
    /// has been updated too.
    pub fn complete_pair(&mut self, depth: usize) -> bool {
        self.completed_pairs += 1;
        if depth == 0 {
            return false;
        }

        self.score = self.score.saturating_add(chain_score(depth));
        self.cleared_chains += depth;
        self.max_chain = usize::max(self.max_chain, depth);

        let level = self.cleared_chains / CHAINS_PER_LEVEL + 1;
        if level <= self.level {
            return false;
        }
        self.level = level;
        self.drop_interval = drop_interval_for_level(level);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_score() {
        assert_eq!(chain_score(0), 0);
        assert_eq!(chain_score(1), 100);
        assert_eq!(chain_score(2), 400);
        assert_eq!(chain_score(3), 1200);
        assert_eq!(chain_score(4), 3200);
    }

    #[test]
    fn test_drop_interval_curve() {
        assert_eq!(drop_interval_for_level(1), Duration::from_millis(500));
        assert_eq!(drop_interval_for_level(2), Duration::from_millis(5000) / 12);
        assert_eq!(drop_interval_for_level(10), Duration::from_millis(250));
        assert_eq!(drop_interval_for_level(19), Duration::from_millis(5000) / 29);
        assert_eq!(drop_interval_for_level(20), Duration::from_millis(100));
        assert_eq!(drop_interval_for_level(99), Duration::from_millis(100));
    }

    #[test]
    fn test_zero_depth_only_counts_pair() {
        let mut stats = GameStats::new();
        assert!(!stats.complete_pair(0));
        assert_eq!(stats.completed_pairs(), 1);
        assert_eq!(stats.score(), 0);
        assert_eq!(stats.cleared_chains(), 0);
    }

    #[test]
    fn test_level_up_after_ten_chains() {
        let mut stats = GameStats::new();
        for _ in 0..9 {
            assert!(!stats.complete_pair(1));
        }
        assert_eq!(stats.level(), 1);
        assert_eq!(stats.drop_interval(), INITIAL_DROP_INTERVAL);

        assert!(stats.complete_pair(1));
        assert_eq!(stats.level(), 2);
        assert_eq!(stats.score(), 1000);
        assert_eq!(stats.drop_interval(), drop_interval_for_level(2));
    }

    #[test]
    fn test_deep_chain_can_skip_levels() {
        let mut stats = GameStats::new();
        for _ in 0..4 {
            stats.complete_pair(7);
        }
        assert_eq!(stats.cleared_chains(), 28);
        assert_eq!(stats.level(), 3);
        assert_eq!(stats.max_chain(), 7);
    }

    #[test]
    fn test_record_clear() {
        let mut stats = GameStats::new();
        stats.record_clear();
        stats.record_clear();
        assert_eq!(stats.total_chains(), 2);
        assert_eq!(stats.score(), 0);
    }
}
