use crate::core::board::Board;

/// Authoritative control state of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameState {
    /// A pair is falling under player control.
    #[default]
    Normal,
    /// Gravity is about to be applied to the board.
    Dropping,
    /// Qualifying groups are about to be removed.
    Clearing,
}

/// Result of a single resolver step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum ChainStep {
    /// Nothing is being resolved.
    Idle,
    /// Gravity was applied and clearable groups remain; the chain grew to `depth`.
    Chained { depth: usize },
    /// Qualifying groups were removed.
    Cleared { cells: usize },
    /// Gravity was applied and nothing is left to clear.
    Settled { depth: usize },
}

/// Dropping/Clearing state machine run after each lock.
///
/// Each [`step`](Self::step) performs exactly one transition:
///
/// ```text
/// Normal --start--> Dropping --groups found--> Clearing --> Dropping --> ...
///                   Dropping --nothing found--> Normal
/// ```
///
/// Every Clearing pass removes at least [`MIN_GROUP_SIZE`](crate::MIN_GROUP_SIZE)
/// cells and nothing is ever added, so a sequence always terminates.
#[derive(Debug, Clone, Default)]
pub struct ChainResolver {
    state: GameState,
    depth: usize,
}

impl ChainResolver {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: GameState::Normal,
            depth: 0,
        }
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Number of Dropping→Clearing cycles in the current sequence.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Begins resolving a freshly merged board.
    pub fn start(&mut self) {
        self.state = GameState::Dropping;
        self.depth = 0;
    }

    /// Forgets the depth of the last settled sequence.
    pub fn reset_depth(&mut self) {
        self.depth = 0;
    }

    pub fn step(&mut self, board: &mut Board) -> ChainStep {
        match self.state {
            GameState::Normal => ChainStep::Idle,
            GameState::Dropping => {
                board.apply_gravity();
                if board.has_clearable_group() {
                    self.depth += 1;
                    self.state = GameState::Clearing;
                    ChainStep::Chained { depth: self.depth }
                } else {
                    self.state = GameState::Normal;
                    ChainStep::Settled { depth: self.depth }
                }
            }
            GameState::Clearing => {
                let groups = board.clearable_groups();
                let cells = board.clear_groups(&groups);
                self.state = GameState::Dropping;
                ChainStep::Cleared { cells }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(resolver: &mut ChainResolver, board: &mut Board) -> Vec<ChainStep> {
        let mut steps = vec![];
        loop {
            let step = resolver.step(board);
            steps.push(step);
            if step.is_settled() || step.is_idle() {
                return steps;
            }
        }
    }

    #[test]
    fn test_idle_when_normal() {
        let mut resolver = ChainResolver::new();
        let mut board = Board::from_ascii(&["RRRR.."]);
        assert_eq!(resolver.step(&mut board), ChainStep::Idle);
        assert_eq!(board.occupied_count(), 4);
    }

    #[test]
    fn test_no_chain_settles_immediately() {
        let mut resolver = ChainResolver::new();
        let mut board = Board::from_ascii(&[
            "R.....", //
            "......",
            "RG....",
        ]);
        resolver.start();
        let steps = run_to_end(&mut resolver, &mut board);
        assert_eq!(steps, [ChainStep::Settled { depth: 0 }]);
        assert!(resolver.state().is_normal());
        assert_eq!(
            board,
            Board::from_ascii(&[
                "R.....", //
                "RG....",
            ])
        );
    }

    #[test]
    fn test_single_chain() {
        let mut resolver = ChainResolver::new();
        let mut board = Board::from_ascii(&[
            "R.....", //
            "RRR...",
        ]);
        resolver.start();
        assert_eq!(resolver.step(&mut board), ChainStep::Chained { depth: 1 });
        assert!(resolver.state().is_clearing());
        assert_eq!(resolver.step(&mut board), ChainStep::Cleared { cells: 4 });
        assert!(resolver.state().is_dropping());
        assert_eq!(resolver.step(&mut board), ChainStep::Settled { depth: 1 });
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_two_step_chain() {
        // Clearing the reds drops the fourth green onto the other three.
        let mut resolver = ChainResolver::new();
        let mut board = Board::from_ascii(&[
            "..G...", //
            "..R...",
            "RRRGGG",
        ]);
        resolver.start();
        let steps = run_to_end(&mut resolver, &mut board);
        assert_eq!(
            steps,
            [
                ChainStep::Chained { depth: 1 },
                ChainStep::Cleared { cells: 4 },
                ChainStep::Chained { depth: 2 },
                ChainStep::Cleared { cells: 4 },
                ChainStep::Settled { depth: 2 },
            ]
        );
        assert_eq!(board.occupied_count(), 0);
        assert_eq!(resolver.depth(), 2);

        resolver.reset_depth();
        assert_eq!(resolver.depth(), 0);
    }

    #[test]
    fn test_simultaneous_groups_count_as_one_link() {
        let mut resolver = ChainResolver::new();
        let mut board = Board::from_ascii(&[
            "RRRRGG", //
            "BBBBGG",
        ]);
        resolver.start();
        let steps = run_to_end(&mut resolver, &mut board);
        assert_eq!(
            steps,
            [
                ChainStep::Chained { depth: 1 },
                ChainStep::Cleared { cells: 12 },
                ChainStep::Settled { depth: 1 },
            ]
        );
    }
}
