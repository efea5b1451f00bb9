use std::mem;

use rand::Rng as _;

use crate::{
    MoveError, PauseError,
    core::{
        board::Board,
        piece::{Pair, Piece, Turn},
    },
};

use super::{
    chain_resolver::{ChainResolver, ChainStep, GameState},
    game_stats::GameStats,
    lock_delay::LockDelay,
    pair_generator::{PairGenerator, PairSeed, Palette},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    Playing,
    Paused,
    GameOver,
}

/// A single game from the first spawn to game over.
///
/// The session is driven by three external cadences, each mapped to one
/// operation:
///
/// - [`drop_tick`](Self::drop_tick) on the drop interval of the current level
/// - [`frame_tick`](Self::frame_tick) at 60 Hz, counting lock-delay frames
/// - [`chain_tick`](Self::chain_tick) while a chain is resolving
///
/// Player commands (`try_*`, [`soft_drop`](Self::soft_drop),
/// [`hard_drop`](Self::hard_drop)) either apply fully or return an error
/// without touching the session.
///
/// # Example
///
/// ```
/// use chainris_engine::{GameSession, Palette};
///
/// let mut session = GameSession::new(Palette::Four);
/// session.try_move_left().unwrap();
/// session.hard_drop().unwrap();
///
/// // The pair locks on the next frame and the chain resolver takes over.
/// assert!(session.frame_tick());
/// assert!(session.game_state().is_dropping());
/// while !session.chain_tick().is_settled() {}
/// assert!(session.falling_piece().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    falling: Option<Piece>,
    next: Pair,
    generator: PairGenerator,
    seed: PairSeed,
    lock_delay: LockDelay,
    resolver: ChainResolver,
    stats: GameStats,
    session_state: SessionState,
}

impl GameSession {
    /// Starts a session with a random seed.
    #[must_use]
    pub fn new(palette: Palette) -> Self {
        Self::with_seed(palette, rand::rng().random())
    }

    /// Like [`Self::new`], but with a fixed seed for a reproducible pair sequence.
    #[must_use]
    pub fn with_seed(palette: Palette, seed: PairSeed) -> Self {
        Self::from_position(palette, seed, Board::EMPTY, GameStats::new())
    }

    /// Resumes play on `board` with the given statistics.
    ///
    /// The first pair spawns as in [`Self::with_seed`]; a blocked spawn ends
    /// the game at once.
    #[doc(hidden)]
    #[must_use]
    pub fn from_position(
        palette: Palette,
        seed: PairSeed,
        board: Board,
        stats: GameStats,
    ) -> Self {
        let mut generator = PairGenerator::with_seed(palette, seed);
        let next = generator.next_pair();
        let mut this = Self {
            board,
            falling: None,
            next,
            generator,
            seed,
            lock_delay: LockDelay::new(),
            resolver: ChainResolver::new(),
            stats,
            session_state: SessionState::Playing,
        };
        this.spawn();
        this
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The pair under player control, absent while a chain resolves or after game over.
    #[must_use]
    pub fn falling_piece(&self) -> Option<&Piece> {
        self.falling.as_ref()
    }

    #[must_use]
    pub fn next_pair(&self) -> Pair {
        self.next
    }

    /// Seed this session was started from.
    #[must_use]
    pub fn seed(&self) -> PairSeed {
        self.seed
    }

    #[must_use]
    pub fn palette(&self) -> Palette {
        self.generator.palette()
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn session_state(&self) -> SessionState {
        self.session_state
    }

    #[must_use]
    pub fn game_state(&self) -> GameState {
        self.resolver.state()
    }

    /// Depth of the chain currently being resolved.
    #[must_use]
    pub fn chain_depth(&self) -> usize {
        self.resolver.depth()
    }

    #[must_use]
    pub fn lock_delay(&self) -> LockDelay {
        self.lock_delay
    }

    #[must_use]
    pub fn is_grounded(&self) -> bool {
        self.falling
            .is_some_and(|piece| piece.is_grounded(&self.board))
    }

    /// Where the falling pair would land on a hard drop.
    #[must_use]
    pub fn landing_position(&self) -> Option<Piece> {
        self.falling.map(|piece| piece.dropped(&self.board))
    }

    pub fn toggle_pause(&mut self) -> Result<(), PauseError> {
        let toggled = match self.session_state {
            SessionState::Playing => SessionState::Paused,
            SessionState::Paused => SessionState::Playing,
            SessionState::GameOver => return Err(PauseError::GameOver),
        };
        if !self.resolver.state().is_normal() {
            return Err(PauseError::ChainInProgress);
        }
        self.session_state = toggled;
        Ok(())
    }

    pub fn try_move_left(&mut self) -> Result<(), MoveError> {
        let piece = self.controlled_piece()?;
        let piece = piece.left(&self.board).ok_or(MoveError::Collision)?;
        self.commit_shift(piece);
        Ok(())
    }

    pub fn try_move_right(&mut self) -> Result<(), MoveError> {
        let piece = self.controlled_piece()?;
        let piece = piece.right(&self.board).ok_or(MoveError::Collision)?;
        self.commit_shift(piece);
        Ok(())
    }

    pub fn try_rotate_right(&mut self) -> Result<(), MoveError> {
        self.try_rotate(Turn::Clockwise)
    }

    pub fn try_rotate_left(&mut self) -> Result<(), MoveError> {
        self.try_rotate(Turn::CounterClockwise)
    }

    fn try_rotate(&mut self, turn: Turn) -> Result<(), MoveError> {
        let piece = self.controlled_piece()?;
        let piece = piece
            .rotated(&self.board, turn)
            .ok_or(MoveError::Collision)?;
        self.commit_shift(piece);
        Ok(())
    }

    /// Moves the falling pair down one row.
    ///
    /// A successful step restarts the lock delay. A grounded pair whose lock
    /// delay has already run out is locked instead; otherwise a grounded pair
    /// is rejected with [`MoveError::Collision`].
    pub fn soft_drop(&mut self) -> Result<(), MoveError> {
        let piece = self.controlled_piece()?;
        if let Some(piece) = piece.down(&self.board) {
            self.falling = Some(piece);
            self.lock_delay.reset();
            return Ok(());
        }
        if self.lock_delay.should_lock() {
            self.lock_falling();
            return Ok(());
        }
        Err(MoveError::Collision)
    }

    /// Drops the falling pair to its landing row and skips the lock delay.
    ///
    /// The pair is locked by the next [`frame_tick`](Self::frame_tick) or
    /// [`soft_drop`](Self::soft_drop).
    pub fn hard_drop(&mut self) -> Result<(), MoveError> {
        let piece = self.controlled_piece()?;
        self.falling = Some(piece.dropped(&self.board));
        self.lock_delay.expire();
        Ok(())
    }

    /// Automatic gravity step.
    ///
    /// Returns `true` if the falling pair moved or locked.
    pub fn drop_tick(&mut self) -> bool {
        self.soft_drop().is_ok()
    }

    /// Advances the lock delay of a grounded pair by one frame.
    ///
    /// Returns `true` if the pair was locked.
    pub fn frame_tick(&mut self) -> bool {
        if self.controlled_piece().is_err() || !self.is_grounded() {
            return false;
        }
        self.lock_delay.increment();
        if !self.lock_delay.should_lock() {
            return false;
        }
        self.lock_falling();
        true
    }

    /// Performs one chain-resolution step.
    ///
    /// When the sequence settles the score is updated and the next pair
    /// spawns, which may end the game.
    pub fn chain_tick(&mut self) -> ChainStep {
        if !self.session_state.is_playing() {
            return ChainStep::Idle;
        }
        let step = self.resolver.step(&mut self.board);
        match step {
            ChainStep::Idle | ChainStep::Chained { .. } => {}
            ChainStep::Cleared { .. } => self.stats.record_clear(),
            ChainStep::Settled { depth } => {
                self.stats.complete_pair(depth);
                self.spawn();
            }
        }
        step
    }

    /// Starts over with the same palette.
    ///
    /// The new seed is drawn from the current generator, so restarting a
    /// seeded session is reproducible too.
    pub fn restart(&mut self) {
        let seed = self.generator.next_seed();
        *self = Self::with_seed(self.palette(), seed);
    }

    fn controlled_piece(&self) -> Result<Piece, MoveError> {
        match self.session_state {
            SessionState::GameOver => Err(MoveError::GameOver),
            SessionState::Paused => Err(MoveError::Paused),
            SessionState::Playing => self.falling.ok_or(MoveError::NoFallingPair),
        }
    }

    fn commit_shift(&mut self, piece: Piece) {
        self.falling = Some(piece);
        self.lock_delay.reset();
    }

    fn lock_falling(&mut self) {
        let Some(piece) = self.falling.take() else {
            return;
        };
        // A cell still in the spawn buffer is dropped by `place`.
        for (pos, color) in piece.cells() {
            self.board.place(pos.x(), pos.y(), color);
        }
        self.lock_delay.reset();
        self.resolver.start();
    }

    fn spawn(&mut self) {
        let pair = mem::replace(&mut self.next, self.generator.next_pair());
        self.lock_delay.reset();
        self.resolver.reset_depth();

        let piece = Piece::new(pair);
        if piece.fits(&self.board) {
            self.falling = Some(piece);
        } else {
            self.falling = None;
            self.session_state = SessionState::GameOver;
        }
    }
}
