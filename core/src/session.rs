//! Session state machine composing the engine parts.

use crate::{grid, resolve, spawn, terminal, Direction, GameError, Grid};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Active,
    Over,
}

/// Result of applying one move through the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Whether the board changed (and a new tile was spawned).
    pub changed: bool,
    /// Points earned from merges in this move.
    pub score_delta: u32,
    /// Whether the game is over after this move.
    pub game_over: bool,
}

/// Read-only view of the session, refreshed after every move and restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub grid: Grid,
    pub score: u32,
    pub game_over: bool,
}

/// A single game: the grid, the score and the RNG driving spawns.
///
/// The session is the only mutator of its grid and score. It is synchronous
/// and non-reentrant; embedders dispatching from multiple threads must
/// serialize access themselves.
pub struct GameSession {
    grid: Grid,
    score: u32,
    rng: SmallRng,
    state: State,
}

impl GameSession {
    /// Start a session on a `size` x `size` grid with a seeded RNG.
    ///
    /// The board opens with two spawned tiles and a score of 0. Panics if
    /// `size < 2`.
    pub fn new(size: usize, seed: u64) -> Self {
        let mut session = GameSession {
            grid: Grid::new(size),
            score: 0,
            rng: SmallRng::seed_from_u64(seed),
            state: State::Active,
        };
        session.seed_tiles();
        session
    }

    /// Start a session on the default 4x4 grid.
    pub fn with_default_size(seed: u64) -> Self {
        Self::new(grid::DEFAULT_SIZE, seed)
    }

    /// Apply one move in the given direction.
    ///
    /// Resolves the slide/merge, accumulates the score delta, spawns one
    /// tile if the board changed and still has room, then re-evaluates the
    /// game-over condition. Returns `InvalidTransition` once the game is
    /// over; callers should treat that as a rejected action.
    pub fn apply_move(&mut self, direction: Direction) -> Result<StepResult, GameError> {
        if self.state == State::Over {
            return Err(GameError::InvalidTransition);
        }

        let outcome = resolve::resolve_move(&self.grid, direction);
        let changed = outcome.changed;
        let score_delta = outcome.score_delta;
        self.grid = outcome.grid;
        self.score += score_delta;

        // A no-op move never spawns; a changed move is guaranteed room
        // unless the spawn-free board filled exactly, so guard anyway.
        if changed && !self.grid.is_full() {
            spawn::spawn_tile(&mut self.grid, &mut self.rng)?;
        }

        if terminal::is_terminal(&self.grid) {
            self.state = State::Over;
            debug!(score = self.score, "game over");
        }

        trace!(?direction, changed, score_delta, "applied move");
        Ok(StepResult {
            changed,
            score_delta,
            game_over: self.is_over(),
        })
    }

    /// True when a move in `direction` would change the board.
    pub fn can_move(&self, direction: Direction) -> bool {
        resolve::resolve_move(&self.grid, direction).changed
    }

    /// Reset to a fresh board: empty grid, score 0, two spawned tiles.
    ///
    /// Valid from any state, including game over. The RNG stream continues
    /// rather than re-seeding, so an entire session history stays
    /// reproducible from its original seed.
    pub fn restart(&mut self) {
        self.grid = Grid::new(self.grid.size());
        self.score = 0;
        self.state = State::Active;
        self.seed_tiles();
        debug!("session restarted");
    }

    /// Current board.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Whether the session has reached game over.
    pub fn is_over(&self) -> bool {
        self.state == State::Over
    }

    /// Owned deep copy of the observable state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid.clone(),
            score: self.score,
            game_over: self.is_over(),
        }
    }

    fn seed_tiles(&mut self) {
        for _ in 0..2 {
            // Cannot fail: the board was just cleared and holds >= 4 cells.
            spawn::spawn_tile(&mut self.grid, &mut self.rng).ok();
        }
    }
}
