//! Engine error taxonomy.

use thiserror::Error;

/// Everything that can go wrong inside the engine.
///
/// None of these are user-triggerable through the intended flow:
/// `OutOfBounds` and `NoEmptyCell` mark internal or caller bugs, and
/// `InvalidTransition` is a stray move after game over that callers should
/// treat as a rejected action rather than a crash.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("cell ({row}, {col}) out of bounds for {size}x{size} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        size: usize,
    },
    #[error("no empty cell available to spawn a tile")]
    NoEmptyCell,
    #[error("move rejected: the game is over")]
    InvalidTransition,
}
