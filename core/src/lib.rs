//! # Sliding-tile merge puzzle engine
//!
//! A pure Rust implementation of 2048-style board logic with a deterministic,
//! seedable PRNG for reproducible gameplay. The engine consumes canonical
//! [`Direction`] values and publishes immutable snapshots; window, key-binding
//! and rendering concerns belong entirely to the embedding presentation layer.
//!
//! ## Example
//!
//! ```rust
//! use tilemerge_core::{Direction, GameSession};
//!
//! let mut session = GameSession::with_default_size(42);
//! let result = session.apply_move(Direction::Left).unwrap();
//! println!("Score: {}, Changed: {}", session.score(), result.changed);
//! ```

pub mod error;
pub mod grid;
pub mod orient;
pub mod resolve;
pub mod session;
pub mod spawn;
pub mod terminal;

pub use error::GameError;
pub use grid::Grid;
pub use resolve::{resolve_move, MoveOutcome};
pub use session::{GameSession, Snapshot, StepResult};

/// The four possible move directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl Direction {
    /// Convert a u8 to a Direction (0=Up, 1=Down, 2=Left, 3=Right).
    /// Returns None for invalid values.
    pub fn from_u8(value: u8) -> Option<Direction> {
        match value {
            0 => Some(Direction::Up),
            1 => Some(Direction::Down),
            2 => Some(Direction::Left),
            3 => Some(Direction::Right),
            _ => None,
        }
    }

    /// Get all four directions.
    pub fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_u8() {
        assert_eq!(Direction::from_u8(0), Some(Direction::Up));
        assert_eq!(Direction::from_u8(1), Some(Direction::Down));
        assert_eq!(Direction::from_u8(2), Some(Direction::Left));
        assert_eq!(Direction::from_u8(3), Some(Direction::Right));
        assert_eq!(Direction::from_u8(4), None);
        assert_eq!(Direction::from_u8(255), None);
    }

    #[test]
    fn test_direction_all() {
        let all = Direction::all();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0], Direction::Up);
        assert_eq!(all[3], Direction::Right);
    }
}
