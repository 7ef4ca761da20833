//! Orientation normalization.
//!
//! All four directional moves reduce to a single "move left" pass: the grid
//! is reoriented so the target direction becomes left, the row algorithm
//! runs, and the reorientation is undone. Each transform builds a fresh
//! [`Grid`] so working copies never alias the live state.

use crate::{Direction, Grid};

impl Grid {
    /// New grid with rows and columns swapped.
    pub fn transposed(&self) -> Grid {
        let n = self.size();
        let mut out = Grid::new(n);
        for row in 0..n {
            for col in 0..n {
                out.put(col, row, self.at(row, col));
            }
        }
        out
    }

    /// New grid with each row reversed horizontally.
    pub fn reversed_rows(&self) -> Grid {
        let n = self.size();
        let mut out = Grid::new(n);
        for row in 0..n {
            for col in 0..n {
                out.put(row, n - 1 - col, self.at(row, col));
            }
        }
        out
    }
}

/// Reorient `grid` so that sliding toward `direction` becomes sliding left.
pub fn normalize(grid: &Grid, direction: Direction) -> Grid {
    match direction {
        Direction::Left => grid.clone(),
        Direction::Right => grid.reversed_rows(),
        Direction::Up => grid.transposed(),
        Direction::Down => grid.transposed().reversed_rows(),
    }
}

/// Undo [`normalize`], applying the inverse transforms in reverse order.
pub fn restore(grid: &Grid, direction: Direction) -> Grid {
    match direction {
        Direction::Left => grid.clone(),
        Direction::Right => grid.reversed_rows(),
        Direction::Up => grid.transposed(),
        Direction::Down => grid.reversed_rows().transposed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::from_cells(3, vec![2, 4, 8, 0, 16, 0, 32, 0, 64])
    }

    #[test]
    fn test_transpose() {
        let grid = sample().transposed();
        assert_eq!(grid.cells(), &[2, 0, 32, 4, 16, 0, 8, 0, 64]);
    }

    #[test]
    fn test_transpose_is_involution() {
        let grid = sample();
        assert_eq!(grid.transposed().transposed(), grid);
    }

    #[test]
    fn test_reverse_rows() {
        let grid = sample().reversed_rows();
        assert_eq!(grid.cells(), &[8, 4, 2, 0, 16, 0, 64, 0, 32]);
    }

    #[test]
    fn test_reverse_rows_is_involution() {
        let grid = sample();
        assert_eq!(grid.reversed_rows().reversed_rows(), grid);
    }

    #[test]
    fn test_normalize_restore_roundtrip() {
        let grid = sample();
        for direction in Direction::all() {
            let roundtrip = restore(&normalize(&grid, direction), direction);
            assert_eq!(roundtrip, grid, "round trip failed for {:?}", direction);
        }
    }

    #[test]
    fn test_down_normalization_puts_bottom_leftmost() {
        // Column 0 is [2, 0, 4] top to bottom; after normalizing for Down
        // the bottom tile must sit at the left edge of some row.
        let grid = Grid::from_cells(3, vec![2, 0, 0, 0, 0, 0, 4, 0, 0]);
        let normalized = normalize(&grid, Direction::Down);
        assert_eq!(normalized.get(0, 0).unwrap(), 4);
        assert_eq!(normalized.get(0, 2).unwrap(), 2);
    }
}
