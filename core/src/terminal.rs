//! Game-over detection.

use crate::Grid;

/// True when no move in any direction could change the grid.
///
/// Holds exactly when the board is full and no two equal tiles are adjacent
/// horizontally or vertically: any state-changing move needs either an empty
/// cell to slide into or an adjacent equal pair to merge.
pub fn is_terminal(grid: &Grid) -> bool {
    if !grid.is_full() {
        return false;
    }
    let n = grid.size();
    for row in 0..n {
        for col in 0..n {
            let value = grid.at(row, col);
            if col + 1 < n && grid.at(row, col + 1) == value {
                return false;
            }
            if row + 1 < n && grid.at(row + 1, col) == value {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    // Full 4x4 checkerboard with no equal neighbors anywhere.
    fn locked_grid() -> Grid {
        Grid::from_cells(4, vec![2, 4, 2, 4, 4, 2, 4, 2, 2, 4, 2, 4, 4, 2, 4, 2])
    }

    #[test]
    fn test_locked_grid_is_terminal() {
        assert!(is_terminal(&locked_grid()));
    }

    #[test]
    fn test_any_empty_cell_means_not_terminal() {
        let mut grid = locked_grid();
        grid.set(2, 2, 0).unwrap();
        assert!(!is_terminal(&grid));
    }

    #[test]
    fn test_horizontal_pair_means_not_terminal() {
        let grid = Grid::from_cells(
            4,
            vec![2, 2, 4, 8, 4, 8, 16, 32, 8, 16, 32, 64, 16, 32, 64, 128],
        );
        assert!(!is_terminal(&grid));
    }

    #[test]
    fn test_vertical_pair_means_not_terminal() {
        let grid = Grid::from_cells(
            4,
            vec![2, 4, 8, 16, 2, 8, 16, 32, 4, 16, 32, 64, 8, 32, 64, 128],
        );
        assert!(!is_terminal(&grid));
    }

    #[test]
    fn test_empty_grid_not_terminal() {
        assert!(!is_terminal(&Grid::new(4)));
    }
}
