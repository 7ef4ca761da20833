//! Board storage.

use crate::GameError;
use std::fmt;

/// Side length used when no explicit size is requested.
pub const DEFAULT_SIZE: usize = 4;

/// Square board of tile values in row-major order.
///
/// `0` marks an empty cell; every non-zero cell holds a power of two >= 2.
/// The side length is fixed at construction. Cloning produces a deep copy,
/// which is how intermediate transforms avoid aliasing the live state.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<u32>,
}

impl Grid {
    /// Create an empty `size` x `size` grid.
    ///
    /// Panics if `size < 2`: a smaller board cannot hold the two seed tiles.
    pub fn new(size: usize) -> Self {
        assert!(size >= 2, "grid size must be at least 2");
        Grid {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Build a grid from row-major cell values.
    ///
    /// Panics if the length is not `size * size` or any value is neither
    /// zero nor a power of two >= 2.
    pub fn from_cells(size: usize, cells: Vec<u32>) -> Self {
        assert!(size >= 2, "grid size must be at least 2");
        assert_eq!(cells.len(), size * size, "cell count must be size * size");
        assert!(
            cells.iter().all(|&v| v == 0 || (v >= 2 && v.is_power_of_two())),
            "cell values must be 0 or powers of two >= 2"
        );
        Grid { size, cells }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major view of all cells.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Value at `(row, col)`, or `OutOfBounds` for indices >= size.
    pub fn get(&self, row: usize, col: usize) -> Result<u32, GameError> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Write `value` at `(row, col)`, or `OutOfBounds` for indices >= size.
    pub fn set(&mut self, row: usize, col: usize, value: u32) -> Result<(), GameError> {
        let i = self.index(row, col)?;
        self.cells[i] = value;
        Ok(())
    }

    /// All `(row, col)` positions currently holding 0, in unspecified order.
    pub fn empty_positions(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == 0)
            .map(|(i, _)| (i / self.size, i % self.size))
            .collect()
    }

    /// True when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// Largest tile value on the board.
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, GameError> {
        if row < self.size && col < self.size {
            Ok(row * self.size + col)
        } else {
            Err(GameError::OutOfBounds {
                row,
                col,
                size: self.size,
            })
        }
    }

    // Internal unchecked accessors. Callers iterate within [0, size).
    pub(crate) fn at(&self, row: usize, col: usize) -> u32 {
        self.cells[row * self.size + col]
    }

    pub(crate) fn put(&mut self, row: usize, col: usize, value: u32) {
        self.cells[row * self.size + col] = value;
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [u32] {
        let start = row * self.size;
        &mut self.cells[start..start + self.size]
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.size, self.size)?;
        for row in 0..self.size {
            for col in 0..self.size {
                let val = self.at(row, col);
                if val == 0 {
                    write!(f, "    .")?;
                } else {
                    write!(f, "{:5}", val)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = format!("{}+", "+------".repeat(self.size));
        writeln!(f, "{}", border)?;
        for row in 0..self.size {
            write!(f, "|")?;
            for col in 0..self.size {
                let val = self.at(row, col);
                if val == 0 {
                    write!(f, "      |")?;
                } else {
                    write!(f, "{:^6}|", val)?;
                }
            }
            writeln!(f)?;
            writeln!(f, "{}", border)?;
        }
        Ok(())
    }
}
