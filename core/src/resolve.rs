//! Direction-agnostic move resolution.

use crate::{orient, Direction, Grid};

/// Result of resolving one move, produced atomically.
///
/// `changed == false` implies `score_delta == 0` and `grid` identical to the
/// input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether any cell differs from the pre-move grid.
    pub changed: bool,
    /// Sum of the values of tiles formed by merges in this move.
    pub score_delta: u32,
    /// The post-move grid.
    pub grid: Grid,
}

/// Slide and merge `grid` toward `direction`.
///
/// The grid is normalized so the move becomes a leftward one, every row is
/// compacted and merged independently, and the orientation is restored.
/// Total over any valid grid; the input is never mutated.
pub fn resolve_move(grid: &Grid, direction: Direction) -> MoveOutcome {
    let mut working = orient::normalize(grid, direction);
    let mut score_delta = 0;
    for row in 0..working.size() {
        score_delta += shift_row_left(working.row_mut(row));
    }
    let after = orient::restore(&working, direction);
    let changed = after != *grid;
    MoveOutcome {
        changed,
        score_delta,
        grid: after,
    }
}

/// Compact then merge a single row toward index 0, returning merge points.
///
/// There is no second compaction: the gap a merge leaves behind stays where
/// it is for the rest of the move, so `[2, 2, 2, 0]` resolves to
/// `[4, 0, 2, 0]` with the trailing 2 left in place.
fn shift_row_left(line: &mut [u32]) -> u32 {
    compact(line);
    merge(line)
}

/// Stable partition: non-zero values keep their order at the front, zeros
/// fill the rest.
fn compact(line: &mut [u32]) {
    let mut write = 0;
    for read in 0..line.len() {
        if line[read] != 0 {
            if write != read {
                line[write] = line[read];
                line[read] = 0;
            }
            write += 1;
        }
    }
}

/// Single left-to-right merge pass. A merged pair is skipped over, so the
/// doubled tile is never merged again within the same move.
fn merge(line: &mut [u32]) -> u32 {
    let mut delta = 0;
    let mut k = 0;
    while k + 1 < line.len() {
        if line[k] != 0 && line[k] == line[k + 1] {
            line[k] *= 2;
            line[k + 1] = 0;
            delta += line[k];
            k += 2;
        } else {
            k += 1;
        }
    }
    delta
}
