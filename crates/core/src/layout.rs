//! Tile layout generation.
//!
//! Small rounds use rejection sampling (draw a random cell, retry on
//! collision). Once a round covers more than half the grid the expected
//! number of retries grows quickly, so larger rounds shuffle every cell and
//! take a prefix instead. Both paths always terminate because the requested
//! count is clamped to the number of cells.

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use crate::types::{Position, GRID_CELLS};

/// Up to this many tiles, rejection sampling is used.
pub const REJECTION_SAMPLING_LIMIT: usize = GRID_CELLS / 2;

/// Generate `count` pairwise distinct positions (clamped to the grid size).
pub fn generate_positions(rng: &mut SimpleRng, count: usize) -> ArrayVec<Position, GRID_CELLS> {
    let count = count.min(GRID_CELLS);
    if count <= REJECTION_SAMPLING_LIMIT {
        rejection_sample(rng, count)
    } else {
        shuffle_take(rng, count)
    }
}

fn rejection_sample(rng: &mut SimpleRng, count: usize) -> ArrayVec<Position, GRID_CELLS> {
    let mut taken = [false; GRID_CELLS];
    let mut out = ArrayVec::new();
    while out.len() < count {
        let pos = rng.next_position();
        if taken[pos.index()] {
            continue;
        }
        taken[pos.index()] = true;
        out.push(pos);
    }
    out
}

fn shuffle_take(rng: &mut SimpleRng, count: usize) -> ArrayVec<Position, GRID_CELLS> {
    let mut cells: ArrayVec<Position, GRID_CELLS> =
        (0..GRID_CELLS).filter_map(Position::from_index).collect();
    rng.shuffle(&mut cells);
    cells.truncate(count);
    cells
}
