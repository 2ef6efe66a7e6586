// rules.rs - Neighbor counting and the B3/S23 transition

use crate::grid::{Cell, Grid};

/// Moore neighborhood as `(dx, dy)` offsets.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Counts alive cells around `(x, y)`. Positions past the grid edge are
/// skipped; the grid does not wrap.
pub fn live_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
    let mut count = 0;
    for &(dx, dy) in &NEIGHBOR_OFFSETS {
        let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
            continue;
        };
        if grid.is_alive(nx, ny) {
            count += 1;
        }
    }
    count
}

/// Next state of one cell given its live neighbor count.
pub fn next_state(cell: Cell, neighbors: u8) -> Cell {
    match (cell, neighbors) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive, // Survival
        (Cell::Dead, 3)                     => Cell::Alive, // Birth
        _                                   => Cell::Dead,  // Death or stays dead
    }
}

/// Writes the generation after `current` into `next`.
///
/// Every cell of `next` is overwritten. Panics before touching `next` if the
/// two grids differ in size.
pub fn step(current: &Grid, next: &mut Grid) {
    assert!(
        current.same_dimensions(next),
        "generation buffers differ in size: {}x{} vs {}x{}",
        current.width(),
        current.height(),
        next.width(),
        next.height(),
    );

    let width = current.width();
    for (i, (src, dst)) in current.cells().iter().zip(next.cells_mut()).enumerate() {
        let (x, y) = (i % width, i / width);
        *dst = next_state(*src, live_neighbors(current, x, y));
    }
}
