//! Generation stepping: neighbor counts, the transition rule, and the
//! double-buffered engine that swaps current and next grids.
//!
//! Convergence means a fixed point only. Oscillators such as the blinker
//! never converge, so a run over them only ends when interrupted.

use crate::grid::{Coord, Grid};
use std::mem;

/// Outcome of computing one generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// At least one cell changed.
    Ongoing,
    /// No cell changed: the grid is a fixed point.
    Converged,
}

/// Relative positions of the eight neighbors.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Count live cells around `(row, col)`.
///
/// Without `wrap`, off-grid positions are skipped, so corners see three
/// neighbors and edges five. With `wrap`, indices wrap modulo the grid
/// size and all eight positions are read. A position that aliases the
/// center cell (grids narrower or shorter than three) is never counted.
#[must_use]
pub fn count_live_neighbors(grid: &Grid, row: u16, col: u16, wrap: bool) -> u8 {
    let width = i32::from(grid.width());
    let height = i32::from(grid.height());
    let (row, col) = (i32::from(row), i32::from(col));
    let cells = grid.cells();

    let mut count = 0u8;
    for (dr, dc) in NEIGHBOR_OFFSETS {
        let (mut r, mut c) = (row + dr, col + dc);
        if wrap {
            r = r.rem_euclid(height);
            c = c.rem_euclid(width);
        } else if r < 0 || r >= height || c < 0 || c >= width {
            continue;
        }
        if r == row && c == col {
            continue;
        }
        // r and c are within 0..height and 0..width here
        #[allow(clippy::cast_sign_loss)]
        let idx = (r * width + c) as usize;
        if cells[idx] {
            count += 1;
        }
    }
    count
}

/// Conway's rule: survive on 2 or 3, birth on exactly 3.
#[must_use]
#[inline]
pub const fn transition(is_alive: bool, live_neighbors: u8) -> bool {
    matches!((is_alive, live_neighbors), (true, 2 | 3) | (false, 3))
}

/// Write the generation after `current` into `next`.
///
/// Returns [`StepResult::Converged`] when `next` ends up identical to
/// `current`.
///
/// # Panics
///
/// Panics if the two grids differ in shape; [`Engine`] never lets that
/// happen.
pub fn step(current: &Grid, next: &mut Grid, wrap: bool) -> StepResult {
    assert!(current.same_shape(next), "generation buffers must share dimensions");

    let width = current.width();
    let mut changed = false;
    for (idx, (out, &alive)) in next
        .cells_mut()
        .iter_mut()
        .zip(current.cells())
        .enumerate()
    {
        // idx < width * height, both of which fit in u16
        #[allow(clippy::cast_possible_truncation)]
        let coord = Coord::new((idx / usize::from(width)) as u16, (idx % usize::from(width)) as u16);
        let neighbors = count_live_neighbors(current, coord.row, coord.col, wrap);
        let new_state = transition(alive, neighbors);
        changed |= new_state != alive;
        *out = new_state;
    }

    if changed {
        StepResult::Ongoing
    } else {
        StepResult::Converged
    }
}

/// Owns the current and next generation buffers for one run.
///
/// Both buffers are allocated once; each [`Engine::step`] swaps their roles
/// instead of copying.
#[derive(Debug, Clone)]
pub struct Engine {
    current: Grid,
    next: Grid,
    wrap: bool,
    generation: u64,
}

impl Engine {
    /// Take ownership of an initial grid.
    #[must_use]
    pub fn new(initial: Grid, wrap: bool) -> Self {
        let next = initial.clone();
        Self {
            current: initial,
            next,
            wrap,
            generation: 0,
        }
    }

    /// The generation that will be read by the next step.
    #[must_use]
    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// Whether neighbor counting wraps around the edges.
    #[must_use]
    pub const fn wrap(&self) -> bool {
        self.wrap
    }

    /// Number of steps taken so far.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Compute the next generation and swap buffers.
    pub fn step(&mut self) -> StepResult {
        let result = step(&self.current, &mut self.next, self.wrap);
        mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
        tracing::debug!(generation = self.generation, ?result, "stepped");
        result
    }

    /// Give back the current generation.
    #[must_use]
    pub fn into_grid(self) -> Grid {
        self.current
    }
}
