//! Grid and cell types.

use crate::error::InvalidDimension;
use rand::Rng;

/// Widest supported grid.
pub const MAX_WIDTH: u16 = 250;
/// Tallest supported grid.
pub const MAX_HEIGHT: u16 = 100;
/// Width used for random grids when none is given.
pub const DEFAULT_WIDTH: u16 = 100;
/// Height used for random grids when none is given.
pub const DEFAULT_HEIGHT: u16 = 40;

/// A position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    /// Row, counted from the top.
    pub row: u16,
    /// Column, counted from the left.
    pub col: u16,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }
}

/// A fixed-size grid of alive/dead cells.
///
/// Cells are stored in row-major order, one byte each. The buffer length is
/// always exactly `width * height`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a grid with every cell dead.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDimension`] unless `1 <= width <= MAX_WIDTH` and
    /// `1 <= height <= MAX_HEIGHT`.
    pub fn new(width: u16, height: u16) -> Result<Self, InvalidDimension> {
        Self::filled(width, height, false)
    }

    /// Create a grid with every cell set to `alive`.
    ///
    /// # Errors
    ///
    /// Same bounds as [`Grid::new`].
    pub fn filled(width: u16, height: u16, alive: bool) -> Result<Self, InvalidDimension> {
        check_dimensions(u32::from(width), u32::from(height))?;
        Ok(Self {
            width,
            height,
            cells: vec![alive; usize::from(width) * usize::from(height)],
        })
    }

    /// Create a grid from a row-major cell buffer.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDimension`] if the dimensions are out of bounds or
    /// `cells.len()` is not `width * height`.
    pub fn from_cells(width: u16, height: u16, cells: Vec<bool>) -> Result<Self, InvalidDimension> {
        check_dimensions(u32::from(width), u32::from(height))?;
        if cells.len() != usize::from(width) * usize::from(height) {
            return Err(InvalidDimension {
                width: u32::from(width),
                height: u32::from(height),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Create a grid where each cell is alive with probability one half.
    ///
    /// A zero width or height is replaced by [`DEFAULT_WIDTH`] or
    /// [`DEFAULT_HEIGHT`]. The random source is supplied by the caller so
    /// runs can be reproduced from a seed.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDimension`] if a non-zero dimension exceeds the
    /// supported maximum.
    pub fn random<R: Rng + ?Sized>(width: u16, height: u16, rng: &mut R) -> Result<Self, InvalidDimension> {
        let width = if width == 0 { DEFAULT_WIDTH } else { width };
        let height = if height == 0 { DEFAULT_HEIGHT } else { height };
        check_dimensions(u32::from(width), u32::from(height))?;

        let size = usize::from(width) * usize::from(height);
        let cells = (0..size).map(|_| rng.gen_bool(0.5)).collect();
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Width in cells.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Height in cells.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a valid grid holds at least one cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The raw cell buffer in row-major order.
    #[must_use]
    #[inline]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Mutable access to the raw cell buffer.
    #[must_use]
    #[inline]
    pub fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    /// Check if a coordinate lies on the grid.
    #[must_use]
    pub const fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(usize::from(coord.row) * usize::from(self.width) + usize::from(coord.col))
        } else {
            None
        }
    }

    /// Whether the cell at `coord` is alive. Off-grid cells read as dead.
    #[must_use]
    #[inline]
    pub fn is_alive(&self, coord: Coord) -> bool {
        self.index(coord).is_some_and(|idx| self.cells[idx])
    }

    /// Set the cell at `coord`.
    ///
    /// Returns `false` if the coordinate is off the grid.
    pub fn set(&mut self, coord: Coord, alive: bool) -> bool {
        if let Some(idx) = self.index(coord) {
            self.cells[idx] = alive;
            true
        } else {
            false
        }
    }

    /// Number of live cells.
    #[must_use]
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Iterate over rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks_exact(usize::from(self.width))
    }

    /// Whether `other` has the same dimensions.
    #[must_use]
    pub const fn same_shape(&self, other: &Grid) -> bool {
        self.width == other.width && self.height == other.height
    }
}

/// Validate grid dimensions against the supported bounds.
///
/// # Errors
///
/// Returns [`InvalidDimension`] if either dimension is zero or too large.
pub fn check_dimensions(width: u32, height: u32) -> Result<(), InvalidDimension> {
    let width_ok = (1..=u32::from(MAX_WIDTH)).contains(&width);
    let height_ok = (1..=u32::from(MAX_HEIGHT)).contains(&height);
    if width_ok && height_ok {
        Ok(())
    } else {
        Err(InvalidDimension { width, height })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(7, 3).unwrap();
        assert_eq!(grid.len(), 21);
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.rows().count(), 3);
        assert!(grid.rows().all(|row| row.len() == 7));
    }

    #[test]
    fn test_bounds() {
        assert!(Grid::new(MAX_WIDTH, MAX_HEIGHT).is_ok());
        assert!(Grid::new(1, 1).is_ok());
        assert_eq!(
            Grid::new(0, 5),
            Err(InvalidDimension { width: 0, height: 5 })
        );
        assert!(Grid::new(MAX_WIDTH + 1, 1).is_err());
        assert!(Grid::new(1, MAX_HEIGHT + 1).is_err());
    }

    #[test]
    fn test_random_uses_defaults_for_zero() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Grid::random(0, 0, &mut rng).unwrap();
        assert_eq!(grid.width(), DEFAULT_WIDTH);
        assert_eq!(grid.height(), DEFAULT_HEIGHT);

        let grid = Grid::random(12, 0, &mut rng).unwrap();
        assert_eq!((grid.width(), grid.height()), (12, DEFAULT_HEIGHT));
    }

    #[test]
    fn test_random_rejects_oversize() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            Grid::random(251, 10, &mut rng),
            Err(InvalidDimension { width: 251, height: 10 })
        );
        assert!(Grid::random(10, 101, &mut rng).is_err());
    }

    #[test]
    fn test_random_is_reproducible_from_seed() {
        let a = Grid::random(40, 20, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = Grid::random(40, 20, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
        // 800 fair coin flips: all-dead or all-alive would be absurd
        assert!(a.population() > 0 && a.population() < a.len());
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new(4, 3).unwrap();
        assert!(grid.set(Coord::new(2, 3), true));
        assert!(grid.is_alive(Coord::new(2, 3)));
        assert!(grid.cells()[11]);
        assert!(!grid.set(Coord::new(3, 0), true));
        assert!(!grid.is_alive(Coord::new(0, 4)));
    }

    #[test]
    fn test_from_cells_length_mismatch() {
        assert!(Grid::from_cells(2, 2, vec![true; 3]).is_err());
        let grid = Grid::from_cells(2, 2, vec![true, false, false, true]).unwrap();
        assert_eq!(grid.population(), 2);
    }
}
