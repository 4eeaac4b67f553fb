//! Editing model behind the configuration generator.
//!
//! The cursor is a linear index over the row-major grid. Left and right
//! step through cells in reading order, running onto the neighboring row;
//! up and down move by a whole row and stop at the top and bottom edges.

use crate::error::InvalidDimension;
use crate::grid::{Coord, Grid};

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// Previous cell.
    Left,
    /// Next cell.
    Right,
}

/// A single editing action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    /// Move the cursor.
    Move(Direction),
    /// Set the cell under the cursor.
    Set(bool),
    /// Flip the cell under the cursor.
    Toggle,
    /// Finish and keep the result.
    Save,
    /// Finish and discard the result.
    Abandon,
}

/// Where editing stands after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorStatus {
    /// Keep accepting commands.
    Editing,
    /// Done; the grid should be written out.
    Save,
    /// Done; nothing should be written.
    Abandon,
}

/// A grid plus a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
    grid: Grid,
    cursor: usize,
}

impl Editor {
    /// Start editing a fresh grid with every cell set to `fill`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDimension`] for sizes outside the grid bounds,
    /// including zero.
    pub fn new(width: u16, height: u16, fill: bool) -> Result<Self, InvalidDimension> {
        Ok(Self::from_grid(Grid::filled(width, height, fill)?))
    }

    /// Start editing an existing grid with the cursor at the top-left.
    #[must_use]
    pub fn from_grid(grid: Grid) -> Self {
        Self { grid, cursor: 0 }
    }

    /// The grid being edited.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Finish editing and take the grid.
    #[must_use]
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Cursor position as a coordinate.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn cursor(&self) -> Coord {
        let width = usize::from(self.grid.width());
        // cursor < width * height, so both parts fit in u16
        Coord::new((self.cursor / width) as u16, (self.cursor % width) as u16)
    }

    /// Apply one command.
    pub fn apply(&mut self, command: EditorCommand) -> EditorStatus {
        match command {
            EditorCommand::Move(direction) => self.move_cursor(direction),
            EditorCommand::Set(alive) => self.grid.cells_mut()[self.cursor] = alive,
            EditorCommand::Toggle => {
                let cell = &mut self.grid.cells_mut()[self.cursor];
                *cell = !*cell;
            }
            EditorCommand::Save => return EditorStatus::Save,
            EditorCommand::Abandon => return EditorStatus::Abandon,
        }
        EditorStatus::Editing
    }

    fn move_cursor(&mut self, direction: Direction) {
        let width = usize::from(self.grid.width());
        let size = self.grid.len();
        match direction {
            Direction::Up if self.cursor >= width => self.cursor -= width,
            Direction::Down if self.cursor + width < size => self.cursor += width,
            Direction::Right if self.cursor + 1 < size => self.cursor += 1,
            Direction::Left if self.cursor > 0 => self.cursor -= 1,
            _ => {}
        }
    }
}
