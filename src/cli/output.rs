//! Output formatting utilities for CLI.

use asciigol::Grid;
use asciigol::engine::{StepResult, step};
use serde::Serialize;

/// JSON-serializable summary of a configuration file.
#[derive(Debug, Serialize)]
pub(super) struct JsonGridSummary {
    /// Path that was checked.
    pub(super) file: String,
    /// Grid width.
    pub(super) width: u16,
    /// Grid height.
    pub(super) height: u16,
    /// Number of live cells.
    pub(super) population: usize,
    /// Whether the first generation leaves the grid unchanged.
    pub(super) still_life: bool,
}

impl JsonGridSummary {
    /// Summarize a decoded grid.
    pub(super) fn from_grid(file: String, grid: &Grid) -> Self {
        Self {
            file,
            width: grid.width(),
            height: grid.height(),
            population: grid.population(),
            still_life: is_still_life(grid),
        }
    }
}

/// One step without wraparound reports no change.
pub(super) fn is_still_life(grid: &Grid) -> bool {
    let mut next = grid.clone();
    step(grid, &mut next, false) == StepResult::Converged
}

/// Format a summary as human-readable text.
pub(super) fn format_text(summary: &JsonGridSummary) -> String {
    let mut output = String::new();

    output.push_str(&format!("Configuration: {}\n", summary.file));
    output.push_str(&format!("  Size:       {}x{}\n", summary.width, summary.height));
    output.push_str(&format!("  Population: {}\n", summary.population));
    output.push_str(&format!(
        "  Still life: {}\n",
        if summary.still_life { "yes" } else { "no" }
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use asciigol::Coord;

    #[test]
    fn test_summary_of_block() {
        let mut grid = Grid::new(4, 4).unwrap();
        for coord in [Coord::new(1, 1), Coord::new(1, 2), Coord::new(2, 1), Coord::new(2, 2)] {
            grid.set(coord, true);
        }
        let summary = JsonGridSummary::from_grid("block.txt".to_string(), &grid);
        assert!(summary.still_life);
        assert_eq!(summary.population, 4);

        let text = format_text(&summary);
        assert!(text.contains("4x4"));
        assert!(text.contains("Still life: yes"));

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["population"], 4);
        assert_eq!(json["still_life"], true);
    }

    #[test]
    fn test_lone_cell_is_not_still() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(Coord::new(1, 1), true);
        assert!(!is_still_life(&grid));
    }
}
