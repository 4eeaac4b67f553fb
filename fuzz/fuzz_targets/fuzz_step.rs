#![no_main]

use arbitrary::Arbitrary;
use asciigol::{Engine, Grid, StepResult};
use libfuzzer_sys::fuzz_target;

/// Structured input for engine fuzzing.
#[derive(Arbitrary, Debug)]
struct StepInput {
    /// Grid width before clamping.
    width: u8,
    /// Grid height before clamping.
    height: u8,
    /// Cell bits, repeated to fill the grid.
    cells: Vec<bool>,
    /// Whether neighbor counting wraps around.
    wrap: bool,
    /// Generations to run.
    steps: u8,
}

fuzz_target!(|input: StepInput| {
    let width = u16::from(input.width % 64) + 1;
    let height = u16::from(input.height % 64) + 1;
    let size = usize::from(width) * usize::from(height);

    let cells: Vec<bool> = if input.cells.is_empty() {
        vec![false; size]
    } else {
        input.cells.iter().copied().cycle().take(size).collect()
    };
    let Ok(grid) = Grid::from_cells(width, height, cells) else {
        return;
    };

    let mut engine = Engine::new(grid, input.wrap);
    for _ in 0..input.steps % 32 {
        let before = engine.current().clone();
        let result = engine.step();
        assert_eq!(engine.current().width(), width);
        assert_eq!(engine.current().height(), height);
        assert_eq!(result == StepResult::Converged, *engine.current() == before);
        if result == StepResult::Converged {
            break;
        }
    }
});
