// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Asciigol: Conway's Game of Life animated as ASCII in the terminal.
//!
//! This crate provides:
//! - A fixed-size grid with optional toroidal wraparound
//! - A double-buffered engine that detects fixed points
//! - A strict codec for the `asciigol` configuration file format
//! - A run loop that sequences rendering, stepping and waiting
//! - The editing model behind the configuration generator
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Run Loop (render → step → wait)   │
//! ├──────────────────┬──────────────────┤
//! │   Grid Engine    │  Frame Renderer  │
//! ├──────────────────┴──────────────────┤
//! │  Config Codec  │  Random Initializer│
//! └─────────────────────────────────────┘
//! ```

pub mod config;
pub mod editor;
pub mod engine;
pub mod error;
pub mod grid;
pub mod render;
pub mod run;

pub use error::{ConfigError, DimensionError, InvalidDimension, ResultCode, RunError};

// Re-export key types at crate root for convenience
pub use engine::{Engine, StepResult, count_live_neighbors, step, transition};
pub use grid::{Coord, Grid, MAX_HEIGHT, MAX_WIDTH};
pub use render::{AnsiRenderer, Background, CellStyle};
pub use run::{Flow, Frame, Outcome, Renderer, RunConfig, Simulation, Waiter};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_debug() {
        let outcome = Outcome::Converged { generations: 12 };
        let debug = format!("{outcome:?}");
        assert!(debug.contains("Converged"));
        assert!(debug.contains("12"));
    }
}
