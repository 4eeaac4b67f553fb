//! The run loop: initialize a grid, then render, step, swap and wait until
//! the grid converges or the waiter asks to stop.
//!
//! There is no iteration cap. Oscillating or growing patterns run until
//! the [`Waiter`] returns [`Flow::Stop`].

use crate::config;
use crate::engine::{Engine, StepResult};
use crate::error::{ResultCode, RunError};
use crate::grid::Grid;
use crate::render::CellStyle;
use rand::Rng;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// Delay used when none (or zero) is configured.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(50);

/// Arguments for one run. Validation of raw command-line syntax happens
/// before this point.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunConfig {
    /// Grid width for random initialization; 0 selects the default.
    pub width: u16,
    /// Grid height for random initialization; 0 selects the default.
    pub height: u16,
    /// Delay between frames in milliseconds; 0 selects [`DEFAULT_DELAY`].
    pub delay_ms: u64,
    /// Cell characters and background mode.
    pub style: CellStyle,
    /// Configuration file to load instead of a random grid.
    pub file: Option<PathBuf>,
    /// Treat opposite edges as adjacent.
    pub wrap: bool,
}

impl RunConfig {
    /// Effective delay between frames.
    #[must_use]
    pub fn delay(&self) -> Duration {
        if self.delay_ms == 0 {
            DEFAULT_DELAY
        } else {
            Duration::from_millis(self.delay_ms)
        }
    }
}

/// What the renderer sees each iteration.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// The generation about to be stepped.
    pub grid: &'a Grid,
    /// Steps taken before this frame.
    pub generation: u64,
}

/// Draws frames. Called once per iteration, before stepping.
pub trait Renderer {
    /// Draw one frame.
    ///
    /// # Errors
    ///
    /// Returns an error if output fails.
    fn render(&mut self, frame: &Frame<'_>) -> io::Result<()>;
}

/// Whether the loop should keep going after a wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Carry on with the next iteration.
    Continue,
    /// Stop now; the run ends with [`Outcome::Stopped`].
    Stop,
}

/// Blocks between iterations.
pub trait Waiter {
    /// Wait for `delay`, or less if an interruption arrives.
    ///
    /// # Errors
    ///
    /// Returns an error if the wait could not be performed.
    fn wait(&mut self, delay: Duration) -> io::Result<Flow>;
}

/// Waiter that sleeps the thread and never stops the run.
#[derive(Debug, Clone, Copy, Default)]
pub struct SleepWaiter;

impl Waiter for SleepWaiter {
    fn wait(&mut self, delay: Duration) -> io::Result<Flow> {
        std::thread::sleep(delay);
        Ok(Flow::Continue)
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The grid reached a fixed point after `generations` steps.
    Converged {
        /// Steps taken, including the one that detected convergence.
        generations: u64,
    },
    /// The waiter stopped the run after `generations` steps.
    Stopped {
        /// Steps taken before stopping.
        generations: u64,
    },
}

impl Outcome {
    /// Steps taken during the run.
    #[must_use]
    pub const fn generations(self) -> u64 {
        match self {
            Self::Converged { generations } | Self::Stopped { generations } => generations,
        }
    }

    /// The logical result code.
    #[must_use]
    pub const fn code(self) -> ResultCode {
        match self {
            Self::Converged { .. } => ResultCode::Converged,
            Self::Stopped { .. } => ResultCode::Ok,
        }
    }
}

/// Lifecycle of a [`Simulation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Buffers allocated, nothing rendered yet.
    Ready,
    /// At least one iteration done, more to come.
    Stepping,
    /// Terminal: the run produced an outcome.
    Finished(Outcome),
}

/// A single run: one engine and the iteration state machine around it.
#[derive(Debug, Clone)]
pub struct Simulation {
    engine: Engine,
    delay: Duration,
    state: RunState,
}

impl Simulation {
    /// Initialize from `config`: load the configured file, or fill a random
    /// grid from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Config`] if the file is rejected and
    /// [`RunError::Dimension`] if random dimensions are out of range.
    pub fn new<R: Rng + ?Sized>(config: &RunConfig, rng: &mut R) -> Result<Self, RunError> {
        let grid = match &config.file {
            Some(path) => config::load(path)?,
            None => Grid::random(config.width, config.height, rng)?,
        };
        tracing::info!(
            width = grid.width(),
            height = grid.height(),
            wrap = config.wrap,
            from_file = config.file.is_some(),
            "initialized grid"
        );
        Ok(Self::from_grid(grid, config.wrap, config.delay()))
    }

    /// Start from an explicit grid.
    #[must_use]
    pub fn from_grid(grid: Grid, wrap: bool, delay: Duration) -> Self {
        Self {
            engine: Engine::new(grid, wrap),
            delay,
            state: RunState::Ready,
        }
    }

    /// The generation shown by the next frame.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        self.engine.current()
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> RunState {
        self.state
    }

    /// Steps taken so far.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.engine.generation()
    }

    /// Run one iteration: render, step, swap, wait.
    ///
    /// Returns the outcome once the run has finished; calling again after
    /// that returns the same outcome without doing anything.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Terminal`] if the renderer or waiter fails.
    pub fn tick<R, W>(&mut self, renderer: &mut R, waiter: &mut W) -> Result<Option<Outcome>, RunError>
    where
        R: Renderer + ?Sized,
        W: Waiter + ?Sized,
    {
        if let RunState::Finished(outcome) = self.state {
            return Ok(Some(outcome));
        }

        renderer.render(&Frame {
            grid: self.engine.current(),
            generation: self.engine.generation(),
        })?;
        let result = self.engine.step();
        let flow = waiter.wait(self.delay)?;

        let generations = self.engine.generation();
        let outcome = match (result, flow) {
            (StepResult::Converged, _) => Some(Outcome::Converged { generations }),
            (StepResult::Ongoing, Flow::Stop) => Some(Outcome::Stopped { generations }),
            (StepResult::Ongoing, Flow::Continue) => None,
        };

        self.state = match outcome {
            Some(outcome) => {
                tracing::info!(?outcome, "run finished");
                RunState::Finished(outcome)
            }
            None => RunState::Stepping,
        };
        Ok(outcome)
    }

    /// Iterate until the run finishes.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Terminal`] if the renderer or waiter fails.
    pub fn run<R, W>(&mut self, renderer: &mut R, waiter: &mut W) -> Result<Outcome, RunError>
    where
        R: Renderer + ?Sized,
        W: Waiter + ?Sized,
    {
        loop {
            if let Some(outcome) = self.tick(renderer, waiter)? {
                return Ok(outcome);
            }
        }
    }
}
