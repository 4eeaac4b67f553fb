//! Run command implementation - animate a grid in the terminal.

use super::terminal::{KeyWaiter, TerminalSession};
use super::{BackgroundArg, CliError};
use asciigol::{AnsiRenderer, CellStyle, RunConfig, Simulation};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::stdout;
use std::path::PathBuf;

/// Arguments of the `run` command.
#[derive(Debug)]
pub(crate) struct RunArgs {
    pub(crate) width: u16,
    pub(crate) height: u16,
    pub(crate) delay: u64,
    pub(crate) live_char: char,
    pub(crate) dead_char: char,
    pub(crate) file: Option<PathBuf>,
    pub(crate) bg: BackgroundArg,
    pub(crate) wrap: bool,
    pub(crate) seed: Option<u64>,
}

impl RunArgs {
    fn config(&self) -> RunConfig {
        RunConfig {
            width: self.width,
            height: self.height,
            delay_ms: self.delay,
            style: CellStyle {
                live_char: self.live_char,
                dead_char: self.dead_char,
                background: self.bg.into(),
            },
            file: self.file.clone(),
            wrap: self.wrap,
        }
    }
}

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if the grid cannot be initialized or the terminal fails.
pub(crate) fn execute(args: RunArgs) -> Result<(), CliError> {
    let config = args.config();

    // Generate seed if not provided
    let seed = args.seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(42)
    });
    tracing::debug!(seed, "seeding random source");
    let mut rng = StdRng::seed_from_u64(seed);

    // Input errors end the run before the terminal is touched
    let mut simulation = Simulation::new(&config, &mut rng)?;

    let outcome = {
        let _session = TerminalSession::start()?;
        let mut renderer = AnsiRenderer::new(stdout(), config.style);
        simulation.run(&mut renderer, &mut KeyWaiter)?
    };

    println!("Result: {}", outcome.code());
    println!("Generations: {}", outcome.generations());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use asciigol::Background;

    #[test]
    fn test_args_map_to_config() {
        let args = RunArgs {
            width: 20,
            height: 0,
            delay: 0,
            live_char: 'x',
            dead_char: 'x',
            file: None,
            bg: BackgroundArg::Dark,
            wrap: true,
            seed: Some(1),
        };
        let config = args.config();
        assert_eq!(config.width, 20);
        assert_eq!(config.delay(), asciigol::run::DEFAULT_DELAY);
        assert_eq!(config.style.background, Background::Dark);
        assert!(config.wrap);
    }
}
