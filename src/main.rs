//! Asciigol CLI - animate Game of Life grids and edit their configuration files.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Asciigol - Conway's Game of Life animated as ASCII in the terminal
#[derive(Parser, Debug)]
#[command(name = "asciigol")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Animate a grid until it converges (press q to stop)
    Run {
        /// Width of a random grid (1-250, default: 100)
        #[arg(long, default_value = "0")]
        width: u16,

        /// Height of a random grid (1-100, default: 40)
        #[arg(long, default_value = "0")]
        height: u16,

        /// Delay between frames in milliseconds (default: 50)
        #[arg(short, long, default_value = "0")]
        delay: u64,

        /// Character representing a live cell
        #[arg(long, default_value = "#")]
        live_char: char,

        /// Character representing a dead cell
        #[arg(long, default_value = " ")]
        dead_char: char,

        /// Configuration file to start from instead of a random grid
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Background color: none, light, or dark
        #[arg(long, default_value = "none")]
        bg: cli::BackgroundArg,

        /// Wrap around to the opposite edge when counting neighbors
        #[arg(short, long)]
        wrap: bool,

        /// Random seed (default: derived from the clock)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Interactively draw a grid and save it as a configuration file
    Gen {
        /// Configuration file to write
        #[arg(short, long, required = true)]
        file: PathBuf,

        /// Grid width (1-250)
        #[arg(long)]
        width: u16,

        /// Grid height (1-100)
        #[arg(long)]
        height: u16,

        /// Initial state of every cell: 0 or 1
        #[arg(long, default_value = "0")]
        cell: cli::CellArg,
    },

    /// Check a configuration file and summarize it
    Validate {
        /// Configuration file to check
        #[arg(required = true)]
        file: PathBuf,

        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: cli::OutputFormat,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("ASCIIGOL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    let result = match args.command {
        Commands::Run {
            width,
            height,
            delay,
            live_char,
            dead_char,
            file,
            bg,
            wrap,
            seed,
        } => cli::run::execute(cli::run::RunArgs {
            width,
            height,
            delay,
            live_char,
            dead_char,
            file,
            bg,
            wrap,
            seed,
        }),

        Commands::Gen {
            file,
            width,
            height,
            cell,
        } => cli::generate::execute(file, width, height, cell),

        Commands::Validate { file, format } => cli::validate::execute(file, format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
