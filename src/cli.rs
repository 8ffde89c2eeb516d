//! Command-line interface for the `dots` binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_dots::Strategy;
use strictly_dots_games::GameMode;

/// Strictly Dots - Dots and Boxes in the terminal
#[derive(Parser, Debug)]
#[command(name = "dots")]
#[command(about = "Play or simulate Dots and Boxes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive match
    Play {
        /// Path to a TOML game config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Dots per side (overrides config)
        #[arg(short, long)]
        grid_size: Option<usize>,

        /// Seat assignment: hh, ha or aa (overrides config)
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// AI strategy: random, greedy or heuristic (overrides config)
        #[arg(short, long)]
        strategy: Option<Strategy>,

        /// Seed for the AI (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// AI thinking delay in milliseconds (overrides config)
        #[arg(long)]
        think_delay_ms: Option<u64>,
    },

    /// Run a batch of AI-vs-AI matches
    Simulate {
        /// Path to a TOML game config (grid size and seed)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Dots per side (overrides config)
        #[arg(short, long)]
        grid_size: Option<usize>,

        /// Strategy for player 1
        #[arg(long, default_value = "greedy")]
        p1: Strategy,

        /// Strategy for player 2
        #[arg(long, default_value = "random")]
        p2: Strategy,

        /// Number of matches
        #[arg(short = 'n', long, default_value = "100")]
        games: usize,

        /// Master seed (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}
