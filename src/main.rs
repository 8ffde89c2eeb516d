//! Strictly Dots - command-line entry point
//!
//! Interactive play and batch simulation of Dots and Boxes.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io::Write;
use std::path::PathBuf;
use strictly_dots::{Match, PlayerRole, Strategy};
use strictly_dots_games::{
    GameConfig, GameEvent, GameMode, HumanPlayer, Orchestrator, Participant, SimulationConfig,
    render_board, render_status, run_simulation,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,strictly_dots=debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            grid_size,
            mode,
            strategy,
            seed,
            think_delay_ms,
        } => run_play(config, grid_size, mode, strategy, seed, think_delay_ms),
        Command::Simulate {
            config,
            grid_size,
            p1,
            p2,
            games,
            seed,
            json,
        } => run_simulate(config, grid_size, [p1, p2], games, seed, json),
    }
}

/// Loads the config file if given, otherwise defaults.
fn load_config(path: Option<PathBuf>) -> Result<GameConfig> {
    Ok(match path {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    })
}

/// Run an interactive match, offering a rematch at the end
#[instrument]
fn run_play(
    config: Option<PathBuf>,
    grid_size: Option<usize>,
    mode: Option<GameMode>,
    strategy: Option<Strategy>,
    seed: Option<u64>,
    think_delay_ms: Option<u64>,
) -> Result<()> {
    let mut config = load_config(config)?;
    if let Some(grid_size) = grid_size {
        config = config.with_grid_size(grid_size);
    }
    if let Some(mode) = mode {
        config = config.with_mode(mode);
    }
    if let Some(strategy) = strategy {
        config = config.with_strategy(strategy);
    }
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if let Some(delay) = think_delay_ms {
        config = config.with_think_delay_ms(delay);
    }
    config.validate()?;

    info!(mode = %config.mode(), grid = config.grid_size(), "Starting interactive play");

    let mut orchestrator = Orchestrator::from_config(&config, |player| {
        Box::new(HumanPlayer::console(player.name())) as Box<dyn Participant>
    })?;

    let has_human = config.mode().roles().contains(&PlayerRole::Human);
    loop {
        let report = orchestrator.run(print_event)?;
        if report.abandoned_by.is_some() || !has_human || !ask_rematch()? {
            break;
        }
        orchestrator.restart();
    }
    Ok(())
}

/// Prints the board and status for the events a player cares about.
fn print_event(game: &Match, event: &GameEvent) {
    match event {
        GameEvent::Started => {
            println!("{}", render_board(game.board()));
            println!("{}", render_status(game));
        }
        GameEvent::MoveApplied(report) => {
            println!();
            println!("{} drew {}", game.player(report.player).name(), report.mv);
            if !report.completed.is_empty() {
                println!("  closed {} box(es)", report.completed.len());
            }
            println!("{}", render_board(game.board()));
            println!("{}", render_status(game));
        }
        GameEvent::MoveRejected { .. } | GameEvent::TurnStarted(_) => {}
        GameEvent::Abandoned(id) => println!("{} left the game.", game.player(*id).name()),
        GameEvent::Finished(_) => println!("Thanks for playing!"),
    }
}

fn ask_rematch() -> Result<bool> {
    print!("Play again? [y/N] ");
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

/// Run a batch of AI-vs-AI matches and print the summary
#[instrument]
fn run_simulate(
    config: Option<PathBuf>,
    grid_size: Option<usize>,
    strategies: [Strategy; 2],
    games: usize,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let mut config = load_config(config)?;
    if let Some(grid_size) = grid_size {
        config = config.with_grid_size(grid_size);
    }
    config.validate()?;

    let simulation = SimulationConfig::new(
        *config.grid_size(),
        strategies,
        games,
        seed.or(*config.seed()),
    );
    let summary = run_simulation(&simulation)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary);
    }
    Ok(())
}
