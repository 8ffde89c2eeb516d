//! Strictly Dots Games - play and simulate Dots and Boxes
//!
//! The caller side of the `strictly_dots` engine: configuration, the
//! participants that supply moves, a match orchestrator, batch simulation and
//! a plain-text renderer.
//!
//! # Architecture
//!
//! - **Config**: TOML-backed [`GameConfig`]
//! - **Players**: [`HumanPlayer`] over any line reader (the terminal via
//!   [`ConsoleInput`]), [`AiPlayer`] over a
//!   [`MoveSelector`](strictly_dots::MoveSelector)
//! - **Orchestrator**: runs a match and reports [`GameEvent`]s
//! - **Simulation**: AI-vs-AI batches summarized in [`SimulationSummary`]
//!
//! # Example
//!
//! ```
//! use strictly_dots::Strategy;
//! use strictly_dots_games::{SimulationConfig, run_simulation};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = SimulationConfig::new(3, [Strategy::Greedy, Strategy::Random], 10, Some(7));
//! let summary = run_simulation(&config)?;
//! assert_eq!(summary.player_one_wins + summary.player_two_wins + summary.draws, 10);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod orchestrator;
mod players;
mod render;
mod simulation;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, GameMode, MAX_GRID_SIZE};

// Crate-level exports - Participants
pub use players::{AiPlayer, ConsoleInput, HumanPlayer, Participant};

// Crate-level exports - Orchestration
pub use orchestrator::{GameEvent, MatchReport, Orchestrator};

// Crate-level exports - Simulation
pub use simulation::{SimulationConfig, SimulationSummary, run_simulation};

// Crate-level exports - Rendering
pub use render::{render_board, render_status};
