//! Batch AI-vs-AI matches with aggregate statistics.

use crate::orchestrator::{MatchReport, Orchestrator};
use crate::players::AiPlayer;
use anyhow::Result;
use derive_getters::Getters;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use strictly_dots::{Match, Outcome, PlayerId, PlayerRole, Strategy};
use tracing::{debug, info, instrument};

/// Parameters of a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct SimulationConfig {
    /// Dots per side.
    grid_size: usize,
    /// Strategy for player 1 and player 2.
    strategies: [Strategy; 2],
    /// Number of matches.
    games: usize,
    /// Master seed; every selector seed is derived from it.
    seed: Option<u64>,
}

/// Aggregate results of a simulation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    /// Matches played.
    pub games: usize,
    /// Dots per side.
    pub grid_size: usize,
    /// Strategy for player 1 and player 2.
    pub strategies: [Strategy; 2],
    /// Wins for player 1.
    pub player_one_wins: usize,
    /// Wins for player 2.
    pub player_two_wins: usize,
    /// Drawn matches.
    pub draws: usize,
    /// Boxes won across all matches by player 1 and player 2.
    pub total_boxes: [u64; 2],
    /// Mean accepted moves per match.
    pub average_moves: f64,
}

impl SimulationSummary {
    fn record(&mut self, report: &MatchReport) {
        match report.outcome {
            Some(Outcome::Winner(PlayerId::One)) => self.player_one_wins += 1,
            Some(Outcome::Winner(PlayerId::Two)) => self.player_two_wins += 1,
            Some(Outcome::Draw) => self.draws += 1,
            None => {}
        }
        self.total_boxes[0] += u64::from(report.scores[0]);
        self.total_boxes[1] += u64::from(report.scores[1]);
    }

    /// Fraction of matches won by `player`, or 0 with no matches.
    pub fn win_rate(&self, player: PlayerId) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        let wins = match player {
            PlayerId::One => self.player_one_wins,
            PlayerId::Two => self.player_two_wins,
        };
        wins as f64 / self.games as f64
    }
}

impl std::fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} games on a {}x{} grid: {} (P1) vs {} (P2)",
            self.games, self.grid_size, self.grid_size, self.strategies[0], self.strategies[1]
        )?;
        writeln!(
            f,
            "  Player 1 wins: {:>5} ({:.1}%)",
            self.player_one_wins,
            self.win_rate(PlayerId::One) * 100.0
        )?;
        writeln!(
            f,
            "  Player 2 wins: {:>5} ({:.1}%)",
            self.player_two_wins,
            self.win_rate(PlayerId::Two) * 100.0
        )?;
        writeln!(f, "  Draws:         {:>5}", self.draws)?;
        writeln!(
            f,
            "  Boxes:         {} - {}",
            self.total_boxes[0], self.total_boxes[1]
        )?;
        write!(f, "  Average moves: {:.1}", self.average_moves)
    }
}

/// Plays `config.games()` matches between two instant AI players.
#[instrument(skip(config), fields(games = config.games, grid = config.grid_size))]
pub fn run_simulation(config: &SimulationConfig) -> Result<SimulationSummary> {
    let mut seeds = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut summary = SimulationSummary {
        games: config.games,
        grid_size: config.grid_size,
        strategies: config.strategies,
        ..SimulationSummary::default()
    };
    let mut total_moves = 0usize;

    for round in 0..config.games {
        let game = Match::with_roles(config.grid_size, PlayerRole::Ai, PlayerRole::Ai)?;
        let one = AiPlayer::instant("AI 1", config.strategies[0], Some(seeds.r#gen()));
        let two = AiPlayer::instant("AI 2", config.strategies[1], Some(seeds.r#gen()));

        let report = Orchestrator::new(game, Box::new(one), Box::new(two)).run(|_, _| {})?;
        debug!(round, outcome = ?report.outcome, scores = ?report.scores, "Match finished");

        total_moves += report.moves;
        summary.record(&report);
    }

    if config.games > 0 {
        summary.average_moves = total_moves as f64 / config.games as f64;
    }
    info!(
        p1 = summary.player_one_wins,
        p2 = summary.player_two_wins,
        draws = summary.draws,
        "Simulation complete"
    );
    Ok(summary)
}
