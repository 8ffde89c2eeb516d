//! The move selector: runs a strategy against a board and never fails for
//! any reason other than an exhausted board.

use super::scoring::{ScoredMove, score_all};
use super::strategy::Strategy;
use crate::error::EvaluationError;
use crate::rules::{completes_box, creates_opportunity};
use crate::{Board, Move, SelectError};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::panic::{AssertUnwindSafe, catch_unwind};
use tracing::{debug, instrument, warn};

/// Picks moves for a computer-controlled player.
///
/// The selector owns its random source so runs can be reproduced with
/// [`MoveSelector::seeded`]. Strategy evaluation is guarded: if it returns an
/// error, panics, or produces a line that is not open, the selector falls
/// back to a uniform random choice.
#[derive(Debug, Clone)]
pub struct MoveSelector<R = StdRng> {
    strategy: Strategy,
    rng: R,
}

impl MoveSelector<StdRng> {
    /// Creates a selector seeded from OS entropy.
    pub fn new(strategy: Strategy) -> Self {
        Self::with_rng(strategy, StdRng::from_entropy())
    }

    /// Creates a selector with a fixed seed.
    pub fn seeded(strategy: Strategy, seed: u64) -> Self {
        Self::with_rng(strategy, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MoveSelector<R> {
    /// Creates a selector drawing from `rng`.
    pub fn with_rng(strategy: Strategy, rng: R) -> Self {
        Self { strategy, rng }
    }

    /// Returns the active strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Switches strategy for subsequent calls.
    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    /// Chooses one open line on `board`.
    ///
    /// # Errors
    ///
    /// [`SelectError::NoLegalMoves`] if the board is full. Callers should
    /// check [`Board::is_terminal`] first.
    #[instrument(skip(self, board), fields(strategy = %self.strategy))]
    pub fn select(&mut self, board: &Board) -> Result<Move, SelectError> {
        let legal = board.legal_moves();
        if legal.is_empty() {
            return Err(SelectError::NoLegalMoves);
        }

        let strategy = self.strategy;
        let mv = self.evaluate_or_fallback(board, &legal, |board, legal, rng| match strategy {
            Strategy::Random => random(legal, rng),
            Strategy::Greedy => greedy(board, legal, rng),
            Strategy::Heuristic => heuristic(board, legal, rng),
        });
        debug!(%mv, "Selected move");
        Ok(mv)
    }

    /// Runs the heuristic scoring pass over every open line, in enumeration
    /// order.
    pub fn score_moves(&mut self, board: &Board) -> Vec<ScoredMove> {
        score_all(board, &board.legal_moves(), &mut self.rng)
    }

    /// Runs `evaluate`, substituting a random open line for any fault.
    ///
    /// `legal` must be non-empty.
    fn evaluate_or_fallback<F>(&mut self, board: &Board, legal: &[Move], evaluate: F) -> Move
    where
        F: FnOnce(&Board, &[Move], &mut R) -> Result<Move, EvaluationError>,
    {
        let rng = &mut self.rng;
        let outcome = catch_unwind(AssertUnwindSafe(|| evaluate(board, legal, rng)));

        match outcome {
            Ok(Ok(mv)) if legal.contains(&mv) => return mv,
            Ok(Ok(mv)) => warn!(%mv, "Strategy chose a closed line, falling back to random"),
            Ok(Err(err)) => warn!(%err, "Strategy failed, falling back to random"),
            Err(_) => warn!("Strategy panicked, falling back to random"),
        }

        legal[self.rng.gen_range(0..legal.len())]
    }
}

/// Uniform choice.
fn random<R: Rng + ?Sized>(legal: &[Move], rng: &mut R) -> Result<Move, EvaluationError> {
    legal.choose(rng).copied().ok_or(EvaluationError::NoCandidates)
}

/// First completing move in enumeration order, else a random safe move,
/// else any random move.
#[instrument(level = "trace", skip_all)]
fn greedy<R: Rng + ?Sized>(
    board: &Board,
    legal: &[Move],
    rng: &mut R,
) -> Result<Move, EvaluationError> {
    if let Some(mv) = legal.iter().copied().find(|&mv| completes_box(board, mv)) {
        return Ok(mv);
    }

    let safe: Vec<Move> = legal
        .iter()
        .copied()
        .filter(|&mv| !creates_opportunity(board, mv))
        .collect();

    if safe.is_empty() {
        random(legal, rng)
    } else {
        random(&safe, rng)
    }
}

/// Strictly greatest score wins; ties go to the earliest move.
#[instrument(level = "trace", skip_all)]
fn heuristic<R: Rng + ?Sized>(
    board: &Board,
    legal: &[Move],
    rng: &mut R,
) -> Result<Move, EvaluationError> {
    let mut best: Option<(Move, i32)> = None;
    for scored in score_all(board, legal, rng) {
        let score = scored.score();
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((scored.mv, score)),
        }
    }
    best.map(|(mv, _)| mv).ok_or(EvaluationError::NoCandidates)
}
