//! Scoring pass shared by the heuristic strategy and diagnostics.

use crate::rules::{completes_box, creates_opportunity};
use crate::{Board, Move};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Reward for closing at least one box.
pub(crate) const COMPLETION_REWARD: i32 = 100;

/// Penalty for leaving a box one line from completion.
pub(crate) const OPPORTUNITY_PENALTY: i32 = 50;

/// Jitter is drawn from `JITTER_RANGE`, upper bound excluded.
pub(crate) const JITTER_RANGE: std::ops::Range<i32> = -10..10;

/// A legal move with the terms of its heuristic score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct ScoredMove {
    /// The candidate line.
    pub mv: Move,
    /// Drawing it closes at least one box.
    pub completes: bool,
    /// Drawing it gives an adjacent box its third side.
    pub creates_opportunity: bool,
    /// Random tie-breaking term.
    pub jitter: i32,
}

impl ScoredMove {
    /// `100 * completes - 50 * creates_opportunity + jitter`.
    pub fn score(&self) -> i32 {
        let mut score = self.jitter;
        if self.completes {
            score += COMPLETION_REWARD;
        }
        if self.creates_opportunity {
            score -= OPPORTUNITY_PENALTY;
        }
        score
    }
}

/// Scores every move in `candidates`, preserving their order.
#[instrument(level = "trace", skip_all, fields(candidates = candidates.len()))]
pub(crate) fn score_all<R: Rng + ?Sized>(
    board: &Board,
    candidates: &[Move],
    rng: &mut R,
) -> Vec<ScoredMove> {
    candidates
        .iter()
        .map(|&mv| {
            ScoredMove::new(
                mv,
                completes_box(board, mv),
                creates_opportunity(board, mv),
                rng.gen_range(JITTER_RANGE),
            )
        })
        .collect()
}
