//! Match phases and outcomes.

use super::PlayerId;
use serde::{Deserialize, Serialize};

/// Outcome of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the match.
    Winner(PlayerId),
    /// Both players hold the same number of boxes.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the match was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Where a match stands.
///
/// `AwaitingMove` does not distinguish human from AI turns: the active
/// player's role decides who is expected to supply the next move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    /// The given player must move next.
    AwaitingMove(PlayerId),
    /// Every line is drawn.
    GameOver(Outcome),
}

impl MatchStatus {
    /// The player expected to move, if the match is still running.
    pub fn to_move(&self) -> Option<PlayerId> {
        match self {
            MatchStatus::AwaitingMove(player) => Some(*player),
            MatchStatus::GameOver(_) => None,
        }
    }

    /// The outcome, if the match has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            MatchStatus::AwaitingMove(_) => None,
            MatchStatus::GameOver(outcome) => Some(*outcome),
        }
    }

    /// Returns true once the match has ended.
    pub fn is_over(&self) -> bool {
        matches!(self, MatchStatus::GameOver(_))
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStatus::AwaitingMove(player) => write!(f, "Player {} to move", player),
            MatchStatus::GameOver(outcome) => write!(f, "Game over. {}", outcome),
        }
    }
}
