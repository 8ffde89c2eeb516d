//! First-class action types for Dots and Boxes.
//!
//! A [`Move`] names a line slot and nothing else: who draws it is decided by
//! the match, not by the move. Accepted moves are recorded as [`PlayedMove`]s
//! so a match can be replayed and audited.

use super::types::{Orientation, PlayerId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A line slot identified by row, column and orientation.
///
/// Equality is purely structural.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_new::new,
    derive_more::Display,
)]
#[display("{orientation} ({row}, {col})")]
pub struct Move {
    /// Slot row.
    pub row: usize,
    /// Slot column.
    pub col: usize,
    /// Slot orientation.
    pub orientation: Orientation,
}

impl Move {
    /// A horizontal line from dot `(row, col)` to dot `(row, col + 1)`.
    pub fn horizontal(row: usize, col: usize) -> Self {
        Self::new(row, col, Orientation::Horizontal)
    }

    /// A vertical line from dot `(row, col)` to dot `(row + 1, col)`.
    pub fn vertical(row: usize, col: usize) -> Self {
        Self::new(row, col, Orientation::Vertical)
    }
}

/// Error returned when text cannot be read as a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Cannot parse move {:?}: expected `<h|v> <row> <col>`", input)]
pub struct MoveParseError {
    /// The rejected input.
    pub input: String,
}

impl std::error::Error for MoveParseError {}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parses `h 0 1`, `V 2 3` or `horizontal 0 1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || MoveParseError {
            input: s.to_string(),
        };
        let mut parts = s.split_whitespace();
        let orientation = parts
            .next()
            .and_then(|p| Orientation::from_str(p).ok())
            .ok_or_else(err)?;
        let row = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(err)?;
        let col = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(err)?;
        if parts.next().is_some() {
            return Err(err());
        }
        Ok(Move::new(row, col, orientation))
    }
}

/// An accepted move: who drew which line and how many boxes it closed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new,
)]
pub struct PlayedMove {
    /// The player who drew the line.
    pub player: PlayerId,
    /// The line that was drawn.
    pub mv: Move,
    /// Number of boxes the line completed (0, 1 or 2).
    pub completed: usize,
}

impl std::fmt::Display for PlayedMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {} -> {}", self.player, self.mv)?;
        if self.completed > 0 {
            write!(f, " (+{})", self.completed)?;
        }
        Ok(())
    }
}
