//! Core domain types for Dots and Boxes.

use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the two seats at the board.
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
    strum::Display,
    strum::EnumIter,
)]
pub enum PlayerId {
    /// Player 1 (moves first).
    #[strum(to_string = "1")]
    One,
    /// Player 2.
    #[strum(to_string = "2")]
    Two,
}

impl PlayerId {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Returns the player's number (1 or 2).
    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    /// Zero-based seat index, used to address per-player arrays.
    pub fn index(self) -> usize {
        usize::from(self.number() - 1)
    }
}

/// Direction of a line segment between two adjacent dots.
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
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Orientation {
    /// Connects (row, col) to (row, col + 1).
    #[strum(to_string = "horizontal", serialize = "h")]
    Horizontal,
    /// Connects (row, col) to (row + 1, col).
    #[strum(to_string = "vertical", serialize = "v")]
    Vertical,
}

/// Number of dots along one side of the square board.
///
/// A grid of `N` dots has `N * (N - 1)` horizontal slots, the same number of
/// vertical slots and `(N - 1)^2` boxes. Values below [`GridSize::MIN`] are
/// rejected at construction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(try_from = "usize", into = "usize")]
pub struct GridSize(usize);

impl GridSize {
    /// Smallest board that still contains a box.
    pub const MIN: usize = 2;

    /// Validates a dot count.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidConfiguration`] if `dots < 2` or if the
    /// line slot count does not fit in a `usize`.
    #[instrument]
    pub fn new(dots: usize) -> Result<Self, BoardError> {
        if dots < Self::MIN {
            return Err(BoardError::InvalidConfiguration(format!(
                "grid size must be at least {}, got {}",
                Self::MIN,
                dots
            )));
        }
        let fits = dots
            .checked_mul(dots - 1)
            .and_then(|per_orientation| per_orientation.checked_mul(2))
            .is_some();
        if !fits {
            return Err(BoardError::InvalidConfiguration(format!(
                "grid size {} has too many line slots to address",
                dots
            )));
        }
        Ok(Self(dots))
    }

    /// Dots per side.
    pub fn dots(self) -> usize {
        self.0
    }

    /// Boxes per side (`dots - 1`).
    pub fn boxes_per_side(self) -> usize {
        self.0 - 1
    }

    /// Number of horizontal slots (`dots` rows of `dots - 1`).
    pub fn horizontal_count(self) -> usize {
        self.0 * (self.0 - 1)
    }

    /// Number of vertical slots (`dots - 1` rows of `dots`).
    pub fn vertical_count(self) -> usize {
        (self.0 - 1) * self.0
    }

    /// Total number of line slots on the board.
    pub fn line_count(self) -> usize {
        self.horizontal_count() + self.vertical_count()
    }

    /// Total number of boxes on the board.
    pub fn box_count(self) -> usize {
        self.boxes_per_side() * self.boxes_per_side()
    }
}

impl TryFrom<usize> for GridSize {
    type Error = BoardError;

    fn try_from(dots: usize) -> Result<Self, Self::Error> {
        Self::new(dots)
    }
}

impl From<GridSize> for usize {
    fn from(grid: GridSize) -> Self {
        grid.0
    }
}

/// Snapshot of one line slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineSlot {
    /// Slot row.
    pub row: usize,
    /// Slot column.
    pub col: usize,
    /// Slot orientation.
    pub orientation: Orientation,
    /// Player who placed the line, `None` while the slot is open.
    pub owner: Option<PlayerId>,
}

impl LineSlot {
    /// Returns true once a line has been drawn in this slot.
    pub fn is_placed(&self) -> bool {
        self.owner.is_some()
    }
}

/// Snapshot of one unit box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoxCell {
    /// Box row in the `(N - 1) x (N - 1)` box grid.
    pub row: usize,
    /// Box column in the `(N - 1) x (N - 1)` box grid.
    pub col: usize,
    /// Player who drew the completing line, `None` while incomplete.
    pub owner: Option<PlayerId>,
}

impl BoxCell {
    /// Returns true once all four sides are drawn.
    pub fn is_completed(&self) -> bool {
        self.owner.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_grid_size_rejects_tiny_boards() {
        assert!(GridSize::new(0).is_err());
        assert!(GridSize::new(1).is_err());
        assert!(GridSize::new(2).is_ok());
    }

    #[test]
    fn test_grid_size_rejects_overflowing_boards() {
        assert!(matches!(
            GridSize::new(usize::MAX),
            Err(BoardError::InvalidConfiguration(_))
        ));
        assert!(GridSize::new(1 << (usize::BITS / 2)).is_err());
        assert!(GridSize::new(1 << (usize::BITS / 2 - 2)).is_ok());
    }

    #[test]
    fn test_grid_size_counts() {
        let grid = GridSize::new(4).unwrap();
        assert_eq!(grid.horizontal_count(), 12);
        assert_eq!(grid.vertical_count(), 12);
        assert_eq!(grid.line_count(), 24);
        assert_eq!(grid.box_count(), 9);
    }

    #[test]
    fn test_grid_size_deserialize_validates() {
        assert!(serde_json::from_str::<GridSize>("5").is_ok());
        assert!(serde_json::from_str::<GridSize>("1").is_err());
    }

    #[test]
    fn test_player_opponent_and_index() {
        assert_eq!(PlayerId::One.opponent(), PlayerId::Two);
        assert_eq!(PlayerId::Two.opponent(), PlayerId::One);
        assert_eq!(PlayerId::One.index(), 0);
        assert_eq!(PlayerId::Two.index(), 1);
        assert_eq!(PlayerId::Two.to_string(), "2");
    }

    #[test]
    fn test_orientation_parses_short_and_long_forms() {
        assert_eq!(Orientation::from_str("h").unwrap(), Orientation::Horizontal);
        assert_eq!(Orientation::from_str("V").unwrap(), Orientation::Vertical);
        assert_eq!(
            Orientation::from_str("Horizontal").unwrap(),
            Orientation::Horizontal
        );
        assert!(Orientation::from_str("diagonal").is_err());
        assert_eq!(Orientation::Vertical.to_string(), "vertical");
    }
}
