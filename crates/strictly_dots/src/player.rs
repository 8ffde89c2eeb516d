//! Seats at the table: identity, display role and running score.

use super::PlayerId;
use serde::{Deserialize, Serialize};

/// Who is expected to supply a player's moves.
///
/// Purely informational for the engine; callers use it to decide whether to
/// wait for input or ask the move selector.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum PlayerRole {
    /// Moves come from a person.
    #[default]
    #[strum(to_string = "human")]
    Human,
    /// Moves come from the move selector.
    #[strum(to_string = "AI")]
    Ai,
}

/// A player in a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    role: PlayerRole,
    score: u32,
}

impl Player {
    /// Creates a player with a zero score.
    pub fn new(id: PlayerId, name: impl Into<String>, role: PlayerRole) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            score: 0,
        }
    }

    /// Default seat for `id`: "Player 1", "Player 2", or "AI" for an AI
    /// second player.
    pub fn default_for(id: PlayerId, role: PlayerRole) -> Self {
        let name = match (id, role) {
            (PlayerId::Two, PlayerRole::Ai) => "AI".to_string(),
            _ => format!("Player {}", id),
        };
        Self::new(id, name, role)
    }

    /// Returns the player's seat.
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the display role.
    pub fn role(&self) -> PlayerRole {
        self.role
    }

    /// Returns true if the move selector plays this seat.
    pub fn is_ai(&self) -> bool {
        self.role == PlayerRole::Ai
    }

    /// Number of boxes won so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn add_score(&mut self, points: u32) {
        self.score += points;
    }

    pub(crate) fn reset_score(&mut self) {
        self.score = 0;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.role)
    }
}
