//! Selectable move-selection policies.

use serde::{Deserialize, Serialize};

/// How a [`MoveSelector`](crate::MoveSelector) picks its move.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Strategy {
    /// Uniform choice over the open lines.
    #[strum(to_string = "random")]
    Random,

    /// Take a box when one is on offer, otherwise avoid handing one over.
    #[default]
    #[strum(to_string = "greedy")]
    Greedy,

    /// One-ply scoring pass with random jitter. Historically called
    /// "minimax", which is still accepted as a name.
    #[serde(alias = "minimax")]
    #[strum(to_string = "heuristic", serialize = "minimax")]
    Heuristic,
}
