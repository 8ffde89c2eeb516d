//! Move selection for computer-controlled players.

mod scoring;
mod selector;
mod strategy;

pub use scoring::ScoredMove;
pub use selector::MoveSelector;
pub use strategy::Strategy;
