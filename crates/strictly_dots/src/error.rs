//! Error types for the board, the match and the move selector.

use super::action::Move;

/// Errors raised by [`Board`](crate::Board).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Construction-time rejection, e.g. a grid smaller than 2x2 dots.
    #[display("Invalid configuration: {}", _0)]
    InvalidConfiguration(String),

    /// The slot is out of range or already drawn.
    #[display("Illegal move: {} is out of range or already placed", _0)]
    IllegalMove(Move),
}

impl std::error::Error for BoardError {}

/// Errors raised by [`Match::submit_move`](crate::Match::submit_move) and
/// the match constructors.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MatchError {
    /// The match could not be built with the given settings.
    #[display("Invalid configuration: {}", _0)]
    InvalidConfiguration(String),

    /// The move failed the legality check. Nothing was changed.
    #[display("Rejected move: {} is out of range or already placed", _0)]
    RejectedMove(Move),

    /// The match has already ended. Nothing was changed.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// A postcondition failed after a move was applied.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MatchError {}

impl From<BoardError> for MatchError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::InvalidConfiguration(message) => MatchError::InvalidConfiguration(message),
            BoardError::IllegalMove(mv) => MatchError::RejectedMove(mv),
        }
    }
}

/// Errors raised by [`MoveSelector::select`](crate::MoveSelector::select).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SelectError {
    /// The board is terminal; callers must check `is_terminal()` first.
    #[display("No legal moves available")]
    NoLegalMoves,
}

impl std::error::Error for SelectError {}

/// Internal fault of a strategy evaluation. Never leaves the selector: it
/// triggers the random fallback instead.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub(crate) enum EvaluationError {
    /// The evaluation pass produced no candidate to choose from.
    #[display("strategy produced no candidate moves")]
    NoCandidates,
}
