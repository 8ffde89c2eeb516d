//! Contract-based validation for match transitions.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::invariants::{DotsInvariants, InvariantSet};
use super::{Match, MatchError, Move};
use tracing::{debug, instrument};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MatchError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MatchError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the match must still be awaiting a move.
pub struct MatchInProgress;

impl MatchInProgress {
    /// Fails with [`MatchError::GameAlreadyOver`] once the match has ended.
    #[instrument(skip(game))]
    pub fn check(game: &Match) -> Result<(), MatchError> {
        if game.is_over() {
            Err(MatchError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the slot must exist for its orientation.
pub struct SlotInBounds;

impl SlotInBounds {
    /// Rejects slots outside the grid for their orientation.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Match) -> Result<(), MatchError> {
        if game.board().line(*mov).is_none() {
            debug!("Slot out of range");
            Err(MatchError::RejectedMove(*mov))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the slot must still be open.
pub struct SlotIsOpen;

impl SlotIsOpen {
    /// Rejects slots that already hold a line.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Match) -> Result<(), MatchError> {
        if game.board().is_placed(*mov) {
            debug!("Slot already placed");
            Err(MatchError::RejectedMove(*mov))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: the match is running and the slot is legal.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Match) -> Result<(), MatchError> {
        MatchInProgress::check(game)?;
        SlotInBounds::check(mov, game)?;
        SlotIsOpen::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for [`Match::submit_move`].
///
/// Preconditions:
/// - Match is awaiting a move
/// - Slot is in range and open
///
/// Postconditions:
/// - Every [`DotsInvariants`] member holds
/// - Exactly one more line is drawn than before
pub struct MoveContract;

impl Contract<Match, Move> for MoveContract {
    fn pre(game: &Match, action: &Move) -> Result<(), MatchError> {
        LegalMove::check(action, game)
    }

    fn post(before: &Match, after: &Match) -> Result<(), MatchError> {
        if after.board().placed_count() != before.board().placed_count() + 1 {
            return Err(MatchError::InvariantViolation(
                "Postcondition failed: exactly one line must be added per move".to_string(),
            ));
        }
        DotsInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MatchError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
