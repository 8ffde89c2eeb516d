//! First-class invariants for Dots and Boxes.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. They are testable independently and serve as documentation of the
//! engine's guarantees.

#[cfg(kani)]
mod verification;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of two to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with one violation per
    /// failing invariant.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod completion;
pub mod monotonic_board;
pub mod score_conservation;
pub mod turn_order;

pub use completion::CompletionInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use score_conservation::ScoreConservationInvariant;
pub use turn_order::TurnOrderInvariant;

/// All match invariants as a composable set.
pub type DotsInvariants = (
    CompletionInvariant,
    ScoreConservationInvariant,
    MonotonicBoardInvariant,
    TurnOrderInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Match, Move, PlayerId};

    #[test]
    fn test_invariant_set_holds_for_new_match() {
        let game = Match::new(4).unwrap();
        assert!(DotsInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let game = Match::replay(
            3,
            &[
                Move::horizontal(0, 0),
                Move::horizontal(1, 0),
                Move::vertical(0, 0),
                Move::vertical(0, 1),
                Move::vertical(1, 2),
            ],
        )
        .unwrap();
        assert!(DotsInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut game = Match::new(3).unwrap();
        game.submit_move(Move::horizontal(0, 0)).unwrap();

        // Award a box nobody closed.
        game.board.boxes[3] = Some(PlayerId::Two);

        let violations = DotsInvariants::check_all(&game).unwrap_err();
        assert!(violations.len() >= 2);
        assert!(
            violations
                .iter()
                .any(|v| v.description == CompletionInvariant::description())
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = Match::new(2).unwrap();

        type TwoInvariants = (CompletionInvariant, TurnOrderInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}
