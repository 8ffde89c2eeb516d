//! Strictly Dots - type-safe Dots and Boxes engine
//!
//! Pure game logic with no I/O: the board and its legality rules, the match
//! state machine with the extra-turn rule, and a move selector for
//! computer players.
//!
//! # Architecture
//!
//! - **Board**: line slots, box ownership, completion detection
//! - **Match**: turn order, scores, game over
//! - **Contracts / invariants**: checked pre- and postconditions per move
//! - **MoveSelector**: random, greedy and heuristic strategies
//!
//! # Example
//!
//! ```
//! use strictly_dots::{Match, Move, MoveSelector, PlayerId, Strategy};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut game = Match::new(3)?;
//! game.submit_move(Move::horizontal(0, 0))?;
//! assert_eq!(game.active_player(), Some(PlayerId::Two));
//!
//! let mut ai = MoveSelector::seeded(Strategy::Greedy, 7);
//! let reply = ai.select(game.board())?;
//! game.submit_move(reply)?;
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod ai;
mod board;
mod error;
mod game;
mod phases;
mod player;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

// Crate-level exports - Primitive types
pub use types::{BoxCell, GridSize, LineSlot, Orientation, PlayerId};

// Crate-level exports - Moves
pub use action::{Move, MoveParseError, PlayedMove};

// Crate-level exports - Errors
pub use error::{BoardError, MatchError, SelectError};

// Crate-level exports - Board and match
pub use board::Board;
pub use game::{Match, MoveReport};
pub use phases::{MatchStatus, Outcome};
pub use player::{Player, PlayerRole};

// Crate-level exports - Move selection
pub use ai::{MoveSelector, ScoredMove, Strategy};

// Crate-level exports - Verification
pub use contracts::{Contract, LegalMove, MoveContract};
pub use invariants::{DotsInvariants, Invariant, InvariantSet, InvariantViolation};
