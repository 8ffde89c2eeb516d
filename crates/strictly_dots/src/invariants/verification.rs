//! Formal verification of board probes using the Kani model checker.
//!
//! These proof harnesses check the probing contract for ALL indices on a
//! small board, not just the ones the unit tests happen to pick.

#[cfg(kani)]
mod proofs {
    use crate::{Board, Move, Orientation, PlayerId};

    /// Probing any box index is safe and never reports more than four sides.
    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_sides_placed_bounded() {
        let board = Board::new(3).unwrap();
        let row: usize = kani::any();
        let col: usize = kani::any();

        let sides = board.sides_placed(row, col);
        assert!(sides <= 4, "sides_placed exceeded four");
        if row >= 2 || col >= 2 {
            assert!(sides == 0, "out-of-range box reported sides");
        }
    }

    /// A move that fails `is_legal` never mutates the board.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_illegal_place_is_noop() {
        let mut board = Board::new(2).unwrap();
        let row: usize = kani::any();
        let col: usize = kani::any();
        let orientation = if kani::any() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let mv = Move::new(row, col, orientation);
        kani::assume(!board.is_legal(mv));

        let before = board.clone();
        assert!(board.place(mv, PlayerId::One).is_err());
        assert!(board == before, "rejected placement changed the board");
    }
}
