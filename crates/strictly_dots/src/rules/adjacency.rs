//! Line/box adjacency and the one-move lookahead probes.

use super::super::{Board, GridSize, Move, Orientation};
use tracing::instrument;

/// The four slots bounding box `(row, col)`: top, bottom, left, right.
pub fn bounding_lines(row: usize, col: usize) -> [Move; 4] {
    [
        Move::horizontal(row, col),
        Move::horizontal(row + 1, col),
        Move::vertical(row, col),
        Move::vertical(row, col + 1),
    ]
}

/// Boxes touched by a line, in evaluation order.
///
/// A horizontal line touches the box above it, then the box below it; a
/// vertical line touches the box to its left, then the box to its right.
/// Boundary lines touch only one box, so one entry is `None`.
pub fn adjacent_boxes(grid: GridSize, mv: Move) -> [Option<(usize, usize)>; 2] {
    let last = grid.boxes_per_side();
    let inside = |(row, col): (usize, usize)| row < last && col < last;
    let (before, after) = match mv.orientation {
        Orientation::Horizontal => (
            mv.row.checked_sub(1).map(|row| (row, mv.col)),
            Some((mv.row, mv.col)),
        ),
        Orientation::Vertical => (
            mv.col.checked_sub(1).map(|col| (mv.row, col)),
            Some((mv.row, mv.col)),
        ),
    };
    [before.filter(|b| inside(*b)), after.filter(|b| inside(*b))]
}

/// Would drawing `mv` close at least one box?
///
/// True when some adjacent box already has three sides.
#[instrument(level = "trace", skip(board))]
pub fn completes_box(board: &Board, mv: Move) -> bool {
    adjacent_boxes(board.grid_size(), mv)
        .into_iter()
        .flatten()
        .any(|(row, col)| board.sides_placed(row, col) == 3)
}

/// Would drawing `mv` hand the opponent a box next turn?
///
/// True when some adjacent box currently has exactly two sides, so the move
/// leaves it one line short of completion.
#[instrument(level = "trace", skip(board))]
pub fn creates_opportunity(board: &Board, mv: Move) -> bool {
    adjacent_boxes(board.grid_size(), mv)
        .into_iter()
        .flatten()
        .any(|(row, col)| board.sides_placed(row, col) == 2)
}
