//! Board storage and placement rules.
//!
//! The board owns three dense, row-major arenas: horizontal slots
//! (`N` rows of `N - 1`), vertical slots (`N - 1` rows of `N`) and boxes
//! (`N - 1` rows of `N - 1`). Each entry holds the owning player or `None`.
//! Placement is append-only: nothing is ever cleared.

use super::rules;
use super::{BoardError, BoxCell, GridSize, LineSlot, Move, Orientation, PlayerId};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Dots and Boxes board: line and box state plus the pure placement rules.
///
/// The board knows nothing about turns or scores; see [`Match`](crate::Match).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub(crate) grid: GridSize,
    pub(crate) horizontal: Vec<Option<PlayerId>>,
    pub(crate) vertical: Vec<Option<PlayerId>>,
    pub(crate) boxes: Vec<Option<PlayerId>>,
}

impl Board {
    /// Creates an empty board with `grid_size` dots per side.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidConfiguration`] if `grid_size < 2`.
    #[instrument]
    pub fn new(grid_size: usize) -> Result<Self, BoardError> {
        Ok(Self::with_grid(GridSize::new(grid_size)?))
    }

    /// Creates an empty board from an already validated grid size.
    #[instrument]
    pub fn with_grid(grid: GridSize) -> Self {
        debug!(
            lines = grid.line_count(),
            boxes = grid.box_count(),
            "Initializing board"
        );
        Self {
            grid,
            horizontal: vec![None; grid.horizontal_count()],
            vertical: vec![None; grid.vertical_count()],
            boxes: vec![None; grid.box_count()],
        }
    }

    /// Returns the grid size.
    pub fn grid_size(&self) -> GridSize {
        self.grid
    }

    /// Arena index of a slot, `None` when out of range for its orientation.
    fn slot_index(&self, mv: Move) -> Option<usize> {
        let n = self.grid.dots();
        match mv.orientation {
            Orientation::Horizontal => {
                (mv.row < n && mv.col < n - 1).then(|| mv.row * (n - 1) + mv.col)
            }
            Orientation::Vertical => (mv.row < n - 1 && mv.col < n).then(|| mv.row * n + mv.col),
        }
    }

    /// Arena index of a box, `None` when out of range.
    fn box_index(&self, row: usize, col: usize) -> Option<usize> {
        let side = self.grid.boxes_per_side();
        (row < side && col < side).then(|| row * side + col)
    }

    fn slots(&self, orientation: Orientation) -> &[Option<PlayerId>] {
        match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        }
    }

    fn slots_mut(&mut self, orientation: Orientation) -> &mut [Option<PlayerId>] {
        match orientation {
            Orientation::Horizontal => &mut self.horizontal,
            Orientation::Vertical => &mut self.vertical,
        }
    }

    /// Returns true if `mv` is within bounds for its orientation and its slot
    /// is still open. Never errors.
    pub fn is_legal(&self, mv: Move) -> bool {
        self.slot_index(mv)
            .is_some_and(|idx| self.slots(mv.orientation)[idx].is_none())
    }

    /// Returns true if `mv` is in bounds and already drawn.
    pub fn is_placed(&self, mv: Move) -> bool {
        self.slot_index(mv)
            .is_some_and(|idx| self.slots(mv.orientation)[idx].is_some())
    }

    /// Draws `mv` for `player` and returns the boxes it completed.
    ///
    /// The one or two boxes adjacent to the line are evaluated in the order
    /// given by [`rules::adjacent_boxes`]; each one that now has four sides
    /// and was not already complete is awarded to `player`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::IllegalMove`] if `mv` is out of range or already
    /// placed. The board is left untouched in that case.
    #[instrument(skip(self))]
    pub fn place(&mut self, mv: Move, player: PlayerId) -> Result<Vec<BoxCell>, BoardError> {
        let idx = self
            .slot_index(mv)
            .filter(|&idx| self.slots(mv.orientation)[idx].is_none())
            .ok_or(BoardError::IllegalMove(mv))?;
        self.slots_mut(mv.orientation)[idx] = Some(player);

        let mut completed = Vec::new();
        for (row, col) in rules::adjacent_boxes(self.grid, mv).into_iter().flatten() {
            let Some(box_idx) = self.box_index(row, col) else {
                continue;
            };
            if self.boxes[box_idx].is_none() && self.sides_placed(row, col) == 4 {
                self.boxes[box_idx] = Some(player);
                completed.push(BoxCell {
                    row,
                    col,
                    owner: Some(player),
                });
            }
        }

        if !completed.is_empty() {
            debug!(count = completed.len(), "Boxes completed");
        }
        Ok(completed)
    }

    /// Every open slot: horizontal slots in row-major order, then vertical
    /// slots in row-major order.
    #[instrument(level = "trace", skip(self))]
    pub fn legal_moves(&self) -> Vec<Move> {
        let n = self.grid.dots();
        let horizontal = self
            .horizontal
            .iter()
            .enumerate()
            .filter(|(_, owner)| owner.is_none())
            .map(|(idx, _)| Move::horizontal(idx / (n - 1), idx % (n - 1)));
        let vertical = self
            .vertical
            .iter()
            .enumerate()
            .filter(|(_, owner)| owner.is_none())
            .map(|(idx, _)| Move::vertical(idx / n, idx % n));
        horizontal.chain(vertical).collect()
    }

    /// Returns true once every slot is drawn.
    pub fn is_terminal(&self) -> bool {
        self.horizontal
            .iter()
            .chain(self.vertical.iter())
            .all(Option::is_some)
    }

    /// Count of drawn sides of box `(row, col)`, 0 to 4.
    ///
    /// Out-of-range boxes report 0 so callers can probe neighbors that may
    /// not exist.
    pub fn sides_placed(&self, row: usize, col: usize) -> u8 {
        if self.box_index(row, col).is_none() {
            return 0;
        }
        rules::bounding_lines(row, col)
            .into_iter()
            .filter(|&side| self.is_placed(side))
            .count() as u8
    }

    /// Snapshot of the slot addressed by `mv`, `None` when out of range.
    pub fn line(&self, mv: Move) -> Option<LineSlot> {
        self.slot_index(mv).map(|idx| LineSlot {
            row: mv.row,
            col: mv.col,
            orientation: mv.orientation,
            owner: self.slots(mv.orientation)[idx],
        })
    }

    /// Snapshot of box `(row, col)`, `None` when out of range.
    pub fn box_cell(&self, row: usize, col: usize) -> Option<BoxCell> {
        self.box_index(row, col).map(|idx| BoxCell {
            row,
            col,
            owner: self.boxes[idx],
        })
    }

    /// All boxes in row-major order.
    pub fn boxes(&self) -> impl Iterator<Item = BoxCell> + '_ {
        let side = self.grid.boxes_per_side();
        self.boxes.iter().enumerate().map(move |(idx, owner)| BoxCell {
            row: idx / side,
            col: idx % side,
            owner: *owner,
        })
    }

    /// Number of completed boxes.
    pub fn completed_count(&self) -> usize {
        self.boxes.iter().filter(|owner| owner.is_some()).count()
    }

    /// Number of boxes owned by `player`.
    pub fn boxes_owned_by(&self, player: PlayerId) -> usize {
        self.boxes
            .iter()
            .filter(|owner| **owner == Some(player))
            .count()
    }

    /// Number of drawn lines.
    pub fn placed_count(&self) -> usize {
        self.horizontal
            .iter()
            .chain(self.vertical.iter())
            .filter(|owner| owner.is_some())
            .count()
    }
}
