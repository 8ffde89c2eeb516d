//! Game rules for Dots and Boxes.
//!
//! This module contains pure functions over board geometry and scores.
//! Rules are separated from board storage so the AI probes and the
//! invariants can share them.

pub mod adjacency;
pub mod outcome;

pub use adjacency::{adjacent_boxes, bounding_lines, completes_box, creates_opportunity};
pub use outcome::decide_outcome;
