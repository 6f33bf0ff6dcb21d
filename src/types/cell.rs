use std::fmt;

use serde::{Deserialize, Serialize};

use super::Axis;
use crate::cell_ref::col_to_letter;

/// Logical cell position (0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellCoord {
    pub row: u32,
    pub column: u32,
}

impl CellCoord {
    pub fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Index of this cell along `axis`
    pub fn index(self, axis: Axis) -> u32 {
        match axis {
            Axis::Row => self.row,
            Axis::Column => self.column,
        }
    }
}

impl fmt::Display for CellCoord {
    /// A1-style reference, e.g. `(2, 1)` prints as `B3`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            col_to_letter(self.column),
            u64::from(self.row) + 1
        )
    }
}

/// Inclusive rectangular block of cells.
///
/// Used both for merged regions (rendered as a single cell anchored at
/// `(top, left)`) and for the degenerate 1x1 bounds of ordinary cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaBounds {
    pub top: u32,
    pub left: u32,
    pub bottom: u32,
    pub right: u32,
}

impl AreaBounds {
    /// Create bounds, swapping reversed edges so that `top <= bottom` and `left <= right`.
    pub fn new(top: u32, left: u32, bottom: u32, right: u32) -> Self {
        Self {
            top: top.min(bottom),
            left: left.min(right),
            bottom: top.max(bottom),
            right: left.max(right),
        }
    }

    /// The 1x1 bounds of a single cell
    pub fn cell(cell: CellCoord) -> Self {
        Self {
            top: cell.row,
            left: cell.column,
            bottom: cell.row,
            right: cell.column,
        }
    }

    /// Copy with reversed edges swapped
    pub fn normalized(self) -> Self {
        Self::new(self.top, self.left, self.bottom, self.right)
    }

    /// Top-left anchor cell
    pub fn anchor(self) -> CellCoord {
        CellCoord::new(self.top, self.left)
    }

    pub fn contains(self, cell: CellCoord) -> bool {
        (self.top..=self.bottom).contains(&cell.row)
            && (self.left..=self.right).contains(&cell.column)
    }

    pub fn intersects(self, other: AreaBounds) -> bool {
        self.top <= other.bottom
            && other.top <= self.bottom
            && self.left <= other.right
            && other.left <= self.right
    }

    /// True for a single-cell area
    pub fn is_single_cell(self) -> bool {
        self.top == self.bottom && self.left == self.right
    }

    /// Number of rows spanned
    pub fn row_span(self) -> u32 {
        self.bottom.saturating_sub(self.top).saturating_add(1)
    }

    /// Number of columns spanned
    pub fn col_span(self) -> u32 {
        self.right.saturating_sub(self.left).saturating_add(1)
    }

    /// First and last index along `axis`
    pub fn span(self, axis: Axis) -> (u32, u32) {
        match axis {
            Axis::Row => (self.top, self.bottom),
            Axis::Column => (self.left, self.right),
        }
    }
}

/// Rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellRect {
    /// X position (left edge)
    pub x: f64,
    /// Y position (top edge)
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CellRect {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}
