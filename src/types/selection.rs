//! Anchor/cursor range selection.

use serde::{Deserialize, Serialize};

/// A rectangular cell selection defined by a fixed anchor and a moving
/// cursor. The anchor is set at gesture start and never moves for the
/// duration of the gesture; the cursor tracks the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Row fixed at gesture start.
    pub anchor_row: u32,
    /// Column fixed at gesture start.
    pub anchor_col: u32,
    /// Row under the pointer.
    pub cursor_row: u32,
    /// Column under the pointer.
    pub cursor_col: u32,
}

impl Selection {
    /// Create a selection collapsed to a single cell (anchor == cursor).
    pub fn at(row: u32, col: u32) -> Self {
        Self {
            anchor_row: row,
            anchor_col: col,
            cursor_row: row,
            cursor_col: col,
        }
    }

    /// Get normalized bounds as `(min_row, min_col, max_row, max_col)`,
    /// inclusive on both ends. Symmetric under swapping anchor and cursor.
    pub fn bounds(&self) -> (u32, u32, u32, u32) {
        (
            self.anchor_row.min(self.cursor_row),
            self.anchor_col.min(self.cursor_col),
            self.anchor_row.max(self.cursor_row),
            self.anchor_col.max(self.cursor_col),
        )
    }

    /// True when the selection covers exactly one cell.
    pub fn is_single_cell(&self) -> bool {
        self.anchor_row == self.cursor_row && self.anchor_col == self.cursor_col
    }
}
