//! Range-selection state machine.
//!
//! Two states: idle, or selecting. A gesture anchors on pointer-down in the
//! grid body, tracks the pointer with the cursor half of the pair, and
//! freezes the rectangle on pointer-up. The frozen rectangle stays visible
//! until the next gesture or an explicit clear.

use crate::layout::{SizeTrack, Viewport};
use crate::types::{GridConfig, Selection};

/// Selection controller: `Idle` ⇄ `Selecting`.
#[derive(Debug, Default)]
pub struct SelectionController {
    selection: Option<Selection>,
    selecting: bool,
}

impl SelectionController {
    /// Create an idle controller with no selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current (live or frozen) selection, if any.
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// True while a drag gesture is extending the selection.
    pub fn is_selecting(&self) -> bool {
        self.selecting
    }

    /// Try to start a gesture from a pointer-down at viewport-relative
    /// `(x, y)`. Returns true when a new selection was anchored.
    ///
    /// Pointer-downs inside either header band are ignored — those regions
    /// belong to resize detection.
    pub fn on_pointer_down(
        &mut self,
        x: f32,
        y: f32,
        cols: &SizeTrack,
        rows: &SizeTrack,
        viewport: &Viewport,
        config: &GridConfig,
    ) -> bool {
        if x < config.header_width || y < config.header_height {
            return false;
        }
        let col = viewport.col_at_x(cols, x - config.header_width);
        let row = viewport.row_at_y(rows, y - config.header_height);
        let (Some(row), Some(col)) = (row, col) else {
            return false;
        };
        self.selection = Some(Selection::at(row, col));
        self.selecting = true;
        true
    }

    /// Extend the live gesture to the pointer position. The anchor never
    /// moves; only the cursor half updates. Returns true when the cursor
    /// actually changed cell.
    pub fn on_pointer_move(
        &mut self,
        x: f32,
        y: f32,
        cols: &SizeTrack,
        rows: &SizeTrack,
        viewport: &Viewport,
        config: &GridConfig,
    ) -> bool {
        if !self.selecting {
            return false;
        }
        let Some(selection) = self.selection.as_mut() else {
            return false;
        };
        // Positions past the body edges clamp to the first/last index, so
        // dragging out of the viewport keeps extending to the grid edge.
        let col = viewport.col_at_x(cols, x - config.header_width);
        let row = viewport.row_at_y(rows, y - config.header_height);
        let (Some(row), Some(col)) = (row, col) else {
            return false;
        };
        if selection.cursor_row == row && selection.cursor_col == col {
            return false;
        }
        selection.cursor_row = row;
        selection.cursor_col = col;
        true
    }

    /// End the gesture. The rectangle remains, frozen.
    pub fn on_pointer_up(&mut self) {
        self.selecting = false;
    }

    /// Drop the selection and return to the initial idle state.
    pub fn clear(&mut self) {
        self.selection = None;
        self.selecting = false;
    }
}
