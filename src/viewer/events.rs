//! Pointer-event dispatch for `GridView`.
//!
//! Every pointer event is offered to both interaction machines; each
//! decides independently whether to act. Their trigger regions (header
//! bands vs. body) are disjoint, so the only ordering rule encoded here is
//! that an active resize drag suppresses selection updates and hover
//! hints.

use crate::data::CellStore;
use crate::types::{Axis, CursorHint, HitTarget};
use crate::viewer::GridView;

impl<S: CellStore> GridView<S> {
    /// Classify a viewport-relative pointer position. `None` only when a
    /// track is empty.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<HitTarget> {
        let config = &self.config;
        let in_row_band = x < config.header_width;
        let in_col_band = y < config.header_height;
        if in_row_band && in_col_band {
            return Some(HitTarget::Corner);
        }
        if in_col_band {
            let col = self.viewport.col_at_x(&self.cols, x - config.header_width)?;
            return Some(HitTarget::ColHeader(col));
        }
        if in_row_band {
            let row = self.viewport.row_at_y(&self.rows, y - config.header_height)?;
            return Some(HitTarget::RowHeader(row));
        }
        let col = self.viewport.col_at_x(&self.cols, x - config.header_width)?;
        let row = self.viewport.row_at_y(&self.rows, y - config.header_height)?;
        Some(HitTarget::Cell(row, col))
    }

    /// Pointer-down at viewport-relative `(x, y)`.
    ///
    /// Resize detection runs first; a captured boundary drag means the
    /// selection machine never sees the event.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        if self
            .resize
            .on_pointer_down(x, y, &self.cols, &self.rows, &self.viewport, &self.config)
        {
            return;
        }
        if self
            .selection
            .on_pointer_down(x, y, &self.cols, &self.rows, &self.viewport, &self.config)
        {
            self.needs_render = true;
        }
    }

    /// Pointer-move at viewport-relative `(x, y)`. Returns the cursor hint
    /// the host should apply.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> CursorHint {
        if self.resize.is_dragging() {
            if let Some(update) = self
                .resize
                .on_pointer_move(x, y, &mut self.cols, &mut self.rows)
            {
                match update.axis {
                    Axis::Col => self.virtual_width += update.extent_delta,
                    Axis::Row => self.virtual_height += update.extent_delta,
                }
                self.needs_render = true;
            }
            return self
                .resize
                .hover_hint(x, y, &self.cols, &self.rows, &self.viewport, &self.config);
        }

        let hint = self
            .resize
            .hover_hint(x, y, &self.cols, &self.rows, &self.viewport, &self.config);

        if self
            .selection
            .on_pointer_move(x, y, &self.cols, &self.rows, &self.viewport, &self.config)
        {
            self.needs_render = true;
        }
        hint
    }

    /// Pointer-up. Ends whichever gesture is in progress, unconditionally.
    pub fn pointer_up(&mut self) {
        self.resize.on_pointer_up();
        self.selection.on_pointer_up();
    }

    /// Double-activation gesture: begins editing the cell under `(x, y)`.
    /// Anywhere outside the body is a no-op.
    pub fn double_click(&mut self, x: f32, y: f32) -> bool {
        match self.hit_test(x, y) {
            Some(HitTarget::Cell(row, col)) => self.begin_edit(row, col),
            _ => false,
        }
    }
}
