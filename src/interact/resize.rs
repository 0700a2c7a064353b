//! Row/column resize state machine.
//!
//! Two states: idle, or dragging one boundary of one axis. A drag starts on
//! a pointer-down whose position falls inside a header band within the
//! resize-handle distance of a boundary, and ends unconditionally on
//! pointer-up. While idle, the same proximity test drives a cursor hint
//! without mutating anything.

use tracing::debug;

use crate::layout::{boundary_near, SizeTrack, Viewport};
use crate::types::{Axis, CursorHint, GridConfig, RESIZE_HANDLE_SIZE};

/// An in-progress boundary drag.
#[derive(Debug, Clone, Copy)]
pub struct ResizeDrag {
    /// Axis whose track is being resized.
    pub axis: Axis,
    /// Index of the entry being resized.
    pub index: u32,
    /// Pointer position along the drag axis at capture, viewport-relative.
    start_pixel: f32,
    /// Size of the entry at capture.
    start_size: f32,
}

/// Result of one drag step: the track mutated and the signed change to its
/// total extent, which the caller must propagate to the scrollable area.
#[derive(Debug, Clone, Copy)]
pub struct ResizeUpdate {
    /// Axis whose total extent changed.
    pub axis: Axis,
    /// Signed delta applied to the track total, in pixels.
    pub extent_delta: f32,
}

/// Resize controller: `Idle` ⇄ `Dragging(axis, index)`.
#[derive(Debug, Default)]
pub struct ResizeController {
    drag: Option<ResizeDrag>,
}

impl ResizeController {
    /// Create an idle controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The active drag, if any.
    pub fn drag(&self) -> Option<&ResizeDrag> {
        self.drag.as_ref()
    }

    /// Try to start a drag from a pointer-down at viewport-relative
    /// `(x, y)`. Returns true when the event was captured.
    ///
    /// Column drags arm inside the column header band (`y` above the band's
    /// bottom edge) near a column trailing edge; row drags symmetrically in
    /// the row header band. The corner, where both bands overlap, arms
    /// neither.
    pub fn on_pointer_down(
        &mut self,
        x: f32,
        y: f32,
        cols: &SizeTrack,
        rows: &SizeTrack,
        viewport: &Viewport,
        config: &GridConfig,
    ) -> bool {
        if self.drag.is_some() {
            return true;
        }
        let Some((axis, index)) = hit_boundary(x, y, cols, rows, viewport, config) else {
            return false;
        };
        let (track, start_pixel) = match axis {
            Axis::Col => (cols, x),
            Axis::Row => (rows, y),
        };
        let start_size = track.size(index).unwrap_or(track.min_size());
        debug!(?axis, index, start_size, "resize drag started");
        self.drag = Some(ResizeDrag {
            axis,
            index,
            start_pixel,
            start_size,
        });
        true
    }

    /// Advance an active drag to the pointer position `(x, y)`.
    ///
    /// Mutates the dragged track and returns the extent delta to apply to
    /// the scrollable area. Returns `None` while idle, or when the clamped
    /// size did not actually change.
    pub fn on_pointer_move(
        &mut self,
        x: f32,
        y: f32,
        cols: &mut SizeTrack,
        rows: &mut SizeTrack,
    ) -> Option<ResizeUpdate> {
        let drag = self.drag.as_ref()?;
        let (track, current_pixel) = match drag.axis {
            Axis::Col => (cols, x),
            Axis::Row => (rows, y),
        };
        let delta = current_pixel - drag.start_pixel;
        let extent_delta = track
            .set_size(drag.index, drag.start_size + delta)
            .unwrap_or(0.0);
        if extent_delta == 0.0 {
            return None;
        }
        Some(ResizeUpdate {
            axis: drag.axis,
            extent_delta,
        })
    }

    /// End the drag, unconditionally, regardless of pointer position.
    pub fn on_pointer_up(&mut self) {
        if let Some(drag) = self.drag.take() {
            debug!(axis = ?drag.axis, index = drag.index, "resize drag ended");
        }
    }

    /// Cursor feedback for a pointer hovering at `(x, y)` with no button
    /// pressed. Side-effect free. During a drag the hint stays pinned to
    /// the drag axis.
    pub fn hover_hint(
        &self,
        x: f32,
        y: f32,
        cols: &SizeTrack,
        rows: &SizeTrack,
        viewport: &Viewport,
        config: &GridConfig,
    ) -> CursorHint {
        let axis = if let Some(drag) = &self.drag {
            Some(drag.axis)
        } else {
            hit_boundary(x, y, cols, rows, viewport, config).map(|(axis, _)| axis)
        };
        match axis {
            Some(Axis::Col) => CursorHint::ColResize,
            Some(Axis::Row) => CursorHint::RowResize,
            None => CursorHint::Default,
        }
    }
}

/// Boundary proximity test shared by drag arming and hover hints.
fn hit_boundary(
    x: f32,
    y: f32,
    cols: &SizeTrack,
    rows: &SizeTrack,
    viewport: &Viewport,
    config: &GridConfig,
) -> Option<(Axis, u32)> {
    let in_col_band = y < config.header_height && x >= config.header_width;
    let in_row_band = x < config.header_width && y >= config.header_height;

    if in_col_band {
        let content_x = x - config.header_width;
        if let Some(index) = boundary_near(cols, content_x, viewport.scroll_x, RESIZE_HANDLE_SIZE) {
            return Some((Axis::Col, index));
        }
    }
    if in_row_band {
        let content_y = y - config.header_height;
        if let Some(index) = boundary_near(rows, content_y, viewport.scroll_y, RESIZE_HANDLE_SIZE) {
            return Some((Axis::Row, index));
        }
    }
    None
}
