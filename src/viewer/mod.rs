//! Main `GridView` struct - the primary entry point for the engine.
//!
//! This module provides the owning controller that handles:
//! - Size tracks and viewport state for both axes
//! - Coordinating the resize, selection, and edit state machines
//! - Scrollable-extent bookkeeping under live resize
//! - Render-request coalescing for the host's refresh tick
//!
//! Pointer-event dispatch lives in `events`.

mod events;

use tracing::trace;

use crate::data::CellStore;
use crate::interact::{
    overlay_placement, EditController, EditSession, OverlayPlacement, ResizeController,
    SelectionController,
};
use crate::layout::{SizeTrack, Viewport};
use crate::render::{render_frame, FrameParams, RenderSurface};
use crate::types::{Axis, GridConfig, Selection, MIN_COL_WIDTH, MIN_ROW_HEIGHT};

/// Convert a 0-based column index to spreadsheet column letters
/// (A, B, ..., Z, AA, AB, ...)
pub fn col_to_letter(col: u32) -> String {
    let mut result = String::new();
    let mut n = col + 1; // Convert to 1-based
    while n > 0 {
        n -= 1;
        let c = char::from(b'A' + (n % 26) as u8);
        result.insert(0, c);
        n /= 26;
    }
    result
}

/// The grid engine: one instance owns all geometry and session state for
/// one grid.
///
/// Single-threaded and event-driven — every entry point completes
/// synchronously, and all state is mutated only through these handlers.
/// State lifecycle is tied to the instance; there are no process-wide
/// globals.
pub struct GridView<S: CellStore> {
    config: GridConfig,
    rows: SizeTrack,
    cols: SizeTrack,
    viewport: Viewport,
    resize: ResizeController,
    selection: SelectionController,
    edit: EditController,
    store: S,
    /// Scrollable extent per axis: header thickness + track total.
    /// Updated incrementally from resize deltas, never recomputed.
    virtual_width: f32,
    virtual_height: f32,
    needs_render: bool,
}

impl<S: CellStore> GridView<S> {
    /// Create a grid over `store` with uniform initial sizes from `config`.
    pub fn new(config: GridConfig, store: S) -> Self {
        let rows = SizeTrack::new(Axis::Row, config.rows, config.default_row_height, MIN_ROW_HEIGHT);
        let cols = SizeTrack::new(Axis::Col, config.cols, config.default_col_width, MIN_COL_WIDTH);
        let virtual_width = config.header_width + cols.total();
        let virtual_height = config.header_height + rows.total();
        Self {
            config,
            rows,
            cols,
            viewport: Viewport::new(),
            resize: ResizeController::new(),
            selection: SelectionController::new(),
            edit: EditController::new(),
            store,
            virtual_width,
            virtual_height,
            needs_render: true,
        }
    }

    /// The grid configuration.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Row heights.
    pub fn rows(&self) -> &SizeTrack {
        &self.rows
    }

    /// Column widths.
    pub fn cols(&self) -> &SizeTrack {
        &self.cols
    }

    /// Current viewport state.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the backing store. The engine does not track
    /// value changes; request a render after bulk updates.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Current (live or frozen) selection, if any.
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.selection()
    }

    /// Live edit session, if any.
    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit.session()
    }

    /// Total scrollable width (row header + all column widths).
    pub fn virtual_width(&self) -> f32 {
        self.virtual_width
    }

    /// Total scrollable height (column header + all row heights).
    pub fn virtual_height(&self) -> f32 {
        self.virtual_height
    }

    /// Resize to a new surface size (full size, headers included). The
    /// body region is what remains after the header bands.
    pub fn resize_viewport(&mut self, width: f32, height: f32) {
        self.viewport.resize(
            width - self.config.header_width,
            height - self.config.header_height,
        );
        self.needs_render = true;
    }

    /// Adopt the scroll surface's current offsets.
    ///
    /// No clamping: the scroll surface owns the valid range, and every
    /// query downstream tolerates out-of-range offsets defensively.
    pub fn set_scroll(&mut self, x: f32, y: f32) {
        if x == self.viewport.scroll_x && y == self.viewport.scroll_y {
            return;
        }
        self.viewport.scroll_x = x;
        self.viewport.scroll_y = y;
        self.needs_render = true;
    }

    /// Scroll by deltas, clamped to the scrollable range. For hosts that
    /// delegate clamping to the engine.
    pub fn scroll_by(&mut self, delta_x: f32, delta_y: f32) {
        self.viewport
            .scroll_by(delta_x, delta_y, &self.cols, &self.rows);
        self.needs_render = true;
    }

    /// Mark the view dirty.
    pub fn request_render(&mut self) {
        self.needs_render = true;
    }

    /// Drain the coalesced render request.
    ///
    /// Mutating entry points set an internal flag; the host calls this once
    /// per display refresh tick and re-renders when it returns true, so a
    /// burst of scroll or drag events costs one paint.
    pub fn take_render_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_render)
    }

    /// Begin editing `(row, col)`. Out-of-range is a silent no-op; an
    /// already-open session is committed first.
    pub fn begin_edit(&mut self, row: u32, col: u32) -> bool {
        let opened = self.edit.begin(&mut self.store, row, col);
        if opened {
            self.needs_render = true;
        }
        opened
    }

    /// Mirror the overlay's text buffer into the live session.
    pub fn set_edit_value(&mut self, text: &str) {
        self.edit.set_value(text);
    }

    /// Commit the live session through to the store.
    pub fn commit_edit(&mut self) -> bool {
        let committed = self.edit.commit(&mut self.store);
        if committed {
            self.needs_render = true;
        }
        committed
    }

    /// Cancel the live session, discarding its pending value.
    pub fn cancel_edit(&mut self) -> bool {
        let cancelled = self.edit.cancel();
        if cancelled {
            self.needs_render = true;
        }
        cancelled
    }

    /// Overlay box for the live edit session against the current scroll
    /// and viewport, or `None` while idle. Re-evaluate on every scroll or
    /// resize tick — a hidden placement keeps the session alive.
    pub fn overlay_placement(&self) -> Option<OverlayPlacement> {
        let session = self.edit.session()?;
        Some(overlay_placement(
            session.row,
            session.col,
            &self.rows,
            &self.cols,
            &self.viewport,
            &self.config,
        ))
    }

    /// Draw a complete frame. Idempotent for unchanged state; does not
    /// consume the render request.
    pub fn render<R: RenderSurface>(&self, surface: &mut R) {
        trace!(
            scroll_x = self.viewport.scroll_x,
            scroll_y = self.viewport.scroll_y,
            "render frame"
        );
        let params = FrameParams {
            rows: &self.rows,
            cols: &self.cols,
            viewport: &self.viewport,
            config: &self.config,
            selection: self.selection.selection(),
        };
        render_frame(surface, &self.store, &params);
    }
}
