//! Full-frame draw pass.
//!
//! One frame sweeps the visible range once per axis and walks it with
//! running pixel accumulators — cumulative offsets are never recomputed
//! per cell. Three regions are cleared and drawn independently: the column
//! header band, the row header band, and the body.

use crate::data::CellStore;
use crate::layout::{SizeTrack, Viewport};
use crate::render::selection::selection_rect;
use crate::render::surface::RenderSurface;
use crate::types::{GridConfig, Rect, Selection, VisibleRange};
use crate::viewer::col_to_letter;

/// Horizontal inset of cell text from the cell's left edge.
const CELL_TEXT_INSET_X: f32 = 6.0;

/// Baseline offset of cell text from the cell's top edge.
const CELL_TEXT_BASELINE_Y: f32 = 16.0;

/// Everything one frame needs, borrowed from the owning view.
pub struct FrameParams<'a> {
    /// Row heights.
    pub rows: &'a SizeTrack,
    /// Column widths.
    pub cols: &'a SizeTrack,
    /// Current scroll and body extent.
    pub viewport: &'a Viewport,
    /// Header thickness and grid dimensions.
    pub config: &'a GridConfig,
    /// Selection to outline, if any.
    pub selection: Option<&'a Selection>,
}

/// Draw a complete frame.
///
/// Pure function of its inputs: re-invoking with unchanged state produces
/// an identical call sequence.
pub fn render_frame<S: RenderSurface, C: CellStore>(
    surface: &mut S,
    store: &C,
    params: &FrameParams<'_>,
) {
    let config = params.config;
    let viewport = params.viewport;

    let col_header = Rect::new(config.header_width, 0.0, viewport.width, config.header_height);
    let row_header = Rect::new(0.0, config.header_height, config.header_width, viewport.height);
    let body = Rect::new(
        config.header_width,
        config.header_height,
        viewport.width,
        viewport.height,
    );

    surface.clear_rect(col_header);
    surface.clear_rect(row_header);
    surface.clear_rect(body);

    let visible_cols = viewport.visible_cols(params.cols);
    let visible_rows = viewport.visible_rows(params.rows);

    draw_col_header(surface, params, &visible_cols, col_header);
    draw_row_header(surface, params, &visible_rows, row_header);
    draw_grid_lines(surface, params, &visible_rows, &visible_cols, body);
    draw_cells(surface, store, params, &visible_rows, &visible_cols, body);

    if let Some(selection) = params.selection {
        draw_selection_outline(surface, params, selection, body);
    }
}

fn draw_col_header<S: RenderSurface>(
    surface: &mut S,
    params: &FrameParams<'_>,
    visible: &VisibleRange,
    region: Rect,
) {
    let config = params.config;
    surface.set_clip(region);
    surface.fill_rect(region);
    surface.draw_line(region.x, 0.0, region.x, config.header_height);

    let mut x = config.header_width + visible.leading_offset - params.viewport.scroll_x;
    for (col, width) in params
        .cols
        .sizes_from(visible.start)
        .take(visible.count() as usize)
    {
        surface.draw_text(&col_to_letter(col), x + width / 2.0, config.header_height / 2.0);
        x += width;
        surface.draw_line(x, 0.0, x, config.header_height);
    }
    surface.clear_clip();
}

fn draw_row_header<S: RenderSurface>(
    surface: &mut S,
    params: &FrameParams<'_>,
    visible: &VisibleRange,
    region: Rect,
) {
    let config = params.config;
    surface.set_clip(region);
    surface.fill_rect(region);
    surface.draw_line(0.0, region.y, config.header_width, region.y);

    let mut y = config.header_height + visible.leading_offset - params.viewport.scroll_y;
    for (row, height) in params
        .rows
        .sizes_from(visible.start)
        .take(visible.count() as usize)
    {
        // Row labels are 1-based.
        surface.draw_text(&(row + 1).to_string(), config.header_width / 2.0, y + height / 2.0);
        y += height;
        surface.draw_line(0.0, y, config.header_width, y);
    }
    surface.clear_clip();
}

fn draw_grid_lines<S: RenderSurface>(
    surface: &mut S,
    params: &FrameParams<'_>,
    visible_rows: &VisibleRange,
    visible_cols: &VisibleRange,
    body: Rect,
) {
    let config = params.config;
    let viewport = params.viewport;
    surface.set_clip(body);

    let mut x = config.header_width + visible_cols.leading_offset - viewport.scroll_x;
    for (_, width) in params
        .cols
        .sizes_from(visible_cols.start)
        .take(visible_cols.count() as usize)
    {
        x += width;
        surface.draw_line(x, body.y, x, body.y + body.h);
    }

    let mut y = config.header_height + visible_rows.leading_offset - viewport.scroll_y;
    for (_, height) in params
        .rows
        .sizes_from(visible_rows.start)
        .take(visible_rows.count() as usize)
    {
        y += height;
        surface.draw_line(body.x, y, body.x + body.w, y);
    }

    surface.clear_clip();
}

fn draw_cells<S: RenderSurface, C: CellStore>(
    surface: &mut S,
    store: &C,
    params: &FrameParams<'_>,
    visible_rows: &VisibleRange,
    visible_cols: &VisibleRange,
    body: Rect,
) {
    let config = params.config;
    let viewport = params.viewport;
    surface.set_clip(body);

    let mut y = config.header_height + visible_rows.leading_offset - viewport.scroll_y;
    for (row, height) in params
        .rows
        .sizes_from(visible_rows.start)
        .take(visible_rows.count() as usize)
    {
        let mut x = config.header_width + visible_cols.leading_offset - viewport.scroll_x;
        for (col, width) in params
            .cols
            .sizes_from(visible_cols.start)
            .take(visible_cols.count() as usize)
        {
            if let Some(value) = store.get(row, col) {
                surface.draw_text(&value, x + CELL_TEXT_INSET_X, y + CELL_TEXT_BASELINE_Y);
            }
            x += width;
        }
        y += height;
    }

    surface.clear_clip();
}

fn draw_selection_outline<S: RenderSurface>(
    surface: &mut S,
    params: &FrameParams<'_>,
    selection: &Selection,
    body: Rect,
) {
    let rect = selection_rect(
        selection,
        params.rows,
        params.cols,
        params.viewport,
        params.config,
    );
    surface.set_clip(body);
    surface.draw_line(rect.x, rect.y, rect.x + rect.w, rect.y);
    surface.draw_line(rect.x + rect.w, rect.y, rect.x + rect.w, rect.y + rect.h);
    surface.draw_line(rect.x + rect.w, rect.y + rect.h, rect.x, rect.y + rect.h);
    surface.draw_line(rect.x, rect.y + rect.h, rect.x, rect.y);
    surface.clear_clip();
}
