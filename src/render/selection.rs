//! Selection overlay helpers.
//!
//! These helpers keep selection math testable without depending on a
//! drawing backend. The outline box must be recomputed every render —
//! scroll and resize both invalidate cached pixel geometry.

use crate::layout::{SizeTrack, Viewport};
use crate::types::{GridConfig, Rect, Selection};

/// Screen-space box of the normalized selection rectangle.
///
/// Built from the cumulative offsets of the four boundary indices, shifted
/// by scroll and header thickness. The box is not clipped; callers draw it
/// under the body clip region.
pub fn selection_rect(
    selection: &Selection,
    rows: &SizeTrack,
    cols: &SizeTrack,
    viewport: &Viewport,
    config: &GridConfig,
) -> Rect {
    let (min_row, min_col, max_row, max_col) = selection.bounds();

    let x1 = cols
        .cumulative_offset(min_col.min(cols.len()))
        .unwrap_or_else(|_| cols.total());
    let x2 = cols
        .cumulative_offset((max_col + 1).min(cols.len()))
        .unwrap_or_else(|_| cols.total());
    let y1 = rows
        .cumulative_offset(min_row.min(rows.len()))
        .unwrap_or_else(|_| rows.total());
    let y2 = rows
        .cumulative_offset((max_row + 1).min(rows.len()))
        .unwrap_or_else(|_| rows.total());

    Rect::new(
        x1 - viewport.scroll_x + config.header_width,
        y1 - viewport.scroll_y + config.header_height,
        x2 - x1,
        y2 - y1,
    )
}
