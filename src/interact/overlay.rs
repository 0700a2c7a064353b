//! Edit-overlay placement.
//!
//! Pure screen-space math, kept free of any widget toolkit: given the cell
//! under edit and the live viewport, produce the clamped box the host should
//! give its input overlay, or mark it hidden when the cell is scrolled out.

use crate::layout::{cell_rect, SizeTrack, Viewport};
use crate::types::{GridConfig, Rect, OVERLAY_INSET};

/// Where (and whether) the edit overlay should appear this tick.
///
/// Recomputed on every scroll/resize tick; a hidden placement does not end
/// the edit session, it only withholds the widget until the cell scrolls
/// back into view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayPlacement {
    /// Viewport-relative box for the overlay widget. Meaningful only when
    /// `visible`.
    pub rect: Rect,
    /// False when clamping left no on-screen area.
    pub visible: bool,
}

/// Compute the overlay box for the cell at `(row, col)`.
///
/// The absolute cell box is shifted by scroll and header thickness, clamped
/// against the body region on all four sides, then inset by a fixed border
/// margin. A clamped width or height ≤ 0 yields a hidden placement.
pub fn overlay_placement(
    row: u32,
    col: u32,
    rows: &SizeTrack,
    cols: &SizeTrack,
    viewport: &Viewport,
    config: &GridConfig,
) -> OverlayPlacement {
    let cell = cell_rect(rows, cols, row, col);
    let screen = Rect::new(
        cell.x - viewport.scroll_x + config.header_width,
        cell.y - viewport.scroll_y + config.header_height,
        cell.w,
        cell.h,
    );
    let body = Rect::new(
        config.header_width,
        config.header_height,
        viewport.width,
        viewport.height,
    );
    let clamped = screen.intersect(&body);
    if clamped.is_empty() {
        return OverlayPlacement {
            rect: clamped,
            visible: false,
        };
    }
    let rect = clamped.inset(OVERLAY_INSET);
    OverlayPlacement {
        rect,
        visible: !rect.is_empty(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::types::Axis;

    fn fixtures() -> (SizeTrack, SizeTrack, Viewport, GridConfig) {
        let config = GridConfig {
            rows: 100,
            cols: 20,
            ..GridConfig::default()
        };
        let cols = SizeTrack::new(Axis::Col, config.cols, config.default_col_width, 30.0);
        let rows = SizeTrack::new(Axis::Row, config.rows, config.default_row_height, 15.0);
        let mut viewport = Viewport::new();
        viewport.resize(400.0, 300.0);
        (cols, rows, viewport, config)
    }

    #[test]
    fn test_fully_visible_cell_is_inset_box() {
        let (cols, rows, vp, config) = fixtures();
        let p = overlay_placement(1, 1, &rows, &cols, &vp, &config);
        assert!(p.visible);
        // Cell (1,1) spans (100,25)-(200,50) in content space.
        assert_eq!(
            p.rect,
            Rect::new(
                config.header_width + 100.0 + 2.0,
                config.header_height + 25.0 + 2.0,
                96.0,
                21.0
            )
        );
    }

    #[test]
    fn test_cell_scrolled_above_viewport_is_hidden() {
        let (cols, rows, mut vp, config) = fixtures();
        // Row 0 ends at y=25; scroll far past it.
        vp.scroll_y = 200.0;
        let p = overlay_placement(0, 0, &rows, &cols, &vp, &config);
        assert!(!p.visible);
        assert!(p.rect.h <= 0.0);
    }

    #[test]
    fn test_partially_clipped_cell_is_clamped() {
        let (cols, rows, mut vp, config) = fixtures();
        // Scroll 10px into row 0: its on-screen height is 15 before inset.
        vp.scroll_y = 10.0;
        let p = overlay_placement(0, 0, &rows, &cols, &vp, &config);
        assert!(p.visible);
        assert_eq!(p.rect.y, config.header_height + 2.0);
        assert_eq!(p.rect.h, 15.0 - 2.0 * OVERLAY_INSET);
    }

    #[test]
    fn test_cell_beyond_right_edge_is_hidden() {
        let (cols, rows, vp, config) = fixtures();
        // Column 10 starts at x=1000, viewport body is 400 wide, no scroll.
        let p = overlay_placement(0, 10, &rows, &cols, &vp, &config);
        assert!(!p.visible);
    }
}
