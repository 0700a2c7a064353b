//! Basic geometric types used by layout and interaction.

use serde::{Deserialize, Serialize};

/// Which axis a track or drag operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// Vertical axis: one entry per row (heights).
    Row,
    /// Horizontal axis: one entry per column (widths).
    Col,
}

/// An axis-aligned rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// X position (left edge).
    pub x: f32,
    /// Y position (top edge).
    pub y: f32,
    /// Width of the rectangle.
    pub w: f32,
    /// Height of the rectangle.
    pub h: f32,
}

impl Rect {
    /// Create a rectangle from position and size.
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// True when the rectangle encloses no pixels.
    pub fn is_empty(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }

    /// Intersect with another rectangle. Degenerate results keep their
    /// (possibly negative) width/height so callers can distinguish "clipped
    /// away above" from "clipped away below".
    pub fn intersect(&self, other: &Rect) -> Rect {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = (self.x + self.w).min(other.x + other.w);
        let y2 = (self.y + self.h).min(other.y + other.h);
        Rect::new(x1, y1, x2 - x1, y2 - y1)
    }

    /// Shrink the rectangle by `margin` on all four sides.
    pub fn inset(&self, margin: f32) -> Rect {
        Rect::new(
            self.x + margin,
            self.y + margin,
            self.w - 2.0 * margin,
            self.h - 2.0 * margin,
        )
    }
}

/// Half-open index range visible in a viewport, with the pixel offset of its
/// first index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisibleRange {
    /// First visible index.
    pub start: u32,
    /// One past the last visible index (`start..end`).
    pub end: u32,
    /// Cumulative size of all indices before `start`, in track coordinates.
    pub leading_offset: f32,
}

impl VisibleRange {
    /// Number of indices in the range.
    pub fn count(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }
}

/// What a viewport-relative pointer position lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The corner where both header bands overlap.
    Corner,
    /// Column header band, with the column index under the pointer.
    ColHeader(u32),
    /// Row header band, with the row index under the pointer.
    RowHeader(u32),
    /// Grid body, with the cell under the pointer.
    Cell(u32, u32),
}

/// Cursor feedback the host should apply while the pointer hovers the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorHint {
    /// No special cursor.
    #[default]
    Default,
    /// Pointer is over a column boundary drag handle.
    ColResize,
    /// Pointer is over a row boundary drag handle.
    RowResize,
}

impl CursorHint {
    /// CSS cursor keyword for browser-backed hosts.
    pub fn as_css(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::ColResize => "col-resize",
            Self::RowResize => "row-resize",
        }
    }
}
