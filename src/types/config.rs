//! Grid configuration.

use serde::{Deserialize, Serialize};

/// Minimum row height in pixels.
pub const MIN_ROW_HEIGHT: f32 = 15.0;

/// Minimum column width in pixels.
pub const MIN_COL_WIDTH: f32 = 30.0;

/// Width of the boundary band that counts as a resize handle, in logical
/// pixels on either side of a row/column trailing edge.
pub const RESIZE_HANDLE_SIZE: f32 = 8.0;

/// Inset applied to the edit overlay box inside the clamped cell rect.
pub const OVERLAY_INSET: f32 = 2.0;

/// Static configuration for a grid instance.
///
/// Row/column counts are fixed for the lifetime of the grid; sizes within
/// each axis vary via resize drags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Total number of rows.
    pub rows: u32,
    /// Total number of columns.
    pub cols: u32,
    /// Initial uniform row height in pixels.
    pub default_row_height: f32,
    /// Initial uniform column width in pixels.
    pub default_col_width: f32,
    /// Height of the column header band in pixels.
    pub header_height: f32,
    /// Width of the row header band in pixels.
    pub header_width: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 100_000,
            cols: 500,
            default_row_height: 25.0,
            default_col_width: 100.0,
            header_height: 30.0,
            header_width: 50.0,
        }
    }
}
