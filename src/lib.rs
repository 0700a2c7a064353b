//! gridview - virtualized grid engine
//!
//! Coordinate mapping and interaction state machines for very large
//! two-dimensional tabular surfaces (hundreds of thousands of rows,
//! hundreds of columns) rendered into a fixed-size viewport:
//! - Variable row/column sizes with O(1) incremental resize
//! - Scroll offset → visible index range, pointer pixel → cell index
//! - Row/column boundary-drag resize with cursor hints
//! - Anchor/cursor range selection
//! - Clamped edit-overlay placement with commit/cancel write-through
//!
//! The engine owns no pixels and no cell values: drawing goes through the
//! [`render::RenderSurface`] trait and data through the [`data::CellStore`]
//! trait, so any graphics API and any storage layout can sit behind it.
//!
//! # Usage
//!
//! ```
//! use gridview::{GridConfig, GridView, MemoryStore, RecordingSurface};
//!
//! let config = GridConfig::default();
//! let store = MemoryStore::new(config.rows, config.cols);
//! let mut grid = GridView::new(config, store);
//!
//! grid.resize_viewport(800.0, 600.0);
//! grid.set_scroll(0.0, 250.0);
//!
//! if grid.take_render_request() {
//!     let mut surface = RecordingSurface::new(800.0, 600.0);
//!     grid.render(&mut surface);
//! }
//! ```

pub mod data;
pub mod error;
pub mod interact;
pub mod layout;
pub mod render;
pub mod types;
pub mod viewer;

pub use data::{CellStore, MemoryStore};
pub use error::{GridError, Result};
pub use interact::OverlayPlacement;
pub use layout::{SizeTrack, Viewport};
pub use render::{RecordingSurface, RenderSurface};
pub use types::{
    Axis, CursorHint, GridConfig, HitTarget, Rect, Selection, VisibleRange, MIN_COL_WIDTH,
    MIN_ROW_HEIGHT, OVERLAY_INSET, RESIZE_HANDLE_SIZE,
};
pub use viewer::{col_to_letter, GridView};

/// Get the library version
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
