//! Rendering: a pluggable drawing-surface trait and the frame pass.
//!
//! This module provides:
//! - The backend-agnostic `RenderSurface` trait and a recording test double
//! - The full-frame draw pass over the visible range (`frame`)
//! - Selection-outline geometry kept testable away from any drawing API

mod frame;
mod selection;
mod surface;

pub use frame::{render_frame, FrameParams};
pub use selection::selection_rect;
pub use surface::{DrawCall, RecordingSurface, RenderSurface};
