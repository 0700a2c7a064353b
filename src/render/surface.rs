//! Render surface trait for pluggable drawing implementations.
//!
//! The engine draws through these primitives and never depends on a
//! concrete graphics API; hosts adapt them to Canvas 2D, a terminal cell
//! buffer, a CPU framebuffer, or anything else that can draw text, lines,
//! and rectangles.

use crate::types::Rect;

/// Drawing-primitive contract the engine renders through.
///
/// Coordinates are viewport-relative logical pixels. Styling (colors,
/// fonts, text alignment) is a host concern; the engine only dictates
/// geometry. Clipping is advisory — `set_clip`/`clear_clip` default to
/// no-ops for surfaces that cannot clip.
pub trait RenderSurface {
    /// Surface width in logical pixels.
    fn width(&self) -> f32;

    /// Surface height in logical pixels.
    fn height(&self) -> f32;

    /// Restrict subsequent drawing to `region`.
    fn set_clip(&mut self, region: Rect) {
        let _ = region;
    }

    /// Remove the active clip region.
    fn clear_clip(&mut self) {}

    /// Draw `text` anchored at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: f32, y: f32);

    /// Draw a one-pixel line from `(x1, y1)` to `(x2, y2)`.
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);

    /// Fill `rect` with the surface's current fill style.
    fn fill_rect(&mut self, rect: Rect);

    /// Clear `rect` back to the background.
    fn clear_rect(&mut self, rect: Rect);
}

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    /// `set_clip(region)`.
    SetClip(Rect),
    /// `clear_clip()`.
    ClearClip,
    /// `draw_text(text, x, y)`.
    Text { text: String, x: f32, y: f32 },
    /// `draw_line(x1, y1, x2, y2)`.
    Line { x1: f32, y1: f32, x2: f32, y2: f32 },
    /// `fill_rect(rect)`.
    FillRect(Rect),
    /// `clear_rect(rect)`.
    ClearRect(Rect),
}

/// In-memory surface that records every draw call.
///
/// Keeps frame-pass behavior assertable without a real drawing backend;
/// also handy for hosts that want to diff successive frames.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    /// Create a recording surface with the given dimensions.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    /// All calls recorded so far, in order.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Drop the recorded calls, keeping the dimensions.
    pub fn reset(&mut self) {
        self.calls.clear();
    }

    /// All recorded text draws as `(text, x, y)`.
    pub fn texts(&self) -> impl Iterator<Item = (&str, f32, f32)> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Text { text, x, y } => Some((text.as_str(), *x, *y)),
            _ => None,
        })
    }
}

impl RenderSurface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn set_clip(&mut self, region: Rect) {
        self.calls.push(DrawCall::SetClip(region));
    }

    fn clear_clip(&mut self) {
        self.calls.push(DrawCall::ClearClip);
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
        });
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.calls.push(DrawCall::Line { x1, y1, x2, y2 });
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.calls.push(DrawCall::FillRect(rect));
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.calls.push(DrawCall::ClearRect(rect));
    }
}
