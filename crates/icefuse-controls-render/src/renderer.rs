//! The renderer abstraction.
//!
//! Widgets paint against `&mut dyn Renderer`; the concrete backend is chosen
//! by the embedding application. The crate ships one implementation, the
//! recording [`DisplayList`](crate::DisplayList), which is also what the
//! tests assert against.

use crate::paint::{Stroke, TextStyle};
use crate::types::{Color, Point, Rect, RoundedRect};

/// Drawing surface for widget painting.
///
/// Coordinates are logical pixels in the surface's coordinate space. Opacity
/// and clip form stacks: every `push_*` must be balanced by a `pop_*` before
/// the paint pass ends.
pub trait Renderer {
    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Fill a rounded rectangle with a solid color.
    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: Color);

    /// Stroke a rectangle outline.
    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke);

    /// Stroke a rounded rectangle outline.
    fn stroke_rounded_rect(&mut self, rect: RoundedRect, stroke: &Stroke);

    /// Draw a line between two points.
    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke);

    /// Draw a text run with its baseline-left anchor at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle);

    /// Push a group opacity; subsequent drawing is modulated by it.
    fn push_opacity(&mut self, opacity: f32);

    /// Pop the most recent group opacity.
    fn pop_opacity(&mut self);

    /// Push a clip rectangle; subsequent drawing is clipped to it.
    fn push_clip(&mut self, rect: Rect);

    /// Pop the most recent clip rectangle.
    fn pop_clip(&mut self);
}
