//! A recording renderer.
//!
//! [`DisplayList`] captures draw calls as [`DrawCommand`] values instead of
//! rasterizing them. It backs headless painting in tests and examples: paint
//! a widget into a display list, then assert on the recorded commands.

use crate::paint::{Stroke, TextStyle};
use crate::renderer::Renderer;
use crate::types::{Color, Point, Rect, RoundedRect};

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Solid rectangle fill.
    FillRect {
        /// Target rectangle.
        rect: Rect,
        /// Fill color.
        color: Color,
        /// Effective group opacity at record time.
        opacity: f32,
    },
    /// Solid rounded-rectangle fill.
    FillRoundedRect {
        /// Target rounded rectangle.
        rect: RoundedRect,
        /// Fill color.
        color: Color,
        /// Effective group opacity at record time.
        opacity: f32,
    },
    /// Rectangle outline.
    StrokeRect {
        /// Target rectangle.
        rect: Rect,
        /// Stroke style.
        stroke: Stroke,
        /// Effective group opacity at record time.
        opacity: f32,
    },
    /// Rounded-rectangle outline.
    StrokeRoundedRect {
        /// Target rounded rectangle.
        rect: RoundedRect,
        /// Stroke style.
        stroke: Stroke,
        /// Effective group opacity at record time.
        opacity: f32,
    },
    /// A line segment.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Stroke style.
        stroke: Stroke,
        /// Effective group opacity at record time.
        opacity: f32,
    },
    /// A text run.
    Text {
        /// The text content.
        text: String,
        /// Baseline-left anchor.
        origin: Point,
        /// Text style.
        style: TextStyle,
        /// Effective group opacity at record time.
        opacity: f32,
    },
}

/// A renderer that records draw calls for later inspection.
#[derive(Debug, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
    opacity_stack: Vec<f32>,
    clip_stack: Vec<Rect>,
}

impl DisplayList {
    /// Create an empty display list.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded commands, in draw order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands.
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// All recorded text runs, in draw order.
    pub fn text_runs(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Check whether any recorded text run equals `needle`.
    pub fn contains_text(&self, needle: &str) -> bool {
        self.text_runs().iter().any(|run| *run == needle)
    }

    /// Discard all recorded commands and reset stacks.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.opacity_stack.clear();
        self.clip_stack.clear();
    }

    /// The effective opacity for the next recorded command.
    pub fn current_opacity(&self) -> f32 {
        self.opacity_stack.iter().product()
    }

    /// The innermost clip rectangle, if any.
    pub fn current_clip(&self) -> Option<Rect> {
        self.clip_stack.last().copied()
    }

    fn clipped_out(&self, rect: &Rect) -> bool {
        self.current_clip().is_some_and(|clip| !clip.intersects(rect))
    }
}

impl Renderer for DisplayList {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if self.clipped_out(&rect) {
            return;
        }
        let opacity = self.current_opacity();
        self.commands.push(DrawCommand::FillRect { rect, color, opacity });
    }

    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: Color) {
        if self.clipped_out(&rect.rect) {
            return;
        }
        let opacity = self.current_opacity();
        self.commands
            .push(DrawCommand::FillRoundedRect { rect, color, opacity });
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) {
        if self.clipped_out(&rect) {
            return;
        }
        let opacity = self.current_opacity();
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            stroke: *stroke,
            opacity,
        });
    }

    fn stroke_rounded_rect(&mut self, rect: RoundedRect, stroke: &Stroke) {
        if self.clipped_out(&rect.rect) {
            return;
        }
        let opacity = self.current_opacity();
        self.commands.push(DrawCommand::StrokeRoundedRect {
            rect,
            stroke: *stroke,
            opacity,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        let opacity = self.current_opacity();
        self.commands.push(DrawCommand::Line {
            from,
            to,
            stroke: *stroke,
            opacity,
        });
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        let opacity = self.current_opacity();
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            origin,
            style: *style,
            opacity,
        });
    }

    fn push_opacity(&mut self, opacity: f32) {
        self.opacity_stack.push(opacity.clamp(0.0, 1.0));
    }

    fn pop_opacity(&mut self) {
        if self.opacity_stack.pop().is_none() {
            tracing::warn!(target: "icefuse_controls_render", "pop_opacity with empty stack");
        }
    }

    fn push_clip(&mut self, rect: Rect) {
        self.clip_stack.push(rect);
    }

    fn pop_clip(&mut self) {
        if self.clip_stack.pop().is_none() {
            tracing::warn!(target: "icefuse_controls_render", "pop_clip with empty stack");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_commands_in_draw_order() {
        let mut list = DisplayList::new();
        list.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
        list.draw_text("hello", Point::new(2.0, 8.0), &TextStyle::default());

        assert_eq!(list.command_count(), 2);
        assert!(matches!(list.commands()[0], DrawCommand::FillRect { .. }));
        assert!(list.contains_text("hello"));
        assert!(!list.contains_text("world"));
    }

    #[test]
    fn opacity_stack_multiplies() {
        let mut list = DisplayList::new();
        list.push_opacity(0.5);
        list.push_opacity(0.5);
        list.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        list.pop_opacity();
        list.pop_opacity();

        match &list.commands()[0] {
            DrawCommand::FillRect { opacity, .. } => assert!((opacity - 0.25).abs() < 1e-6),
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(list.current_opacity(), 1.0);
    }

    #[test]
    fn clip_discards_disjoint_fills() {
        let mut list = DisplayList::new();
        list.push_clip(Rect::new(0.0, 0.0, 10.0, 10.0));
        list.fill_rect(Rect::new(100.0, 100.0, 5.0, 5.0), Color::BLACK);
        list.fill_rect(Rect::new(5.0, 5.0, 5.0, 5.0), Color::BLACK);
        list.pop_clip();

        assert_eq!(list.command_count(), 1);
    }

    #[test]
    fn clear_resets_everything() {
        let mut list = DisplayList::new();
        list.push_opacity(0.5);
        list.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        list.clear();

        assert_eq!(list.command_count(), 0);
        assert_eq!(list.current_opacity(), 1.0);
        assert_eq!(list.current_clip(), None);
    }
}
