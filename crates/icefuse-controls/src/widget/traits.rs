//! Core widget trait definitions.

use icefuse_controls_core::{Object, ObjectId};
use icefuse_controls_render::{Color, Rect, Renderer, Size, Stroke};

use super::base::WidgetBase;
use super::events::WidgetEvent;
use super::geometry::SizeHint;

/// Context provided during widget painting.
///
/// Wraps the renderer and carries the widget's local rectangle plus whether
/// the focus indicator should be shown.
pub struct PaintContext<'a> {
    renderer: &'a mut dyn Renderer,
    widget_rect: Rect,
    show_focus: bool,
}

impl<'a> PaintContext<'a> {
    /// Create a new paint context.
    pub fn new(renderer: &'a mut dyn Renderer, widget_rect: Rect) -> Self {
        Self {
            renderer,
            widget_rect,
            show_focus: false,
        }
    }

    /// Set whether to show the focus indicator (builder pattern).
    #[inline]
    pub fn with_show_focus(mut self, show_focus: bool) -> Self {
        self.show_focus = show_focus;
        self
    }

    /// Check if the focus indicator should be shown.
    #[inline]
    pub fn should_show_focus(&self) -> bool {
        self.show_focus
    }

    /// Get the renderer.
    #[inline]
    pub fn renderer(&mut self) -> &mut dyn Renderer {
        self.renderer
    }

    /// Get the widget's local rectangle.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.widget_rect
    }

    /// Get the widget's width.
    #[inline]
    pub fn width(&self) -> f32 {
        self.widget_rect.width()
    }

    /// Get the widget's height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.widget_rect.height()
    }

    /// Get the widget's size.
    #[inline]
    pub fn size(&self) -> Size {
        self.widget_rect.size
    }

    /// Draw a standard focus rectangle inset from the widget bounds.
    pub fn draw_focus_indicator(&mut self, inset: f32) {
        let focus_color = Color::from_rgb8(0, 120, 215);
        let rect = if inset > 0.0 {
            self.widget_rect.inset(inset)
        } else {
            self.widget_rect
        };
        let stroke = Stroke::new(focus_color, 2.0);
        self.renderer.stroke_rect(rect, &stroke);
    }
}

/// The core trait for all widgets.
///
/// Implementors provide access to their [`WidgetBase`], a size hint for
/// layout, a paint method, and an event handler. Everything else delegates
/// to the base.
pub trait Widget: Object {
    /// Access the widget's base.
    fn widget_base(&self) -> &WidgetBase;

    /// Mutable access to the widget's base.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// The widget's preferred size for layout.
    fn size_hint(&self) -> SizeHint;

    /// Paint the widget into the context.
    fn paint(&self, ctx: &mut PaintContext<'_>);

    /// Handle an event. Return `true` if the event was consumed.
    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        let _ = event;
        false
    }

    /// Get the widget's geometry (window position and size).
    fn geometry(&self) -> Rect {
        self.widget_base().geometry()
    }

    /// Set the widget's geometry.
    fn set_geometry(&mut self, rect: Rect) {
        self.widget_base_mut().set_geometry(rect);
    }

    /// Check if the widget is visible.
    fn is_visible(&self) -> bool {
        self.widget_base().is_visible()
    }

    /// Check if the widget is enabled.
    fn is_enabled(&self) -> bool {
        self.widget_base().is_enabled()
    }

    /// Check if the widget needs repainting.
    fn needs_repaint(&self) -> bool {
        self.widget_base().needs_repaint()
    }
}

/// Helper for code that needs the object ID of any widget.
pub fn widget_id(widget: &dyn Widget) -> ObjectId {
    widget.widget_base().object_id()
}
