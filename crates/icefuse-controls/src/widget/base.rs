//! Widget base implementation.
//!
//! [`WidgetBase`] provides the common state every widget needs: identity,
//! geometry, visibility, enabled state, focus and hover tracking, and the
//! repaint flag. Widgets embed it as a field and delegate to it.
//!
//! Top-level controls position themselves in window coordinates; there is no
//! parent/child layout tree in this library, so a widget's geometry origin
//! is its window position.

use icefuse_controls_core::{Object, ObjectBase, ObjectId, Signal};
use icefuse_controls_render::{Point, Rect, Size};

use super::geometry::SizePolicyPair;

/// How a widget participates in keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPolicy {
    /// The widget never takes focus.
    #[default]
    NoFocus,
    /// The widget takes focus on click.
    ClickFocus,
    /// The widget takes focus on click and Tab navigation.
    StrongFocus,
}

/// The base implementation for all widgets.
pub struct WidgetBase {
    object_base: ObjectBase,
    geometry: Rect,
    size_policy: SizePolicyPair,
    focus_policy: FocusPolicy,
    visible: bool,
    enabled: bool,
    focused: bool,
    hovered: bool,
    needs_repaint: bool,

    /// Signal emitted when the geometry changes.
    pub geometry_changed: Signal<Rect>,
    /// Signal emitted when visibility changes.
    pub visible_changed: Signal<bool>,
    /// Signal emitted when the enabled state changes.
    pub enabled_changed: Signal<bool>,
}

impl WidgetBase {
    /// Create a new widget base for a concrete widget type.
    pub fn new<T: 'static>() -> Self {
        Self {
            object_base: ObjectBase::new::<T>(),
            geometry: Rect::ZERO,
            size_policy: SizePolicyPair::default(),
            focus_policy: FocusPolicy::NoFocus,
            visible: true,
            enabled: true,
            focused: false,
            hovered: false,
            needs_repaint: true,
            geometry_changed: Signal::new(),
            visible_changed: Signal::new(),
            enabled_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Identity
    // =========================================================================

    /// Get the widget's unique object ID.
    #[inline]
    pub fn object_id(&self) -> ObjectId {
        self.object_base.id()
    }

    /// Get the widget's debug name.
    pub fn name(&self) -> String {
        self.object_base.name()
    }

    /// Set the widget's debug name.
    pub fn set_name(&self, name: impl Into<String>) {
        self.object_base.set_name(name);
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Get the widget's geometry (window position and size).
    #[inline]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Set the widget's geometry.
    ///
    /// Emits `geometry_changed` when the geometry actually changed.
    pub fn set_geometry(&mut self, rect: Rect) {
        if self.geometry != rect {
            self.geometry = rect;
            self.needs_repaint = true;
            self.geometry_changed.emit(rect);
        }
    }

    /// Get the widget's window position.
    #[inline]
    pub fn pos(&self) -> Point {
        self.geometry.origin
    }

    /// Set the widget's window position.
    pub fn set_pos(&mut self, pos: Point) {
        self.set_geometry(Rect::from_origin_size(pos, self.geometry.size));
    }

    /// Move the widget to the specified position.
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.set_pos(Point::new(x, y));
    }

    /// Get the widget's size.
    #[inline]
    pub fn size(&self) -> Size {
        self.geometry.size
    }

    /// Set the widget's size.
    pub fn set_size(&mut self, size: Size) {
        self.set_geometry(Rect::from_origin_size(self.geometry.origin, size));
    }

    /// Resize the widget.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.set_size(Size::new(width, height));
    }

    /// A rectangle covering the widget's local coordinate space.
    ///
    /// Always positioned at (0, 0) with the widget's size.
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.geometry.size)
    }

    /// Map a point from widget-local coordinates to window coordinates.
    #[inline]
    pub fn map_to_window(&self, point: Point) -> Point {
        point.translated(self.geometry.origin.x, self.geometry.origin.y)
    }

    /// Map a point from window coordinates to widget-local coordinates.
    #[inline]
    pub fn map_from_window(&self, point: Point) -> Point {
        point.translated(-self.geometry.origin.x, -self.geometry.origin.y)
    }

    // =========================================================================
    // Size Policy
    // =========================================================================

    /// Get the widget's size policy.
    #[inline]
    pub fn size_policy(&self) -> SizePolicyPair {
        self.size_policy
    }

    /// Set the widget's size policy.
    pub fn set_size_policy(&mut self, policy: SizePolicyPair) {
        self.size_policy = policy;
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// Get the widget's focus policy.
    #[inline]
    pub fn focus_policy(&self) -> FocusPolicy {
        self.focus_policy
    }

    /// Set the widget's focus policy.
    pub fn set_focus_policy(&mut self, policy: FocusPolicy) {
        self.focus_policy = policy;
    }

    /// Check if the widget can currently take focus.
    #[inline]
    pub fn is_focusable(&self) -> bool {
        self.focus_policy != FocusPolicy::NoFocus && self.enabled && self.visible
    }

    /// Check if the widget currently has keyboard focus.
    #[inline]
    pub fn has_focus(&self) -> bool {
        self.focused
    }

    /// Set the focused state (used by the embedding focus manager).
    pub fn set_focused(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
            self.needs_repaint = true;
        }
    }

    // =========================================================================
    // Visibility / Enabled
    // =========================================================================

    /// Check if the widget is visible.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Set whether the widget is visible.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.needs_repaint = true;
            self.visible_changed.emit(visible);
        }
    }

    /// Show the widget.
    pub fn show(&mut self) {
        self.set_visible(true);
    }

    /// Hide the widget.
    pub fn hide(&mut self) {
        self.set_visible(false);
    }

    /// Check if the widget is enabled.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set whether the widget is enabled (can receive input).
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.needs_repaint = true;
            self.enabled_changed.emit(enabled);
        }
    }

    // =========================================================================
    // Hover
    // =========================================================================

    /// Check if the mouse is currently over this widget.
    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Set the hover state (used by the event dispatch).
    pub fn set_hovered(&mut self, hovered: bool) {
        if self.hovered != hovered {
            self.hovered = hovered;
            self.needs_repaint = true;
        }
    }

    // =========================================================================
    // Repaint
    // =========================================================================

    /// Check if the widget needs to be repainted.
    #[inline]
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Request a repaint of the widget.
    pub fn update(&mut self) {
        self.needs_repaint = true;
    }

    /// Clear the repaint flag (called after painting).
    pub fn clear_repaint_flag(&mut self) {
        self.needs_repaint = false;
    }
}

impl Object for WidgetBase {
    fn object_id(&self) -> ObjectId {
        self.object_base.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe;

    #[test]
    fn geometry_change_emits_signal() {
        let mut base = WidgetBase::new::<Probe>();
        let fired = std::sync::Arc::new(parking_lot::Mutex::new(Vec::new()));

        let fired_clone = fired.clone();
        base.geometry_changed.connect(move |rect| {
            fired_clone.lock().push(*rect);
        });

        let rect = Rect::new(10.0, 20.0, 160.0, 28.0);
        base.set_geometry(rect);
        base.set_geometry(rect); // unchanged, no second emit

        assert_eq!(fired.lock().as_slice(), &[rect]);
        assert_eq!(base.pos(), Point::new(10.0, 20.0));
        assert_eq!(base.rect(), Rect::new(0.0, 0.0, 160.0, 28.0));
    }

    #[test]
    fn window_coordinate_mapping_round_trips() {
        let mut base = WidgetBase::new::<Probe>();
        base.set_geometry(Rect::new(40.0, 60.0, 100.0, 30.0));

        let local = Point::new(5.0, 7.0);
        let window = base.map_to_window(local);
        assert_eq!(window, Point::new(45.0, 67.0));
        assert_eq!(base.map_from_window(window), local);
    }

    #[test]
    fn focusable_requires_policy_enabled_and_visible() {
        let mut base = WidgetBase::new::<Probe>();
        assert!(!base.is_focusable());

        base.set_focus_policy(FocusPolicy::StrongFocus);
        assert!(base.is_focusable());

        base.set_enabled(false);
        assert!(!base.is_focusable());

        base.set_enabled(true);
        base.hide();
        assert!(!base.is_focusable());
    }

    #[test]
    fn repaint_flag_tracks_updates() {
        let mut base = WidgetBase::new::<Probe>();
        base.clear_repaint_flag();
        assert!(!base.needs_repaint());

        base.update();
        assert!(base.needs_repaint());
    }
}
