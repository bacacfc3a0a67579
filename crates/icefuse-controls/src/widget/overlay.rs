//! Overlay layer for floating panels.
//!
//! Floating panels (dropdown lists, tooltips) must escape any clipped or
//! scrolled container, so they are not painted inline: the owning widget
//! attaches a panel to an [`OverlayHost`], which tracks panel rectangles in
//! window coordinates and paints them above everything else.
//!
//! The host is injected into widgets rather than reached through a global,
//! so headless tests can run against [`WindowOverlay`] directly, or against
//! [`NullOverlay`] to exercise the no-host path, where widgets suppress
//! their panels instead of erroring.

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use icefuse_controls_core::ObjectId;
use icefuse_controls_render::{Point, Rect, Size};

new_key_type! {
    /// A unique identifier for an attached overlay panel.
    pub struct PanelId;
}

/// Placement strategy for positioning a panel relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelPlacement {
    /// Align the left edge with the anchor's left edge, below the anchor.
    #[default]
    BelowAlignLeft,
    /// Align the left edge with the anchor's left edge, above the anchor.
    AboveAlignLeft,
    /// Centered horizontally, below the anchor.
    Below,
    /// Centered horizontally, above the anchor.
    Above,
}

impl PanelPlacement {
    /// Calculate the panel position for an anchor rectangle and panel size.
    ///
    /// When `available_bounds` is given, the position is flipped to the
    /// opposite side if the panel would overflow, then shifted to stay
    /// within bounds.
    pub fn calculate_position(
        &self,
        anchor_rect: Rect,
        panel_size: Size,
        available_bounds: Option<Rect>,
    ) -> Point {
        let mut pos = self.initial_position(anchor_rect, panel_size);

        if let Some(bounds) = available_bounds {
            pos = Self::flip_shift(pos, panel_size, bounds, *self, anchor_rect);
        }

        pos
    }

    fn initial_position(&self, anchor_rect: Rect, panel_size: Size) -> Point {
        let centered_x = anchor_rect.center().x - panel_size.width / 2.0;
        match self {
            PanelPlacement::BelowAlignLeft => {
                Point::new(anchor_rect.origin.x, anchor_rect.bottom())
            }
            PanelPlacement::AboveAlignLeft => Point::new(
                anchor_rect.origin.x,
                anchor_rect.origin.y - panel_size.height,
            ),
            PanelPlacement::Below => Point::new(centered_x, anchor_rect.bottom()),
            PanelPlacement::Above => {
                Point::new(centered_x, anchor_rect.origin.y - panel_size.height)
            }
        }
    }

    fn flip_shift(
        pos: Point,
        panel_size: Size,
        bounds: Rect,
        placement: PanelPlacement,
        anchor_rect: Rect,
    ) -> Point {
        let mut result = pos;

        // Flip vertically when the preferred side overflows.
        match placement {
            PanelPlacement::Below | PanelPlacement::BelowAlignLeft => {
                if pos.y + panel_size.height > bounds.bottom() {
                    result.y = anchor_rect.origin.y - panel_size.height;
                }
            }
            PanelPlacement::Above | PanelPlacement::AboveAlignLeft => {
                if pos.y < bounds.origin.y {
                    result.y = anchor_rect.bottom();
                }
            }
        }

        // Shift to stay within bounds (after flipping).
        if result.x < bounds.origin.x {
            result.x = bounds.origin.x;
        } else if result.x + panel_size.width > bounds.right() {
            result.x = bounds.right() - panel_size.width;
        }

        if result.y < bounds.origin.y {
            result.y = bounds.origin.y;
        } else if result.y + panel_size.height > bounds.bottom() {
            result.y = bounds.bottom() - panel_size.height;
        }

        result
    }
}

/// Host surface for floating panels.
///
/// `attach` returns `None` when the host has no surface to mount panels on;
/// widgets must treat that as "render no panel", not as an error.
pub trait OverlayHost: Send + Sync {
    /// Attach a panel owned by `owner` at `rect` (window coordinates).
    fn attach(&self, owner: ObjectId, rect: Rect) -> Option<PanelId>;

    /// Update an attached panel's rectangle.
    fn reposition(&self, id: PanelId, rect: Rect);

    /// Remove an attached panel. Unknown IDs are ignored.
    fn detach(&self, id: PanelId);

    /// The bounds panels may occupy (window coordinates).
    fn bounds(&self) -> Rect;

    /// The rectangle of an attached panel.
    fn panel_rect(&self, id: PanelId) -> Option<Rect>;
}

struct PanelEntry {
    owner: ObjectId,
    rect: Rect,
}

struct OverlayState {
    panels: SlotMap<PanelId, PanelEntry>,
    // Attach order; later entries are painted on top.
    z_order: Vec<PanelId>,
}

/// The standard overlay host backed by a window surface.
pub struct WindowOverlay {
    state: Mutex<OverlayState>,
    bounds: Mutex<Rect>,
}

impl WindowOverlay {
    /// Create an overlay covering `bounds` (window coordinates).
    pub fn new(bounds: Rect) -> Self {
        Self {
            state: Mutex::new(OverlayState {
                panels: SlotMap::with_key(),
                z_order: Vec::new(),
            }),
            bounds: Mutex::new(bounds),
        }
    }

    /// Update the overlay bounds (e.g. after a window resize).
    ///
    /// Attached panels keep their rectangles; owners reposition on their
    /// next open.
    pub fn set_bounds(&self, bounds: Rect) {
        *self.bounds.lock() = bounds;
    }

    /// Number of attached panels.
    pub fn panel_count(&self) -> usize {
        self.state.lock().panels.len()
    }

    /// The topmost panel containing `point`, if any.
    pub fn hit_test(&self, point: Point) -> Option<PanelId> {
        let state = self.state.lock();
        state
            .z_order
            .iter()
            .rev()
            .copied()
            .find(|id| state.panels.get(*id).is_some_and(|p| p.rect.contains(point)))
    }

    /// The owner of an attached panel.
    pub fn panel_owner(&self, id: PanelId) -> Option<ObjectId> {
        self.state.lock().panels.get(id).map(|p| p.owner)
    }

    /// Detach every panel owned by `owner`.
    pub fn detach_all_for(&self, owner: ObjectId) {
        let mut state = self.state.lock();
        let ids: Vec<PanelId> = state
            .panels
            .iter()
            .filter(|(_, p)| p.owner == owner)
            .map(|(id, _)| id)
            .collect();
        for id in ids {
            state.panels.remove(id);
            state.z_order.retain(|z| *z != id);
        }
    }
}

impl OverlayHost for WindowOverlay {
    fn attach(&self, owner: ObjectId, rect: Rect) -> Option<PanelId> {
        let mut state = self.state.lock();
        let id = state.panels.insert(PanelEntry { owner, rect });
        state.z_order.push(id);
        tracing::debug!(target: icefuse_controls_core::logging::targets::OVERLAY, ?id, ?owner, "panel attached");
        Some(id)
    }

    fn reposition(&self, id: PanelId, rect: Rect) {
        if let Some(panel) = self.state.lock().panels.get_mut(id) {
            panel.rect = rect;
        }
    }

    fn detach(&self, id: PanelId) {
        let mut state = self.state.lock();
        if state.panels.remove(id).is_some() {
            state.z_order.retain(|z| *z != id);
            tracing::debug!(target: icefuse_controls_core::logging::targets::OVERLAY, ?id, "panel detached");
        }
    }

    fn bounds(&self) -> Rect {
        *self.bounds.lock()
    }

    fn panel_rect(&self, id: PanelId) -> Option<Rect> {
        self.state.lock().panels.get(id).map(|p| p.rect)
    }
}

/// An overlay host with no surface.
///
/// `attach` always returns `None`; widgets suppress their panels. Used when
/// the control runs without a window (headless tools, early startup).
#[derive(Debug, Default)]
pub struct NullOverlay;

impl OverlayHost for NullOverlay {
    fn attach(&self, owner: ObjectId, _rect: Rect) -> Option<PanelId> {
        tracing::debug!(target: icefuse_controls_core::logging::targets::OVERLAY, ?owner, "no overlay surface, panel suppressed");
        None
    }

    fn reposition(&self, _id: PanelId, _rect: Rect) {}

    fn detach(&self, _id: PanelId) {}

    fn bounds(&self) -> Rect {
        Rect::ZERO
    }

    fn panel_rect(&self, _id: PanelId) -> Option<Rect> {
        None
    }
}
