//! Widget system for the Icefuse control library.
//!
//! This module provides the widget architecture the controls are built on:
//!
//! - [`Widget`] trait: the base trait for all UI elements
//! - [`WidgetBase`]: common implementation for widget functionality
//! - Size hints and policies for layout negotiation
//! - Widget events for input handling
//! - [`overlay`]: the floating-panel layer (portal analogue)
//! - [`animation`]: the panel open/close transition machine
//! - [`timer_router`]: delivery of timer fires to owning widgets
//!
//! # Creating a Widget
//!
//! 1. Define a struct with a `WidgetBase` field
//! 2. Implement the `Widget` trait
//! 3. Provide `size_hint()` for layout
//! 4. Implement `paint()` for rendering
//!
//! ```ignore
//! use icefuse_controls::widget::*;
//! use icefuse_controls_render::Color;
//!
//! struct Badge {
//!     base: WidgetBase,
//!     label: String,
//! }
//!
//! impl Widget for Badge {
//!     fn widget_base(&self) -> &WidgetBase { &self.base }
//!     fn widget_base_mut(&mut self) -> &mut WidgetBase { &mut self.base }
//!
//!     fn size_hint(&self) -> SizeHint {
//!         SizeHint::from_dimensions(60.0, 20.0)
//!     }
//!
//!     fn paint(&self, ctx: &mut PaintContext<'_>) {
//!         ctx.renderer().fill_rect(ctx.rect(), Color::from_rgb8(230, 240, 255));
//!     }
//! }
//! ```

pub mod animation;
mod base;
mod events;
mod geometry;
pub mod overlay;
pub mod timer_router;
mod traits;
pub mod widgets;

pub use base::{FocusPolicy, WidgetBase};
pub use events::{
    EnterEvent, EventBase, FocusOutEvent, FocusReason, Key, KeyPressEvent, KeyboardModifiers,
    LeaveEvent, MouseButton, MouseMoveEvent, MousePressEvent, MouseReleaseEvent, TimerEvent,
    WheelEvent, WidgetEvent,
};
pub use geometry::{SizeHint, SizePolicy, SizePolicyPair};
pub use traits::{PaintContext, Widget, widget_id};

// Re-export widgets for convenience
pub use widgets::{FloatingSelect, SelectAllState, SelectOption, SelectionChange};
