//! Rust-native UI controls for Icefuse operations dashboards.
//!
//! The centerpiece is [`FloatingSelect`](widget::FloatingSelect): a dropdown
//! selection control with a floating, overlay-hosted panel, optional text
//! search, single- or multi-select semantics, a tri-state "select all" row,
//! and an explicit, cancellable open/close transition.
//!
//! # Architecture
//!
//! - [`widget`]: the widget trait, base state, events and the controls
//! - [`widget::overlay`]: the floating-panel layer that escapes clipped
//!   containers (the panel is attached to an injected [`OverlayHost`]
//!   instead of being painted inline)
//! - [`widget::timer_router`]: delivers timer fires (the panel
//!   close-delay) back to the owning widget
//! - [`cache`]: a shared, de-duplicating cache for option lists fetched
//!   from the dashboard's REST endpoints
//!
//! Rendering is backend-agnostic: widgets paint against a
//! [`Renderer`](icefuse_controls_render::Renderer), and the recording
//! [`DisplayList`](icefuse_controls_render::DisplayList) makes every control
//! fully testable without a window system.
//!
//! [`OverlayHost`]: widget::overlay::OverlayHost
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Instant;
//! use icefuse_controls::prelude::*;
//! use icefuse_controls_render::Rect;
//!
//! let overlay = Arc::new(WindowOverlay::new(Rect::new(0.0, 0.0, 800.0, 600.0)));
//! let timers = shared_timer_router();
//!
//! let mut servers = FloatingSelect::single(overlay, timers)
//!     .with_options(vec![
//!         SelectOption::new("rust-1", "Rust #1"),
//!         SelectOption::new("rust-2", "Rust #2"),
//!     ])
//!     .with_placeholder("Choose a server");
//! servers.set_geometry(Rect::new(16.0, 16.0, 200.0, 28.0));
//!
//! servers.open(Instant::now());
//! servers.select_option(Some("rust-1"));
//! assert_eq!(servers.selected_value(), Some("rust-1"));
//! ```

pub mod cache;
pub mod widget;

/// Commonly used types, re-exported for glob import.
pub mod prelude {
    pub use crate::cache::{OptionSource, OptionSourceError, SharedOptionCache, options_from_json};
    pub use crate::widget::overlay::{NullOverlay, OverlayHost, PanelPlacement, WindowOverlay};
    pub use crate::widget::timer_router::{SharedTimerRouter, TimerRouter, shared_timer_router};
    pub use crate::widget::{
        FloatingSelect, PaintContext, SelectAllState, SelectOption, SelectionChange, SizeHint,
        Widget, WidgetBase, WidgetEvent,
    };
    pub use crate::widget::animation::{PanelPhase, PanelTransition};
}
