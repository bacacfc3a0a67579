//! Rendering primitives for the Icefuse control library.
//!
//! This crate provides the geometry and paint vocabulary the widget layer
//! draws with:
//!
//! - [`Point`], [`Size`], [`Rect`], [`RoundedRect`], [`Color`]: geometry and color
//! - [`Stroke`], [`TextStyle`], [`FontWeight`], [`Icon`]: paint styles
//! - [`Renderer`]: the drawing trait widgets paint against
//! - [`DisplayList`]: a recording renderer for headless painting and tests
//!
//! There is no GPU or window-system backend here: embedding applications
//! supply their own `Renderer` implementation, and the recording
//! [`DisplayList`] covers tests, examples and offscreen use.
//!
//! # Example
//!
//! ```
//! use icefuse_controls_render::{Color, DisplayList, Point, Rect, Renderer, TextStyle};
//!
//! let mut list = DisplayList::new();
//! list.fill_rect(Rect::new(0.0, 0.0, 120.0, 28.0), Color::WHITE);
//! list.draw_text("All regions", Point::new(6.0, 19.0), &TextStyle::default());
//!
//! assert!(list.contains_text("All regions"));
//! ```

mod display_list;
mod icon;
mod paint;
mod renderer;
mod types;

pub use display_list::{DisplayList, DrawCommand};
pub use icon::Icon;
pub use paint::{FontWeight, Stroke, TextStyle};
pub use renderer::Renderer;
pub use types::{Color, Point, Rect, RoundedRect, Size};
