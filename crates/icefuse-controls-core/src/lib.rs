//! Core systems for the Icefuse control library.
//!
//! This crate provides the foundations the widget layer builds on:
//!
//! - **Object identity**: process-unique IDs for widgets, panels and timer owners
//! - **Signal/slot system**: type-safe change notification
//! - **Timers**: deterministic one-shot and repeating timers driven by explicit time
//! - **Logging**: `tracing` targets and a scope-timing guard
//!
//! # Signal/Slot Example
//!
//! ```
//! use icefuse_controls_core::Signal;
//!
//! let selection_changed = Signal::<Option<String>>::new();
//!
//! let conn = selection_changed.connect(|value| {
//!     println!("selected: {value:?}");
//! });
//!
//! selection_changed.emit(Some("us-west".to_string()));
//! selection_changed.disconnect(conn);
//! ```
//!
//! # Timer Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use icefuse_controls_core::TimerManager;
//!
//! let mut timers = TimerManager::new();
//! let now = Instant::now();
//! let id = timers.start_one_shot(now, Duration::from_millis(160));
//!
//! // Nothing due yet...
//! assert!(timers.drain_due(now).is_empty());
//! // ...until the deadline passes.
//! assert_eq!(timers.drain_due(now + Duration::from_millis(160)), vec![id]);
//! ```

mod error;
pub mod logging;
pub mod object;
pub mod signal;
mod timer;

pub use error::{ControlsError, Result, SignalError, TimerError};
pub use logging::PerfSpan;
pub use object::{Object, ObjectBase, ObjectId};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use timer::{SharedTimerManager, TimerId, TimerKind, TimerManager};
