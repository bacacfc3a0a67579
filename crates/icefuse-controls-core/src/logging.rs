//! Logging facilities for the control library.
//!
//! The controls are instrumented with the `tracing` crate. Install a
//! subscriber in the embedding application to see output:
//!
//! ```ignore
//! tracing_subscriber::fmt::init();
//! ```

use std::time::{Duration, Instant};

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "icefuse_controls_core";
    /// Timer system target.
    pub const TIMER: &str = "icefuse_controls_core::timer";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "icefuse_controls_core::signal";
    /// Object identity target.
    pub const OBJECT: &str = "icefuse_controls_core::object";
    /// Widget layer target.
    pub const WIDGET: &str = "icefuse_controls::widget";
    /// Overlay layer target.
    pub const OVERLAY: &str = "icefuse_controls::overlay";
    /// Option cache target.
    pub const CACHE: &str = "icefuse_controls::cache";
}

/// Span names used throughout the control library.
pub mod span_names {
    /// Widget paint span.
    pub const PAINT: &str = "icefuse_controls::paint";
    /// Widget event dispatch span.
    pub const EVENT: &str = "icefuse_controls::event";
    /// Timer drain span.
    pub const TIMER: &str = "icefuse_controls::timer";
}

/// A drop-guard that logs how long a scope took.
///
/// Emits a `trace` record on drop, or a `warn` when the elapsed time exceeds
/// the configured threshold. Used around paint passes to surface slow frames.
pub struct PerfSpan {
    name: &'static str,
    start: Instant,
    warn_threshold: Option<Duration>,
}

impl PerfSpan {
    /// Start timing a named scope.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
            warn_threshold: None,
        }
    }

    /// Warn when the scope outlives `threshold`.
    pub fn with_warn_threshold(mut self, threshold: Duration) -> Self {
        self.warn_threshold = Some(threshold);
        self
    }

    /// Elapsed time since the span started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for PerfSpan {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        match self.warn_threshold {
            Some(threshold) if elapsed > threshold => {
                tracing::warn!(target: targets::CORE, name = self.name, ?elapsed, ?threshold, "slow scope");
            }
            _ => {
                tracing::trace!(target: targets::CORE, name = self.name, ?elapsed, "scope finished");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perf_span_reports_elapsed_time() {
        let span = PerfSpan::new("test-scope").with_warn_threshold(Duration::from_secs(10));
        assert!(span.elapsed() < Duration::from_secs(10));
    }
}
