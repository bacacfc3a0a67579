//! Panel open/close transition.
//!
//! Floating panels animate through an explicit four-phase machine:
//!
//! ```text
//! Closed -> Entering -> Open -> Closing -> Closed
//! ```
//!
//! `Entering` and `Closing` exist purely to drive an opacity/translate
//! transition; they carry no selection semantics. Re-opening while `Closing`
//! jumps straight back to `Entering`, cancelling the pending removal. The
//! machine is a single phase field plus a timestamp, driven by explicit
//! `Instant`s so the transition is deterministic under test.

use std::time::{Duration, Instant};

/// Easing applied to transition progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant rate.
    Linear,
    /// Decelerating (fast start, slow end).
    #[default]
    EaseOut,
    /// Accelerate then decelerate.
    EaseInOut,
}

/// Apply an easing function to linear progress in `0.0..=1.0`.
pub fn ease(easing: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match easing {
        Easing::Linear => t,
        Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
        Easing::EaseInOut => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
            }
        }
    }
}

/// The animation phase of a floating panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelPhase {
    /// The panel is not present.
    #[default]
    Closed,
    /// The panel is attached and playing its enter transition.
    Entering,
    /// The panel is fully open.
    Open,
    /// The panel is playing its exit transition before removal.
    Closing,
}

/// Controller for the panel open/close transition.
#[derive(Debug, Clone)]
pub struct PanelTransition {
    phase: PanelPhase,
    changed_at: Option<Instant>,
    enter_duration: Duration,
    exit_duration: Duration,
    easing: Easing,
    slide_distance: f32,
}

impl PanelTransition {
    /// Exit transition length; also the close-delay before panel removal.
    pub const DEFAULT_EXIT: Duration = Duration::from_millis(160);
    /// Enter transition length.
    pub const DEFAULT_ENTER: Duration = Duration::from_millis(120);

    /// Create a transition in the `Closed` phase with default timings.
    pub fn new() -> Self {
        Self {
            phase: PanelPhase::Closed,
            changed_at: None,
            enter_duration: Self::DEFAULT_ENTER,
            exit_duration: Self::DEFAULT_EXIT,
            easing: Easing::default(),
            slide_distance: 6.0,
        }
    }

    /// Set the enter/exit durations.
    pub fn with_durations(mut self, enter: Duration, exit: Duration) -> Self {
        self.enter_duration = enter;
        self.exit_duration = exit;
        self
    }

    /// The current phase.
    #[inline]
    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    /// Whether the panel should be present (attached) at all.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.phase != PanelPhase::Closed
    }

    /// Whether the panel accepts interaction (open or entering).
    #[inline]
    pub fn is_interactive(&self) -> bool {
        matches!(self.phase, PanelPhase::Entering | PanelPhase::Open)
    }

    /// The exit duration; the owner schedules its close-delay timer with it.
    #[inline]
    pub fn exit_duration(&self) -> Duration {
        self.exit_duration
    }

    /// Begin opening.
    ///
    /// Valid from `Closed` and from `Closing` (re-opening mid-close). Returns
    /// `false` when already `Entering`/`Open`.
    pub fn begin_open(&mut self, now: Instant) -> bool {
        match self.phase {
            PanelPhase::Closed | PanelPhase::Closing => {
                self.phase = PanelPhase::Entering;
                self.changed_at = Some(now);
                true
            }
            PanelPhase::Entering | PanelPhase::Open => false,
        }
    }

    /// Begin closing.
    ///
    /// Valid from `Entering` (a close mid-enter is allowed) and `Open`.
    /// Returns `false` when already `Closing`/`Closed`.
    pub fn begin_close(&mut self, now: Instant) -> bool {
        match self.phase {
            PanelPhase::Entering | PanelPhase::Open => {
                self.phase = PanelPhase::Closing;
                self.changed_at = Some(now);
                true
            }
            PanelPhase::Closing | PanelPhase::Closed => false,
        }
    }

    /// Complete the close: the panel has been removed.
    pub fn finish_close(&mut self) {
        self.phase = PanelPhase::Closed;
        self.changed_at = None;
    }

    /// Advance the machine. Flips `Entering` to `Open` once the enter
    /// duration has elapsed. Returns `true` when the phase changed.
    ///
    /// `Closing -> Closed` is not advanced here: removal is owned by the
    /// close-delay timer so that a re-open can cancel it.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.phase == PanelPhase::Entering
            && let Some(changed_at) = self.changed_at
            && now.duration_since(changed_at) >= self.enter_duration
        {
            self.phase = PanelPhase::Open;
            self.changed_at = Some(now);
            return true;
        }
        false
    }

    fn progress(&self, now: Instant, duration: Duration) -> f32 {
        let Some(changed_at) = self.changed_at else {
            return 1.0;
        };
        if duration.is_zero() {
            return 1.0;
        }
        (now.duration_since(changed_at).as_secs_f32() / duration.as_secs_f32()).min(1.0)
    }

    /// The panel's group opacity at `now`.
    pub fn opacity(&self, now: Instant) -> f32 {
        match self.phase {
            PanelPhase::Closed => 0.0,
            PanelPhase::Open => 1.0,
            PanelPhase::Entering => ease(self.easing, self.progress(now, self.enter_duration)),
            PanelPhase::Closing => 1.0 - ease(self.easing, self.progress(now, self.exit_duration)),
        }
    }

    /// Vertical slide offset at `now` (panels slide up into place).
    pub fn slide_offset(&self, now: Instant) -> f32 {
        match self.phase {
            PanelPhase::Closed => self.slide_distance,
            PanelPhase::Open => 0.0,
            PanelPhase::Entering => {
                self.slide_distance
                    * (1.0 - ease(self.easing, self.progress(now, self.enter_duration)))
            }
            PanelPhase::Closing => {
                self.slide_distance * ease(self.easing, self.progress(now, self.exit_duration))
            }
        }
    }
}

impl Default for PanelTransition {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(base: Instant, ms: u64) -> Instant {
        base + Duration::from_millis(ms)
    }

    #[test]
    fn full_cycle_walks_all_phases() {
        let start = Instant::now();
        let mut t = PanelTransition::new();
        assert_eq!(t.phase(), PanelPhase::Closed);
        assert!(!t.is_visible());

        assert!(t.begin_open(start));
        assert_eq!(t.phase(), PanelPhase::Entering);
        assert!(t.is_visible());
        assert!(t.is_interactive());

        assert!(t.tick(at(start, 120)));
        assert_eq!(t.phase(), PanelPhase::Open);

        assert!(t.begin_close(at(start, 500)));
        assert_eq!(t.phase(), PanelPhase::Closing);
        assert!(!t.is_interactive());

        t.finish_close();
        assert_eq!(t.phase(), PanelPhase::Closed);
    }

    #[test]
    fn reopen_from_closing_returns_to_entering() {
        let start = Instant::now();
        let mut t = PanelTransition::new();
        t.begin_open(start);
        t.tick(at(start, 200));
        t.begin_close(at(start, 300));
        assert_eq!(t.phase(), PanelPhase::Closing);

        assert!(t.begin_open(at(start, 350)));
        assert_eq!(t.phase(), PanelPhase::Entering);
        assert!(t.is_visible());
    }

    #[test]
    fn begin_open_is_idempotent_while_open() {
        let start = Instant::now();
        let mut t = PanelTransition::new();
        assert!(t.begin_open(start));
        assert!(!t.begin_open(at(start, 10)));
        t.tick(at(start, 200));
        assert!(!t.begin_open(at(start, 210)));
    }

    #[test]
    fn close_mid_enter_is_allowed() {
        let start = Instant::now();
        let mut t = PanelTransition::new();
        t.begin_open(start);
        assert!(t.begin_close(at(start, 30)));
        assert_eq!(t.phase(), PanelPhase::Closing);
        assert!(!t.begin_close(at(start, 40)));
    }

    #[test]
    fn opacity_ramps_during_transitions() {
        let start = Instant::now();
        let mut t =
            PanelTransition::new().with_durations(Duration::from_millis(100), Duration::from_millis(100));

        t.begin_open(start);
        assert_eq!(t.opacity(start), 0.0);
        let mid = t.opacity(at(start, 50));
        assert!(mid > 0.0 && mid < 1.0);
        assert_eq!(t.opacity(at(start, 100)), 1.0);

        t.tick(at(start, 100));
        t.begin_close(at(start, 200));
        assert_eq!(t.opacity(at(start, 200)), 1.0);
        let mid = t.opacity(at(start, 250));
        assert!(mid > 0.0 && mid < 1.0);
        assert_eq!(t.opacity(at(start, 300)), 0.0);
    }

    #[test]
    fn slide_offset_settles_at_zero_when_open() {
        let start = Instant::now();
        let mut t = PanelTransition::new();
        t.begin_open(start);
        assert!(t.slide_offset(start) > 0.0);
        t.tick(at(start, 200));
        assert_eq!(t.slide_offset(at(start, 200)), 0.0);
    }

    #[test]
    fn easing_endpoints_are_fixed() {
        for easing in [Easing::Linear, Easing::EaseOut, Easing::EaseInOut] {
            assert_eq!(ease(easing, 0.0), 0.0);
            assert!((ease(easing, 1.0) - 1.0).abs() < 1e-6);
        }
        // Out-of-range input clamps.
        assert_eq!(ease(Easing::Linear, 2.0), 1.0);
        assert_eq!(ease(Easing::Linear, -1.0), 0.0);
    }
}
