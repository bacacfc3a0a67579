//! Timer system for controls.
//!
//! Provides one-shot and repeating timers keyed by [`TimerId`]. The control
//! library has no event loop of its own, so the manager takes explicit
//! `Instant` arguments: the embedding application (or a test) decides what
//! "now" is and drains due timers each frame. This keeps the close-delay
//! timing of floating panels fully deterministic under test.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::error::TimerError;

new_key_type! {
    /// A unique identifier for a timer.
    pub struct TimerId;
}

/// The type of timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Fires once after the specified duration.
    OneShot,
    /// Fires repeatedly at the specified interval.
    Repeating,
}

#[derive(Debug)]
struct TimerData {
    next_fire: Instant,
    interval: Duration,
    kind: TimerKind,
    active: bool,
}

/// An entry in the timer queue (min-heap by fire time).
#[derive(Debug, Clone, Copy)]
struct TimerQueueEntry {
    id: TimerId,
    fire_time: Instant,
}

impl PartialEq for TimerQueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.fire_time == other.fire_time
    }
}

impl Eq for TimerQueueEntry {}

impl PartialOrd for TimerQueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimerQueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (BinaryHeap is max-heap by default).
        other.fire_time.cmp(&self.fire_time)
    }
}

/// Manages one-shot and repeating timers.
pub struct TimerManager {
    timers: SlotMap<TimerId, TimerData>,
    queue: BinaryHeap<TimerQueueEntry>,
}

impl TimerManager {
    /// Create a new timer manager.
    pub fn new() -> Self {
        Self {
            timers: SlotMap::with_key(),
            queue: BinaryHeap::new(),
        }
    }

    /// Start a one-shot timer that fires `duration` after `now`.
    pub fn start_one_shot(&mut self, now: Instant, duration: Duration) -> TimerId {
        self.start(now, duration, TimerKind::OneShot)
    }

    /// Start a repeating timer that fires every `interval` after `now`.
    pub fn start_repeating(&mut self, now: Instant, interval: Duration) -> TimerId {
        self.start(now, interval, TimerKind::Repeating)
    }

    fn start(&mut self, now: Instant, interval: Duration, kind: TimerKind) -> TimerId {
        let next_fire = now + interval;
        let id = self.timers.insert(TimerData {
            next_fire,
            interval,
            kind,
            active: true,
        });
        self.queue.push(TimerQueueEntry {
            id,
            fire_time: next_fire,
        });
        tracing::trace!(target: crate::logging::targets::TIMER, ?id, ?kind, ?interval, "timer started");
        id
    }

    /// Cancel a timer.
    ///
    /// Returns [`TimerError::InvalidTimerId`] if the timer has already fired
    /// (one-shot) or been cancelled.
    pub fn cancel(&mut self, id: TimerId) -> Result<(), TimerError> {
        if self.timers.remove(id).is_some() {
            tracing::trace!(target: crate::logging::targets::TIMER, ?id, "timer cancelled");
            Ok(())
        } else {
            Err(TimerError::InvalidTimerId)
        }
    }

    /// Check whether a timer is still pending.
    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.get(id).is_some_and(|t| t.active)
    }

    /// Duration from `now` until the next timer fires, or `None` when no
    /// timers are pending. Returns `Duration::ZERO` for overdue timers.
    pub fn time_until_next(&mut self, now: Instant) -> Option<Duration> {
        // Drop cancelled entries from the front of the queue.
        while let Some(entry) = self.queue.peek() {
            if self.timers.get(entry.id).is_some_and(|t| t.active) {
                break;
            }
            self.queue.pop();
        }

        self.queue.peek().map(|entry| {
            if entry.fire_time > now {
                entry.fire_time - now
            } else {
                Duration::ZERO
            }
        })
    }

    /// Remove and return every timer due at `now`, in fire-time order.
    ///
    /// One-shot timers are consumed; repeating timers are rescheduled at
    /// their interval.
    pub fn drain_due(&mut self, now: Instant) -> Vec<TimerId> {
        let mut due = Vec::new();

        while let Some(entry) = self.queue.peek() {
            if entry.fire_time > now {
                break;
            }

            let Some(entry) = self.queue.pop() else { break };
            let id = entry.id;

            let Some(timer) = self.timers.get_mut(id) else {
                continue;
            };
            if !timer.active || timer.next_fire != entry.fire_time {
                // Stale queue entry from a reschedule; skip it.
                continue;
            }

            tracing::trace!(target: crate::logging::targets::TIMER, ?id, "timer fired");
            due.push(id);

            match timer.kind {
                TimerKind::OneShot => {
                    self.timers.remove(id);
                }
                TimerKind::Repeating => {
                    timer.next_fire = now + timer.interval;
                    self.queue.push(TimerQueueEntry {
                        id,
                        fire_time: timer.next_fire,
                    });
                }
            }
        }

        due
    }

    /// Get the number of pending timers.
    pub fn active_count(&self) -> usize {
        self.timers.iter().filter(|(_, t)| t.active).count()
    }
}

impl Default for TimerManager {
    fn default() -> Self {
        Self::new()
    }
}

/// A thread-safe wrapper around [`TimerManager`].
pub struct SharedTimerManager {
    inner: Mutex<TimerManager>,
}

impl SharedTimerManager {
    /// Create a new shared timer manager.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(TimerManager::new()),
        }
    }

    /// See [`TimerManager::start_one_shot`].
    pub fn start_one_shot(&self, now: Instant, duration: Duration) -> TimerId {
        self.inner.lock().start_one_shot(now, duration)
    }

    /// See [`TimerManager::start_repeating`].
    pub fn start_repeating(&self, now: Instant, interval: Duration) -> TimerId {
        self.inner.lock().start_repeating(now, interval)
    }

    /// See [`TimerManager::cancel`].
    pub fn cancel(&self, id: TimerId) -> Result<(), TimerError> {
        self.inner.lock().cancel(id)
    }

    /// See [`TimerManager::is_active`].
    pub fn is_active(&self, id: TimerId) -> bool {
        self.inner.lock().is_active(id)
    }

    /// See [`TimerManager::time_until_next`].
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.inner.lock().time_until_next(now)
    }

    /// See [`TimerManager::drain_due`].
    pub fn drain_due(&self, now: Instant) -> Vec<TimerId> {
        self.inner.lock().drain_due(now)
    }

    /// See [`TimerManager::active_count`].
    pub fn active_count(&self) -> usize {
        self.inner.lock().active_count()
    }
}

impl Default for SharedTimerManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_fires_once() {
        let mut timers = TimerManager::new();
        let start = Instant::now();
        let id = timers.start_one_shot(start, Duration::from_millis(100));

        assert!(timers.is_active(id));
        assert!(timers.drain_due(start + Duration::from_millis(50)).is_empty());

        let due = timers.drain_due(start + Duration::from_millis(100));
        assert_eq!(due, vec![id]);
        assert!(!timers.is_active(id));
        assert!(timers.drain_due(start + Duration::from_millis(500)).is_empty());
    }

    #[test]
    fn repeating_timer_reschedules() {
        let mut timers = TimerManager::new();
        let start = Instant::now();
        let id = timers.start_repeating(start, Duration::from_millis(100));

        assert_eq!(timers.drain_due(start + Duration::from_millis(100)), vec![id]);
        assert!(timers.is_active(id));
        assert_eq!(timers.drain_due(start + Duration::from_millis(200)), vec![id]);

        timers.cancel(id).unwrap();
        assert!(timers.drain_due(start + Duration::from_millis(300)).is_empty());
    }

    #[test]
    fn cancel_before_fire_suppresses_the_timer() {
        let mut timers = TimerManager::new();
        let start = Instant::now();
        let id = timers.start_one_shot(start, Duration::from_millis(100));

        timers.cancel(id).unwrap();
        assert!(!timers.is_active(id));
        assert!(timers.drain_due(start + Duration::from_millis(200)).is_empty());

        // Cancelling twice reports the stale ID.
        assert_eq!(timers.cancel(id), Err(TimerError::InvalidTimerId));
    }

    #[test]
    fn time_until_next_tracks_earliest_deadline() {
        let mut timers = TimerManager::new();
        let start = Instant::now();

        assert_eq!(timers.time_until_next(start), None);

        timers.start_one_shot(start, Duration::from_millis(300));
        let near = timers.start_one_shot(start, Duration::from_millis(100));

        assert_eq!(timers.time_until_next(start), Some(Duration::from_millis(100)));

        timers.cancel(near).unwrap();
        assert_eq!(timers.time_until_next(start), Some(Duration::from_millis(300)));

        // Overdue timers report zero rather than a negative duration.
        assert_eq!(
            timers.time_until_next(start + Duration::from_secs(1)),
            Some(Duration::ZERO)
        );
    }

    #[test]
    fn due_timers_fire_in_deadline_order() {
        let mut timers = TimerManager::new();
        let start = Instant::now();
        let late = timers.start_one_shot(start, Duration::from_millis(200));
        let early = timers.start_one_shot(start, Duration::from_millis(100));

        let due = timers.drain_due(start + Duration::from_millis(250));
        assert_eq!(due, vec![early, late]);
    }

    #[test]
    fn shared_manager_is_usable_through_a_reference() {
        let timers = SharedTimerManager::new();
        let start = Instant::now();
        let id = timers.start_one_shot(start, Duration::from_millis(10));

        assert_eq!(timers.active_count(), 1);
        assert_eq!(timers.drain_due(start + Duration::from_millis(10)), vec![id]);
        assert_eq!(timers.active_count(), 0);
    }
}
