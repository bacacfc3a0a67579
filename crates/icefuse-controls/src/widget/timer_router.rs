//! Routing of timer fires to owning widgets.
//!
//! Widgets own timers (a floating panel's close-delay, a caret blink) but
//! the timer manager only hands back [`TimerId`]s. The router remembers
//! which widget owns each timer so the embedding frame loop can convert
//! fired timers into [`WidgetEvent::Timer`](super::events::WidgetEvent)
//! deliveries.
//!
//! The router is injected into widgets (shared via [`SharedTimerRouter`])
//! rather than kept in a module global, so independent tests get independent
//! timer state.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use icefuse_controls_core::{ObjectId, TimerError, TimerId, TimerManager};

struct RouterState {
    manager: TimerManager,
    owners: HashMap<TimerId, ObjectId>,
}

/// Maps widget-owned timers onto the core timer manager.
pub struct TimerRouter {
    state: Mutex<RouterState>,
}

impl TimerRouter {
    /// Create an empty router.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(RouterState {
                manager: TimerManager::new(),
                owners: HashMap::new(),
            }),
        }
    }

    /// Start a one-shot timer owned by `owner`.
    pub fn start_one_shot(&self, owner: ObjectId, now: Instant, duration: Duration) -> TimerId {
        let mut state = self.state.lock();
        let id = state.manager.start_one_shot(now, duration);
        state.owners.insert(id, owner);
        id
    }

    /// Start a repeating timer owned by `owner`.
    pub fn start_repeating(&self, owner: ObjectId, now: Instant, interval: Duration) -> TimerId {
        let mut state = self.state.lock();
        let id = state.manager.start_repeating(now, interval);
        state.owners.insert(id, owner);
        id
    }

    /// Cancel a timer.
    pub fn cancel(&self, id: TimerId) -> Result<(), TimerError> {
        let mut state = self.state.lock();
        state.owners.remove(&id);
        state.manager.cancel(id)
    }

    /// Check whether a timer is still pending.
    pub fn is_active(&self, id: TimerId) -> bool {
        self.state.lock().manager.is_active(id)
    }

    /// Duration until the next timer fires, if any.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.state.lock().manager.time_until_next(now)
    }

    /// Drain timers due at `now`, returning `(owner, timer)` pairs for
    /// dispatch. Fired one-shot timers are removed from the owner table.
    pub fn drain_due(&self, now: Instant) -> Vec<(ObjectId, TimerId)> {
        let mut state = self.state.lock();
        let due = state.manager.drain_due(now);
        due.into_iter()
            .filter_map(|id| {
                let owner = state.owners.get(&id).copied();
                if !state.manager.is_active(id) {
                    state.owners.remove(&id);
                }
                owner.map(|owner| (owner, id))
            })
            .collect()
    }

    /// Cancel every timer owned by `owner`.
    ///
    /// Called from widget teardown so a dropped widget can never receive a
    /// late timer event.
    pub fn remove_for(&self, owner: ObjectId) {
        let mut state = self.state.lock();
        let ids: Vec<TimerId> = state
            .owners
            .iter()
            .filter(|(_, o)| **o == owner)
            .map(|(id, _)| *id)
            .collect();
        for id in ids {
            state.owners.remove(&id);
            let _ = state.manager.cancel(id);
        }
    }

    /// Number of pending timers.
    pub fn active_count(&self) -> usize {
        self.state.lock().manager.active_count()
    }
}

impl Default for TimerRouter {
    fn default() -> Self {
        Self::new()
    }
}

/// A shared handle to a [`TimerRouter`].
pub type SharedTimerRouter = Arc<TimerRouter>;

/// Create a new shared timer router.
pub fn shared_timer_router() -> SharedTimerRouter {
    Arc::new(TimerRouter::new())
}
