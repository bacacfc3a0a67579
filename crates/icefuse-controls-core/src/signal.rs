//! Signal/slot system for control change notification.
//!
//! Signals are the observer mechanism the controls use to report state
//! changes: a widget exposes `pub` signal fields, callers connect closures,
//! and the widget emits when its state changes.
//!
//! The control library runs on the UI thread, so emission is always direct:
//! there is no queued-connection machinery. Slots are snapshotted before
//! invocation, which makes re-entrant `connect`/`disconnect` from inside a
//! slot safe.
//!
//! # Example
//!
//! ```
//! use icefuse_controls_core::Signal;
//!
//! let search_changed = Signal::<String>::new();
//!
//! let conn = search_changed.connect(|query| {
//!     println!("query is now {query:?}");
//! });
//!
//! search_changed.emit("alpha".to_string());
//! search_changed.disconnect(conn);
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Returned by [`Signal::connect`]; pass to [`Signal::disconnect`] to
    /// remove the slot. [`Signal::connect_scoped`] is the RAII alternative.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

struct SignalCore<Args> {
    connections: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
    blocked: AtomicBool,
}

/// A type-safe signal with any number of connected slots.
///
/// `Args` is the payload passed to each slot; use `()` for argument-free
/// signals. Slots run in connection order on the emitting thread.
pub struct Signal<Args> {
    core: Arc<SignalCore<Args>>,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            core: Arc::new(SignalCore {
                connections: Mutex::new(SlotMap::with_key()),
                blocked: AtomicBool::new(false),
            }),
        }
    }

    /// Connect a slot to this signal.
    ///
    /// Returns a [`ConnectionId`] for later disconnection.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.core.connections.lock().insert(Arc::new(slot))
    }

    /// Connect a slot that disconnects automatically when the returned guard
    /// is dropped.
    pub fn connect_scoped<F>(&self, slot: F) -> ConnectionGuard<Args>
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let id = self.connect(slot);
        ConnectionGuard {
            core: Arc::downgrade(&self.core),
            id,
        }
    }

    /// Disconnect a slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.core.connections.lock().remove(id).is_some()
    }

    /// Disconnect all slots.
    pub fn disconnect_all(&self) {
        self.core.connections.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.core.connections.lock().len()
    }

    /// Temporarily block emission.
    ///
    /// While blocked, `emit` does nothing. Used during batch updates to
    /// suppress cascading notifications.
    pub fn set_blocked(&self, blocked: bool) {
        self.core.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check whether emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.core.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking all connected slots in connection order.
    ///
    /// The connection table is snapshotted before any slot runs, so slots may
    /// connect or disconnect (including themselves) during emission.
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: crate::logging::targets::SIGNAL, "signal blocked, skipping emit");
            return;
        }

        let slots: Vec<Slot<Args>> = self.core.connections.lock().values().cloned().collect();
        tracing::trace!(target: crate::logging::targets::SIGNAL, slot_count = slots.len(), "emitting signal");
        for slot in slots {
            slot(&args);
        }
    }
}

/// A connection that disconnects automatically when dropped.
///
/// Created by [`Signal::connect_scoped`]. Holds only a weak reference to the
/// signal, so dropping the guard after the signal is gone is a no-op.
pub struct ConnectionGuard<Args> {
    core: Weak<SignalCore<Args>>,
    id: ConnectionId,
}

impl<Args> ConnectionGuard<Args> {
    /// The ID of the guarded connection.
    pub fn id(&self) -> ConnectionId {
        self.id
    }
}

impl<Args> Drop for ConnectionGuard<Args> {
    fn drop(&mut self) {
        if let Some(core) = self.core.upgrade() {
            core.connections.lock().remove(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_emit_delivers_in_order() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        signal.emit(42);
        signal.emit(100);

        assert_eq!(*received.lock(), vec![42, 100]);
    }

    #[test]
    fn disconnect_stops_delivery() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        let conn = signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        signal.emit(1);
        assert!(signal.disconnect(conn));
        assert!(!signal.disconnect(conn));
        signal.emit(2);

        assert_eq!(*received.lock(), vec![1]);
    }

    #[test]
    fn blocked_signal_drops_emissions() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        signal.emit(1);
        signal.set_blocked(true);
        signal.emit(2);
        signal.set_blocked(false);
        signal.emit(3);

        assert_eq!(*received.lock(), vec![1, 3]);
    }

    #[test]
    fn multiple_connections_all_fire() {
        let signal = Signal::<()>::new();
        let count = Arc::new(Mutex::new(0));

        for _ in 0..3 {
            let count_clone = count.clone();
            signal.connect(move |_| {
                *count_clone.lock() += 1;
            });
        }

        assert_eq!(signal.connection_count(), 3);
        signal.emit(());
        assert_eq!(*count.lock(), 3);
    }

    #[test]
    fn scoped_connection_disconnects_on_drop() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        {
            let received_clone = received.clone();
            let _guard = signal.connect_scoped(move |&value| {
                received_clone.lock().push(value);
            });
            signal.emit(1);
        }

        signal.emit(2);
        assert_eq!(*received.lock(), vec![1]);
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn slot_may_disconnect_itself_during_emit() {
        let signal = Arc::new(Signal::<()>::new());
        let fired = Arc::new(Mutex::new(0));

        let signal_clone = signal.clone();
        let fired_clone = fired.clone();
        let id_cell: Arc<Mutex<Option<ConnectionId>>> = Arc::new(Mutex::new(None));
        let id_cell_clone = id_cell.clone();
        let id = signal.connect(move |_| {
            *fired_clone.lock() += 1;
            if let Some(id) = *id_cell_clone.lock() {
                signal_clone.disconnect(id);
            }
        });
        *id_cell.lock() = Some(id);

        signal.emit(());
        signal.emit(());
        assert_eq!(*fired.lock(), 1);
    }
}
