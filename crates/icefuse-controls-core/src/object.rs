//! Object identity for controls.
//!
//! Every widget, overlay panel owner and timer owner carries a process-unique
//! [`ObjectId`]. Unlike a full object tree, the control library has no
//! parent/child ownership to manage, so identity is a plain monotonic counter
//! rather than a registry.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

static NEXT_OBJECT_ID: AtomicU64 = AtomicU64::new(1);

/// A process-unique identifier for a control object.
///
/// IDs are never reused within a process. The zero value is reserved and
/// never allocated, so `ObjectId::default()` compares unequal to every live
/// object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ObjectId(u64);

impl ObjectId {
    /// Allocate the next process-unique ID.
    fn next() -> Self {
        Self(NEXT_OBJECT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Check whether this ID refers to a live allocation (non-reserved).
    pub fn is_valid(&self) -> bool {
        self.0 != 0
    }
}

/// Base trait for identifiable control objects.
pub trait Object {
    /// Get this object's unique ID.
    fn object_id(&self) -> ObjectId;
}

/// Common identity storage for control objects.
///
/// Widgets embed an `ObjectBase` (usually through `WidgetBase`) and delegate
/// [`Object::object_id`] to it. The debug name defaults to the short type
/// name and can be overridden for log output.
pub struct ObjectBase {
    id: ObjectId,
    name: Mutex<String>,
}

impl ObjectBase {
    /// Create a new object base for a concrete object type.
    ///
    /// The type parameter is only used to seed the debug name.
    pub fn new<T: 'static>() -> Self {
        let type_name = std::any::type_name::<T>();
        let short = type_name.rsplit("::").next().unwrap_or(type_name);
        let id = ObjectId::next();
        tracing::trace!(target: crate::logging::targets::OBJECT, ?id, type_name = short, "object created");
        Self {
            id,
            name: Mutex::new(short.to_string()),
        }
    }

    /// Get the object's unique ID.
    #[inline]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Get the object's debug name.
    pub fn name(&self) -> String {
        self.name.lock().clone()
    }

    /// Set the object's debug name.
    pub fn set_name(&self, name: impl Into<String>) {
        *self.name.lock() = name.into();
    }
}

impl Object for ObjectBase {
    fn object_id(&self) -> ObjectId {
        self.id
    }
}

impl std::fmt::Debug for ObjectBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectBase")
            .field("id", &self.id)
            .field("name", &self.name())
            .finish()
    }
}
