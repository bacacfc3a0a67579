//! Shared option-source cache.
//!
//! Dashboard pages frequently mount several selects over the same option
//! list (regions, game modes, token scopes), each of which would otherwise
//! fetch the same endpoint. [`SharedOptionCache`] is a process-wide keyed
//! cache with in-flight de-duplication: the first caller for a key performs
//! the load while concurrent callers for the same key block until it
//! finishes, so an endpoint is hit once no matter how many selects mount.
//!
//! The cache is injected into callers rather than kept as a module global,
//! so tests substitute fake sources and independent caches.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Condvar, Mutex};
use thiserror::Error;

use icefuse_controls_core::logging::targets;

use crate::widget::widgets::SelectOption;

/// Errors from loading an option list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptionSourceError {
    /// The source has no data for the requested key.
    #[error("unknown option key: {0}")]
    UnknownKey(String),
    /// The source failed to produce data.
    #[error("option source failed: {0}")]
    SourceFailed(String),
    /// The payload could not be decoded.
    #[error("option payload decode failed: {0}")]
    DecodeFailed(String),
}

/// A source of option lists, keyed by an endpoint or entity name.
pub trait OptionSource: Send + Sync {
    /// Load the option list for `key`.
    fn load(&self, key: &str) -> Result<Vec<SelectOption>, OptionSourceError>;
}

impl<F> OptionSource for F
where
    F: Fn(&str) -> Result<Vec<SelectOption>, OptionSourceError> + Send + Sync,
{
    fn load(&self, key: &str) -> Result<Vec<SelectOption>, OptionSourceError> {
        self(key)
    }
}

/// Decode an option list from a JSON array payload.
pub fn options_from_json(payload: &str) -> Result<Vec<SelectOption>, OptionSourceError> {
    serde_json::from_str(payload).map_err(|e| OptionSourceError::DecodeFailed(e.to_string()))
}

enum CacheEntry {
    /// A load for this key is running on another caller.
    InFlight,
    /// The option list is ready.
    Ready(Arc<Vec<SelectOption>>),
}

struct CacheState {
    entries: HashMap<String, CacheEntry>,
}

/// A keyed option cache with in-flight request de-duplication.
pub struct SharedOptionCache {
    state: Mutex<CacheState>,
    loaded: Condvar,
}

impl SharedOptionCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(CacheState {
                entries: HashMap::new(),
            }),
            loaded: Condvar::new(),
        }
    }

    /// Get the options for `key`, loading through `source` on a miss.
    ///
    /// Exactly one caller performs the load for a given key; concurrent
    /// callers block until it completes and then share the result. A failed
    /// load clears the slot so the next caller retries, and every waiter
    /// receives the error.
    pub fn get_or_load(
        &self,
        key: &str,
        source: &dyn OptionSource,
    ) -> Result<Arc<Vec<SelectOption>>, OptionSourceError> {
        {
            let mut state = self.state.lock();
            loop {
                match state.entries.get(key) {
                    Some(CacheEntry::Ready(options)) => {
                        tracing::trace!(target: targets::CACHE, key, "option cache hit");
                        return Ok(options.clone());
                    }
                    Some(CacheEntry::InFlight) => {
                        // Another caller is loading this key; wait for it.
                        self.loaded.wait(&mut state);
                    }
                    None => {
                        state.entries.insert(key.to_string(), CacheEntry::InFlight);
                        break;
                    }
                }
            }
        }

        // Load outside the lock so other keys stay usable.
        tracing::debug!(target: targets::CACHE, key, "option cache miss, loading");
        let result = source.load(key).map(Arc::new);

        let mut state = self.state.lock();
        match &result {
            Ok(options) => {
                state
                    .entries
                    .insert(key.to_string(), CacheEntry::Ready(options.clone()));
            }
            Err(error) => {
                tracing::warn!(target: targets::CACHE, key, %error, "option load failed");
                state.entries.remove(key);
            }
        }
        self.loaded.notify_all();
        drop(state);

        result
    }

    /// Get the cached options for `key` without loading.
    pub fn peek(&self, key: &str) -> Option<Arc<Vec<SelectOption>>> {
        match self.state.lock().entries.get(key) {
            Some(CacheEntry::Ready(options)) => Some(options.clone()),
            _ => None,
        }
    }

    /// Drop the cached entry for `key`, forcing the next caller to reload.
    pub fn invalidate(&self, key: &str) {
        self.state.lock().entries.remove(key);
    }

    /// Drop every cached entry.
    pub fn clear(&self) {
        self.state.lock().entries.clear();
    }

    /// Number of ready entries.
    pub fn len(&self) -> usize {
        self.state
            .lock()
            .entries
            .values()
            .filter(|e| matches!(e, CacheEntry::Ready(_)))
            .count()
    }

    /// Check whether the cache holds no ready entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SharedOptionCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct CountingSource {
        loads: AtomicUsize,
        delay: Option<Duration>,
    }

    impl CountingSource {
        fn new() -> Self {
            Self {
                loads: AtomicUsize::new(0),
                delay: None,
            }
        }

        fn slow(delay: Duration) -> Self {
            Self {
                loads: AtomicUsize::new(0),
                delay: Some(delay),
            }
        }

        fn count(&self) -> usize {
            self.loads.load(Ordering::SeqCst)
        }
    }

    impl OptionSource for CountingSource {
        fn load(&self, key: &str) -> Result<Vec<SelectOption>, OptionSourceError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                std::thread::sleep(delay);
            }
            match key {
                "regions" => Ok(vec![
                    SelectOption::new("us-west", "US West"),
                    SelectOption::new("eu", "Europe"),
                ]),
                _ => Err(OptionSourceError::UnknownKey(key.to_string())),
            }
        }
    }

    #[test]
    fn second_lookup_hits_the_cache() {
        let cache = SharedOptionCache::new();
        let source = CountingSource::new();

        let first = cache.get_or_load("regions", &source).unwrap();
        let second = cache.get_or_load("regions", &source).unwrap();

        assert_eq!(first.len(), 2);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(source.count(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn failed_load_clears_the_slot() {
        let cache = SharedOptionCache::new();
        let source = CountingSource::new();

        assert!(cache.get_or_load("missing", &source).is_err());
        assert!(cache.peek("missing").is_none());

        // The next caller retries instead of seeing a poisoned entry.
        assert!(cache.get_or_load("missing", &source).is_err());
        assert_eq!(source.count(), 2);
    }

    #[test]
    fn invalidate_forces_reload() {
        let cache = SharedOptionCache::new();
        let source = CountingSource::new();

        cache.get_or_load("regions", &source).unwrap();
        cache.invalidate("regions");
        cache.get_or_load("regions", &source).unwrap();

        assert_eq!(source.count(), 2);
    }

    #[test]
    fn concurrent_callers_share_one_load() {
        let cache = Arc::new(SharedOptionCache::new());
        let source = Arc::new(CountingSource::slow(Duration::from_millis(50)));

        let mut handles = Vec::new();
        for _ in 0..4 {
            let cache = cache.clone();
            let source = source.clone();
            handles.push(std::thread::spawn(move || {
                cache.get_or_load("regions", source.as_ref()).unwrap().len()
            }));
        }

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 2);
        }
        assert_eq!(source.count(), 1);
    }

    #[test]
    fn closures_are_sources() {
        let cache = SharedOptionCache::new();
        let source = |key: &str| -> Result<Vec<SelectOption>, OptionSourceError> {
            Ok(vec![SelectOption::new(key, key.to_uppercase())])
        };

        let options = cache.get_or_load("mode", &source).unwrap();
        assert_eq!(options[0].label, "MODE");
    }

    #[test]
    fn decodes_dashboard_json_payloads() {
        let payload = r#"[{"value": "vip", "label": "VIP", "description": "priority queue"}]"#;
        let options = options_from_json(payload).unwrap();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].value, "vip");

        assert!(matches!(
            options_from_json("not json"),
            Err(OptionSourceError::DecodeFailed(_))
        ));
    }
}
