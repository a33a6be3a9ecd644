//! Bounded set of recently seen message ids

use crate::{Error, Result};
use indexmap::IndexSet;
use parking_lot::Mutex;
use std::hash::Hash;

/// A capacity-bounded set that forgets its oldest entries first
///
/// Eviction follows insertion order only; re-adding a present id does not
/// refresh it. Safe to share between threads.
pub struct MessageCache<T> {
    capacity: usize,
    seen: Mutex<IndexSet<T>>,
}

impl<T: Hash + Eq> MessageCache<T> {
    /// Create a cache holding at most `capacity` ids
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::Config("message cache capacity must be non-zero".into()));
        }
        Ok(MessageCache {
            capacity,
            seen: Mutex::new(IndexSet::with_capacity(capacity)),
        })
    }

    /// Record `id`; returns `true` if it was not already present
    pub fn add(&self, id: T) -> bool {
        let mut seen = self.seen.lock();
        if seen.contains(&id) {
            return false;
        }
        while seen.len() >= self.capacity {
            seen.shift_remove_index(0);
        }
        seen.insert(id)
    }

    pub fn contains(&self, id: &T) -> bool {
        self.seen.lock().contains(id)
    }

    pub fn len(&self) -> usize {
        self.seen.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.lock().is_empty()
    }
}
