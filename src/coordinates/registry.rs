//! Value interning for immutable coordinates
//!
//! A [`Registry`] hands out one shared [`Arc`] per distinct value. The set is
//! keyed by the value itself (through `Arc<T>: Borrow<T>`), so a hash
//! collision between two different values never aliases them: `HashSet`
//! compares the full value on every hash hit.
//!
//! Lookups take the read lock. A miss takes the write lock and repeats the
//! lookup before inserting, which makes insert-if-absent one atomic step.
//! Threads racing on the same value all leave with the winner's `Arc`.
//!
//! Entries are never evicted. Every value ever interned stays alive for the
//! rest of the process. That includes values that only ever existed as an
//! intermediate: measuring between a Cartesian and a spherical coordinate
//! converts one side and interns the converted value, so measurement calls
//! alone can make a registry grow.

use std::collections::HashSet;
use std::hash::Hash;
use std::sync::{Arc, PoisonError, RwLock};

/// Process-wide table of canonical instances for one value type
pub struct Registry<T> {
    name: &'static str,
    entries: RwLock<HashSet<Arc<T>>>,
}

impl<T> Registry<T>
where
    T: Eq + Hash,
{
    /// Create an empty registry; `name` only shows up in log records
    pub fn new(name: &'static str) -> Self {
        Registry {
            name,
            entries: RwLock::new(HashSet::new()),
        }
    }

    /// Return the canonical instance equal to `candidate`
    ///
    /// If an equal value is already registered the candidate is dropped and
    /// the existing instance returned. Otherwise the candidate becomes the
    /// canonical instance.
    pub fn intern(&self, candidate: T) -> Arc<T> {
        if let Some(existing) = self.lookup(&candidate) {
            return existing;
        }

        // Poisoning can only come from a panic inside HashSet itself; the set
        // is still structurally valid.
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = entries.get(&candidate) {
            return Arc::clone(existing);
        }

        let canonical = Arc::new(candidate);
        entries.insert(Arc::clone(&canonical));
        log::trace!(
            "{} registry: new canonical instance ({} total)",
            self.name,
            entries.len()
        );
        canonical
    }

    /// Return the canonical instance equal to `value`, if one was interned
    pub fn lookup(&self, value: &T) -> Option<Arc<T>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(value).cloned()
    }

    /// Number of canonical instances held
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// True when nothing has been interned yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
