//! Reference-counted handle to a [`VersionedHistory`]
//!
//! Several clones may point at the same history until one of them mutates.
//! The reference count is the strong count of the underlying [`Arc`]; it is
//! only changed through [`SharedHistory::add_ref`] and
//! [`SharedHistory::release_ref`] so every change is visible at the call site.

use crate::history::VersionedHistory;
use std::ops::Deref;
use std::sync::Arc;

/// Shared, copy-on-write handle to a history
///
/// # Invariants
/// - `ref_count()` equals the number of live handles to the same instance
/// - Mutable access is only granted to an exclusive handle
#[derive(Debug)]
pub struct SharedHistory(Arc<VersionedHistory>);

impl SharedHistory {
    /// Wrap a history in a fresh handle with a reference count of 1
    #[inline]
    #[must_use]
    pub fn new(history: VersionedHistory) -> Self {
        Self(Arc::new(history))
    }

    /// Second handle to the same instance (count + 1)
    ///
    /// O(1): nothing is copied.
    #[inline]
    #[must_use]
    pub fn add_ref(&self) -> Self {
        Self(Arc::clone(&self.0))
    }

    /// Give up this handle (count - 1); returns the remaining count
    pub fn release_ref(self) -> usize {
        let remaining = Arc::strong_count(&self.0) - 1;
        drop(self);
        remaining
    }

    /// Number of handles pointing at this instance
    #[inline]
    #[must_use]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }

    /// True if no other handle shares this instance
    #[inline]
    #[must_use]
    pub fn is_exclusive(&self) -> bool {
        self.ref_count() == 1
    }

    /// True if both handles point at the same instance
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Mutable access, splitting off a private copy first if shared
    ///
    /// Returns the history and whether a split happened. After a split this
    /// handle owns a duplicate with count 1 and the siblings' count drops by one.
    pub fn make_mut(&mut self) -> (&mut VersionedHistory, bool) {
        let split = !self.is_exclusive();
        if split {
            let copy = Self::new(self.0.duplicate());
            let previous = std::mem::replace(self, copy);
            previous.release_ref();
        }
        // exclusive here, so make_mut never clones
        (Arc::make_mut(&mut self.0), split)
    }

    /// Address of the shared instance, stable while any handle is alive
    #[inline]
    #[must_use]
    pub fn as_ptr(&self) -> *const VersionedHistory {
        Arc::as_ptr(&self.0)
    }

    /// Copy of the current contents
    #[must_use]
    pub fn snapshot(&self) -> VersionedHistory {
        self.0.duplicate()
    }
}

impl Default for SharedHistory {
    fn default() -> Self {
        Self::new(VersionedHistory::new())
    }
}

impl Deref for SharedHistory {
    type Target = VersionedHistory;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<VersionedHistory> for SharedHistory {
    fn from(history: VersionedHistory) -> Self {
        Self::new(history)
    }
}
