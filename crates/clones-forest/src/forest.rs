//! Clone forest
//!
//! Holds one [`SharedHistory`] handle per clone. `clone_of` only adds a handle;
//! the first mutation through a shared handle pays for the copy.

use crate::config::ForestConfig;
use crate::error::ForestError;
use crate::id::CloneId;
use clones_history::{Fact, HistoryError, Knowledge, SharedHistory, VersionedHistory};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Point-in-time forest counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForestStats {
    /// Number of clones (slots)
    pub clones: usize,
    /// Number of distinct history instances behind those clones
    pub distinct_histories: usize,
    /// Copy-on-write splits performed so far
    pub cow_splits: u64,
}

/// Indexed collection of copy-on-write clones
///
/// # Invariants
/// - Clone 1 (the root) always exists; the slot count never shrinks
/// - Summed over distinct histories, reference counts equal the slot count
/// - Every mutation goes through `resolve`
#[derive(Debug)]
pub struct CloneForest {
    config: ForestConfig,
    slots: Vec<SharedHistory>,
    cow_splits: u64,
}

impl Default for CloneForest {
    fn default() -> Self {
        Self::new()
    }
}

impl CloneForest {
    /// Forest holding only the empty root clone
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ForestConfig::default())
    }

    #[must_use]
    pub fn with_config(config: ForestConfig) -> Self {
        Self {
            config,
            slots: vec![SharedHistory::default()],
            cow_splits: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &ForestConfig {
        &self.config
    }

    /// Teach `id` a new fact, dropping its pending redo
    ///
    /// # Errors
    /// Returns error if `id` is not a clone
    pub fn learn(&mut self, id: CloneId, fact: Fact) -> Result<(), ForestError> {
        self.resolve(id)?.learn(fact);
        Ok(())
    }

    /// Undo the last fact of `id`; returns the fact moved to redo
    ///
    /// # Errors
    /// Returns error if `id` is not a clone or has nothing learned
    pub fn rollback(&mut self, id: CloneId) -> Result<Fact, ForestError> {
        if !self.slot(id)?.can_rollback() {
            return Err(ForestError::history(id, HistoryError::NothingToRollBack));
        }
        self.resolve(id)?
            .rollback()
            .map_err(|e| ForestError::history(id, e))
    }

    /// Redo the last undone fact of `id`; returns the fact
    ///
    /// # Errors
    /// Returns error if `id` is not a clone or has no pending redo
    pub fn relearn(&mut self, id: CloneId) -> Result<Fact, ForestError> {
        if !self.slot(id)?.can_relearn() {
            return Err(ForestError::history(id, HistoryError::NothingToRelearn));
        }
        self.resolve(id)?
            .relearn()
            .map_err(|e| ForestError::history(id, e))
    }

    /// Current fact of `id`; never copies
    ///
    /// # Errors
    /// Returns error if `id` is not a clone
    pub fn check(&self, id: CloneId) -> Result<Knowledge, ForestError> {
        Ok(self.slot(id)?.check())
    }

    /// The `clone` command: new clone sharing `id`'s history
    ///
    /// O(1); the new clone's id is the new slot count.
    ///
    /// # Errors
    /// Returns error if `id` is not a clone or the clone limit is reached
    pub fn clone_of(&mut self, id: CloneId) -> Result<CloneId, ForestError> {
        let shared = self.slot(id)?.add_ref();
        if let Some(limit) = self.config.max_clones {
            if self.slots.len() >= limit {
                shared.release_ref();
                return Err(ForestError::CapacityExceeded { limit });
            }
        }

        let refs = shared.ref_count();
        self.slots.push(shared);
        let new_id = CloneId::from_slot(self.slots.len() - 1);
        tracing::debug!(source = %id, clone = %new_id, refs, "cloned");
        Ok(new_id)
    }

    /// Number of clones
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false: the root clone exists from construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// True if `id` names an existing clone
    #[inline]
    #[must_use]
    pub fn contains(&self, id: CloneId) -> bool {
        id.slot() < self.slots.len()
    }

    /// Number of clones sharing `id`'s history (including `id`)
    ///
    /// # Errors
    /// Returns error if `id` is not a clone
    pub fn ref_count(&self, id: CloneId) -> Result<usize, ForestError> {
        Ok(self.slot(id)?.ref_count())
    }

    /// True if both clones currently share one history instance
    ///
    /// # Errors
    /// Returns error if either id is not a clone
    pub fn shares_history(&self, a: CloneId, b: CloneId) -> Result<bool, ForestError> {
        Ok(self.slot(a)?.ptr_eq(self.slot(b)?))
    }

    /// Detached copy of `id`'s history
    ///
    /// # Errors
    /// Returns error if `id` is not a clone
    pub fn snapshot(&self, id: CloneId) -> Result<VersionedHistory, ForestError> {
        Ok(self.slot(id)?.snapshot())
    }

    /// Ids of all clones, in creation order
    pub fn ids(&self) -> impl Iterator<Item = CloneId> + '_ {
        (0..self.slots.len()).map(CloneId::from_slot)
    }

    #[must_use]
    pub fn stats(&self) -> ForestStats {
        let distinct: HashSet<*const VersionedHistory> =
            self.slots.iter().map(SharedHistory::as_ptr).collect();
        ForestStats {
            clones: self.slots.len(),
            distinct_histories: distinct.len(),
            cow_splits: self.cow_splits,
        }
    }

    fn slot(&self, id: CloneId) -> Result<&SharedHistory, ForestError> {
        if !self.contains(id) {
            return Err(ForestError::UnknownClone {
                id,
                clones: self.slots.len(),
            });
        }
        Ok(&self.slots[id.slot()])
    }

    /// Exclusive history for `id`, splitting it off its siblings if shared
    fn resolve(&mut self, id: CloneId) -> Result<&mut VersionedHistory, ForestError> {
        let clones = self.slots.len();
        let slot = self
            .slots
            .get_mut(id.slot())
            .ok_or(ForestError::UnknownClone { id, clones })?;

        let (history, split) = slot.make_mut();
        if split {
            self.cow_splits += 1;
            tracing::debug!(clone = %id, depth = history.depth(), "split shared history on write");
        }
        Ok(history)
    }
}
