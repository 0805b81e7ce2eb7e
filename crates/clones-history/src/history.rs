//! Rewindable history of learned facts
//!
//! Defines [`VersionedHistory`], the pair of stacks behind every clone, and
//! [`Knowledge`], the answer to a `check` query.

use crate::error::HistoryError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// A single learned program
pub type Fact = i32;

/// Name reported for a clone that currently knows nothing
pub const BASIC: &str = "basic";

/// What a history currently knows
///
/// Displays as the decimal fact, or as [`BASIC`] when nothing is learned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Knowledge {
    /// Nothing learned (or everything rolled back)
    Basic,
    /// Most recently learned fact
    Fact(Fact),
}

impl Knowledge {
    /// Fact on top, if any
    #[inline]
    #[must_use]
    pub const fn fact(self) -> Option<Fact> {
        match self {
            Self::Basic => None,
            Self::Fact(fact) => Some(fact),
        }
    }

    /// True for the base state
    #[inline]
    #[must_use]
    pub const fn is_basic(self) -> bool {
        matches!(self, Self::Basic)
    }
}

impl Display for Knowledge {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic => f.write_str(BASIC),
            Self::Fact(fact) => write!(f, "{fact}"),
        }
    }
}

impl From<Option<Fact>> for Knowledge {
    fn from(value: Option<Fact>) -> Self {
        value.map_or(Self::Basic, Self::Fact)
    }
}

/// Linear undo/redo history of facts
///
/// # Invariants
/// - `learned` and `undone` are stacks, top is the last element
/// - `undone` is non-empty only after a `rollback` not yet followed by a `learn`
///
/// Sharing between clones is not handled here; see
/// [`SharedHistory`](crate::SharedHistory).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionedHistory {
    learned: Vec<Fact>,
    undone: Vec<Fact>,
}

impl VersionedHistory {
    /// Empty history, the "basic" state
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a history from both stacks, bottom first
    #[must_use]
    pub fn from_stacks(learned: Vec<Fact>, undone: Vec<Fact>) -> Self {
        Self { learned, undone }
    }

    /// Push a new fact; invalidates any pending redo
    pub fn learn(&mut self, fact: Fact) {
        self.learned.push(fact);
        self.undone.clear();
    }

    /// Move the top learned fact onto the redo stack
    ///
    /// # Errors
    /// Returns [`HistoryError::NothingToRollBack`] if nothing is learned
    pub fn rollback(&mut self) -> Result<Fact, HistoryError> {
        let fact = self.learned.pop().ok_or(HistoryError::NothingToRollBack)?;
        self.undone.push(fact);
        Ok(fact)
    }

    /// Move the most recently rolled back fact back onto the learned stack
    ///
    /// # Errors
    /// Returns [`HistoryError::NothingToRelearn`] if there is no pending redo
    pub fn relearn(&mut self) -> Result<Fact, HistoryError> {
        let fact = self.undone.pop().ok_or(HistoryError::NothingToRelearn)?;
        self.learned.push(fact);
        Ok(fact)
    }

    /// Current top fact
    #[inline]
    #[must_use]
    pub fn check(&self) -> Knowledge {
        self.learned.last().copied().into()
    }

    /// Independent deep copy of both stacks
    ///
    /// This is the only place a history is copied.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self {
            learned: self.learned.clone(),
            undone: self.undone.clone(),
        }
    }

    /// Number of learned facts
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.learned.len()
    }

    /// Number of facts available for redo
    #[inline]
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.undone.len()
    }

    #[inline]
    #[must_use]
    pub fn can_rollback(&self) -> bool {
        !self.learned.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn can_relearn(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Learned facts, bottom first
    #[inline]
    #[must_use]
    pub fn learned(&self) -> &[Fact] {
        &self.learned
    }

    /// Rolled back facts, bottom first (last element is redone next)
    #[inline]
    #[must_use]
    pub fn undone(&self) -> &[Fact] {
        &self.undone
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_history_is_basic() {
        let history = VersionedHistory::new();
        assert_eq!(history.check(), Knowledge::Basic);
        assert_eq!(history.check().to_string(), "basic");
        assert!(!history.can_rollback());
        assert!(!history.can_relearn());
    }

    #[test]
    fn learn_pushes_on_top() {
        let mut history = VersionedHistory::new();
        history.learn(1);
        history.learn(2);
        assert_eq!(history.check(), Knowledge::Fact(2));
        assert_eq!(history.learned(), &[1, 2]);
    }

    #[test]
    fn rollback_then_relearn_restores_top() {
        let mut history = VersionedHistory::new();
        history.learn(7);
        history.learn(8);

        assert_eq!(history.rollback().unwrap(), 8);
        assert_eq!(history.check(), Knowledge::Fact(7));
        assert_eq!(history.relearn().unwrap(), 8);
        assert_eq!(history.check(), Knowledge::Fact(8));
        assert_eq!(history.redo_depth(), 0);
    }

    #[test]
    fn redo_order_is_lifo() {
        let mut history = VersionedHistory::from_stacks(vec![1, 2, 3], Vec::new());
        history.rollback().unwrap();
        history.rollback().unwrap();
        assert_eq!(history.undone(), &[3, 2]);

        assert_eq!(history.relearn().unwrap(), 2);
        assert_eq!(history.relearn().unwrap(), 3);
    }

    #[test]
    fn learn_clears_redo() {
        let mut history = VersionedHistory::new();
        history.learn(1);
        history.rollback().unwrap();
        assert!(history.can_relearn());

        history.learn(2);
        assert!(!history.can_relearn());
        assert_eq!(history.relearn(), Err(HistoryError::NothingToRelearn));
    }

    #[test]
    fn rollback_on_empty_is_error() {
        let mut history = VersionedHistory::new();
        assert_eq!(history.rollback(), Err(HistoryError::NothingToRollBack));
        assert_eq!(history, VersionedHistory::new());
    }

    #[test]
    fn duplicate_is_independent() {
        let mut original = VersionedHistory::new();
        original.learn(1);
        original.learn(2);
        original.rollback().unwrap();

        let mut copy = original.duplicate();
        assert_eq!(copy, original);

        copy.learn(9);
        assert_eq!(original.check(), Knowledge::Fact(1));
        assert_eq!(original.undone(), &[2]);
        assert_eq!(copy.check(), Knowledge::Fact(9));
        assert!(copy.undone().is_empty());
    }

    #[test]
    fn negative_facts_display_with_sign() {
        assert_eq!(Knowledge::Fact(-42).to_string(), "-42");
        assert_eq!(Knowledge::from(None), Knowledge::Basic);
        assert_eq!(Knowledge::Fact(3).fact(), Some(3));
    }

    #[test]
    fn history_serializes_both_stacks() {
        let history = VersionedHistory::from_stacks(vec![1, 2], vec![3]);
        let json = serde_json::to_string(&history).unwrap();
        assert_eq!(json, r#"{"learned":[1,2],"undone":[3]}"#);

        let back: VersionedHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, history);
    }

    proptest! {
        #[test]
        fn prop_duplicate_equals_source(
            learned in prop::collection::vec(any::<i32>(), 0..16),
            undone in prop::collection::vec(any::<i32>(), 0..16),
        ) {
            let source = VersionedHistory::from_stacks(learned, undone);
            let copy = source.duplicate();
            prop_assert_eq!(&copy, &source);
            prop_assert_eq!(copy.check(), source.check());
        }

        #[test]
        fn prop_rollback_relearn_restores_check(
            facts in prop::collection::vec(any::<i32>(), 1..16),
            undone in prop::collection::vec(any::<i32>(), 0..4),
        ) {
            let mut history = VersionedHistory::from_stacks(facts, undone);
            let before = history.clone();

            let rolled = history.rollback().unwrap();
            prop_assert_eq!(history.relearn().unwrap(), rolled);
            prop_assert_eq!(history.check(), before.check());
            prop_assert_eq!(history, before);
        }

        #[test]
        fn prop_learn_always_clears_redo(
            facts in prop::collection::vec(any::<i32>(), 1..8),
            rollbacks in 1..8usize,
            next in any::<i32>(),
        ) {
            let mut history = VersionedHistory::from_stacks(facts, Vec::new());
            for _ in 0..rollbacks {
                if history.rollback().is_err() {
                    break;
                }
            }
            history.learn(next);
            prop_assert!(!history.can_relearn());
            prop_assert_eq!(history.check(), Knowledge::Fact(next));
        }
    }
}
