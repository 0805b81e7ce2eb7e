//! Clone identifiers
//!
//! Clones are numbered from 1 in creation order; the root is clone 1.

use crate::error::ForestError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::num::NonZeroUsize;

/// 1-based clone identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CloneId(NonZeroUsize);

impl CloneId {
    /// The root clone, present in every forest
    pub const ROOT: Self = Self(NonZeroUsize::MIN);

    /// Identifier from a 1-based number
    #[inline]
    #[must_use]
    pub const fn new(id: usize) -> Option<Self> {
        match NonZeroUsize::new(id) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }

    /// Identifier of the clone stored at a 0-based slot
    #[inline]
    #[must_use]
    pub const fn from_slot(slot: usize) -> Self {
        Self(NonZeroUsize::MIN.saturating_add(slot))
    }

    /// 0-based slot index
    #[inline]
    #[must_use]
    pub const fn slot(self) -> usize {
        self.0.get() - 1
    }

    /// 1-based number
    #[inline]
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Display for CloneId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for CloneId {
    type Error = ForestError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or(ForestError::InvalidCloneId(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_slot_zero() {
        assert_eq!(CloneId::ROOT.get(), 1);
        assert_eq!(CloneId::ROOT.slot(), 0);
        assert_eq!(CloneId::from_slot(0), CloneId::ROOT);
    }

    #[test]
    fn slot_round_trip() {
        let id = CloneId::from_slot(4);
        assert_eq!(id.get(), 5);
        assert_eq!(id.slot(), 4);
        assert_eq!(id.to_string(), "5");
    }

    #[test]
    fn non_positive_ids_rejected() {
        assert_eq!(CloneId::try_from(0), Err(ForestError::InvalidCloneId(0)));
        assert_eq!(CloneId::try_from(-3), Err(ForestError::InvalidCloneId(-3)));
        assert_eq!(CloneId::try_from(2).unwrap().get(), 2);
        assert!(CloneId::new(0).is_none());
    }
}
