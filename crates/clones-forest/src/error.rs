//! Forest errors
//!
//! Every variant is a caller contract violation: a bad clone id, an undo or
//! redo with nothing to move, or a clone beyond the configured limit. A failed
//! operation leaves the forest unchanged.

use crate::id::CloneId;
use clones_history::HistoryError;

/// Errors raised by [`CloneForest`](crate::CloneForest)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ForestError {
    /// Id is zero or negative
    #[error("clone id must be positive, got {0}")]
    InvalidCloneId(i32),

    /// Id past the last clone
    #[error("clone {id} does not exist ({clones} clones)")]
    UnknownClone { id: CloneId, clones: usize },

    /// History operation rejected for this clone
    #[error("clone {clone}: {source}")]
    History {
        clone: CloneId,
        source: HistoryError,
    },

    /// `clone` would exceed the configured limit
    #[error("clone limit of {limit} reached")]
    CapacityExceeded { limit: usize },
}

impl ForestError {
    #[inline]
    pub(crate) fn history(clone: CloneId, source: HistoryError) -> Self {
        Self::History { clone, source }
    }

    /// Underlying history error, if any
    #[inline]
    #[must_use]
    pub fn history_error(&self) -> Option<HistoryError> {
        match self {
            Self::History { source, .. } => Some(*source),
            _ => None,
        }
    }

    /// True if the id did not name an existing clone
    #[inline]
    #[must_use]
    pub fn is_bad_id(&self) -> bool {
        matches!(self, Self::InvalidCloneId(_) | Self::UnknownClone { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_clone() {
        let err = ForestError::history(CloneId::from_slot(2), HistoryError::NothingToRelearn);
        assert_eq!(err.to_string(), "clone 3: nothing to relearn");
        assert_eq!(err.history_error(), Some(HistoryError::NothingToRelearn));
        assert!(!err.is_bad_id());
    }

    #[test]
    fn unknown_clone_is_bad_id() {
        let err = ForestError::UnknownClone {
            id: CloneId::from_slot(9),
            clones: 2,
        };
        assert!(err.is_bad_id());
        assert_eq!(err.to_string(), "clone 10 does not exist (2 clones)");
    }
}
