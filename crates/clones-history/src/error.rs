//! History errors

/// Errors raised by history operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    /// `rollback` with an empty learned stack
    #[error("nothing to roll back")]
    NothingToRollBack,

    /// `relearn` with an empty redo stack
    #[error("nothing to relearn")]
    NothingToRelearn,
}
