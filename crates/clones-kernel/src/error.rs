//! Command errors

use crate::command::Keyword;
use clones_forest::ForestError;

/// Errors surfaced by [`CommandRouter`](crate::CommandRouter)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// Keyword outside the five known commands (empty for a blank line)
    #[error("unrecognized command: {0:?}")]
    UnrecognizedCommand(String),

    /// Argument missing, extra, or not an integer
    #[error("invalid argument for {keyword}")]
    InvalidArgument { keyword: Keyword },

    /// Well-formed command the forest refused
    #[error("contract violation: {0}")]
    ContractViolation(#[from] ForestError),
}

impl CommandError {
    /// True if the line itself was malformed (as opposed to refused)
    #[inline]
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        !matches!(self, Self::ContractViolation(_))
    }

    /// Forest error behind a contract violation
    #[inline]
    #[must_use]
    pub fn forest_error(&self) -> Option<&ForestError> {
        match self {
            Self::ContractViolation(e) => Some(e),
            _ => None,
        }
    }
}
