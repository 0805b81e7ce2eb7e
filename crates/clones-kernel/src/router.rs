//! Command routing
//!
//! [`CommandRouter`] owns the forest and maps each [`Command`] onto one
//! forest operation. Only `check` produces output.

use crate::command::Command;
use crate::error::CommandError;
use clones_forest::{CloneForest, ForestConfig};

/// The external command contract
pub trait VersionSystem {
    /// Execute one command line
    ///
    /// Returns `Some(answer)` for `check`, `None` for every other command.
    ///
    /// # Errors
    /// Returns error if the line is malformed or the forest refuses it
    fn execute(&mut self, query: &str) -> Result<Option<String>, CommandError>;
}

/// Routes parsed commands to a [`CloneForest`]
#[derive(Debug, Default)]
pub struct CommandRouter {
    forest: CloneForest,
}

impl CommandRouter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: ForestConfig) -> Self {
        Self {
            forest: CloneForest::with_config(config),
        }
    }

    #[inline]
    #[must_use]
    pub fn forest(&self) -> &CloneForest {
        &self.forest
    }

    /// Apply one parsed command
    ///
    /// # Errors
    /// Returns [`CommandError::ContractViolation`] if the forest refuses it
    pub fn dispatch(&mut self, command: Command) -> Result<Option<String>, CommandError> {
        tracing::trace!(%command, "dispatch");
        match command {
            Command::Learn { clone, fact } => {
                self.forest.learn(clone, fact)?;
                Ok(None)
            }
            Command::Rollback { clone } => {
                self.forest.rollback(clone)?;
                Ok(None)
            }
            Command::Relearn { clone } => {
                self.forest.relearn(clone)?;
                Ok(None)
            }
            Command::Clone { clone } => {
                self.forest.clone_of(clone)?;
                Ok(None)
            }
            Command::Check { clone } => Ok(Some(self.forest.check(clone)?.to_string())),
        }
    }
}

impl VersionSystem for CommandRouter {
    fn execute(&mut self, query: &str) -> Result<Option<String>, CommandError> {
        let command = Command::parse(query)?;
        self.dispatch(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clones_forest::{CloneId, ForestError};
    use clones_history::HistoryError;

    #[test]
    fn mutating_commands_return_nothing() {
        let mut router = CommandRouter::new();
        assert_eq!(router.execute("learn 1 1").unwrap(), None);
        assert_eq!(router.execute("clone 1").unwrap(), None);
        assert_eq!(router.execute("rollback 2").unwrap(), None);
        assert_eq!(router.execute("relearn 2").unwrap(), None);
    }

    #[test]
    fn check_returns_fact_or_basic() {
        let mut router = CommandRouter::new();
        assert_eq!(router.execute("check 1").unwrap().as_deref(), Some("basic"));
        router.execute("learn 1 42").unwrap();
        assert_eq!(router.execute("check 1").unwrap().as_deref(), Some("42"));
    }

    #[test]
    fn forest_refusals_are_contract_violations() {
        let mut router = CommandRouter::new();
        let err = router.execute("rollback 1").unwrap_err();
        assert_eq!(
            err.forest_error().and_then(ForestError::history_error),
            Some(HistoryError::NothingToRollBack)
        );
        assert!(!err.is_parse_error());

        let err = router.execute("check 2").unwrap_err();
        assert_eq!(
            err,
            CommandError::ContractViolation(ForestError::UnknownClone {
                id: CloneId::new(2).unwrap(),
                clones: 1,
            })
        );
    }

    #[test]
    fn config_limits_clones() {
        let mut router = CommandRouter::with_config(ForestConfig::new().with_max_clones(1));
        assert!(router.execute("clone 1").is_err());
        assert_eq!(router.forest().len(), 1);
    }
}
