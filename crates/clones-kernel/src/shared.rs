//! Thread-safe access to one router
//!
//! The whole router sits behind a single lock held for the duration of each
//! command: the copy-on-write check and the `clone` append both read then
//! write reference counts and must not interleave.

use crate::error::CommandError;
use crate::router::{CommandRouter, VersionSystem};
use clones_forest::ForestStats;
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable, lock-guarded [`CommandRouter`]
#[derive(Debug, Clone, Default)]
pub struct SharedCloneSystem {
    inner: Arc<Mutex<CommandRouter>>,
}

impl SharedCloneSystem {
    #[must_use]
    pub fn new(router: CommandRouter) -> Self {
        Self {
            inner: Arc::new(Mutex::new(router)),
        }
    }

    /// Execute one command line under the lock
    ///
    /// # Errors
    /// Same as [`VersionSystem::execute`]
    pub fn execute(&self, query: &str) -> Result<Option<String>, CommandError> {
        self.inner.lock().execute(query)
    }

    #[must_use]
    pub fn stats(&self) -> ForestStats {
        self.inner.lock().forest().stats()
    }
}

impl VersionSystem for SharedCloneSystem {
    fn execute(&mut self, query: &str) -> Result<Option<String>, CommandError> {
        SharedCloneSystem::execute(self, query)
    }
}
