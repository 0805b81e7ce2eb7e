//! Forest configuration

use serde::{Deserialize, Serialize};

/// Forest limits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForestConfig {
    /// Upper bound on the number of clones, including the root. `None` is unbounded.
    pub max_clones: Option<usize>,
}

impl ForestConfig {
    /// Unbounded forest
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the number of clones
    ///
    /// A limit below 1 is raised to 1; the root always exists.
    #[inline]
    #[must_use]
    pub fn with_max_clones(mut self, max_clones: usize) -> Self {
        self.max_clones = Some(max_clones.max(1));
        self
    }
}
