//! Clone Version System Kernel
//!
//! Command layer over a copy-on-write [`CloneForest`](clones_forest::CloneForest):
//! parses `learn` / `rollback` / `relearn` / `clone` / `check` lines and
//! routes them to the forest.
//!
//! # Quick Start
//!
//! ```rust
//! use clones_kernel::prelude::*;
//!
//! let mut system = CommandRouter::new();
//! system.execute("learn 1 1")?;
//! system.execute("clone 1")?;
//! system.execute("learn 2 2")?;
//!
//! assert_eq!(system.execute("check 1")?.as_deref(), Some("1"));
//! assert_eq!(system.execute("check 2")?.as_deref(), Some("2"));
//! # Ok::<(), CommandError>(())
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod command;
pub mod error;
pub mod logging;
pub mod router;
pub mod session;
pub mod shared;

pub use command::{Command, Keyword};
pub use error::CommandError;
pub use router::{CommandRouter, VersionSystem};
pub use session::{RejectedCommand, Session, SessionConfig, SessionReport};
pub use shared::SharedCloneSystem;

/// Common imports
pub mod prelude {
    pub use crate::{Command, CommandError, CommandRouter, SharedCloneSystem, VersionSystem};
    pub use clones_forest::{CloneForest, CloneId, ForestConfig, ForestError};
    pub use clones_history::{Fact, Knowledge};
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
