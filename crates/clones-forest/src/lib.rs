//! Clone Forest
//!
//! Numbered clones over copy-on-write [`SharedHistory`](clones_history::SharedHistory)
//! handles.
//!
//! # Core Concepts
//!
//! - [`CloneForest`]: learn / rollback / relearn / check / clone by [`CloneId`]
//! - [`CloneId`]: 1-based clone number; clone 1 is the root
//! - [`ForestError`]: bad ids, empty undo/redo, clone limit
//!
//! # Example
//!
//! ```rust
//! use clones_forest::{CloneForest, CloneId};
//! use clones_history::Knowledge;
//!
//! let mut forest = CloneForest::new();
//! forest.learn(CloneId::ROOT, 1)?;
//!
//! let copy = forest.clone_of(CloneId::ROOT)?;
//! forest.learn(copy, 2)?;
//!
//! assert_eq!(forest.check(CloneId::ROOT)?, Knowledge::Fact(1));
//! assert_eq!(forest.check(copy)?, Knowledge::Fact(2));
//! # Ok::<(), clones_forest::ForestError>(())
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod config;
mod error;
mod forest;
mod id;

pub use config::ForestConfig;
pub use error::ForestError;
pub use forest::{CloneForest, ForestStats};
pub use id::CloneId;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
