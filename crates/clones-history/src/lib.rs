//! Clone History
//!
//! Rewindable fact histories with copy-on-write sharing.
//!
//! # Core Concepts
//!
//! - [`VersionedHistory`]: learned stack plus redo stack
//! - [`SharedHistory`]: reference-counted handle; cheap to share, copies on first write
//! - [`Knowledge`]: answer to `check` (a fact, or `basic`)
//!
//! # Example
//!
//! ```rust
//! use clones_history::{Knowledge, SharedHistory};
//!
//! let mut root = SharedHistory::default();
//! root.make_mut().0.learn(1);
//!
//! let mut sibling = root.add_ref();
//! assert_eq!(root.ref_count(), 2);
//!
//! let (history, split) = sibling.make_mut();
//! history.learn(2);
//! assert!(split);
//! assert_eq!(root.check(), Knowledge::Fact(1));
//! assert_eq!(sibling.check(), Knowledge::Fact(2));
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod error;
mod handle;
mod history;

pub use error::HistoryError;
pub use handle::SharedHistory;
pub use history::{Fact, Knowledge, VersionedHistory, BASIC};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
