//! Tree Building - assembles flat parent-referencing records into a tree
//!
//! Records carry a dense, zero-based id and the id of their parent. The single
//! record whose id equals its parent is the root. [`build`] sorts, validates
//! and assembles the records, returning either a complete tree or an error.

pub mod core;
pub mod runtime;
mod tests;

// Re-export commonly used types
pub use core::{Node, Record, RecordId, TreeError, TreeResult};
pub use runtime::{build, BuildConfig, TreeBuilder};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
