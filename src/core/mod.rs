//! Core tree types
//!
//! This module defines the flat input record, the assembled tree node and the
//! error type shared by every stage of a build.

pub mod error;
pub mod node;

use serde::{Deserialize, Serialize};

pub use error::{TreeError, TreeResult};
pub use node::Node;

/// Identifier of a record. Identifiers are dense and zero-based.
pub type RecordId = usize;

/// A flat record naming itself and its parent.
///
/// The root record is the one whose `id` equals its own `parent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub parent: RecordId,
}

impl Record {
    pub fn new(id: RecordId, parent: RecordId) -> Self {
        Self { id, parent }
    }

    /// Whether this record declares itself as its own parent.
    pub fn is_root(&self) -> bool {
        self.id == self.parent
    }
}

impl From<(RecordId, RecordId)> for Record {
    fn from((id, parent): (RecordId, RecordId)) -> Self {
        Self::new(id, parent)
    }
}
