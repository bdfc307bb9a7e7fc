//! Build errors
//!
//! Every variant is a terminal structural violation. A build that reports one
//! of these never returns a partial tree.

use super::RecordId;

/// Result alias used throughout the crate.
pub type TreeResult<T> = Result<T, TreeError>;

/// Errors that can occur while building a tree
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// Not exactly one record has `id == parent`
    #[error("records must have exactly one root record where id == parent, found {found}")]
    RootCardinality { found: usize },

    /// The self-parented record is not record 0
    #[error("root record must have id 0, found {id}")]
    InvalidRootId { id: RecordId },

    /// Identifiers do not span `0..count`
    #[error("non contiguous ids: highest id is {max} but there are {count} records")]
    NonContiguousIds { max: RecordId, count: usize },

    /// Two records under the same parent share an id
    #[error("duplicate record id {id}")]
    DuplicateId { id: RecordId },

    /// A parent id exceeds the id of its child
    #[error("invalid parent id {parent} for record {id}")]
    InvalidParentId { id: RecordId, parent: RecordId },

    /// Records that were never attached to the tree
    #[error("orphan records detected: {ids:?}")]
    OrphanRecords { ids: Vec<RecordId> },

    /// The tree is taller than the configured limit
    #[error("tree depth exceeds limit of {limit}")]
    DepthLimitExceeded { limit: usize },

    /// The input holds more records than the configured limit
    #[error("{count} records exceed limit of {limit}")]
    TooManyRecords { count: usize, limit: usize },

    /// The build configuration was rejected
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
