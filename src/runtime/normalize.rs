//! Record normalization
//!
//! Sorts the input by id and separates the root record from the rest. The
//! contiguity check here is necessary but not sufficient. Duplicate ids with
//! different parents are rejected here; duplicates under the same parent are
//! left for assembly to report as siblings.

use crate::core::{Record, TreeError, TreeResult};

/// Sorted input with the root record split off
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub root: Record,
    /// Non-root records, ascending by id
    pub remainder: Vec<Record>,
}

/// Sort `records` by id and extract the single root.
///
/// `records` must not be empty.
pub fn normalize(mut records: Vec<Record>) -> TreeResult<Normalized> {
    records.sort_unstable_by_key(|record| record.id);

    let count = records.len();
    let max = records.last().map_or(0, |record| record.id);
    if count == 0 || max != count - 1 {
        return Err(TreeError::NonContiguousIds { max, count });
    }
    if let Some(pair) = records
        .windows(2)
        .find(|pair| pair[0].id == pair[1].id && pair[0].parent != pair[1].parent)
    {
        return Err(TreeError::DuplicateId { id: pair[0].id });
    }

    let (roots, remainder): (Vec<Record>, Vec<Record>) =
        records.into_iter().partition(Record::is_root);

    let root = match roots.as_slice() {
        [root] => *root,
        _ => return Err(TreeError::RootCardinality { found: roots.len() }),
    };
    if root.id != 0 {
        return Err(TreeError::InvalidRootId { id: root.id });
    }

    Ok(Normalized { root, remainder })
}
