//! Recursive tree assembly
//!
//! Each call takes ownership of the records not yet attached, claims the ones
//! that belong under the current node and hands the rest back by value.

use tracing::trace;

use crate::core::{Node, Record, TreeError, TreeResult};

/// Attaches candidate records below a parent node
#[derive(Debug, Clone, Copy, Default)]
pub struct Assembler {
    max_depth: Option<usize>,
}

impl Assembler {
    pub fn new(max_depth: Option<usize>) -> Self {
        Self { max_depth }
    }

    /// Attach every candidate whose `parent` is `parent.id`, recursing into
    /// each new child with the records still unclaimed.
    ///
    /// `depth` is the depth of `parent` (the root is at depth 1). Candidates
    /// must be ascending by id. Returns the records that were not attached
    /// anywhere in this subtree.
    pub fn attach_children(
        &self,
        parent: &mut Node,
        candidates: Vec<Record>,
        depth: usize,
    ) -> TreeResult<Vec<Record>> {
        let (matched, mut unmatched): (Vec<Record>, Vec<Record>) = candidates
            .into_iter()
            .partition(|record| record.parent == parent.id);

        for (index, child) in matched.iter().enumerate() {
            if has_sibling_duplicate(&matched, index) {
                return Err(TreeError::DuplicateId { id: child.id });
            }
            if parent.id > child.id || child.parent > child.id {
                return Err(TreeError::InvalidParentId {
                    id: child.id,
                    parent: child.parent,
                });
            }
            if let Some(limit) = self.max_depth {
                if depth >= limit {
                    return Err(TreeError::DepthLimitExceeded { limit });
                }
            }

            trace!(id = child.id, parent = parent.id, depth = depth + 1, "attaching child");
            let mut node = Node::new(child.id);
            if !unmatched.is_empty() {
                unmatched = self.attach_children(&mut node, unmatched, depth + 1)?;
            }
            parent.children.push(node);
        }

        parent.sort_children();
        Ok(unmatched)
    }
}

// `matched` keeps the ascending order of the candidates, so equal ids are adjacent.
fn has_sibling_duplicate(matched: &[Record], index: usize) -> bool {
    let id = matched[index].id;
    let before = index.checked_sub(1).map(|i| matched[i].id == id);
    let after = matched.get(index + 1).map(|record| record.id == id);
    before.unwrap_or(false) || after.unwrap_or(false)
}
