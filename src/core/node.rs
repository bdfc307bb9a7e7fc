//! Tree node
//!
//! A `Node` exclusively owns its children, which are kept in ascending id
//! order once a build has finished.

use super::{Record, RecordId};

/// A node of an assembled tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: RecordId,
    pub children: Vec<Node>,
}

impl Node {
    /// Create a leaf node
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including `self`
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Height of this subtree. A leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Node::depth).max().unwrap_or(0)
    }

    /// Depth-first lookup of a node by id
    pub fn find(&self, id: RecordId) -> Option<&Node> {
        self.iter().find(|node| node.id == id)
    }

    /// Pre-order traversal: a node is yielded before its children, and
    /// siblings in their stored order.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }

    /// Flatten the subtree back into records, sorted by id.
    ///
    /// The node this is called on is emitted as a root (`id == parent`).
    pub fn to_records(&self) -> Vec<Record> {
        let mut records = vec![Record::new(self.id, self.id)];
        for node in self.iter() {
            records.extend(node.children.iter().map(|child| Record::new(child.id, node.id)));
        }
        records.sort_unstable_by_key(|record| record.id);
        records
    }

    pub(crate) fn sort_children(&mut self) {
        self.children.sort_unstable_by_key(|child| child.id);
    }
}

/// Pre-order iterator returned by [`Node::iter`]
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

impl<'a> IntoIterator for &'a Node {
    type Item = &'a Node;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        // 0 -> [1 -> [3], 2]
        Node {
            id: 0,
            children: vec![
                Node {
                    id: 1,
                    children: vec![Node::new(3)],
                },
                Node::new(2),
            ],
        }
    }

    #[test]
    fn test_iter_is_pre_order() {
        let ids: Vec<RecordId> = sample().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![0, 1, 3, 2]);
    }

    #[test]
    fn test_len_and_depth() {
        let tree = sample();
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.depth(), 3);
        assert_eq!(Node::new(7).depth(), 1);
        assert!(Node::new(7).is_leaf());
    }

    #[test]
    fn test_find() {
        let tree = sample();
        assert_eq!(tree.find(3).map(|n| n.id), Some(3));
        assert!(tree.find(1).is_some_and(|n| !n.is_leaf()));
        assert!(tree.find(9).is_none());
    }

    #[test]
    fn test_to_records() {
        let records = sample().to_records();
        assert_eq!(
            records,
            vec![
                Record::new(0, 0),
                Record::new(1, 0),
                Record::new(2, 0),
                Record::new(3, 1),
            ]
        );
    }
}
