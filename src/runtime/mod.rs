//! Tree building runtime
//!
//! This module ties normalization and assembly together behind a single
//! `build` entry point, optionally bounded by a [`BuildConfig`].

pub mod assemble;
pub mod normalize;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Node, Record, TreeError, TreeResult};
use assemble::Assembler;
use normalize::{normalize, Normalized};

/// Limits applied to a build. The default is unlimited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Maximum tree height, counting the root as 1
    pub max_depth: Option<usize>,
    /// Maximum number of input records
    pub max_records: Option<usize>,
}

impl BuildConfig {
    pub fn validate(&self) -> TreeResult<()> {
        if self.max_depth == Some(0) {
            return Err(TreeError::InvalidConfig("max_depth must be at least 1".into()));
        }
        if self.max_records == Some(0) {
            return Err(TreeError::InvalidConfig("max_records must be at least 1".into()));
        }
        Ok(())
    }
}

/// Builds trees from flat records
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    config: BuildConfig,
}

impl TreeBuilder {
    pub fn new(config: BuildConfig) -> TreeResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Build a tree from `records`.
    ///
    /// Empty input yields `Ok(None)`. Any structural violation aborts the
    /// whole build; no partial tree is returned.
    ///
    /// Assembly recurses once per tree level, so set `max_depth` when the
    /// records come from an untrusted source.
    pub fn build(&self, records: Vec<Record>) -> TreeResult<Option<Node>> {
        let count = records.len();
        if count == 0 {
            return Ok(None);
        }
        debug!(records = count, "building tree");

        self.assemble(records)
            .map(|root| {
                debug!(nodes = root.len(), depth = root.depth(), "tree built");
                Some(root)
            })
            .map_err(|err| {
                debug!(records = count, error = %err, "rejected records");
                err
            })
    }

    fn assemble(&self, records: Vec<Record>) -> TreeResult<Node> {
        if let Some(limit) = self.config.max_records {
            if records.len() > limit {
                return Err(TreeError::TooManyRecords {
                    count: records.len(),
                    limit,
                });
            }
        }

        let Normalized { root, remainder } = normalize(records)?;
        let mut root = Node::new(root.id);
        let orphans = Assembler::new(self.config.max_depth).attach_children(&mut root, remainder, 1)?;
        if !orphans.is_empty() {
            let mut ids: Vec<_> = orphans.iter().map(|record| record.id).collect();
            ids.sort_unstable();
            return Err(TreeError::OrphanRecords { ids });
        }

        Ok(root)
    }
}

/// Build a tree from `records` with no limits.
///
/// Recursion depth equals tree height. For untrusted input prefer a
/// [`TreeBuilder`] with `max_depth` set.
pub fn build(records: Vec<Record>) -> TreeResult<Option<Node>> {
    TreeBuilder::default().build(records)
}
