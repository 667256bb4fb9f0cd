//! Hierarchical per-language line statistics.
//!
//! A [`StatsNode`] holds the counts for one repository scope plus one child
//! node per nested submodule. The scan root is a synthetic container: the
//! first discovered boundary (possibly the root path itself) becomes its
//! child, so arbitrary submodule nesting maps to arbitrary node nesting.

use std::collections::BTreeMap;

use serde::Serialize;

/// One node of the result tree: language name → accumulated non-blank line
/// count, plus children keyed by submodule directory name.
///
/// Ordered maps keep serialization and comparison deterministic regardless
/// of directory-entry enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatsNode {
    /// Per-language counts for files directly in this node's scope
    pub stats: BTreeMap<String, u64>,
    /// Nested submodules
    pub children: BTreeMap<String, StatsNode>,
}

impl StatsNode {
    /// Create an empty root container.
    pub fn new_root() -> Self {
        Self::default()
    }

    /// Get or create the child with the given name. Idempotent.
    pub fn child(&mut self, name: &str) -> &mut StatsNode {
        self.children.entry(name.to_string()).or_default()
    }

    /// Accumulate `count` lines for `language`, creating the entry at zero
    /// if absent.
    pub fn add(&mut self, language: &str, count: u64) {
        *self.stats.entry(language.to_string()).or_insert(0) += count;
    }

    /// Count for a language in this node's own scope, if present.
    pub fn get(&self, language: &str) -> Option<u64> {
        self.stats.get(language).copied()
    }

    /// Sum of this node's own per-language counts.
    pub fn own_lines(&self) -> u64 {
        self.stats.values().sum()
    }

    /// Sum of counts over this node and all descendants.
    pub fn total_lines(&self) -> u64 {
        self.own_lines() + self.children.values().map(StatsNode::total_lines).sum::<u64>()
    }

    /// Merge this node and all descendants into one language → count map.
    pub fn flattened(&self) -> BTreeMap<String, u64> {
        let mut merged = BTreeMap::new();
        self.flatten_into(&mut merged);
        merged
    }

    fn flatten_into(&self, merged: &mut BTreeMap<String, u64>) {
        for (language, count) in &self.stats {
            *merged.entry(language.clone()).or_insert(0) += count;
        }
        for node in self.children.values() {
            node.flatten_into(merged);
        }
    }

    /// Whether the node carries no counts and no children.
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty() && self.children.is_empty()
    }
}
