//! Stack of per-boundary ignore rule-sets.
//!
//! Each repository boundary contributes at most one rule-set, compiled from
//! its own `.gitignore` and matched against paths relative to that boundary,
//! not the scan root. The traversal engine pushes on boundary entry and
//! pops on exit, so at any moment the stack holds exactly the rule-sets of
//! the enclosing repositories along the active path.

use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};

/// Name of the per-repository ignore file read at each boundary.
pub const IGNORE_FILE: &str = ".gitignore";

/// Read and compile a boundary's own ignore file.
///
/// Returns `Ok(None)` when the boundary has no ignore file. An unreadable or
/// unparseable file is an error for the caller to degrade to an empty
/// rule-set; it must never abort the scan.
pub fn load_boundary(dir: &Path) -> Result<Option<Gitignore>, ignore::Error> {
    let file = dir.join(IGNORE_FILE);
    if !file.exists() {
        return Ok(None);
    }
    let mut builder = GitignoreBuilder::new(dir);
    if let Some(err) = builder.add(&file) {
        return Err(err);
    }
    Ok(Some(builder.build()?))
}

/// Ordered collection of active rule-sets, innermost last.
#[derive(Debug, Default)]
pub struct IgnoreStack {
    sets: Vec<Gitignore>,
}

impl IgnoreStack {
    /// Create an empty stack. With no active set, nothing is excluded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a boundary's rule-set. Every push must be paired with exactly
    /// one [`pop`](Self::pop) when traversal leaves the boundary.
    pub fn push(&mut self, set: Gitignore) {
        self.sets.push(set);
    }

    /// Pop the innermost rule-set.
    pub fn pop(&mut self) {
        self.sets.pop();
    }

    /// Number of active rule-sets.
    pub fn depth(&self) -> usize {
        self.sets.len()
    }

    /// Whether any active rule-set excludes the path.
    ///
    /// Each set is evaluated relative to its own boundary root, with full
    /// gitignore semantics: a `!pattern` whitelist in the same set overrides
    /// an earlier ignore match.
    pub fn is_excluded(&self, path: &Path, is_dir: bool) -> bool {
        self.sets
            .iter()
            .any(|set| set.matched_path_or_any_parents(path, is_dir).is_ignore())
    }
}
