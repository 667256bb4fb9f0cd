//! Traversal engine: depth-first walk, boundary detection, aggregation.
//!
//! The engine recurses from the scan root. Per directory, a repository
//! boundary (in git mode) pushes that repository's own ignore rules and
//! redirects accumulation into a child stats node; files are ignore-checked,
//! skip-checked, classified, and counted into the current node. The pushed
//! rule-set is popped when the frame exits, so the stack always mirrors the
//! enclosing repositories of the active path.
//!
//! Nothing that goes wrong mid-walk aborts it: unreadable entries and
//! malformed ignore files degrade to diagnostics in the returned report.

use std::path::Path;

use log::warn;

use crate::config::LanguageConfig;
use crate::counter::count_lines;
use crate::error::{CodestatsError, Diagnostic, DiagnosticKind};
use crate::ignore::{load_boundary, IgnoreStack};
use crate::stats::StatsNode;
use crate::Result;

/// Marker entry whose presence makes a directory a repository boundary: a
/// plain directory for ordinary repositories, a file for submodule
/// gitlinks.
const REPOSITORY_MARKER: &str = ".git";

/// Version-control metadata entries, never recursed into nor counted.
///
/// An exact-name allowlist: a file that merely contains ".git" somewhere in
/// its name is ordinary data and still counts.
const METADATA_NAMES: [&str; 4] = [".git", ".gitignore", ".gitmodules", ".gitattributes"];

/// Options for a scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Detect repository boundaries and honor their ignore rules
    pub git_mode: bool,
}

impl ScanOptions {
    /// Create new default options (git mode off).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set git mode.
    pub fn git_mode(mut self, on: bool) -> Self {
        self.git_mode = on;
        self
    }
}

/// Completed scan: the stats tree plus every condition recovered along the
/// way. Read-only once returned.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ScanReport {
    /// Root of the stats tree (a synthetic container; the first discovered
    /// boundary becomes its child)
    pub tree: StatsNode,
    /// Recovered conditions, in encounter order
    pub diagnostics: Vec<Diagnostic>,
}

/// Scan a directory tree and aggregate non-blank line counts by language.
///
/// This is the single entry point of the engine. The classifier is built by
/// the caller and passed in explicitly; there is no hidden process-wide
/// configuration.
///
/// # Example
///
/// ```rust,ignore
/// use codestatslib::{scan, LanguageConfig, ScanOptions};
///
/// let config = LanguageConfig::embedded()?;
/// let report = scan(".", &config, ScanOptions::new().git_mode(true))?;
/// for (language, lines) in report.tree.flattened() {
///     println!("{language}: {lines}");
/// }
/// ```
pub fn scan(
    root: impl AsRef<Path>,
    config: &LanguageConfig,
    options: ScanOptions,
) -> Result<ScanReport> {
    let root = root.as_ref();
    if !root.exists() {
        return Err(CodestatsError::PathNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(CodestatsError::NotADirectory(root.to_path_buf()));
    }

    let mut report = ScanReport::default();
    let mut stack = IgnoreStack::new();
    visit(
        root,
        config,
        options,
        &mut report.tree,
        &mut stack,
        &mut report.diagnostics,
    );
    debug_assert_eq!(stack.depth(), 0);
    Ok(report)
}

/// One recursion frame: boundary handling, entry iteration, scoped pop.
fn visit(
    dir: &Path,
    config: &LanguageConfig,
    options: ScanOptions,
    node: &mut StatsNode,
    stack: &mut IgnoreStack,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let boundary = options.git_mode && dir.join(REPOSITORY_MARKER).exists();

    let mut pushed = false;
    if boundary {
        match load_boundary(dir) {
            Ok(Some(rules)) => {
                stack.push(rules);
                pushed = true;
            }
            Ok(None) => {}
            Err(err) => {
                // Malformed or unreadable ignore file: empty rule-set.
                warn!("ignoring rules at {}: {}", dir.display(), err);
                diagnostics.push(Diagnostic::new(
                    dir,
                    DiagnosticKind::IgnoreLoad,
                    err.to_string(),
                ));
            }
        }
    }

    {
        let current = if boundary {
            node.child(&dir_name(dir))
        } else {
            node
        };
        visit_entries(dir, config, options, current, stack, diagnostics);
    }

    // Paired with the push above, even when iteration bailed early.
    if pushed {
        stack.pop();
    }
}

/// Iterate a directory's entries: recurse into subdirectories, process
/// files.
fn visit_entries(
    dir: &Path,
    config: &LanguageConfig,
    options: ScanOptions,
    node: &mut StatsNode,
    stack: &mut IgnoreStack,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("skipping unreadable directory {}: {}", dir.display(), err);
            diagnostics.push(Diagnostic::new(dir, DiagnosticKind::FileRead, err.to_string()));
            return;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                diagnostics.push(Diagnostic::new(dir, DiagnosticKind::FileRead, err.to_string()));
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        if METADATA_NAMES.contains(&name.as_str()) {
            continue;
        }

        let path = entry.path();
        // Resolve through symlinks; a broken link is a recovered condition.
        let metadata = match path.metadata() {
            Ok(metadata) => metadata,
            Err(err) => {
                warn!("skipping {}: {}", path.display(), err);
                diagnostics.push(Diagnostic::new(&path, DiagnosticKind::FileRead, err.to_string()));
                continue;
            }
        };

        if metadata.is_dir() {
            if stack.is_excluded(&path, true) {
                continue;
            }
            // Symlinked directories are not followed, matching the
            // no-follow posture of the walk.
            if path.symlink_metadata().map(|m| m.is_symlink()).unwrap_or(false) {
                continue;
            }
            visit(&path, config, options, node, stack, diagnostics);
        } else if metadata.is_file() {
            if stack.is_excluded(&path, false) || config.should_skip(&name) {
                continue;
            }
            let language = config.classify(&name);
            match count_lines(&path) {
                Ok(count) => node.add(&language.name, count),
                Err(err) => {
                    warn!("skipping unreadable file {}: {}", path.display(), err);
                    diagnostics.push(Diagnostic::new(
                        &path,
                        DiagnosticKind::FileRead,
                        err.to_string(),
                    ));
                }
            }
        }
    }
}

/// Last component of a directory path, for naming its stats node.
fn dir_name(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string())
}
