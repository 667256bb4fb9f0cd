//! # codestatslib
//!
//! A language-aware non-blank line counter that scopes nested git
//! submodules as independent sub-reports and honors each repository's own
//! ignore rules.
//!
//! ## Overview
//!
//! Given a root directory, the library walks it depth-first and produces a
//! tree of per-language line counts. In git mode, every directory holding a
//! `.git` marker opens a new scope: its `.gitignore` rules apply to its
//! subtree only, and its counts accumulate into a child node of the result
//! tree instead of leaking into the enclosing repository.
//!
//! Lines are counted as "non-blank": content that is non-empty after
//! trimming whitespace. There is no syntax awareness and no comment/code
//! distinction.
//!
//! ## Structure
//!
//! - [`config`]: language registry and file classification
//! - [`ignore`]: stack of per-boundary gitignore rule-sets
//! - [`stats`]: the hierarchical result tree
//! - [`walker`]: the traversal engine and its entry point, [`scan`]
//! - [`counter`]: non-blank line counting for one file
//! - [`encoding`]: best-effort text-encoding resolution
//!
//! ## Example
//!
//! ```rust
//! use codestatslib::{scan, LanguageConfig, ScanOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("hello.py"), "print('hi')\n\nx = 1\n").unwrap();
//!
//! let config = LanguageConfig::embedded().unwrap();
//! let report = scan(dir.path(), &config, ScanOptions::new()).unwrap();
//! assert_eq!(report.tree.get("Python"), Some(2));
//! ```
//!
//! Errors mid-walk never abort a scan: unreadable entries and malformed
//! ignore files are recorded as [`Diagnostic`]s on the returned
//! [`ScanReport`]. Only a broken configuration or a missing root is fatal.

pub mod config;
pub mod counter;
pub mod encoding;
pub mod error;
pub mod ignore;
pub mod stats;
pub mod walker;

pub use config::{Language, LanguageConfig, UNKNOWN_LANGUAGE};
pub use counter::{count_lines, count_text};
pub use error::{CodestatsError, Diagnostic, DiagnosticKind};
pub use ignore::IgnoreStack;
pub use stats::StatsNode;
pub use walker::{scan, ScanOptions, ScanReport};

/// Result type for codestatslib operations
pub type Result<T> = std::result::Result<T, CodestatsError>;
