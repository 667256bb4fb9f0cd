//! Language configuration and file classification.
//!
//! A [`LanguageConfig`] maps file extensions to languages and decides which
//! files are skipped outright. It is built once (from the embedded default
//! document, a YAML file, or explicit parts), validated strictly up front,
//! and read-only afterwards.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CodestatsError;
use crate::Result;

/// Name of the reserved fallback language for unmapped extensions.
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Default configuration document compiled into the library.
///
/// Derived offline from github-linguist's language registry.
const DEFAULT_CONFIG: &str = include_str!("../config/default.yml");

/// A single language: name, extensions, optional display color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// Unique language name (e.g. "Python")
    pub name: String,
    /// Extensions including the leading dot (e.g. ".py")
    pub exts: Vec<String>,
    /// Display color as "#rrggbb", if the registry defines one
    pub color: Option<String>,
}

impl Language {
    /// Create a language from a name and extension list.
    pub fn new(name: impl Into<String>, exts: Vec<String>, color: Option<String>) -> Self {
        Self {
            name: name.into(),
            exts,
            color,
        }
    }
}

/// Raw YAML document shape. Validated strictly: unknown keys are rejected
/// before any traversal starts.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    languages: serde_yaml::Mapping,
    #[serde(default)]
    skip_exts: Vec<String>,
    #[serde(default)]
    skip_languages: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawLanguage {
    #[serde(default)]
    exts: Vec<String>,
    #[serde(default)]
    color: Option<String>,
}

/// Immutable classifier: extension→language mapping plus skip rules.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    languages: Vec<Language>,
    skip_exts: HashSet<String>,
    skip_languages: HashSet<String>,
    /// Extension (leading dot included) → index into `languages`
    by_ext: HashMap<String, usize>,
    /// Index of the reserved fallback language
    unknown: usize,
}

impl LanguageConfig {
    /// Build a config from explicit parts.
    ///
    /// Appends the reserved "Unknown" fallback if no language carries that
    /// name (matched case-insensitively). When two languages declare the
    /// same extension the last declaration wins.
    pub fn from_parts(
        mut languages: Vec<Language>,
        skip_exts: Vec<String>,
        skip_languages: Vec<String>,
    ) -> Result<Self> {
        for lang in &languages {
            if lang.name.trim().is_empty() {
                return Err(CodestatsError::Config(
                    "language with empty name".to_string(),
                ));
            }
            for ext in &lang.exts {
                if ext.trim().is_empty() {
                    return Err(CodestatsError::Config(format!(
                        "language '{}' declares a blank extension",
                        lang.name
                    )));
                }
            }
        }

        let unknown = match languages
            .iter()
            .position(|l| l.name.eq_ignore_ascii_case(UNKNOWN_LANGUAGE))
        {
            Some(idx) => idx,
            None => {
                languages.push(Language::new(UNKNOWN_LANGUAGE, Vec::new(), None));
                languages.len() - 1
            }
        };

        let mut by_ext = HashMap::new();
        for (idx, lang) in languages.iter().enumerate() {
            for ext in &lang.exts {
                by_ext.insert(ext.clone(), idx);
            }
        }

        Ok(Self {
            languages,
            skip_exts: skip_exts.into_iter().collect(),
            skip_languages: skip_languages.into_iter().collect(),
            by_ext,
            unknown,
        })
    }

    /// Parse a config from a YAML document.
    ///
    /// The expected shape mirrors the shipped `config/default.yml`:
    ///
    /// ```yaml
    /// languages:
    ///   Python:
    ///     exts: [".py"]
    ///     color: "#3572A5"
    /// skip_exts: [".lock"]
    /// skip_languages: ["Text"]
    /// ```
    pub fn from_yaml_str(doc: &str) -> Result<Self> {
        let raw: RawConfig = serde_yaml::from_str(doc)
            .map_err(|e| CodestatsError::Config(e.to_string()))?;

        let mut languages = Vec::with_capacity(raw.languages.len());
        for (key, value) in raw.languages {
            let name = key
                .as_str()
                .ok_or_else(|| {
                    CodestatsError::Config(format!("language key is not a string: {:?}", key))
                })?
                .to_string();
            let entry: RawLanguage = serde_yaml::from_value(value)
                .map_err(|e| CodestatsError::Config(format!("language '{}': {}", name, e)))?;
            languages.push(Language::new(name, entry.exts, entry.color));
        }

        Self::from_parts(languages, raw.skip_exts, raw.skip_languages)
    }

    /// Load a config from a YAML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let doc = std::fs::read_to_string(path).map_err(|source| CodestatsError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&doc)
    }

    /// The configuration compiled into the library.
    pub fn embedded() -> Result<Self> {
        Self::from_yaml_str(DEFAULT_CONFIG)
    }

    /// Classify a file name into a language via its extension.
    ///
    /// The extension is the substring from the final `.` inclusive, or empty
    /// when the name has no dot. Unmapped extensions classify as "Unknown".
    /// Never fails.
    pub fn classify(&self, file_name: &str) -> &Language {
        let idx = self
            .by_ext
            .get(file_extension(file_name))
            .copied()
            .unwrap_or(self.unknown);
        &self.languages[idx]
    }

    /// Whether a file should be skipped entirely: its extension is in
    /// `skip_exts`, or its classified language is in `skip_languages`.
    pub fn should_skip(&self, file_name: &str) -> bool {
        self.skip_exts.contains(file_extension(file_name))
            || self.skip_languages.contains(&self.classify(file_name).name)
    }

    /// Look up a language by name, falling back to "Unknown".
    pub fn language_by_name(&self, name: &str) -> &Language {
        self.languages
            .iter()
            .find(|l| l.name == name)
            .unwrap_or(&self.languages[self.unknown])
    }

    /// All configured languages, including the appended fallback.
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }
}

/// Extension of a file name: substring from the final '.' inclusive, or "".
fn file_extension(name: &str) -> &str {
    name.rfind('.').map(|i| &name[i..]).unwrap_or("")
}
