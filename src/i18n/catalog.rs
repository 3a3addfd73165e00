//! Message catalogs loaded from a directory tree.
//!
//! Layout on disk is `<root>/<language>/messages.json`, where each file is a
//! JSON object of `{ "<key>": { "message": "<text>", ... } }`. The directory's
//! own name is taken verbatim as the language code.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::i18n::I18nError;

/// File name recognized as a catalog inside a language directory.
pub const CATALOG_FILE_NAME: &str = "messages.json";

/// A single localized message.
///
/// Extra metadata fields in the JSON record are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MessageEntry {
    /// The localized text. An empty string counts as "not translated".
    #[serde(default)]
    pub message: String,

    /// Optional note for translators
    #[serde(default)]
    pub description: Option<String>,
}

impl MessageEntry {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            description: None,
        }
    }
}

/// All messages of one language, keyed by message key.
pub type Messages = HashMap<String, MessageEntry>;

/// Immutable language → key → message table.
///
/// Built once at startup and shared read-only (typically behind an `Arc`)
/// between every session's resolver.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    languages: BTreeMap<String, Messages>,
}

impl Catalog {
    /// Scan `root` recursively and load every `messages.json` found.
    ///
    /// # Errors
    /// * [`I18nError::Configuration`] if no catalog file exists under `root`
    /// * [`I18nError::Io`] / [`I18nError::Parse`] if a catalog file is unreadable
    pub fn load(root: impl AsRef<Path>) -> Result<Self, I18nError> {
        let root = root.as_ref();
        let mut languages = BTreeMap::new();
        scan_dir(root, &mut languages)?;

        if languages.is_empty() {
            return Err(I18nError::Configuration {
                path: root.to_path_buf(),
            });
        }

        info!(
            "Loaded {} translation catalogs from {}: {:?}",
            languages.len(),
            root.display(),
            languages.keys().collect::<Vec<_>>()
        );

        Ok(Self { languages })
    }

    /// Build a catalog from in-memory tables.
    ///
    /// Unlike [`Catalog::load`] this accepts an empty input; resolvers built
    /// over an empty catalog fail every lookup.
    pub fn from_languages<I, L>(languages: I) -> Self
    where
        I: IntoIterator<Item = (L, Messages)>,
        L: Into<String>,
    {
        Self {
            languages: languages
                .into_iter()
                .map(|(code, messages)| (code.into(), messages))
                .collect(),
        }
    }

    /// Loaded language codes in ascending order.
    pub fn languages(&self) -> Vec<&str> {
        self.languages.keys().map(String::as_str).collect()
    }

    pub fn contains_language(&self, code: &str) -> bool {
        self.languages.contains_key(code)
    }

    /// All messages for a language, if it was loaded.
    pub fn messages(&self, code: &str) -> Option<&Messages> {
        self.languages.get(code)
    }

    /// The non-empty message stored for `(code, key)`.
    pub fn lookup(&self, code: &str, key: &str) -> Option<&str> {
        self.languages
            .get(code)
            .and_then(|messages| messages.get(key))
            .map(|entry| entry.message.as_str())
            .filter(|message| !message.is_empty())
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// Walk `dir` depth-first in name order, collecting catalogs.
///
/// Unreadable directories are skipped with a warning; an unreadable or
/// malformed catalog file is an error.
fn scan_dir(dir: &Path, languages: &mut BTreeMap<String, Messages>) -> Result<(), I18nError> {
    debug!("Checking {}...", dir.display());

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Skipping unreadable directory {}: {}", dir.display(), e);
            return Ok(());
        }
    };

    let mut subdirs: Vec<PathBuf> = Vec::new();
    let mut has_catalog = false;
    for entry in entries.flatten() {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            subdirs.push(entry.path());
        } else if entry.file_name() == CATALOG_FILE_NAME {
            has_catalog = true;
        }
    }

    if has_catalog {
        match language_code(dir) {
            Some(code) => {
                let messages = read_catalog_file(&dir.join(CATALOG_FILE_NAME))?;
                debug!("Loaded {} messages for '{}'", messages.len(), code);
                languages.insert(code, messages);
            }
            None => warn!(
                "Ignoring {} in {}: directory has no usable language name",
                CATALOG_FILE_NAME,
                dir.display()
            ),
        }
    }

    subdirs.sort();
    for subdir in subdirs {
        scan_dir(&subdir, languages)?;
    }

    Ok(())
}

/// Language code for a catalog directory: its base name.
///
/// Paths such as `.` or `en/..` have no base name of their own, so they are
/// canonicalized first.
fn language_code(dir: &Path) -> Option<String> {
    match dir.file_name() {
        Some(name) => name.to_str().map(str::to_string),
        None => fs::canonicalize(dir)
            .ok()?
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string),
    }
}

fn read_catalog_file(path: &Path) -> Result<Messages, I18nError> {
    let content = fs::read_to_string(path).map_err(|source| I18nError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| I18nError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
