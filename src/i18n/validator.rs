//! Catalog quality validation module.
//!
//! Compares every loaded language against the registry's canonical catalog
//! (`en`), which is the last fallback for every lookup. A key that `en` lacks
//! can fail at runtime, so it is an error. A key that another language lacks
//! only degrades to a fallback, so it is a warning.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::i18n::{Catalog, LanguageRegistry};

/// Validation report containing errors and warnings about a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that can surface as missing translations at runtime
    pub errors: Vec<String>,

    /// Gaps that are covered by fallback but worth fixing
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for catalog coverage and consistency.
pub struct CatalogValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl CatalogValidator {
    /// Validate every language in `catalog` against the canonical language.
    ///
    /// Checks that:
    /// - the canonical catalog is loaded
    /// - no language has keys the canonical catalog lacks
    /// - every canonical key exists in every language
    /// - no message is empty
    /// - `{placeholder}` names match the canonical message
    pub fn validate(catalog: &Catalog) -> ValidationReport {
        let mut report = ValidationReport::new();
        let canonical_code = LanguageRegistry::get().canonical().code;

        let Some(canonical) = catalog.messages(canonical_code) else {
            report.errors.push(format!(
                "Canonical language '{}' is not loaded; keys missing from the \
                 current and default language cannot resolve",
                canonical_code
            ));
            return report;
        };

        let canonical_keys: BTreeSet<&str> = canonical.keys().map(String::as_str).collect();

        for code in catalog.languages() {
            let Some(messages) = catalog.messages(code) else {
                continue;
            };
            let keys: BTreeSet<&str> = messages.keys().map(String::as_str).collect();

            let mut empty: Vec<&str> = messages
                .iter()
                .filter(|(_, entry)| entry.message.is_empty())
                .map(|(key, _)| key.as_str())
                .collect();
            empty.sort_unstable();
            if !empty.is_empty() {
                report
                    .warnings
                    .push(format!("[{}] Empty messages: {:?}", code, empty));
            }

            if code == canonical_code {
                continue;
            }

            let extra: Vec<&str> = keys.difference(&canonical_keys).copied().collect();
            if !extra.is_empty() {
                report.errors.push(format!(
                    "[{}] Keys missing from canonical '{}': {:?}",
                    code, canonical_code, extra
                ));
            }

            let missing: Vec<&str> = canonical_keys.difference(&keys).copied().collect();
            if !missing.is_empty() {
                report
                    .warnings
                    .push(format!("[{}] Untranslated keys: {:?}", code, missing));
            }

            for key in keys.intersection(&canonical_keys) {
                let expected = Self::extract_placeholders(&canonical[*key].message);
                let actual = Self::extract_placeholders(&messages[*key].message);
                if expected != actual {
                    report.warnings.push(format!(
                        "[{}] Placeholder mismatch for '{}': canonical has {:?}, \
                         translation has {:?}",
                        code, key, expected, actual
                    ));
                }
            }
        }

        report
    }

    /// Extract `{name}` placeholders, sorted and deduplicated
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex =
            PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{([a-zA-Z0-9_]+)\}").unwrap());

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}
