//! Per-session language state and message resolution.
//!
//! A [`Resolver`] pairs a shared, read-only [`Catalog`] with two mutable
//! fields: the current language and the default language. Sessions never
//! share a resolver; they share the catalog behind an `Arc` and each own
//! their language state, so a language change in one session cannot leak
//! into another.

use std::path::Path;
use std::sync::Arc;

use tracing::warn;

use crate::i18n::{Catalog, I18nError, LookupMetrics};

/// Last-resort language, consulted after the current and default languages.
pub const FALLBACK_LANG: &str = "en";

/// Conventional catalog root, relative to the working directory.
pub const DEFAULT_CATALOG_ROOT: &str = "./_locales";

/// Result of [`Resolver::set_lang`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetLangOutcome {
    /// The requested code matched this catalog language.
    Resolved(String),

    /// Nothing matched; the current language was reset to the default.
    FellBackToDefault { requested: String, resolved: String },
}

impl SetLangOutcome {
    /// The language that is now current.
    pub fn resolved(&self) -> &str {
        match self {
            Self::Resolved(lang) => lang,
            Self::FellBackToDefault { resolved, .. } => resolved,
        }
    }

    /// True when the requested code was not loaded.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::FellBackToDefault { .. })
    }
}

/// Result of [`Resolver::set_default_lang`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultLangOutcome {
    /// The requested code matched this catalog language.
    Resolved(String),

    /// Nothing matched; the default language is now [`FALLBACK_LANG`].
    FellBackToEnglish { requested: String },
}

impl DefaultLangOutcome {
    /// The language that is now the default.
    pub fn resolved(&self) -> &str {
        match self {
            Self::Resolved(lang) => lang,
            Self::FellBackToEnglish { .. } => FALLBACK_LANG,
        }
    }

    /// True when the requested code was not loaded.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::FellBackToEnglish { .. })
    }
}

/// Resolves message keys for one session.
///
/// Both `lang` and `default_lang` always hold either a loaded catalog
/// language or [`FALLBACK_LANG`]. Cloning is cheap: the catalog is shared.
#[derive(Debug, Clone)]
pub struct Resolver {
    catalog: Arc<Catalog>,
    lang: String,
    default_lang: String,
}

impl Resolver {
    /// Load catalogs from `catalog_root` and build a resolver.
    ///
    /// # Errors
    /// Fails if no catalog can be found or a catalog file is unreadable.
    /// See [`Catalog::load`].
    pub fn new(
        lang: &str,
        default_lang: &str,
        catalog_root: impl AsRef<Path>,
    ) -> Result<Self, I18nError> {
        let catalog = Catalog::load(catalog_root)?;
        Ok(Self::with_catalog(Arc::new(catalog), lang, default_lang))
    }

    /// Build a resolver over an already loaded catalog.
    ///
    /// The default language is established first, since an unresolvable
    /// `lang` falls back to it.
    pub fn with_catalog(catalog: Arc<Catalog>, lang: &str, default_lang: &str) -> Self {
        let mut resolver = Self {
            catalog,
            lang: FALLBACK_LANG.to_string(),
            default_lang: FALLBACK_LANG.to_string(),
        };
        resolver.set_default_lang(default_lang);
        resolver.set_lang(lang);
        resolver
    }

    /// Current language code.
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Default language code.
    pub fn default_lang(&self) -> &str {
        &self.default_lang
    }

    /// The shared catalog this resolver reads from.
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Every loaded language code, ascending.
    pub fn get_valid_languages(&self) -> Vec<&str> {
        self.catalog.languages()
    }

    pub fn is_valid_lang(&self, code: &str) -> bool {
        self.match_lang(code).is_some()
    }

    /// Match a requested code against the loaded languages by prefix.
    ///
    /// `"zh-TW"` matches a loaded `"zh"`, `"en-US"` matches `"en"`. When
    /// several loaded codes are prefixes, the lexicographically greatest
    /// wins, which picks the more specific code for the usual
    /// `lang` / `lang-REGION` pairs.
    pub fn match_lang(&self, code: &str) -> Option<&str> {
        self.catalog
            .languages()
            .into_iter()
            .filter(|loaded| code.starts_with(*loaded))
            .max()
    }

    /// Switch the current language.
    ///
    /// An unresolvable code never fails: the current language is reset to
    /// the default language and a warning is logged.
    pub fn set_lang(&mut self, code: &str) -> SetLangOutcome {
        match self.match_lang(code).map(str::to_string) {
            Some(matched) => {
                self.lang = matched.clone();
                SetLangOutcome::Resolved(matched)
            }
            None => {
                self.set_to_default_lang();
                LookupMetrics::global().record_lang_fallback();
                warn!(
                    "Invalid language '{}' specified. Falling back to default language '{}'.",
                    code, self.default_lang
                );
                SetLangOutcome::FellBackToDefault {
                    requested: code.to_string(),
                    resolved: self.default_lang.clone(),
                }
            }
        }
    }

    /// Switch the default language.
    ///
    /// A resolvable code stores the matched catalog language. Anything else
    /// stores [`FALLBACK_LANG`], even when no `en` catalog is loaded; lookups
    /// then fail per key rather than here.
    pub fn set_default_lang(&mut self, code: &str) -> DefaultLangOutcome {
        match self.match_lang(code).map(str::to_string) {
            Some(matched) => {
                self.default_lang = matched.clone();
                DefaultLangOutcome::Resolved(matched)
            }
            None => {
                self.default_lang = FALLBACK_LANG.to_string();
                LookupMetrics::global().record_lang_fallback();
                warn!(
                    "Invalid default language '{}' specified. Falling back to '{}'.",
                    code, FALLBACK_LANG
                );
                DefaultLangOutcome::FellBackToEnglish {
                    requested: code.to_string(),
                }
            }
        }
    }

    /// Reset the current language to the default language.
    pub fn set_to_default_lang(&mut self) {
        self.lang = self.default_lang.clone();
    }

    /// Look up `key` in the current, default and `en` catalogs, in that order.
    ///
    /// # Errors
    /// [`I18nError::TranslationMissing`] when none of the three holds a
    /// non-empty message for `key`.
    pub fn get_message(&self, key: &str) -> Result<&str, I18nError> {
        let metrics = LookupMetrics::global();

        if let Some(message) = self.catalog.lookup(&self.lang, key) {
            metrics.record_current_hit();
            return Ok(message);
        }
        if let Some(message) = self.catalog.lookup(&self.default_lang, key) {
            metrics.record_default_hit();
            return Ok(message);
        }
        if let Some(message) = self.catalog.lookup(FALLBACK_LANG, key) {
            metrics.record_english_hit();
            return Ok(message);
        }

        metrics.record_miss();
        Err(I18nError::TranslationMissing {
            key: key.to_string(),
            lang: self.lang.clone(),
            default_lang: self.default_lang.clone(),
        })
    }

    /// Shorthand for [`Resolver::get_message`].
    pub fn t(&self, key: &str) -> Result<&str, I18nError> {
        self.get_message(key)
    }

    /// Like [`Resolver::get_message`], but renders the key itself when no
    /// translation exists.
    pub fn get_message_or_key<'a>(&'a self, key: &'a str) -> &'a str {
        match self.get_message(key) {
            Ok(message) => message,
            Err(e) => {
                warn!("{}", e);
                key
            }
        }
    }
}
