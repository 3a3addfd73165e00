//! Language registry: display metadata for the languages offered in the UI.
//!
//! The catalog decides which languages can be *resolved*; this registry only
//! knows how to *label* the ones the language selector lists. It is a
//! process-wide singleton built on first access with `OnceLock`.

use std::sync::OnceLock;

/// Label returned for codes the registry does not know.
const UNKNOWN_LABEL: &str = "Unknown";

/// Display metadata for a selectable language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// Catalog language code (e.g., "en", "zh-TW")
    pub code: &'static str,

    /// English name of the language (e.g., "Traditional Chinese")
    pub name: &'static str,

    /// Name shown in the selector (e.g., "繁體中文")
    pub native_name: &'static str,

    /// Whether this is the canonical language every catalog is validated
    /// against; it must equal the resolver's last-resort language
    pub is_canonical: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its exact code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// All languages, in selector order.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Selector label for `code`, or `"Unknown"`.
    pub fn display_name(&self, code: &str) -> &'static str {
        self.get_by_code(code)
            .map(|lang| lang.native_name)
            .unwrap_or(UNKNOWN_LABEL)
    }

    /// Get the canonical language configuration.
    ///
    /// # Panics
    /// Panics if the registry does not define exactly one canonical language
    /// (this indicates a configuration error).
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.len() {
            0 => panic!("No canonical language found in registry"),
            1 => canonical_langs[0],
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }
}

fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_canonical: true,
        },
        LanguageConfig {
            code: "zh-TW",
            name: "Traditional Chinese",
            native_name: "繁體中文",
            is_canonical: false,
        },
        LanguageConfig {
            code: "zh-CN",
            name: "Simplified Chinese",
            native_name: "简体中文",
            is_canonical: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::FALLBACK_LANG;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_traditional_chinese() {
        let config = LanguageRegistry::get()
            .get_by_code("zh-TW")
            .expect("zh-TW should be registered");

        assert_eq!(config.name, "Traditional Chinese");
        assert_eq!(config.native_name, "繁體中文");
        assert!(!config.is_canonical);
    }

    #[test]
    fn test_get_by_code_is_exact() {
        let registry = LanguageRegistry::get();
        assert!(registry.get_by_code("zh").is_none());
        assert!(registry.get_by_code("en-US").is_none());
    }

    #[test]
    fn test_list_all_in_selector_order() {
        let codes: Vec<_> = LanguageRegistry::get()
            .list_all()
            .iter()
            .map(|lang| lang.code)
            .collect();
        assert_eq!(codes, vec!["en", "zh-TW", "zh-CN"]);
    }

    #[test]
    fn test_display_name() {
        let registry = LanguageRegistry::get();
        assert_eq!(registry.display_name("en"), "English");
        assert_eq!(registry.display_name("zh-CN"), "简体中文");
        assert_eq!(registry.display_name("ja"), "Unknown");
    }

    #[test]
    fn test_canonical_is_resolver_fallback() {
        let canonical = LanguageRegistry::get().canonical();
        assert_eq!(canonical.code, FALLBACK_LANG);
        assert_eq!(canonical.name, "English");
    }
}
