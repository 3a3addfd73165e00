use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::i18n::{Resolver, DEFAULT_CATALOG_ROOT, FALLBACK_LANG};

#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory scanned for `<lang>/messages.json`
    pub locales_dir: PathBuf,

    pub default_lang: String,

    /// Initial language; defaults to `default_lang`
    pub lang: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let default_lang =
            std::env::var("I18N_DEFAULT_LANG").unwrap_or_else(|_| FALLBACK_LANG.to_string());

        Ok(Self {
            locales_dir: std::env::var("I18N_LOCALES_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_CATALOG_ROOT)),
            lang: std::env::var("I18N_LANG").unwrap_or_else(|_| default_lang.clone()),
            default_lang,
        })
    }

    /// Load the catalogs and build the initial resolver.
    pub fn build_resolver(&self) -> Result<Resolver> {
        Resolver::new(&self.lang, &self.default_lang, &self.locales_dir).with_context(|| {
            format!(
                "Failed to load translation catalogs from {}",
                self.locales_dir.display()
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn clear_env() {
        std::env::remove_var("I18N_LOCALES_DIR");
        std::env::remove_var("I18N_DEFAULT_LANG");
        std::env::remove_var("I18N_LANG");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env().expect("Should load");
        assert_eq!(config.locales_dir, PathBuf::from("./_locales"));
        assert_eq!(config.default_lang, "en");
        assert_eq!(config.lang, "en");
    }

    #[test]
    #[serial]
    fn test_from_env_lang_defaults_to_default_lang() {
        clear_env();
        std::env::set_var("I18N_DEFAULT_LANG", "zh-TW");

        let config = Config::from_env().expect("Should load");
        assert_eq!(config.default_lang, "zh-TW");
        assert_eq!(config.lang, "zh-TW");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("I18N_LOCALES_DIR", "/srv/locales");
        std::env::set_var("I18N_DEFAULT_LANG", "en");
        std::env::set_var("I18N_LANG", "zh-CN");

        let config = Config::from_env().expect("Should load");
        assert_eq!(config.locales_dir, PathBuf::from("/srv/locales"));
        assert_eq!(config.lang, "zh-CN");

        clear_env();
    }

    #[test]
    fn test_build_resolver_reports_locales_dir() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config = Config {
            locales_dir: temp_dir.path().to_path_buf(),
            default_lang: "en".to_string(),
            lang: "en".to_string(),
        };

        let err = config.build_resolver().unwrap_err();
        assert!(err
            .to_string()
            .contains("Failed to load translation catalogs"));
        assert!(err.chain().any(|cause| cause
            .to_string()
            .contains("could not find any translation files")));
    }
}
