//! Language selector handling.
//!
//! The UI offers a fixed list of languages plus a `browser_default` entry
//! that follows the visitor's browser locale. Choosing an entry updates the
//! session's resolver.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::i18n::{LanguageRegistry, Resolver, SetLangOutcome, FALLBACK_LANG};

/// Selector value meaning "follow the browser locale".
pub const BROWSER_DEFAULT: &str = "browser_default";

/// One entry of the language selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LanguageSelection {
    /// Follow the browser locale, or `en` if the browser sent none
    #[default]
    BrowserDefault,

    /// A specific language code
    Explicit(String),
}

impl LanguageSelection {
    /// Entries offered by the selector, in display order.
    pub fn options() -> Vec<LanguageSelection> {
        std::iter::once(LanguageSelection::BrowserDefault)
            .chain(
                LanguageRegistry::get()
                    .list_all()
                    .into_iter()
                    .map(|lang| LanguageSelection::Explicit(lang.code.to_string())),
            )
            .collect()
    }

    /// Selector value as stored in session state.
    pub fn code(&self) -> &str {
        match self {
            Self::BrowserDefault => BROWSER_DEFAULT,
            Self::Explicit(code) => code,
        }
    }

    /// Label shown in the selector.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::BrowserDefault => "Browser Default",
            Self::Explicit(code) => LanguageRegistry::get().display_name(code),
        }
    }
}

impl FromStr for LanguageSelection {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            BROWSER_DEFAULT => Self::BrowserDefault,
            code => Self::Explicit(code.to_string()),
        })
    }
}

impl fmt::Display for LanguageSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Apply a selector choice to a session's resolver.
///
/// `BrowserDefault` makes the browser locale (or `en`) the default language
/// and switches to it. An explicit choice goes through
/// [`Resolver::set_lang`], so an unsupported code lands on the default.
pub fn apply_selection(
    resolver: &mut Resolver,
    selection: &LanguageSelection,
    browser_locale: Option<&str>,
) -> SetLangOutcome {
    match selection {
        LanguageSelection::BrowserDefault => {
            let locale = browser_locale
                .filter(|locale| !locale.is_empty())
                .unwrap_or(FALLBACK_LANG);
            debug!("Browser default language: {}", locale);
            resolver.set_default_lang(locale);
            resolver.set_to_default_lang();
            SetLangOutcome::Resolved(resolver.lang().to_string())
        }
        LanguageSelection::Explicit(code) => resolver.set_lang(code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Catalog, MessageEntry, Messages};
    use std::sync::Arc;

    fn resolver() -> Resolver {
        let catalog = Catalog::from_languages(["en", "zh-TW", "zh-CN"].map(|code| {
            let mut messages = Messages::new();
            messages.insert("k".to_string(), MessageEntry::new(format!("k in {code}")));
            (code, messages)
        }));
        Resolver::with_catalog(Arc::new(catalog), "en", "en")
    }

    // ==================== Parsing Tests ====================

    #[test]
    fn test_parse_browser_default() {
        let selection: LanguageSelection = "browser_default".parse().unwrap();
        assert_eq!(selection, LanguageSelection::BrowserDefault);
        assert_eq!(selection.to_string(), BROWSER_DEFAULT);
    }

    #[test]
    fn test_parse_explicit() {
        let selection: LanguageSelection = "zh-TW".parse().unwrap();
        assert_eq!(selection, LanguageSelection::Explicit("zh-TW".to_string()));
        assert_eq!(selection.display_name(), "繁體中文");
    }

    #[test]
    fn test_options_match_selector() {
        let codes: Vec<_> = LanguageSelection::options()
            .iter()
            .map(|s| s.code().to_string())
            .collect();
        assert_eq!(codes, vec!["browser_default", "en", "zh-TW", "zh-CN"]);
        assert_eq!(LanguageSelection::default().display_name(), "Browser Default");
    }

    #[test]
    fn test_unknown_code_display_name() {
        let selection = LanguageSelection::Explicit("ja".to_string());
        assert_eq!(selection.display_name(), "Unknown");
    }

    // ==================== apply_selection Tests ====================

    #[test]
    fn test_browser_default_follows_locale() {
        let mut resolver = resolver();
        let outcome = apply_selection(
            &mut resolver,
            &LanguageSelection::BrowserDefault,
            Some("zh-TW"),
        );

        assert_eq!(outcome.resolved(), "zh-TW");
        assert_eq!(resolver.default_lang(), "zh-TW");
        assert_eq!(resolver.get_message("k").unwrap(), "k in zh-TW");
    }

    #[test]
    fn test_browser_default_without_locale_uses_english() {
        let mut resolver = resolver();
        resolver.set_lang("zh-CN");

        apply_selection(&mut resolver, &LanguageSelection::BrowserDefault, None);
        assert_eq!(resolver.lang(), "en");

        apply_selection(&mut resolver, &LanguageSelection::BrowserDefault, Some(""));
        assert_eq!(resolver.lang(), "en");
    }

    #[test]
    fn test_browser_default_unsupported_locale_uses_english() {
        let mut resolver = resolver();
        apply_selection(&mut resolver, &LanguageSelection::BrowserDefault, Some("fr-FR"));

        assert_eq!(resolver.default_lang(), "en");
        assert_eq!(resolver.lang(), "en");
    }

    #[test]
    fn test_explicit_keeps_default() {
        let mut resolver = resolver();
        apply_selection(&mut resolver, &LanguageSelection::BrowserDefault, Some("zh-TW"));

        let outcome = apply_selection(
            &mut resolver,
            &LanguageSelection::Explicit("zh-CN".to_string()),
            Some("zh-TW"),
        );
        assert!(!outcome.is_fallback());
        assert_eq!(resolver.lang(), "zh-CN");
        assert_eq!(resolver.default_lang(), "zh-TW");
    }

    #[test]
    fn test_explicit_unsupported_falls_back() {
        let mut resolver = resolver();
        let outcome = apply_selection(
            &mut resolver,
            &LanguageSelection::Explicit("de".to_string()),
            None,
        );
        assert!(outcome.is_fallback());
        assert_eq!(resolver.lang(), resolver.default_lang());
    }
}
