//! Internationalization (i18n) module for multi-language support.
//!
//! Message catalogs live on disk as `<root>/<language>/messages.json` and are
//! loaded once into an immutable [`Catalog`]. Each user session then gets its
//! own [`Resolver`], which tracks the current and default language and
//! resolves message keys with fallback.
//!
//! # Architecture
//!
//! - `catalog`: Directory scan, JSON parsing and read-only lookup tables
//! - `resolver`: Per-session language state, prefix matching and key lookup
//! - `registry`: Display names for the languages offered in the UI selector
//! - `selection`: Applies a language-selector choice to a resolver
//! - `validator`: Catalog coverage and placeholder consistency checks
//! - `metrics`: Lookup observability counters
//!
//! # Example
//!
//! ```rust,ignore
//! use pet_adoption_i18n::i18n::Resolver;
//!
//! let mut i18n = Resolver::new("zh-TW", "en", "./_locales")?;
//! let placeholder = i18n.t("pets.chat.input_placeholder")?;
//! i18n.set_lang("en-US");
//! ```

mod catalog;
mod error;
mod metrics;
mod registry;
mod resolver;
mod selection;
mod validator;

pub use catalog::{Catalog, MessageEntry, Messages, CATALOG_FILE_NAME};
pub use error::I18nError;
pub use metrics::{LookupMetrics, MetricsReport};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use resolver::{
    DefaultLangOutcome, Resolver, SetLangOutcome, DEFAULT_CATALOG_ROOT, FALLBACK_LANG,
};
pub use selection::{apply_selection, LanguageSelection, BROWSER_DEFAULT};
pub use validator::{CatalogValidator, ValidationReport};

/// Shorthand for [`Resolver::get_message`].
///
/// `tr!(i18n, "spinner.loading")` reads like the call sites in the UI layer
/// and evaluates to `Result<&str, I18nError>`.
#[macro_export]
macro_rules! tr {
    ($resolver:expr, $key:expr) => {
        $resolver.get_message($key)
    };
}
