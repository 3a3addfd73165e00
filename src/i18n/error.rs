use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading catalogs or resolving messages.
#[derive(Debug, Error)]
pub enum I18nError {
    /// No `messages.json` was found anywhere under the catalog root.
    ///
    /// This is a startup misconfiguration and is not recoverable locally.
    #[error("could not find any translation files in {}", .path.display())]
    Configuration { path: PathBuf },

    /// A catalog file exists but could not be read.
    #[error("failed to read translation file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A catalog file is not a valid `{ key: { "message": ... } }` object.
    #[error("failed to parse translation file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The key is absent from the current, default and `en` catalogs.
    #[error(
        "missing translation for key: {key} (lang: {lang}, default_lang: {default_lang}, 'en')"
    )]
    TranslationMissing {
        key: String,
        lang: String,
        default_lang: String,
    },
}

impl I18nError {
    /// True for failures that should abort startup.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Configuration { .. } | Self::Io { .. } | Self::Parse { .. }
        )
    }
}
