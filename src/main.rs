//! Catalog check binary - loads the translation catalogs the way the app does
//! at startup, reports coverage problems, and resolves the given keys.
//!
//! Usage:
//!   cargo run --bin i18n-check                              # Validate catalogs
//!   cargo run --bin i18n-check -- pets.chat.page_title      # Also resolve keys
//!
//! Optional environment variables:
//! - I18N_LOCALES_DIR (defaults to ./_locales)
//! - I18N_DEFAULT_LANG (defaults to en)
//! - I18N_LANG (defaults to I18N_DEFAULT_LANG)

use anyhow::Result;
use tracing::{error, info, warn};

use pet_adoption_i18n::config::Config;
use pet_adoption_i18n::i18n::{CatalogValidator, LanguageRegistry, LookupMetrics};

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pet_adoption_i18n=info".parse()?)
                .add_directive("i18n_check=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let resolver = config.build_resolver()?;

    let registry = LanguageRegistry::get();
    for code in resolver.get_valid_languages() {
        match registry.get_by_code(code) {
            Some(lang) => info!(
                "Available language: {} ({}, {})",
                code, lang.name, lang.native_name
            ),
            None => info!("Available language: {} (not in selector)", code),
        }
    }
    info!(
        "Current language: {}, default language: {}",
        resolver.lang(),
        resolver.default_lang()
    );

    let report = CatalogValidator::validate(resolver.catalog());
    for warning in &report.warnings {
        warn!("{}", warning);
    }
    for problem in &report.errors {
        error!("{}", problem);
    }

    let mut missing = 0usize;
    for key in std::env::args().skip(1) {
        match resolver.get_message(&key) {
            Ok(message) => println!("{}\t{}", key, message),
            Err(e) => {
                warn!("{}", e);
                missing += 1;
            }
        }
    }

    info!(
        "Lookup metrics: {}",
        serde_json::to_string(&LookupMetrics::global().report())?
    );

    if report.has_errors() || missing > 0 {
        anyhow::bail!(
            "{} catalog errors, {} missing translations",
            report.errors.len(),
            missing
        );
    }

    info!("Catalogs OK");
    Ok(())
}
