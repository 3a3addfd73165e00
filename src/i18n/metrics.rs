//! Lookup metrics and observability module.
//!
//! Tracks which fallback tier resolved each message lookup, how many keys
//! were missing everywhere, and how often a requested language had to be
//! replaced by a fallback.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Lookup counters, shared process-wide through [`LookupMetrics::global`].
#[derive(Debug, Default)]
pub struct LookupMetrics {
    /// Keys found in the session's current language
    current_hits: AtomicUsize,

    /// Keys found only in the default language
    default_hits: AtomicUsize,

    /// Keys found only in the `en` catalog
    english_hits: AtomicUsize,

    /// Keys found nowhere
    misses: AtomicUsize,

    /// Language requests that could not be matched to a catalog
    lang_fallbacks: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<LookupMetrics> = OnceLock::new();

impl LookupMetrics {
    /// Create a standalone set of counters, all zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the global lookup metrics instance.
    pub fn global() -> &'static LookupMetrics {
        METRICS.get_or_init(LookupMetrics::new)
    }

    pub fn record_current_hit(&self) {
        self.current_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_default_hit(&self) {
        self.default_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_english_hit(&self) {
        self.english_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_lang_fallback(&self) {
        self.lang_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let current_hits = self.current_hits.load(Ordering::Relaxed);
        let default_hits = self.default_hits.load(Ordering::Relaxed);
        let english_hits = self.english_hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);

        let lookups = current_hits + default_hits + english_hits + misses;
        let fallback_rate = if lookups > 0 {
            ((default_hits + english_hits) as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups,
            current_hits,
            default_hits,
            english_hits,
            misses,
            fallback_rate,
            lang_fallbacks: self.lang_fallbacks.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.current_hits.store(0, Ordering::Relaxed);
        self.default_hits.store(0, Ordering::Relaxed);
        self.english_hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.lang_fallbacks.store(0, Ordering::Relaxed);
    }
}

/// Snapshot of the lookup counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Total `get_message` calls
    pub lookups: usize,

    pub current_hits: usize,
    pub default_hits: usize,
    pub english_hits: usize,
    pub misses: usize,

    /// Share of lookups answered by the default or `en` catalog (0-100)
    pub fallback_rate: f64,

    pub lang_fallbacks: usize,
}
