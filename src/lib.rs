//! Localization engine for the pet-adoption assistant.
//!
//! The chat front-end, agents and data scripts consume this crate through
//! [`i18n::Resolver`]: one resolver per user session over a shared,
//! immutable [`i18n::Catalog`].

pub mod config;
pub mod i18n;
