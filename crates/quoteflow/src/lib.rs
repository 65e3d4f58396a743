//! Core engines for the agency website: the interactive quote builder and the
//! marketing self-assessment.
//!
//! Everything price- or score-shaped lives here as pure functions over static
//! catalog/question data, with storage and CRM integrations hidden behind traits
//! so the HTTP service and tests can supply their own adapters.

pub mod config;
pub mod error;
pub mod flows;
pub mod i18n;
pub mod telemetry;
