//! Flight reference-name cache.
//!
//! Resolves airline carrier codes and airport IATA codes to display names,
//! keeping every answer in a persistent JSON cache so the rate-limited
//! reference-data API is asked about each code only once.

pub mod cache;
pub mod cli;
pub mod config;
pub mod domain;
pub mod fallback;
pub mod provider;
pub mod store;
