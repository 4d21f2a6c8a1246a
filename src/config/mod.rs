//! Configuration module for the Sharek booking core.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::models::Language;

/// Delay that stands in for network latency when a booking is submitted.
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 2000;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file holding the persisted collections
    pub db_path: PathBuf,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Display language for generated text
    pub language: Language,
    /// Artificial wait before a submitted booking is shown as successful
    pub submit_delay: Duration,
    /// Seed an empty appointment list with one sample record
    pub seed_demo_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("./data/sharek.sqlite"),
            log_level: "info".to_string(),
            language: Language::En,
            submit_delay: Duration::from_millis(DEFAULT_SUBMIT_DELAY_MS),
            seed_demo_data: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let db_path = lookup("SHAREK_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.db_path);

        let log_level = lookup("SHAREK_LOG_LEVEL").unwrap_or(defaults.log_level);

        let language = match lookup("SHAREK_LANGUAGE") {
            Some(code) => Language::from_code(&code).unwrap_or_else(|| {
                tracing::warn!("Unknown SHAREK_LANGUAGE {:?}, using en", code);
                defaults.language
            }),
            None => defaults.language,
        };

        let submit_delay = parse_or("SHAREK_SUBMIT_DELAY_MS", lookup("SHAREK_SUBMIT_DELAY_MS"))
            .map(Duration::from_millis)
            .unwrap_or(defaults.submit_delay);

        let seed_demo_data = parse_or("SHAREK_SEED_DEMO_DATA", lookup("SHAREK_SEED_DEMO_DATA"))
            .unwrap_or(defaults.seed_demo_data);

        Self {
            db_path,
            log_level,
            language,
            submit_delay,
            seed_demo_data,
        }
    }
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>) -> Option<T> {
    let raw = raw?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Invalid {} value {:?}, using default", key, raw);
            None
        }
    }
}
