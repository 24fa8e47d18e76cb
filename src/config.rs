//! file: config.rs
//! author: Jacob Xie
//! date: 2025/12/20 12:14:09 Saturday
//! brief: runtime settings read from the environment

use std::{env, str::FromStr, time::Duration};

use tracing::warn;

use crate::game::DEFAULT_PAIR_COUNT;

pub const DEFAULT_API_URL: &str = "https://restcountries.com/v3.1/all?fields=name,capital";
const DEFAULT_MISMATCH_MS: u64 = 1000;
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizConfig {
    pub api_url: String,
    pub pair_count: usize,
    pub mismatch_delay: Duration,
    pub request_timeout: Duration,
    pub offline: bool,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            pair_count: DEFAULT_PAIR_COUNT,
            mismatch_delay: Duration::from_millis(DEFAULT_MISMATCH_MS),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            offline: false,
        }
    }
}

impl QuizConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from `lookup`, keeping defaults for absent or
    /// unparsable keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(v) = lookup("CAPITALS_API_URL").filter(|v| !v.trim().is_empty()) {
            config.api_url = v.trim().to_string();
        }
        if let Some(pairs) = parse_var::<usize>(&lookup, "CAPITALS_PAIRS") {
            config.pair_count = pairs.max(1);
        }
        if let Some(ms) = parse_var::<u64>(&lookup, "CAPITALS_MISMATCH_MS") {
            config.mismatch_delay = Duration::from_millis(ms);
        }
        if let Some(secs) = parse_var::<u64>(&lookup, "CAPITALS_TIMEOUT_SECS") {
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(v) = lookup("CAPITALS_OFFLINE") {
            config.offline = matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }

        config
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparsable setting");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_overrides() {
        let config = QuizConfig::from_lookup(|_| None);
        assert_eq!(config, QuizConfig::default());
        assert_eq!(config.pair_count, 5);
        assert_eq!(config.mismatch_delay, Duration::from_secs(1));
        assert!(!config.offline);
    }

    #[test]
    fn reads_overrides() {
        let config = QuizConfig::from_lookup(lookup_from(&[
            ("CAPITALS_API_URL", " http://localhost:8080/all "),
            ("CAPITALS_PAIRS", "8"),
            ("CAPITALS_MISMATCH_MS", "250"),
            ("CAPITALS_TIMEOUT_SECS", "3"),
            ("CAPITALS_OFFLINE", "true"),
        ]));
        assert_eq!(config.api_url, "http://localhost:8080/all");
        assert_eq!(config.pair_count, 8);
        assert_eq!(config.mismatch_delay, Duration::from_millis(250));
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert!(config.offline);
    }

    #[test]
    fn bad_values_fall_back_to_defaults() {
        let config = QuizConfig::from_lookup(lookup_from(&[
            ("CAPITALS_API_URL", "   "),
            ("CAPITALS_PAIRS", "lots"),
            ("CAPITALS_MISMATCH_MS", "-5"),
        ]));
        assert_eq!(config, QuizConfig::default());
    }

    #[test]
    fn zero_pairs_is_clamped() {
        let config = QuizConfig::from_lookup(lookup_from(&[("CAPITALS_PAIRS", "0")]));
        assert_eq!(config.pair_count, 1);
    }
}
