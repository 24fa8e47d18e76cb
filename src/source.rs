//! file: source.rs
//! author: Jacob Xie
//! date: 2025/12/20 12:40:55 Saturday
//! brief: country directory adapters

use std::{sync::Arc, time::Duration};

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::{
    config::QuizConfig,
    error::FetchError,
    game::{Country, UNKNOWN_CAPITAL},
};

/// Anything that can hand over a list of countries for a round.
///
/// Fetches run on a background thread, so implementations may block.
pub trait CountrySource: Send + Sync {
    fn fetch(&self) -> Result<Vec<Country>, FetchError>;
}

/// Picks the network directory or the built-in list, per `config.offline`.
pub fn source_from_config(config: &QuizConfig) -> Arc<dyn CountrySource> {
    if config.offline {
        Arc::new(StaticSource::builtin())
    } else {
        Arc::new(RestCountries::new(
            config.api_url.clone(),
            config.request_timeout,
        ))
    }
}

#[derive(Clone, Debug)]
pub struct RestCountries {
    url: String,
    timeout: Duration,
}

impl RestCountries {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }
}

impl CountrySource for RestCountries {
    fn fetch(&self) -> Result<Vec<Country>, FetchError> {
        info!(url = %self.url, "fetching countries");
        let client = Client::builder().timeout(self.timeout).build()?;
        let response = client.get(&self.url).send()?;

        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status()));
        }

        let body: Value = response.json()?;
        let countries = normalize(body)?;
        info!(countries = countries.len(), "fetched countries");
        Ok(countries)
    }
}

#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    countries: Vec<Country>,
}

impl StaticSource {
    pub fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }

    pub fn builtin() -> Self {
        let countries = [
            ("France", "Paris"),
            ("Japan", "Tokyo"),
            ("Kenya", "Nairobi"),
            ("Peru", "Lima"),
            ("Canada", "Ottawa"),
            ("Chile", "Santiago"),
            ("Egypt", "Cairo"),
            ("Norway", "Oslo"),
            ("Vietnam", "Hanoi"),
            ("Australia", "Canberra"),
            ("Morocco", "Rabat"),
            ("Portugal", "Lisbon"),
            ("Mongolia", "Ulaanbaatar"),
            ("Ghana", "Accra"),
            ("Uruguay", "Montevideo"),
            ("Antarctica", UNKNOWN_CAPITAL),
        ]
        .into_iter()
        .map(|(name, capital)| Country::new(name, capital))
        .collect();
        Self::new(countries)
    }
}

impl CountrySource for StaticSource {
    fn fetch(&self) -> Result<Vec<Country>, FetchError> {
        Ok(self.countries.clone())
    }
}

#[derive(Debug, Deserialize)]
struct CountryRecord {
    name: RecordName,
    #[serde(default)]
    capital: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct RecordName {
    common: String,
}

impl CountryRecord {
    fn into_country(self) -> Option<Country> {
        let name = self.name.common.trim();
        if name.is_empty() {
            return None;
        }
        let capital = self
            .capital
            .unwrap_or_default()
            .into_iter()
            .next()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| UNKNOWN_CAPITAL.to_string());
        Some(Country::new(name, capital))
    }
}

/// Turns a directory response into countries.
///
/// Each record is decoded on its own so one malformed entry only drops
/// itself. A missing capital becomes `UNKNOWN_CAPITAL`.
pub fn normalize(body: Value) -> Result<Vec<Country>, FetchError> {
    let Value::Array(records) = body else {
        return Err(FetchError::NotAnArray);
    };

    Ok(records
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<CountryRecord>(record) {
            Ok(record) => record.into_country(),
            Err(err) => {
                debug!(error = %err, "dropping malformed country record");
                None
            }
        })
        .collect())
}
