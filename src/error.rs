//! file: error.rs
//! author: Jacob Xie
//! date: 2025/12/20 11:02:17 Saturday
//! brief: shared error types

use thiserror::Error;

/// Errors emitted while pulling countries from a `CountrySource`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    #[error("country directory returned status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("country directory response is not a JSON array")]
    NotAnArray,
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by the quiz state machine.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no country with a known capital to play")]
    NoPlayableCountries,
}
