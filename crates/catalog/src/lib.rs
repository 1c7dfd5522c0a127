pub mod provider;
pub mod tmdb;

use thiserror::Error;

/// Errors surfaced by the remote catalog. Nothing is handled here: retry
/// policy belongs to the caller.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("empty response body")]
    NoData,
    #[error("network error: {0}")]
    Network(String),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("unknown genre: {0}")]
    InvalidGenre(String),
}
