use thiserror::Error;

/// Failures of the fallible setup paths. Catalog queries, renames and lookups
/// report absence and failure in their return values instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}
