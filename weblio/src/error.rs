use thiserror::Error;

/// Error.
#[derive(Debug, Error)]
pub enum Error {
    #[cfg(feature = "client")]
    #[error("could not construct http client: {0}")]
    BuildClient(#[source] reqwest::Error),
    #[cfg(feature = "client")]
    #[error("request error: {0}")]
    Request(#[source] reqwest::Error),
    #[error("unknown dictionary: {0}")]
    UnknownDictionary(String),
}
