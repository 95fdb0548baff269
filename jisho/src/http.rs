//! HTTP features

use crate::config::HttpConfig;
use crate::{Error, consts};

/// Returns an HTTP client builder configured from `config`.
#[must_use]
pub fn builder(config: &HttpConfig) -> reqwest::ClientBuilder {
    reqwest::ClientBuilder::new()
        .gzip(true)
        .redirect(reqwest::redirect::Policy::limited(consts::HTTP_MAX_REDIRECTS))
        .timeout(config.timeout)
        .user_agent(&config.user_agent)
}

/// Builds a dictionary client that sends its requests to `config.base_url`.
///
/// # Errors
///
/// Returns [`Error::HttpClient`] if the underlying HTTP client fails to build.
pub fn build_client(config: &HttpConfig) -> Result<weblio::Client, Error> {
    let client = builder(config).build().map_err(Error::HttpClient)?;

    Ok(weblio::Client::with_client(client).with_base_url(config.base_url.as_str()))
}
