//! A client for fetching result pages from weblio.jp.
//!
//! This module provides a high-level async interface for requesting the page of a search term and
//! parsing it into a [`Document`].

use std::time::Duration;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::{ClientBuilder, redirect::Policy};
use tracing::{debug, trace};

use crate::{Document, Error};

/// The base URL of the dictionary's service.
pub const BASE_URL: &str = "https://www.weblio.jp";
/// The relative path of the content pages.
const CONTENT_PATH: &str = "/content/";
/// Characters that are percent-encoded in a search term. Only the unreserved characters of
/// RFC 3986 are left as is.
const TERM_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// An asynchronous client for weblio.jp.
///
/// This client handles the construction of request URLs, sending them to weblio and returning
/// the raw or parsed HTML response.
#[derive(Debug)]
pub struct Client {
    /// The base URL of the service endpoint.
    base_url: String,
    /// The underlying [`reqwest::Client`] used for making HTTP requests.
    client: reqwest::Client,
}

impl Client {
    /// Constructs a new `Client` with default settings.
    ///
    /// This method provides a convenient way to create a client. It configures default gzip
    /// support, a 30-second timeout, and follows at most five redirects.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be built. This can happen in environments with
    /// misconfigured network or TLS dependencies. For a non-panicking version, see
    /// [`Client::try_new`].
    #[must_use]
    pub fn new() -> Client {
        Client::try_new().expect("could not construct http client")
    }

    /// Attempts to construct a new `Client` with default settings.
    ///
    /// This is the fallible version of [`Client::new`].
    ///
    /// # Errors
    ///
    /// Returns an [`Error::BuildClient`] if the underlying `reqwest` client fails to build. See
    /// [`ClientBuilder::build`] for more details on potential failures.
    pub fn try_new() -> Result<Client, Error> {
        let client = ClientBuilder::new()
            .gzip(true)
            .redirect(Policy::limited(5))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(Error::BuildClient)?;

        Ok(Self::with_client(client))
    }

    /// Constructs a `Client` using a pre-configured `reqwest::Client`.
    ///
    /// This is useful if you want to share an HTTP client between multiple services or require
    /// custom configuration (e.g., proxies, custom headers).
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Client {
        let base_url = String::from(BASE_URL);

        Client { base_url, client }
    }

    /// Replaces the base URL requests are sent to.
    ///
    /// A trailing slash is ignored.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Client {
        let mut base_url = base_url.into();

        while base_url.ends_with('/') {
            base_url.pop();
        }

        self.base_url = base_url;
        self
    }

    /// Returns the URL of the result page for `term`.
    ///
    /// ```
    /// let client = weblio::Client::with_client(reqwest::Client::new());
    ///
    /// assert_eq!(client.url_for("猫"), "https://www.weblio.jp/content/%E7%8C%AB");
    /// ```
    #[must_use]
    pub fn url_for(&self, term: &str) -> String {
        let escaped = utf8_percent_encode(term, TERM_ESCAPE);

        format!("{base_url}{CONTENT_PATH}{escaped}", base_url = self.base_url)
    }

    /// Fetches the raw HTML of the result page for `term`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Request`] if the HTTP request fails due to network issues, a timeout, or
    /// if the server returns a non-successful status code (e.g., 404, 500).
    pub async fn fetch(&self, term: &str) -> Result<String, Error> {
        let url = self.url_for(term);

        debug!(%url, "fetching result page");

        let response = self.client.get(&url).send().await.map_err(Error::Request)?;

        match response.error_for_status() {
            Ok(response) => {
                let body = response.text().await.map_err(Error::Request)?;

                trace!(%url, len = body.len(), "received result page");

                Ok(body)
            }
            Err(err) => Err(Error::Request(err)),
        }
    }

    /// Fetches and parses the result page for `term`.
    ///
    /// # Errors
    ///
    /// See [`Client::fetch`].
    pub async fn query(&self, term: &str) -> Result<Document, Error> {
        let body = self.fetch(term).await?;

        Ok(Document::from_html(body))
    }
}

impl Default for Client {
    /// Creates a default `Client` instance.
    ///
    /// This is equivalent to calling [`Client::new`].
    fn default() -> Self {
        Self::new()
    }
}
