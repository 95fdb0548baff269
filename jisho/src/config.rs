//! Configuration

use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::Figment;
use figment::providers::{Env, Format as _, Serialized, Toml};
use serde::{Deserialize, Serialize};
use tracing::trace;
use weblio::Profile;

use crate::{Error, consts};

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// The dictionary to look terms up in
    #[serde(default)]
    pub dictionary: Profile,
    /// HTTP client configuration
    #[serde(default)]
    pub http: HttpConfig,
    /// Definitions file configuration
    #[serde(default)]
    pub store: StoreConfig,
    /// Tracing configuration
    #[serde(default)]
    pub tracing: TracingConfig,
}

/// HTTP client configuration.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct HttpConfig {
    /// The scheme and host of the dictionary site
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Maximum duration of a single request
    #[serde(default = "default_http_timeout", with = "humantime_serde")]
    pub timeout: Duration,
    /// The `User-Agent` header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Definitions file configuration.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Path of the file that rendered definitions are appended to
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

/// Tracing configuration.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct TracingConfig {
    /// Output format of log events
    #[serde(default)]
    pub format: Format,
}

/// Output format of log events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Single-line human readable events
    #[default]
    Compact,
    /// Multi-line human readable events
    Pretty,
    /// Newline-delimited JSON
    Json,
}

impl Config {
    /// Returns the figment that configuration is extracted from.
    ///
    /// Values are layered, with later sources taking precedence:
    ///
    /// 1. built-in defaults
    /// 2. the TOML file at `path`, or `jisho.toml` if it exists when no path is given
    /// 3. `JISHO_` prefixed environment variables, with nested keys separated by `__`
    ///    (e.g. `JISHO_STORE__PATH`)
    #[must_use]
    pub fn figment(path: Option<&Path>) -> Figment {
        let file = match path {
            Some(path) => Toml::file_exact(path),
            None => Toml::file(consts::DEFAULT_CONFIG_PATH),
        };

        Figment::from(Serialized::defaults(Config::default()))
            .merge(file)
            .merge(Env::prefixed(consts::ENV_PREFIX).split("__"))
    }

    /// Loads the configuration, reading the file at `path` if given.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `path` doesn't exist, or if any source holds a value of the
    /// wrong type.
    pub fn load(path: Option<&Path>) -> Result<Config, Error> {
        trace!(?path, "loading config");

        let config: Config = Config::figment(path)
            .extract()
            .map_err(|err| Error::Config(Box::new(err)))?;

        trace!(?config, "loaded config");

        Ok(config)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        HttpConfig {
            base_url: default_base_url(),
            timeout: default_http_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            path: default_store_path(),
        }
    }
}

/// The default dictionary site.
#[must_use]
pub fn default_base_url() -> String {
    weblio::client::BASE_URL.to_string()
}

/// The default request timeout.
#[must_use]
pub const fn default_http_timeout() -> Duration {
    consts::HTTP_TIMEOUT
}

/// The default `User-Agent` header.
#[must_use]
pub fn default_user_agent() -> String {
    consts::HTTP_USER_AGENT.to_string()
}

/// The default definitions file.
#[must_use]
pub fn default_store_path() -> PathBuf {
    PathBuf::from(consts::DEFAULT_STORE_PATH)
}
