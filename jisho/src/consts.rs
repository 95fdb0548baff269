//! Constants and defaults

use std::time::Duration;

/// The `User-Agent` header to send when issuing HTTP requests.
pub const HTTP_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:141.0) Gecko/20100101 Firefox/141.0";

/// The duration before a HTTP request times out.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// The maximum number of redirects to follow for a single request.
pub const HTTP_MAX_REDIRECTS: usize = 5;

/// The configuration file that is read when no path is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "jisho.toml";

/// Prefix of the environment variables that override configuration values.
pub const ENV_PREFIX: &str = "JISHO_";

/// The file rendered definitions are appended to.
pub const DEFAULT_STORE_PATH: &str = "definitions.txt";

/// The default log filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";
