//! Tracing setup

use std::io;

use miette::{IntoDiagnostic, WrapErr};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{self, Format};
use crate::consts;

/// Initializes the global tracing subscriber.
///
/// Events are written to stderr so they never mix with the definitions printed to stdout. The
/// filter is read from `RUST_LOG` and defaults to warnings only.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been set.
pub fn try_init(tracing: &config::TracingConfig) -> miette::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(consts::DEFAULT_LOG_FILTER));
    let registry = tracing_subscriber::registry().with(filter);
    let layer = fmt::layer().with_writer(io::stderr);

    match tracing.format {
        Format::Json => registry.with(layer.json()).try_init(),
        Format::Pretty => registry.with(layer.pretty()).try_init(),
        Format::Compact => registry.with(layer.compact()).try_init(),
    }
    .into_diagnostic()
    .wrap_err("could not init registry")?;

    debug!(format = ?tracing.format, "tracing initialized");

    Ok(())
}
