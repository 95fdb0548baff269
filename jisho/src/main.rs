use std::io;

use miette::IntoDiagnostic;
use tracing::trace;

use jisho::batch::Runner;
use jisho::chooser::ConsoleChooser;
use jisho::cli::Opts;
use jisho::store::{Store, SystemClipboard};
use jisho::{Config, Error, http};

#[tokio::main(flavor = "current_thread")]
async fn main() -> miette::Result<()> {
    // Parse command-line arguments
    let opts: Opts = argh::from_env();
    let config = Config::load(opts.config.as_deref())?;

    jisho::tracing::try_init(&config.tracing)?;

    let tokens = opts.tokens();

    if tokens.is_empty() {
        return Err(Error::NoTerms.into());
    }

    let profile = opts.profile(config.dictionary);
    let client = http::build_client(&config.http)?;
    let store = Store::new(&config.store.path);

    trace!(%profile, num_tokens = tokens.len(), path = %store.path().display(), "starting batch");

    let summary = Runner::new(client, store, profile)
        .persist(!opts.print_only)
        .run(
            &tokens,
            &mut ConsoleChooser::stdio(),
            &mut SystemClipboard::default(),
            &mut io::stdout(),
        )
        .await?;

    trace!(?summary, "done");

    io::Write::flush(&mut io::stdout()).into_diagnostic()
}
