//! Error types

use std::io;

use miette::Diagnostic;
use thiserror::Error;

/// Application errors for configuration, storage and output.
///
/// Lookups that find nothing are not errors, and neither are failed requests for a single term;
/// both are reported inline so the rest of a batch can proceed.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// The configuration could not be loaded.
    #[error("Could not load configuration")]
    #[diagnostic(code(jisho::config))]
    Config(#[source] Box<figment::Error>),
    /// The HTTP client could not be constructed.
    #[error("Could not build HTTP client")]
    #[diagnostic(code(jisho::http_client))]
    HttpClient(#[source] reqwest::Error),
    /// The definitions file could not be read or written.
    #[error("Could not access definitions file {path}")]
    #[diagnostic(
        code(jisho::store),
        help("check that the path configured as `store.path` is writable")
    )]
    Store {
        /// Path of the definitions file
        path: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
    /// The system clipboard is unavailable.
    #[error("Could not access the clipboard")]
    #[diagnostic(code(jisho::clipboard))]
    Clipboard(#[source] arboard::Error),
    /// Writing to the console failed.
    #[error("Could not write output")]
    #[diagnostic(code(jisho::output))]
    Output(#[from] io::Error),
    /// No search terms were given on the command line.
    #[error("No search terms given")]
    #[diagnostic(
        code(jisho::no_terms),
        help("pass one or more terms, e.g. `jisho 猫 橋`, or one of `clear`, `list` and `cut`")
    )]
    NoTerms,
}
