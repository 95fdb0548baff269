//! Look up Japanese words on weblio.jp and collect the definitions for Anki.

pub mod batch;
pub mod chooser;
pub mod cli;
pub mod config;
pub mod consts;
mod error;
pub mod http;
pub mod store;
pub mod tracing;

pub use config::Config;
pub use error::Error;
