//! A client and parser for the dictionaries hosted on [weblio.jp](https://www.weblio.jp).
//!
//! A lookup locates one dictionary's section on a result page, resolves a single headword
//! (asking a [`Chooser`] when there are several), extracts its reading and definitions and
//! renders them as a small HTML snippet.
//!
//! ```
//! use weblio::{Choice, Document, LookupResult, Profile, lookup};
//!
//! let html = r#"<html><body>
//!   <div class="pbarT"><a href="https://www.weblio.jp/cat/dictionary/ssdjj">大辞林</a></div>
//!   <div class="kijiWrp">
//!     <div class="NetDicHead"><b>ねこ</b> 【猫】</div>
//!     <div class="NetDicBody"><div><div>small domesticated animal</div></div></div>
//!   </div>
//! </body></html>"#;
//!
//! let document = Document::from_html(html);
//! let result = lookup(&document, Profile::Daijirin, "猫", &mut |_: &[String]| Choice::Cancel);
//!
//! assert_eq!(
//!     result,
//!     LookupResult::Found("【猫】 ねこ<br />\nsmall domesticated animal".to_string())
//! );
//! ```
// Allow repetition of structure name instead of replacing with self as the output from
// rust-analyzer becomes more readable
#![allow(clippy::use_self)]

#[cfg(feature = "client")]
pub mod client;
mod error;
mod format;
pub mod lookup;
pub mod profile;
pub mod resolve;
pub mod text;
pub mod types;

#[cfg(feature = "client")]
pub use client::Client;
pub use error::Error;
pub use lookup::{LookupResult, lookup};
pub use profile::{DictionaryProfile, Profile};
pub use resolve::{Choice, Chooser, Resolution, resolve};
pub use types::{Document, HeadwordCandidate, ResolvedEntry, Section};
