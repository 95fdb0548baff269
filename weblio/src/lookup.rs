//! The lookup pipeline
//!
//! Ties the section locator, headword resolution, entry extraction and rendering together into
//! a single call that never fails: every outcome is one of the [`LookupResult`] variants.

use tracing::{debug, trace};

use crate::resolve::{Chooser, Resolution, resolve};
use crate::{Document, Profile};

/// The outcome of looking up a single term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    /// The rendered entry.
    Found(String),
    /// The dictionary has no usable entry for the term.
    NotFound,
    /// The user declined to choose between several headwords.
    Cancelled,
}

impl LookupResult {
    /// Returns the rendered entry, if one was found.
    #[must_use]
    pub fn found(&self) -> Option<&str> {
        match self {
            LookupResult::Found(html) => Some(html),
            LookupResult::NotFound | LookupResult::Cancelled => None,
        }
    }
}

/// Looks up `term` in the `profile` section of `document`.
///
/// `chooser` is only consulted when the section holds more than one headword, and then exactly
/// once.
pub fn lookup<C>(document: &Document, profile: Profile, term: &str, chooser: &mut C) -> LookupResult
where
    C: Chooser + ?Sized,
{
    let Some(section) = document.section(profile) else {
        debug!(%profile, term, "section not found");

        return LookupResult::NotFound;
    };

    let candidates = section.candidates(profile);

    trace!(%profile, term, num_candidates = candidates.len(), "enumerated headwords");

    let index = match resolve(&candidates, chooser) {
        Resolution::Selected(index) => index,
        Resolution::NoCandidates => {
            debug!(%profile, term, "section has no headwords");

            return LookupResult::NotFound;
        }
        Resolution::Cancelled => {
            debug!(%profile, term, "disambiguation cancelled");

            return LookupResult::Cancelled;
        }
    };

    let entry = candidates[index].extract(profile, term);

    if entry.definitions.is_empty() {
        debug!(%profile, term, index, "headword has no definitions");

        return LookupResult::NotFound;
    }

    LookupResult::Found(entry.render(term))
}
