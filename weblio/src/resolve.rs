//! Headword disambiguation
//!
//! A search term may map to several headwords (e.g. かみ → 上, 神, 紙). The resolution step
//! picks exactly one of them, asking a [`Chooser`] when there is more than one.

use tracing::{debug, warn};

use crate::HeadwordCandidate;

/// The answer of a [`Chooser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// The zero-based index of the chosen label.
    Index(usize),
    /// The user declined to choose.
    Cancel,
}

/// Something that can ask the user to pick one of several headwords.
///
/// Implemented by front ends, e.g. a console prompt or a modal list dialog. Closures taking the
/// labels and returning a [`Choice`] implement it as well.
pub trait Chooser {
    /// Presents the ordered `labels` and returns the user's choice.
    fn choose(&mut self, labels: &[String]) -> Choice;
}

impl<F> Chooser for F
where
    F: FnMut(&[String]) -> Choice,
{
    fn choose(&mut self, labels: &[String]) -> Choice {
        self(labels)
    }
}

/// Outcome of [`resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The headword at the given index was selected.
    Selected(usize),
    /// There were no headwords to choose from.
    NoCandidates,
    /// The chooser cancelled or returned an index that doesn't exist.
    Cancelled,
}

/// Resolves `candidates` into a single headword.
///
/// - With no candidates, returns [`Resolution::NoCandidates`] without asking.
/// - With one candidate, selects it without asking.
/// - Otherwise asks `chooser` exactly once. An out-of-range index is rejected as
///   [`Resolution::Cancelled`].
pub fn resolve<C>(candidates: &[HeadwordCandidate<'_>], chooser: &mut C) -> Resolution
where
    C: Chooser + ?Sized,
{
    match candidates.len() {
        0 => Resolution::NoCandidates,
        1 => Resolution::Selected(0),
        len => {
            let labels: Vec<String> = candidates
                .iter()
                .map(|candidate| candidate.label().to_string())
                .collect();

            debug!(num_candidates = len, "asking chooser to disambiguate");

            match chooser.choose(&labels) {
                Choice::Index(index) if index < len => Resolution::Selected(index),
                Choice::Index(index) => {
                    warn!(index, num_candidates = len, "rejecting out-of-range choice");

                    Resolution::Cancelled
                }
                Choice::Cancel => Resolution::Cancelled,
            }
        }
    }
}
