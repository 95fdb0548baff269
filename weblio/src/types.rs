//! Structured types

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::Profile;
use crate::text::{clean_text, normalize_whitespace};

/// A fetched weblio result page
///
/// Owns the parsed markup for the duration of a single lookup. Every handle extracted from it
/// ([`Section`], [`HeadwordCandidate`]) borrows from it.
#[derive(Debug, Clone)]
pub struct Document {
    html: Html,
}

/// The region of a [`Document`] that holds all the headwords of one dictionary
///
/// # HTML Source
/// The `<div class="kijiWrp">` element that follows the dictionary's `<div class="pbarT">`
/// banner.
#[derive(Debug, Clone, Copy)]
pub struct Section<'a> {
    element: ElementRef<'a>,
}

/// A single headword found in a [`Section`]
///
/// # HTML Source
/// Parsed from `<div class="NetDicHead">` (大辞林) or `<h2 class="midashigo">` (ウィキペディア)
/// and the body element that immediately follows it.
#[derive(Debug, Clone)]
pub struct HeadwordCandidate<'a> {
    /// The headword element
    head: ElementRef<'a>,
    /// The element holding the definitions, if present
    body: Option<ElementRef<'a>>,
    /// Text shown to the user when disambiguating, e.g. "はし【橋】"
    label: String,
}

/// The pronunciation and definitions extracted from exactly one headword
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResolvedEntry {
    /// Reading of the headword, empty when unknown or identical to the search term
    ///
    /// Examples: `ねこ`, `はし`
    pub pronunciation: String,
    /// The definitions in the order they appear in the dictionary
    pub definitions: Vec<String>,
}

impl Document {
    /// Parses a complete weblio result page.
    pub fn from_html(html: impl AsRef<str>) -> Document {
        let html = Html::parse_document(html.as_ref());

        Document { html }
    }

    /// Locates the section belonging to `profile`.
    ///
    /// This is a shorthand for [`Section::locate`].
    #[must_use]
    pub fn section(&self, profile: Profile) -> Option<Section<'_>> {
        Section::locate(self, profile)
    }
}

impl<'a> Section<'a> {
    /// Locates the section of `document` that belongs to the dictionary described by `profile`.
    ///
    /// Returns `None` when the page has no catalog link for the dictionary, when the link is not
    /// part of a section banner, or when the banner isn't followed by a content block.
    #[must_use]
    pub fn locate(document: &'a Document, profile: Profile) -> Option<Section<'a>> {
        let anchor_selector = Selector::parse("a[href]").expect("anchor selector");
        let matcher = profile.catalog_matcher();

        let Some(anchor) = document
            .html
            .select(&anchor_selector)
            .find(|elem| elem.attr("href").is_some_and(|href| matcher.is_match(href)))
        else {
            trace!(%profile, "no catalog anchor");

            return None;
        };

        let Some(banner) = anchor
            .ancestors()
            .filter_map(ElementRef::wrap)
            .find(|elem| is_div_with_class(*elem, "pbarT"))
        else {
            trace!(%profile, "catalog anchor is not inside a section banner");

            return None;
        };

        let Some(element) = next_sibling_div(banner, "kijiWrp", |sibling| {
            is_div_with_class(sibling, "pbarT")
        }) else {
            trace!(%profile, "section banner has no content block");

            return None;
        };

        Some(Section { element })
    }

    /// Returns every headword of the section in document order.
    #[must_use]
    pub fn candidates(&self, profile: Profile) -> Vec<HeadwordCandidate<'a>> {
        let headword_selector =
            Selector::parse(profile.headword_selector()).expect("headword selector");

        self.element
            .select(&headword_selector)
            .map(|head| HeadwordCandidate::new(head, profile, &headword_selector))
            .collect()
    }
}

impl<'a> HeadwordCandidate<'a> {
    fn new(
        head: ElementRef<'a>,
        profile: Profile,
        headword_selector: &Selector,
    ) -> HeadwordCandidate<'a> {
        let body = next_sibling_div(head, profile.body_class(), |sibling| {
            headword_selector.matches(&sibling)
        });
        let label = clean_text(head);

        HeadwordCandidate { head, body, label }
    }

    /// Returns the text shown to the user when choosing between headwords.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[cfg(test)]
    const fn has_body(&self) -> bool {
        self.body.is_some()
    }

    /// Extracts the pronunciation and definitions of this headword.
    ///
    /// Extraction is best-effort: missing elements result in an empty pronunciation or an empty
    /// list of definitions rather than an error. A pronunciation identical to `term` is cleared.
    #[must_use]
    pub fn extract(&self, profile: Profile, term: &str) -> ResolvedEntry {
        let mut entry = match profile {
            Profile::Daijirin => self.extract_daijirin(),
            Profile::Wikipedia => self.extract_wikipedia(),
        };

        if entry.pronunciation == term {
            entry.pronunciation.clear();
        }

        entry
    }

    fn extract_daijirin(&self) -> ResolvedEntry {
        let pronunciation_selector = Selector::parse("b").expect("pronunciation selector");
        let fragment_selector =
            Selector::parse(r#"span[style="text-indent:0;"]"#).expect("fragment selector");
        let single_selector = Selector::parse("div div div").expect("single definition selector");

        let pronunciation = self
            .head
            .select(&pronunciation_selector)
            .next()
            .map(clean_text)
            .unwrap_or_default();

        let Some(body) = self.body else {
            return ResolvedEntry {
                pronunciation,
                definitions: vec![],
            };
        };

        let mut fragments: Vec<String> = body
            .select(&fragment_selector)
            .map(clean_text)
            .filter(|text| !text.is_empty())
            .collect();

        if fragments.len() > 1 {
            return ResolvedEntry {
                pronunciation,
                definitions: fragments,
            };
        }

        let single = body
            .select(&single_selector)
            .map(clean_text)
            .find(|text| !text.is_empty())
            .or_else(|| fragments.pop())
            .or_else(|| Some(clean_text(body)).filter(|text| !text.is_empty()));

        ResolvedEntry {
            pronunciation,
            definitions: single.into_iter().collect(),
        }
    }

    fn extract_wikipedia(&self) -> ResolvedEntry {
        let paragraph_selector = Selector::parse("p:not([class])").expect("paragraph selector");

        let Some(body) = self.body else {
            return ResolvedEntry::default();
        };

        let paragraph = body
            .select(&paragraph_selector)
            .next()
            .map_or_else(|| clean_text(body), clean_text);

        let (pronunciation, definition) = split_lead_sentence(&paragraph);

        ResolvedEntry {
            pronunciation,
            definitions: Some(definition)
                .filter(|text| !text.is_empty())
                .into_iter()
                .collect(),
        }
    }
}

impl ResolvedEntry {
    /// Returns whether the entry has an enumerable list of definitions.
    #[must_use]
    pub const fn is_multi_definition(&self) -> bool {
        self.definitions.len() > 1
    }
}

static LEAD_SENTENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^.*?（([^（）]+)）と?は、?(.+)$").expect("lead sentence regex")
});

/// Splits the lead sentence of an encyclopedia article into its reading and its definition.
///
/// Articles usually open with `見出し（よみ、英: …）は、定義…`. The first reading inside the
/// parentheses is returned as the pronunciation and the text after `は、` as the definition. If
/// the sentence doesn't follow that shape the pronunciation is empty and the whole paragraph is
/// returned as the definition.
fn split_lead_sentence(paragraph: &str) -> (String, String) {
    match LEAD_SENTENCE.captures(paragraph) {
        Some(captures) => {
            let reading = captures[1]
                .split(['、', '，', ','])
                .next()
                .map(normalize_whitespace)
                .unwrap_or_default();
            let definition = normalize_whitespace(&captures[2]);

            (reading, definition)
        }
        None => (String::new(), paragraph.to_string()),
    }
}

fn is_div_with_class(elem: ElementRef<'_>, class: &str) -> bool {
    elem.value().name() == "div" && elem.value().classes().any(|name| name == class)
}

/// Returns the first following sibling of `elem` that is a `div` with the given `class`.
///
/// The search gives up at the first sibling that satisfies `stop`, so a block that belongs to a
/// later banner or headword is never picked up.
fn next_sibling_div<'a>(
    elem: ElementRef<'a>,
    class: &str,
    stop: impl Fn(ElementRef<'a>) -> bool,
) -> Option<ElementRef<'a>> {
    for sibling in elem.next_siblings().filter_map(ElementRef::wrap) {
        if is_div_with_class(sibling, class) {
            return Some(sibling);
        }

        if stop(sibling) {
            return None;
        }
    }

    None
}
