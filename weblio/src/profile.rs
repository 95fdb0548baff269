//! Dictionary profiles
//!
//! weblio.jp aggregates many dictionaries on a single result page. Each one is introduced by a
//! banner containing a link to its catalog page (e.g. `https://www.weblio.jp/cat/dictionary/ssdjj`)
//! and a profile describes how to recognize that link and how its entries are laid out.

use std::fmt::{self, Display};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Error;

/// Static description of a dictionary hosted on weblio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryProfile {
    /// Identifier used on the command line and in configuration (e.g. `daijirin`).
    pub id: &'static str,
    /// Human readable name, as shown by weblio.
    pub display_name: &'static str,
    /// The dictionary's identifier in weblio's catalog URLs.
    pub url_id: &'static str,
}

const DAIJIRIN: DictionaryProfile = DictionaryProfile {
    id: "daijirin",
    display_name: "大辞林",
    url_id: "ssdjj",
};

const WIKIPEDIA: DictionaryProfile = DictionaryProfile {
    id: "wikipedia",
    display_name: "ウィキペディア",
    url_id: "wkpja",
};

static DAIJIRIN_MATCHER: LazyLock<Regex> = LazyLock::new(|| compile_catalog_matcher(&DAIJIRIN));
static WIKIPEDIA_MATCHER: LazyLock<Regex> = LazyLock::new(|| compile_catalog_matcher(&WIKIPEDIA));

fn compile_catalog_matcher(info: &DictionaryProfile) -> Regex {
    let pattern = format!("/cat/dictionary/{}", regex::escape(info.url_id));

    Regex::new(&pattern).expect("catalog matcher")
}

/// A supported dictionary.
///
/// The variant decides which extraction strategy is applied to the dictionary's section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Profile {
    /// 三省堂 大辞林, a general Japanese dictionary.
    #[default]
    Daijirin,
    /// The Japanese Wikipedia mirror.
    Wikipedia,
}

impl Profile {
    /// All supported profiles.
    pub const ALL: [Profile; 2] = [Profile::Daijirin, Profile::Wikipedia];

    /// Returns the static description of this dictionary.
    #[must_use]
    pub const fn info(self) -> &'static DictionaryProfile {
        match self {
            Profile::Daijirin => &DAIJIRIN,
            Profile::Wikipedia => &WIKIPEDIA,
        }
    }

    /// Returns the identifier of this dictionary.
    #[must_use]
    pub const fn id(self) -> &'static str {
        self.info().id
    }

    /// Returns the human readable name of this dictionary.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        self.info().display_name
    }

    /// Returns the pattern matched against anchor targets to find this dictionary's banner.
    ///
    /// The pattern tolerates any scheme, host and trailing path or query, so
    /// `https://www.weblio.jp/cat/dictionary/ssdjj`, `//www.weblio.jp/cat/dictionary/ssdjj?x` and
    /// the relative `/cat/dictionary/ssdjj` are all accepted.
    #[must_use]
    pub fn catalog_matcher(self) -> &'static Regex {
        match self {
            Profile::Daijirin => &DAIJIRIN_MATCHER,
            Profile::Wikipedia => &WIKIPEDIA_MATCHER,
        }
    }

    /// CSS selector for the nodes that mark a headword inside the dictionary's section.
    pub(crate) const fn headword_selector(self) -> &'static str {
        match self {
            Profile::Daijirin => "div.NetDicHead",
            Profile::Wikipedia => "h2.midashigo",
        }
    }

    /// Class of the sibling element that holds the body of a headword.
    pub(crate) const fn body_class(self) -> &'static str {
        match self {
            Profile::Daijirin => "NetDicBody",
            Profile::Wikipedia => "Wkpja",
        }
    }
}

impl FromStr for Profile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Profile::ALL
            .into_iter()
            .find(|profile| profile.id() == s)
            .ok_or_else(|| Error::UnknownDictionary(s.to_string()))
    }
}

impl Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_resolves_ids() {
        assert_eq!("daijirin".parse::<Profile>().ok(), Some(Profile::Daijirin));
        assert_eq!(
            "wikipedia".parse::<Profile>().ok(),
            Some(Profile::Wikipedia)
        );
        assert!(matches!(
            "kojien".parse::<Profile>(),
            Err(Error::UnknownDictionary(id)) if id == "kojien"
        ));
    }

    #[test]
    fn catalog_matcher_tolerates_url_variations() {
        let matcher = Profile::Daijirin.catalog_matcher();

        assert!(matcher.is_match("https://www.weblio.jp/cat/dictionary/ssdjj"));
        assert!(matcher.is_match("//www.weblio.jp/cat/dictionary/ssdjj?lang=ja"));
        assert!(!matcher.is_match("https://www.weblio.jp/cat/dictionary/wkpja"));
        assert!(matcher.is_match("/cat/dictionary/ssdjj"));
        assert!(!matcher.is_match("https://www.weblio.jp/content/ssdjj"));
    }

    #[test]
    fn catalog_matcher_is_compiled_once_per_profile() {
        assert!(std::ptr::eq(
            Profile::Daijirin.catalog_matcher(),
            Profile::Daijirin.catalog_matcher()
        ));
        assert!(!std::ptr::eq(
            Profile::Daijirin.catalog_matcher(),
            Profile::Wikipedia.catalog_matcher()
        ));
    }

    #[test]
    fn display_uses_id() {
        assert_eq!(Profile::Wikipedia.to_string(), "wikipedia");
        assert_eq!(Profile::Daijirin.display_name(), "大辞林");
    }
}
