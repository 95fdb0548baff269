//! Text cleanup helpers

use scraper::ElementRef;

/// Returns whether `c` is a wide character (kana, CJK ideographs, CJK punctuation or full-width
/// forms) that is never separated from its neighbours by a space in Japanese text.
const fn is_wide(c: char) -> bool {
    matches!(c,
        '\u{3000}'..='\u{30FF}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{4E00}'..='\u{9FFF}'
        | '\u{F900}'..='\u{FAFF}'
        | '\u{FF00}'..='\u{FFEF}'
    )
}

/// Trims `text` and collapses every whitespace run inside it.
///
/// A run between two narrow characters becomes a single space, so Latin text keeps its word
/// boundaries. A run that touches a wide character is dropped entirely, since it only stems from
/// the markup's line breaks and indentation.
///
/// ```
/// use weblio::text::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("  small\n   domesticated animal "), "small domesticated animal");
/// assert_eq!(normalize_whitespace("ネコ科の\n  哺乳類。"), "ネコ科の哺乳類。");
/// ```
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for word in text.split_whitespace() {
        if let (Some(prev), Some(next)) = (result.chars().next_back(), word.chars().next())
            && !is_wide(prev)
            && !is_wide(next)
        {
            result.push(' ');
        }

        result.push_str(word);
    }

    result
}

/// Returns the concatenated text of all the descendants of `elem`.
pub(crate) fn element_text(elem: ElementRef<'_>) -> String {
    elem.text().collect()
}

/// Returns the whitespace-normalized text of all the descendants of `elem`.
pub(crate) fn clean_text(elem: ElementRef<'_>) -> String {
    normalize_whitespace(&element_text(elem))
}
