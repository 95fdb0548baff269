//! Rendering of resolved entries

use std::fmt::Write;

use crate::ResolvedEntry;

impl ResolvedEntry {
    /// Renders the entry as the HTML snippet stored for `term`.
    ///
    /// An entry with several definitions is rendered as an ordered list:
    ///
    /// ```text
    /// 【橋】 はし
    /// <ol>
    /// <li>bridge</li>
    /// <li>beam</li>
    /// </ol>
    /// ```
    ///
    /// Otherwise the only definition follows a line break:
    ///
    /// ```text
    /// 【猫】 ねこ<br />
    /// small domesticated animal
    /// ```
    #[must_use]
    pub fn render(&self, term: &str) -> String {
        let mut html = format!("【{term}】 {}", self.pronunciation);

        if self.is_multi_definition() {
            html.push_str("\n<ol>");

            for definition in &self.definitions {
                let _ = write!(html, "\n<li>{definition}</li>");
            }

            html.push_str("\n</ol>");
        } else {
            html.push_str("<br />\n");
            html.push_str(self.definitions.first().map_or("", String::as_str));
        }

        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(pronunciation: &str, definitions: &[&str]) -> ResolvedEntry {
        ResolvedEntry {
            pronunciation: pronunciation.to_string(),
            definitions: definitions.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn renders_single_definition() {
        let entry = entry("ねこ", &["small domesticated animal"]);

        assert_eq!(
            entry.render("猫"),
            "【猫】 ねこ<br />\nsmall domesticated animal"
        );
    }

    #[test]
    fn renders_ordered_list() {
        let entry = entry("はし", &["bridge", "beam", "(go) handicap stone arrangement"]);

        assert_eq!(
            entry.render("橋"),
            "【橋】 はし\n<ol>\n<li>bridge</li>\n<li>beam</li>\n<li>(go) handicap stone arrangement</li>\n</ol>"
        );
    }

    #[test]
    fn renders_empty_pronunciation() {
        let entry = entry("", &["flower"]);

        assert_eq!(entry.render("花"), "【花】 <br />\nflower");
    }

    #[test]
    fn rendering_is_idempotent() {
        let entry = entry("かみ", &["paper", "god"]);

        assert_eq!(entry.render("紙"), entry.render("紙"));
    }
}
