//! Small text helpers shared by the markup scanners.

use std::sync::LazyLock;

use regex::Regex;

static TAGS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[^>]+>").expect("valid tags regex"));

/// Strips tags and collapses whitespace runs to single spaces.
pub(crate) fn clean_text(input: &str) -> String {
    let no_tags = TAGS_RE.replace_all(input, " ");
    no_tags.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decodes HTML character references such as `&amp;` or `&#39;`.
pub(crate) fn decode_entities(input: &str) -> String {
    html_escape::decode_html_entities(input).into_owned()
}

/// [`clean_text`], then reference decoding. Whitespace that decoding
/// produces (`&nbsp;`) is collapsed as well; a decoded `&lt;` is kept as text.
pub(crate) fn clean_decoded_text(input: &str) -> String {
    decode_entities(&clean_text(input))
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Returns the value of a double-quoted attribute inside one opening tag.
///
/// `tag` is the text of a single tag such as `<img alt="x" src="y">`. The
/// attribute name must be preceded by whitespace so `src` does not match
/// inside `srcset` or `data-src`.
pub(crate) fn attr_value<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!("{name}=\"");
    let mut from = 0;
    while let Some(rel) = tag[from..].find(&needle) {
        let start = from + rel;
        from = start + needle.len();
        let preceded_by_space = tag[..start]
            .chars()
            .next_back()
            .is_some_and(char::is_whitespace);
        if !preceded_by_space {
            continue;
        }
        let value_start = start + needle.len();
        let value_len = tag[value_start..].find('"')?;
        return Some(&tag[value_start..value_start + value_len]);
    }
    None
}

/// True when the space-separated `class` attribute contains `token`.
pub(crate) fn has_class_token(tag: &str, token: &str) -> bool {
    attr_value(tag, "class").is_some_and(|classes| classes.split_whitespace().any(|c| c == token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_strips_tags_and_collapses_whitespace() {
        assert_eq!(clean_text("  <b>Hello</b>\n\t world  "), "Hello world");
    }

    #[test]
    fn clean_text_of_empty_is_empty() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("<span></span>"), "");
    }

    #[test]
    fn clean_decoded_text_decodes_after_stripping_tags() {
        assert_eq!(clean_decoded_text("<b>Tom &amp; Jerry</b>"), "Tom & Jerry");
        assert_eq!(clean_decoded_text("a&nbsp;&nbsp;b"), "a b");
        assert_eq!(clean_decoded_text("&lt;b&gt;bold&lt;/b&gt;"), "<b>bold</b>");
    }

    #[test]
    fn decode_entities_handles_numeric_references() {
        assert_eq!(decode_entities("it&#39;s &#x3042;"), "it's \u{3042}");
        assert_eq!(decode_entities("/item/m1?a=1&amp;b=2"), "/item/m1?a=1&b=2");
    }

    #[test]
    fn attr_value_finds_quoted_value() {
        let tag = r#"<a class="x" href="/item/m1" data-testid="thumbnail-link">"#;
        assert_eq!(attr_value(tag, "href"), Some("/item/m1"));
        assert_eq!(attr_value(tag, "data-testid"), Some("thumbnail-link"));
    }

    #[test]
    fn attr_value_requires_name_boundary() {
        let tag = r#"<img srcset="a 1x" data-src="lazy" src="real">"#;
        assert_eq!(attr_value(tag, "src"), Some("real"));
    }

    #[test]
    fn attr_value_missing_returns_none() {
        assert_eq!(attr_value("<img alt=\"\">", "src"), None);
    }

    #[test]
    fn has_class_token_matches_whole_tokens_only() {
        let tag = r#"<div class="merItemThumbnail large" id="m1">"#;
        assert!(has_class_token(tag, "merItemThumbnail"));
        assert!(!has_class_token(tag, "merItem"));
        assert!(!has_class_token("<div id=\"m1\">", "merItemThumbnail"));
    }
}
