//! HTML escaping of literal text.
//!
//! Escaping runs *before* inline-span rewriting: the `<img>`, `<a>` and other
//! tags inserted by [`super::inline`] must survive, so they are never passed
//! through here. Quote characters escape to numeric entities so that text
//! containing `"` cannot break out of an attribute value inserted later.

/// Escape the five HTML-significant characters in `text`.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '\'' => escaped.push_str("&#39;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_angle_brackets_and_ampersand() {
        assert_eq!(escape_html("a < b & c > d"), "a &lt; b &amp; c &gt; d");
    }

    #[test]
    fn escapes_quotes_to_numeric_entities() {
        assert_eq!(escape_html(r#"say "hi" it's me"#), "say &#34;hi&#34; it&#39;s me");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(escape_html("nothing to do here"), "nothing to do here");
    }

    #[test]
    fn empty_input() {
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn multibyte_text_is_preserved() {
        assert_eq!(escape_html("café → 東京"), "café → 東京");
    }
}
