//! Inline-span formatting: the last pipeline stage.
//!
//! Rewrites inline Markdown spans (images, bold, italic, code, links,
//! strikethrough) inside the text content of a block. The input has already
//! been HTML-escaped by [`super::escape`], so raw `<`, `>` and `&` in the
//! source are safe; the tags inserted here are the only markup in the result.
//!
//! ## Rule order
//!
//! Rules must run in this specific order: images before links because the
//! image syntax is the link syntax with a `!` prefix, and bold before italic
//! so the double delimiters `**`/`__` are consumed before the single-character
//! patterns can see them. All spans are non-greedy and single-line; unmatched
//! or partial delimiters stay literal text.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[([^\]]+)\]\(([^)]+)\)").unwrap());
static RE_BOLD_ASTERISK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static RE_BOLD_UNDERSCORE: Lazy<Regex> = Lazy::new(|| Regex::new(r"__(.+?)__").unwrap());
static RE_ITALIC_ASTERISK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").unwrap());
static RE_ITALIC_UNDERSCORE: Lazy<Regex> = Lazy::new(|| Regex::new(r"_(.+?)_").unwrap());
static RE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());
static RE_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());
static RE_STRIKE: Lazy<Regex> = Lazy::new(|| Regex::new(r"~~(.+?)~~").unwrap());

/// Rewrite all inline Markdown spans in `text` to their HTML equivalents.
pub fn format_inline(text: &str) -> String {
    let text = RE_IMAGE.replace_all(text, r#"<img src="$2" alt="$1">"#);
    let text = RE_BOLD_ASTERISK.replace_all(&text, "<strong>$1</strong>");
    let text = RE_BOLD_UNDERSCORE.replace_all(&text, "<strong>$1</strong>");
    let text = RE_ITALIC_ASTERISK.replace_all(&text, "<em>$1</em>");
    let text = RE_ITALIC_UNDERSCORE.replace_all(&text, "<em>$1</em>");
    let text = RE_CODE.replace_all(&text, "<code>$1</code>");
    let text = RE_LINK.replace_all(&text, r#"<a href="$2">$1</a>"#);
    RE_STRIKE.replace_all(&text, "<del>$1</del>").into_owned()
}
