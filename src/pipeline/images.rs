//! Image-URL rewriting: the first pipeline stage.
//!
//! Documentation sources frequently reference images by site-relative path
//! (`![diagram](/img/diagram.png)`); when the rendered fragment is embedded
//! somewhere else those paths dangle. This pass prefixes every relative image
//! path with the configured base URL so the fragment is self-contained.
//!
//! It runs once over the whole raw input, before line splitting, and touches
//! nothing but image spans. Paths that already carry a scheme (`http…`,
//! `data:`) pass through unchanged.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static RE_IMAGE_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());

/// True when `path` should be left alone by the rewriter.
fn is_absolute_url(path: &str) -> bool {
    path.starts_with("http") || path.starts_with("data:")
}

/// Prefix every relative image path in `input` with `base`.
///
/// Leading slashes on the path are stripped before joining, so
/// `![d](/img/d.png)` with base `https://cdn.example.com` becomes
/// `![d](https://cdn.example.com/img/d.png)`.
pub fn rewrite_image_urls(input: &str, base: &str) -> String {
    RE_IMAGE_SPAN
        .replace_all(input, |caps: &Captures<'_>| {
            let alt = &caps[1];
            let path = &caps[2];
            if is_absolute_url(path) {
                caps[0].to_string()
            } else {
                format!("![{alt}]({base}/{})", path.trim_start_matches('/'))
            }
        })
        .into_owned()
}
