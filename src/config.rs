//! Configuration types for Markdown rendering.
//!
//! All rendering behaviour is controlled through [`RenderConfig`], built via
//! its [`RenderConfigBuilder`] or [`RenderConfig::default()`]. The config is
//! plain data: cheap to clone, serialisable for logging, and trivially shared
//! across threads since a render call never mutates it.

use serde::{Deserialize, Serialize};

/// Configuration for a Markdown→HTML render.
///
/// # Example
/// ```rust
/// use md2html::RenderConfig;
///
/// let config = RenderConfig::builder()
///     .image_base_url("https://cdn.example.com/img")
///     .build();
/// assert_eq!(config.image_base_url.as_deref(), Some("https://cdn.example.com/img"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Base URL prepended to relative image paths. Default: `None`.
    ///
    /// With a base of `https://cdn.example.com`, the span `![d](/img/d.png)`
    /// renders with `src="https://cdn.example.com/img/d.png"`. Paths that
    /// already carry a scheme (`http…`, `data:`) are never rewritten.
    /// `None` or an empty string disables rewriting entirely.
    pub image_base_url: Option<String>,
}

impl RenderConfig {
    /// Create a new builder for `RenderConfig`.
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder {
            config: Self::default(),
        }
    }

    /// The effective image base URL; `None` when unset or empty.
    pub(crate) fn image_base(&self) -> Option<&str> {
        self.image_base_url.as_deref().filter(|base| !base.is_empty())
    }
}

/// Builder for [`RenderConfig`].
///
/// `build` is infallible: there is no constraint on the base URL beyond
/// non-emptiness, and an empty value simply disables rewriting.
#[derive(Debug)]
pub struct RenderConfigBuilder {
    config: RenderConfig,
}

impl RenderConfigBuilder {
    pub fn image_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.image_base_url = Some(url.into());
        self
    }

    pub fn build(self) -> RenderConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_base_url() {
        let config = RenderConfig::default();
        assert_eq!(config.image_base(), None);
    }

    #[test]
    fn builder_sets_base_url() {
        let config = RenderConfig::builder().image_base_url("https://x.y").build();
        assert_eq!(config.image_base(), Some("https://x.y"));
    }

    #[test]
    fn empty_base_url_is_treated_as_unset() {
        let config = RenderConfig::builder().image_base_url("").build();
        assert_eq!(config.image_base(), None);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = RenderConfig::builder().image_base_url("https://x.y").build();
        let json = serde_json::to_string(&config).unwrap();
        let back: RenderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
