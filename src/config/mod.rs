use serde::{Deserialize, Serialize};

/// Start/end markup pair applied around a rendered fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wrap {
    pub start: String,
    pub end: String,
}

impl Wrap {
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    pub fn wrap(&self, inner: &str) -> String {
        format!("{}{}{}", self.start, inner, self.end)
    }
}

impl Default for Wrap {
    fn default() -> Self {
        Self::new("<div>", "</div>")
    }
}

/// Rendering options for a feed. Read-only during a render call;
/// replace it (or individual fields) between calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedConfig {
    pub media_limit: usize,
    pub show_profile_info: bool,
    pub wrap_html: Wrap,
    pub wrap_html_items: Wrap,
    pub show_likes: bool,
    pub likes_label: String,
    pub show_error: bool,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            media_limit: 3,
            show_profile_info: true,
            wrap_html: Wrap::default(),
            wrap_html_items: Wrap::default(),
            show_likes: true,
            likes_label: "likes".to_string(),
            show_error: true,
        }
    }
}

impl FeedConfig {
    /// Resolve a partial override set against the defaults. Merging happens
    /// once, here; the resulting config is a plain value afterwards.
    pub fn from_overrides(overrides: FeedConfigOverrides) -> Self {
        let defaults = Self::default();
        Self {
            media_limit: overrides.media_limit.unwrap_or(defaults.media_limit),
            show_profile_info: overrides
                .show_profile_info
                .unwrap_or(defaults.show_profile_info),
            wrap_html: overrides.wrap_html.unwrap_or(defaults.wrap_html),
            wrap_html_items: overrides.wrap_html_items.unwrap_or(defaults.wrap_html_items),
            show_likes: overrides.show_likes.unwrap_or(defaults.show_likes),
            likes_label: overrides.likes_label.unwrap_or(defaults.likes_label),
            show_error: overrides.show_error.unwrap_or(defaults.show_error),
        }
    }
}

/// Optional mirror of [`FeedConfig`], deserializable from TOML so callers
/// can specify only the fields they want to change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedConfigOverrides {
    pub media_limit: Option<usize>,
    pub show_profile_info: Option<bool>,
    pub wrap_html: Option<Wrap>,
    pub wrap_html_items: Option<Wrap>,
    pub show_likes: Option<bool>,
    pub likes_label: Option<String>,
    pub show_error: Option<bool>,
}
