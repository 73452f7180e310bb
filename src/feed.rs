use log::warn;

use crate::config::FeedConfig;
use crate::fetch::{FeedError, FeedFetcher};
use crate::render;

/// Ties a handle and a config to the fetch/render pipeline.
///
/// Each call to [`generate_html_feed`](Self::generate_html_feed) issues one
/// outbound request and rebuilds the markup from scratch; nothing is kept
/// between calls. Handle and config can be swapped without reconstruction.
pub struct InstagramFeed {
    handle: String,
    config: FeedConfig,
    fetcher: FeedFetcher,
}

impl InstagramFeed {
    pub fn new(handle: &str, config: FeedConfig) -> Result<Self, FeedError> {
        Ok(Self {
            handle: handle.to_string(),
            config,
            fetcher: FeedFetcher::new()?,
        })
    }

    pub fn with_defaults(handle: &str) -> Result<Self, FeedError> {
        Self::new(handle, FeedConfig::default())
    }

    /// Fetch the feed and render it. Any fetch failure collapses into the
    /// single "feed unavailable" outcome; show_error decides whether that
    /// is a fixed error paragraph or an empty string.
    pub fn generate_html_feed(&self) -> String {
        match self.fetcher.fetch(&self.handle) {
            Ok(feed) => render::render_feed(&feed, &self.config),
            Err(err) => {
                warn!("Feed unavailable for {}: {}", self.handle, err);
                self.unavailable_html()
            }
        }
    }

    fn unavailable_html(&self) -> String {
        if self.config.show_error {
            render::error_paragraph(&self.handle)
        } else {
            String::new()
        }
    }

    pub fn handle(&self) -> &str {
        &self.handle
    }

    pub fn set_handle(&mut self, handle: &str) {
        self.handle = handle.to_string();
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Replace the configuration wholesale; individual fields are public on
    /// [`FeedConfig`], so callers mutate a copy and swap it in.
    pub fn set_config(&mut self, config: FeedConfig) {
        self.config = config;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_with_show_error_is_the_fixed_paragraph() {
        let feed = InstagramFeed::with_defaults("alice").unwrap();
        assert_eq!(
            feed.unavailable_html(),
            "<p class=\"instagram-feed-error\">Couldn't get a feed for username: alice </p>"
        );
    }

    #[test]
    fn unavailable_without_show_error_is_empty() {
        let config = FeedConfig {
            show_error: false,
            ..Default::default()
        };
        let feed = InstagramFeed::new("alice", config).unwrap();
        assert_eq!(feed.unavailable_html(), "");
    }

    #[test]
    fn handle_and_config_are_replaceable() {
        let mut feed = InstagramFeed::with_defaults("alice").unwrap();
        assert_eq!(feed.handle(), "alice");

        feed.set_handle("bob");
        assert_eq!(feed.handle(), "bob");
        assert_eq!(
            feed.unavailable_html(),
            "<p class=\"instagram-feed-error\">Couldn't get a feed for username: bob </p>"
        );

        let mut config = feed.config().clone();
        config.media_limit = 9;
        feed.set_config(config);
        assert_eq!(feed.config().media_limit, 9);
    }
}
