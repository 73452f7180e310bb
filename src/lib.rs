//! HTML feed generation for public Instagram profiles, without the
//! official API: one GET against the unofficial `?__a=1` endpoint, then
//! string concatenation into a configurable markup fragment.

pub mod config;
mod feed;
pub mod fetch;
pub mod models;
pub mod render;

pub use config::{FeedConfig, FeedConfigOverrides, Wrap};
pub use feed::InstagramFeed;
pub use fetch::FeedError;
