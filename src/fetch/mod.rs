pub mod instagram;

pub use instagram::{FeedError, FeedFetcher};
