use std::time::Duration;

use log::{error, info};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crate::models::instagram::{InstagramProfile, MediaItem, ProfileFeed};

pub const FEED_URL: &str = "https://www.instagram.com/";
pub const QUERY_STRING: &str = "/?__a=1";

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:109.0) Gecko/20100101 Firefox/115.0";

/// Every variant collapses into the same user-visible outcome (feed
/// unavailable); they are distinguished for logging only.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {0}")]
    Status(StatusCode),

    #[error("Malformed feed body")]
    Malformed,
}

/// Issues one blocking GET per call against the unofficial `?__a=1`
/// endpoint. No retry, no caching.
pub struct FeedFetcher {
    client: Client,
}

impl FeedFetcher {
    pub fn new() -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(DEFAULT_USER_AGENT)
            .build()?;

        Ok(Self { client })
    }

    pub fn fetch(&self, handle: &str) -> Result<ProfileFeed, FeedError> {
        let url = feed_url(handle);
        info!("Fetching feed for {}", handle);

        // Status is checked on the response of this request, nothing shared.
        let response = self.client.get(&url).send()?;
        let status = response.status();
        if status != StatusCode::OK {
            error!("Feed request for {} returned status {}", handle, status);
            return Err(FeedError::Status(status));
        }

        let body = response.text()?;
        let json: Value = serde_json::from_str(&body).map_err(|e| {
            error!("Feed body for {} is not JSON: {}", handle, e);
            FeedError::Malformed
        })?;

        parse_feed(&json).ok_or_else(|| {
            error!("Feed body for {} is missing expected fields", handle);
            FeedError::Malformed
        })
    }
}

pub fn feed_url(handle: &str) -> String {
    format!("{}{}{}", FEED_URL, handle, QUERY_STRING)
}

/// Walk the fixed paths of the `?__a=1` document. Any missing required
/// path makes the whole body malformed; there is no partial result.
pub fn parse_feed(json: &Value) -> Option<ProfileFeed> {
    let user = json.get("user")?;

    let profile = InstagramProfile {
        username: user.get("username")?.as_str()?.to_string(),
        full_name: user.get("full_name")?.as_str()?.to_string(),
        biography: user.get("biography")?.as_str()?.to_string(),
        profile_pic_url: user
            .get("profile_pic_url_hd")
            .or_else(|| user.get("profile_pic_url"))?
            .as_str()?
            .to_string(),
        posts_count: user.get("media")?.get("count")?.as_u64()?,
        followers_count: user.get("followed_by")?.get("count")?.as_u64()?,
        following_count: user.get("follows")?.get("count")?.as_u64()?,
        is_private: user.get("is_private")?.as_bool()?,
    };

    let nodes = user.get("media")?.get("nodes")?.as_array()?;
    let mut media = Vec::with_capacity(nodes.len());
    for node in nodes {
        media.push(parse_media_node(node)?);
    }

    Some(ProfileFeed { profile, media })
}

fn parse_media_node(node: &Value) -> Option<MediaItem> {
    Some(MediaItem {
        code: node.get("code")?.as_str()?.to_string(),
        thumbnail_url: node.get("thumbnail_src")?.as_str()?.to_string(),
        likes_count: node.get("likes")?.get("count")?.as_u64()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixture() -> Value {
        json!({
            "user": {
                "username": "alice",
                "full_name": "Alice Example",
                "biography": "Pictures of things",
                "profile_pic_url_hd": "https://cdn.example.com/alice_hd.jpg",
                "profile_pic_url": "https://cdn.example.com/alice.jpg",
                "is_private": false,
                "followed_by": { "count": 1200 },
                "follows": { "count": 340 },
                "media": {
                    "count": 87,
                    "nodes": [
                        {
                            "code": "AbC123",
                            "thumbnail_src": "https://cdn.example.com/t1.jpg",
                            "likes": { "count": 42 }
                        },
                        {
                            "code": "DeF456",
                            "thumbnail_src": "https://cdn.example.com/t2.jpg",
                            "likes": { "count": 7 }
                        }
                    ]
                }
            }
        })
    }

    #[test]
    fn builds_endpoint_url_from_handle() {
        assert_eq!(feed_url("alice"), "https://www.instagram.com/alice/?__a=1");
    }

    #[test]
    fn parses_profile_and_media_in_order() {
        let feed = parse_feed(&fixture()).unwrap();
        assert_eq!(feed.profile.username, "alice");
        assert_eq!(feed.profile.full_name, "Alice Example");
        assert_eq!(feed.profile.posts_count, 87);
        assert_eq!(feed.profile.followers_count, 1200);
        assert_eq!(feed.profile.following_count, 340);
        assert!(!feed.profile.is_private);
        assert_eq!(
            feed.profile.profile_pic_url,
            "https://cdn.example.com/alice_hd.jpg"
        );
        assert_eq!(feed.media.len(), 2);
        assert_eq!(feed.media[0].code, "AbC123");
        assert_eq!(feed.media[0].likes_count, 42);
        assert_eq!(feed.media[1].code, "DeF456");
    }

    #[test]
    fn falls_back_to_standard_profile_pic() {
        let mut json = fixture();
        json["user"]
            .as_object_mut()
            .unwrap()
            .remove("profile_pic_url_hd");
        let feed = parse_feed(&json).unwrap();
        assert_eq!(feed.profile.profile_pic_url, "https://cdn.example.com/alice.jpg");
    }

    #[test]
    fn missing_required_path_is_malformed() {
        let mut json = fixture();
        json["user"].as_object_mut().unwrap().remove("followed_by");
        assert!(parse_feed(&json).is_none());

        let mut json = fixture();
        json["user"]["media"]["nodes"][1]
            .as_object_mut()
            .unwrap()
            .remove("code");
        assert!(parse_feed(&json).is_none());
    }

    #[test]
    fn non_object_body_is_malformed() {
        assert!(parse_feed(&json!([1, 2, 3])).is_none());
        assert!(parse_feed(&json!({"graphql": {}})).is_none());
    }
}
