use serde::{Deserialize, Serialize};

/// One post entry from the feed: enough to build a permalink and a thumbnail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub code: String,
    pub thumbnail_url: String,
    pub likes_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstagramProfile {
    pub username: String,
    pub full_name: String,
    pub biography: String,
    pub profile_pic_url: String,
    pub posts_count: u64,
    pub followers_count: u64,
    pub following_count: u64,
    pub is_private: bool,
}

/// Parsed response for one handle: profile metadata plus the media items
/// in the order the endpoint returned them. Rebuilt on every fetch,
/// never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileFeed {
    pub profile: InstagramProfile,
    pub media: Vec<MediaItem>,
}
