use crate::config::FeedConfig;
use crate::models::instagram::{InstagramProfile, MediaItem, ProfileFeed};

pub const PROFILE_URL: &str = "https://www.instagram.com/";
pub const MEDIA_URL: &str = "https://www.instagram.com/p/";

const PRIVATE_NOTICE: &str = "<p class=\"profile-private\">This Account is Private</p>";

/// Map a fetched feed plus the active config to one HTML string.
/// Field values are interpolated verbatim, no escaping.
pub fn render_feed(feed: &ProfileFeed, config: &FeedConfig) -> String {
    let mut fragments: Vec<String> = Vec::new();

    if config.show_profile_info {
        fragments.push(config.wrap_html_items.wrap(&profile_block(&feed.profile)));
    }

    // A private account short-circuits: notice only, no media at all.
    if feed.profile.is_private {
        fragments.push(config.wrap_html_items.wrap(PRIVATE_NOTICE));
        return config.wrap_html.wrap(&fragments.concat());
    }

    for item in feed.media.iter().take(config.media_limit) {
        fragments.push(config.wrap_html_items.wrap(&media_block(item, config)));
    }

    config.wrap_html.wrap(&fragments.concat())
}

/// Fixed paragraph emitted when the feed could not be fetched and the
/// config asks for visible errors.
pub fn error_paragraph(handle: &str) -> String {
    format!(
        "<p class=\"instagram-feed-error\">Couldn't get a feed for username: {} </p>",
        handle
    )
}

fn profile_block(profile: &InstagramProfile) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push(format!(
        "<img class=\"profile-picture\" src=\"{}\">",
        profile.profile_pic_url
    ));

    parts.push(format!(
        "<p class=\"profile-username\"><a class=\"profile-username-link\" href=\"{}{}/\">{}</a></p>",
        PROFILE_URL, profile.username, profile.username
    ));

    let posts = format!(
        "<p class=\"profile-post-count\">{}<span class=\"profile-post-count-label\">posts</span></p>",
        profile.posts_count
    );
    let followers = format!(
        "<p class=\"profile-followers-count\">{}<span class=\"profile-followers-label\">followers</span></p>",
        profile.followers_count
    );
    let following = format!(
        "<p class=\"profile-following-count\">{}<span class=\"profile-following-label\">following</span></p>",
        profile.following_count
    );
    parts.push(format!(
        "<div class=\"profile-counts\">{}{}{}</div>",
        posts, followers, following
    ));

    parts.push(format!("<p class=\"profile-name\">{}</p>", profile.full_name));
    parts.push(format!(
        "<p class=\"profile-biography\">{}</p>",
        profile.biography
    ));

    format!("<div class=\"profile-item\">{}</div>", parts.concat())
}

fn media_block(item: &MediaItem, config: &FeedConfig) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push(format!(
        "<a class=\"media-link\" href=\"{}{}\" target=\"_blank\"></a>",
        MEDIA_URL, item.code
    ));
    parts.push(format!(
        "<img class=\"media-image\" src=\"{}\">",
        item.thumbnail_url
    ));

    if config.show_likes {
        parts.push(format!(
            "<p class=\"media-likes\"> {} {}</p>",
            item.likes_count, config.likes_label
        ));
    }

    format!("<div class=\"media-item\">{}</div>", parts.concat())
}
