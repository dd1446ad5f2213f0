use serde_json::Value;
use socmed_types::details::{Thumbnail, YoutubeDetails};
use socmed_types::{Author, ExtractionError, Metrics, PlatformDetails, YoutubeMetrics};

use crate::document::DocumentParts;
use crate::raw::{body_text, require_object, RawExt};
use crate::timestamps::{format_duration, relative_timestamp};

const WATCH_URL: &str = "https://www.youtube.com/watch?v=";

/// Typed view of one search-result video
#[derive(Debug, Clone)]
pub struct YoutubeVideoRecord {
    pub video_id: String,
    pub title: String,
    pub description: String,
    pub timestamp: String,
    pub author: Author,
    pub metrics: YoutubeMetrics,
    pub details: YoutubeDetails,
}

impl YoutubeVideoRecord {
    /// Decode an item. `details.category` keeps its default for the caller to set.
    pub fn decode(video: &Value) -> Result<Self, ExtractionError> {
        require_object(video)?;

        let video_id = video_id(video);
        let title = body_text(video, "title")?;
        let description = video.text("descriptionSnippet");
        let published = video.text("publishedTimeText");
        let duration_seconds = video.count("lengthSeconds");

        let details = YoutubeDetails {
            title: title.clone(),
            description: description.clone(),
            published_time_text: published.clone(),
            url: if video_id.is_empty() {
                String::new()
            } else {
                format!("{}{}", WATCH_URL, video_id)
            },
            duration_seconds,
            duration_formatted: format_duration(duration_seconds),
            thumbnails: video
                .items_at(&["thumbnails"])
                .iter()
                .map(|thumb| Thumbnail {
                    url: thumb.text("url"),
                    width: thumb.count("width"),
                    height: thumb.count("height"),
                })
                .collect(),
            moving_thumbnails: list_or_empty(video, "movingThumbnails"),
            badges: list_or_empty(video, "badges"),
            is_live: video.flag("isLiveNow", false),
            ..Default::default()
        };

        Ok(Self {
            video_id,
            title,
            description,
            timestamp: relative_timestamp(&published),
            author: decode_channel(video.field("author")),
            metrics: YoutubeMetrics {
                view_count: video.field("stats").count("views"),
            },
            details,
        })
    }

    /// Title and description joined, the text that gets enriched
    pub fn content(&self) -> String {
        format!("{} {}", self.title, self.description)
    }

    pub fn into_parts(self) -> DocumentParts {
        DocumentParts {
            content: self.content(),
            platform_id: self.video_id,
            author: self.author,
            timestamp: self.timestamp,
            metrics: Metrics::Youtube(self.metrics),
            details: PlatformDetails::Youtube(self.details),
        }
    }
}

/// `videoId`, else the watch endpoint, else the `v` parameter of `link`
fn video_id(video: &Value) -> String {
    let direct = video.text("videoId");
    if !direct.is_empty() {
        return direct;
    }

    let endpoint = video
        .field("navigationEndpoint")
        .field("watchEndpoint")
        .text("videoId");
    if !endpoint.is_empty() {
        return endpoint;
    }

    video
        .str_field("link")
        .and_then(|link| link.split_once("watch?v="))
        .and_then(|(_, rest)| rest.split('&').next())
        .unwrap_or_default()
        .to_string()
}

fn list_or_empty(video: &Value, key: &str) -> Value {
    video
        .get(key)
        .filter(|v| !v.is_null())
        .cloned()
        .unwrap_or_else(|| Value::Array(Vec::new()))
}

fn decode_channel(author: &Value) -> Author {
    let badges = list_or_empty(author, "badges");
    let is_verified = badges.items_at(&[]).iter().any(|badge| {
        badge.str_field("type") == Some("VERIFIED_CHANNEL") || badge.str_field("text") == Some("Verified")
    });

    // Highest avatar wins; the first one listed on a tie
    let avatar = author
        .items_at(&["avatar"])
        .iter()
        .fold(None::<&Value>, |best, candidate| match best {
            Some(b) if b.count("height") >= candidate.count("height") => Some(b),
            _ => Some(candidate),
        })
        .map(|a| a.text("url"))
        .unwrap_or_default();

    let username = author
        .str_field("canonicalBaseUrl")
        .map(|base| base.replace("/@", ""))
        .unwrap_or_default();

    Author {
        id: Some(author.id_text("channelId")),
        title: Some(author.text("title")),
        username: Some(username),
        profile_image_url: Some(avatar),
        badges: Some(badges),
        is_verified: Some(is_verified),
        ..Default::default()
    }
}
