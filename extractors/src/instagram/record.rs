use serde_json::Value;
use socmed_types::details::{InstagramDetails, InstagramLocation, InstagramVideoData, MediaUrl};
use socmed_types::{Author, ExtractionError, InstagramMetrics, Metrics, PlatformDetails};

use crate::document::DocumentParts;
use crate::raw::{require_object, RawExt};
use crate::timestamps::{epoch_timestamp, now_rfc3339};

/// Media types that count as video content
const VIDEO_TYPES: &[&str] = &["clips", "video", "reel"];

/// Typed view of one media object from the media grid
#[derive(Debug, Clone)]
pub struct MediaRecord {
    pub id: String,
    pub caption: String,
    pub timestamp: String,
    pub author: Author,
    pub metrics: InstagramMetrics,
    pub details: InstagramDetails,
}

impl MediaRecord {
    pub fn decode(media: &Value) -> Result<Self, ExtractionError> {
        require_object(media)?;

        let id = if media.get("id").is_some() {
            media.id_text("id")
        } else {
            media.id_text("pk")
        };
        let caption = decode_caption(media)?;

        let taken_at = media.get("taken_at").or_else(|| media.get("device_timestamp"));
        let timestamp = match taken_at {
            Some(value) => epoch_timestamp(Some(value)),
            None => now_rfc3339(),
        };

        let metrics = InstagramMetrics {
            like_count: media.count("like_count"),
            comment_count: media.count("comment_count"),
            play_count: media.count("play_count"),
            repost_count: media.count("media_repost_count"),
            share_count: media.count("reshare_count"),
        };

        let media_type = determine_media_type(media);
        let is_video = VIDEO_TYPES.contains(&media_type);
        let video_data = is_video.then(|| InstagramVideoData {
            duration: media.float("video_duration").unwrap_or(0.0),
            view_count: media.count("view_count"),
            play_count: media.count("play_count"),
            has_audio: media.flag("has_audio", true),
        });

        let details = InstagramDetails {
            media_type: media_type.to_string(),
            media_urls: media_urls(media),
            is_video,
            video_data,
            location: decode_location(media),
            has_liked: media.flag("has_liked", false),
            can_see_insights_as_brand: media.flag("can_see_insights_as_brand", false),
            code: media.text("code"),
            filter_type: media.get("filter_type").and_then(Value::as_i64).unwrap_or(0),
            lng: media.float("lng"),
            lat: media.float("lat"),
        };

        Ok(Self {
            id,
            caption,
            timestamp,
            author: decode_author(media),
            metrics,
            details,
        })
    }

    pub fn into_parts(self) -> DocumentParts {
        DocumentParts {
            platform_id: self.id,
            content: self.caption,
            author: self.author,
            timestamp: self.timestamp,
            metrics: Metrics::Instagram(self.metrics),
            details: PlatformDetails::Instagram(self.details),
        }
    }
}

/// Caption text. The first caption key present decides the source.
fn decode_caption(media: &Value) -> Result<String, ExtractionError> {
    if let Some(caption) = media.get("caption") {
        return match caption {
            Value::Null => Ok(String::new()),
            Value::String(text) => Ok(text.clone()),
            Value::Object(_) => Ok(caption.text("text")),
            other => Err(ExtractionError::ParseError(format!(
                "caption should be text or an object, found {}",
                other
            ))),
        };
    }

    if let Some(edges) = media.get("edge_media_to_caption") {
        return Ok(edges
            .items_at(&["edges"])
            .first()
            .map(|edge| edge.field("node").text("text"))
            .unwrap_or_default());
    }

    Ok(media.text("accessibility_caption"))
}

fn decode_author(media: &Value) -> Author {
    let user = media
        .object_field("user")
        .unwrap_or_else(|| media.field("owner"));

    let id = if user.get("pk").is_some() {
        user.id_text("pk")
    } else {
        user.id_text("id")
    };
    let display_name = user
        .str_field("full_name")
        .map(str::to_string)
        .unwrap_or_else(|| user.text("name"));

    Author {
        id: Some(id),
        username: Some(user.text("username")),
        display_name: Some(display_name),
        followers_count: Some(user.count("follower_count")),
        following_count: Some(user.count("following_count")),
        verified: Some(user.flag("is_verified", false)),
        profile_image_url: Some(user.text("profile_pic_url")),
        is_private: Some(user.flag("is_private", false)),
        is_business: Some(user.flag("is_business_account", false)),
        biography: Some(user.text("biography")),
        ..Default::default()
    }
}

/// Classify the media. Checks run in a fixed priority order.
pub fn determine_media_type(media: &Value) -> &'static str {
    if media.truthy("video_duration") || media.truthy("is_video") || media.get("video_url").is_some()
    {
        return "video";
    }

    match media.get("media_type").and_then(Value::as_i64) {
        Some(1) => return "image",
        Some(2) => return "video",
        Some(8) => return "carousel",
        _ => {}
    }

    let typename = media.str_field("__typename").unwrap_or_default();
    if typename.contains("Video") {
        return "video";
    }
    if typename.contains("Image") {
        return "image";
    }

    if media.to_string().to_lowercase().contains("clips") {
        return "clips";
    }

    "image"
}

fn media_urls(media: &Value) -> Vec<MediaUrl> {
    let mut urls: Vec<MediaUrl> = media
        .items_at(&["image_versions2", "candidates"])
        .iter()
        .map(|candidate| MediaUrl {
            kind: "image".to_string(),
            url: candidate.text("url"),
            width: candidate.count("width"),
            height: candidate.count("height"),
            type_name: None,
        })
        .collect();

    if let Some(versions) = media.get("video_versions") {
        let versions = versions.as_array().map(Vec::as_slice).unwrap_or(&[]);
        urls.extend(versions.iter().map(|version| MediaUrl {
            kind: "video".to_string(),
            url: version.text("url"),
            width: version.count("width"),
            height: version.count("height"),
            type_name: Some(version.get("type").cloned().unwrap_or_else(|| Value::from(""))),
        }));
    } else if let Some(display_url) = media.str_field("display_url") {
        let dimensions = media.field("dimensions");
        urls.push(MediaUrl {
            kind: "image".to_string(),
            url: display_url.to_string(),
            width: dimensions.count("width"),
            height: dimensions.count("height"),
            type_name: None,
        });
    }

    urls
}

fn decode_location(media: &Value) -> InstagramLocation {
    if let Some(location) = media.get("location").filter(|l| l.is_truthy()) {
        return InstagramLocation {
            id: Some(location.get("pk").cloned().unwrap_or_else(|| Value::from(""))),
            name: Some(location.text("name")),
            short_name: Some(location.text("short_name")),
            address: Some(location.text("address")),
            city: Some(location.text("city")),
            lng: location.float("lng"),
            lat: location.float("lat"),
        };
    }

    if media.get("lng").is_some() && media.get("lat").is_some() {
        return InstagramLocation {
            lng: media.float("lng"),
            lat: media.float("lat"),
            ..Default::default()
        };
    }

    InstagramLocation::default()
}
