//! Platform-specific document fields.
//!
//! These are flattened into the [`Document`](crate::Document) output next to the
//! common fields, so no key here may collide with a common field name.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PlatformDetails {
    Twitter(TwitterDetails),
    Instagram(InstagramDetails),
    Tiktok(TiktokDetails),
    Facebook(FacebookDetails),
    Youtube(YoutubeDetails),
}

// --- Twitter ---

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TwitterDetails {
    /// Raw `created_at` string as sent by the API
    pub created_at: String,
    pub urls: Vec<String>,
    pub media: Vec<TweetMedia>,
    /// Language code reported by the API itself (`legacy.lang`)
    pub api_language: String,
    pub is_retweet: bool,
    pub is_quote: bool,
    pub conversation_id: String,
    pub source: String,
    pub possibly_sensitive: bool,
    pub geo: TweetGeo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TweetMedia {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TweetGeo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<TweetPlace>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TweetPlace {
    pub name: String,
    pub country: String,
    #[serde(rename = "type")]
    pub place_type: String,
}

// --- Instagram ---

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InstagramDetails {
    pub media_type: String,
    pub media_urls: Vec<MediaUrl>,
    pub is_video: bool,
    pub video_data: Option<InstagramVideoData>,
    pub location: InstagramLocation,
    pub has_liked: bool,
    pub can_see_insights_as_brand: bool,
    pub code: String,
    pub filter_type: i64,
    pub lng: Option<f64>,
    pub lat: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaUrl {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub width: u64,
    pub height: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_name: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InstagramVideoData {
    pub duration: f64,
    pub view_count: u64,
    pub play_count: u64,
    pub has_audio: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InstagramLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
}

// --- TikTok ---

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TiktokDetails {
    /// Raw `createTime` value
    pub created_time: Value,
    pub video_data: TiktokVideo,
    pub music_info: TiktokMusic,
    pub challenges: Vec<TiktokChallenge>,
    pub effects: Vec<TiktokEffect>,
    pub category: String,
    pub engagement_rate: f64,
    pub is_ad: bool,
    pub duet_enabled: bool,
    pub stitch_enabled: bool,
    pub comment_enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TiktokVideo {
    pub duration: u64,
    pub height: u64,
    pub width: u64,
    pub ratio: String,
    pub bitrate: u64,
    pub format: String,
    pub quality: String,
    pub codec: String,
    pub cover: String,
    pub dynamic_cover: String,
    pub play_url: String,
    pub download_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TiktokMusic {
    pub id: String,
    pub title: String,
    pub author: String,
    pub original: bool,
    pub duration: u64,
    pub play_url: String,
    pub cover: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TiktokChallenge {
    pub id: String,
    pub title: String,
    pub desc: String,
    pub cover: String,
    pub is_commerce: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TiktokEffect {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub owner_id: String,
    pub owner_username: String,
}

// --- Facebook ---

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FacebookDetails {
    pub content_rich: String,
    /// Raw unix `timestamp` value
    pub created_timestamp: Value,
    pub url: String,
    /// `{reaction}_percentage` keys, relative to the post's `reactions_count`
    pub reaction_breakdown: BTreeMap<String, f64>,
    pub total_engagements: u64,
    pub external_urls: Vec<String>,
    pub media_info: FacebookMediaInfo,
    pub post_type: String,
    pub metadata: FacebookMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FacebookMediaInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<FacebookImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<FacebookVideo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_files: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_preview: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_thumbnail: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FacebookImage {
    pub url: String,
    pub width: u64,
    pub height: u64,
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FacebookVideo {
    pub url: String,
    pub thumbnail: String,
    pub duration: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FacebookMetadata {
    pub author_title: Value,
    pub comments_id: String,
    pub shares_id: String,
    pub text_format_metadata: Value,
}

// --- YouTube ---

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YoutubeDetails {
    pub title: String,
    pub description: String,
    pub published_time_text: String,
    pub url: String,
    pub duration_seconds: u64,
    pub duration_formatted: String,
    pub thumbnails: Vec<Thumbnail>,
    pub moving_thumbnails: Value,
    pub badges: Value,
    pub is_live: bool,
    pub category: String,
    pub content_type: String,
}

impl Default for YoutubeDetails {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            published_time_text: String::new(),
            url: String::new(),
            duration_seconds: 0,
            duration_formatted: "00:00".to_string(),
            thumbnails: Vec::new(),
            moving_thumbnails: Value::Array(Vec::new()),
            badges: Value::Array(Vec::new()),
            is_live: false,
            category: "general".to_string(),
            content_type: "video".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Thumbnail {
    pub url: String,
    pub width: u64,
    pub height: u64,
}
