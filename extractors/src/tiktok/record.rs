use serde_json::Value;
use socmed_types::details::{TiktokChallenge, TiktokDetails, TiktokEffect, TiktokMusic, TiktokVideo};
use socmed_types::{Author, ExtractionError, Metrics, PlatformDetails, TiktokMetrics};

use crate::document::DocumentParts;
use crate::raw::{body_text, require_object, RawExt};
use crate::timestamps::positive_epoch_timestamp;

/// Typed view of one search-result video item
#[derive(Debug, Clone)]
pub struct VideoRecord {
    pub id: String,
    pub desc: String,
    pub timestamp: String,
    pub author: Author,
    pub metrics: TiktokMetrics,
    pub details: TiktokDetails,
}

impl VideoRecord {
    /// Decode an item. `details.category` is left empty for the caller to fill.
    pub fn decode(video: &Value) -> Result<Self, ExtractionError> {
        require_object(video)?;

        let desc = body_text(video, "desc")?;
        let create_time = video.get("createTime").cloned().unwrap_or(Value::from(0));

        let stats = video.field("stats");
        let metrics = TiktokMetrics {
            view_count: stats.count("playCount"),
            like_count: stats.count("diggCount"),
            comment_count: stats.count("commentCount"),
            share_count: stats.count("shareCount"),
            download_count: stats.count("downloadCount"),
            collect_count: stats.count("collectCount"),
        };

        let details = TiktokDetails {
            created_time: create_time.clone(),
            video_data: decode_video(video.field("video")),
            music_info: decode_music(video.field("music")),
            challenges: video
                .items_at(&["challenges"])
                .iter()
                .map(|c| TiktokChallenge {
                    id: c.id_text("id"),
                    title: c.text("title"),
                    desc: c.text("desc"),
                    cover: c.text("coverLarger"),
                    is_commerce: c.flag("isCommerce", false),
                })
                .collect(),
            effects: video
                .items_at(&["effectStickers"])
                .iter()
                .map(|e| TiktokEffect {
                    id: e.id_text("ID"),
                    name: e.text("name"),
                    icon: e.text("iconUrl"),
                    owner_id: e.id_text("ownerId"),
                    owner_username: e.text("ownerUsername"),
                })
                .collect(),
            category: String::new(),
            engagement_rate: engagement_rate(&metrics),
            is_ad: video.flag("isAd", false),
            duet_enabled: video.flag("duetEnabled", true),
            stitch_enabled: video.flag("stitchEnabled", true),
            comment_enabled: !video.flag("commentDisabled", false),
        };

        Ok(Self {
            id: video.id_text("id"),
            desc,
            timestamp: positive_epoch_timestamp(Some(&create_time)),
            author: decode_author(video.field("author")),
            metrics,
            details,
        })
    }

    pub fn into_parts(self) -> DocumentParts {
        DocumentParts {
            platform_id: self.id,
            content: self.desc,
            author: self.author,
            timestamp: self.timestamp,
            metrics: Metrics::Tiktok(self.metrics),
            details: PlatformDetails::Tiktok(self.details),
        }
    }
}

/// (likes + comments + shares) / views as a percentage, 2 decimals
pub fn engagement_rate(metrics: &TiktokMetrics) -> f64 {
    if metrics.view_count == 0 {
        return 0.0;
    }
    let engaged = [metrics.like_count, metrics.comment_count, metrics.share_count]
        .into_iter()
        .fold(0u64, u64::saturating_add);
    round2(engaged as f64 / metrics.view_count as f64 * 100.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn first_text(value: &Value, keys: &[&str]) -> String {
    keys.iter()
        .filter_map(|key| value.str_field(key))
        .find(|s| !s.is_empty())
        .unwrap_or_default()
        .to_string()
}

fn decode_author(author: &Value) -> Author {
    Author {
        id: Some(author.id_text("id")),
        username: Some(author.text("uniqueId")),
        display_name: Some(author.text("nickname")),
        followers_count: Some(author.count("followerCount")),
        following_count: Some(author.count("followingCount")),
        verified: Some(author.flag("verified", false)),
        profile_image_url: Some(first_text(author, &["avatarLarger", "avatarMedium"])),
        signature: Some(author.text("signature")),
        is_private: Some(author.flag("privateAccount", false)),
        ..Default::default()
    }
}

fn decode_video(video: &Value) -> TiktokVideo {
    TiktokVideo {
        duration: video.count("duration"),
        height: video.count("height"),
        width: video.count("width"),
        ratio: video.text("ratio"),
        bitrate: video.count("bitrate"),
        format: video.text("format"),
        quality: video.text("videoQuality"),
        codec: video.text("codecType"),
        cover: video.text("cover"),
        dynamic_cover: video.text("dynamicCover"),
        play_url: video.text("playAddr"),
        download_url: video.text("downloadAddr"),
    }
}

fn decode_music(music: &Value) -> TiktokMusic {
    TiktokMusic {
        id: music.id_text("id"),
        title: music.text("title"),
        author: music.text("authorName"),
        original: music.flag("original", false),
        duration: music.count("duration"),
        play_url: music.text("playUrl"),
        cover: first_text(music, &["coverLarge", "coverMedium"]),
    }
}
