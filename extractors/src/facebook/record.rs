use serde_json::Value;
use socmed_types::details::{
    FacebookDetails, FacebookImage, FacebookMediaInfo, FacebookMetadata, FacebookVideo,
};
use socmed_types::{Author, ExtractionError, FacebookMetrics, Metrics, PlatformDetails};
use std::collections::BTreeMap;

use crate::document::DocumentParts;
use crate::enrichment::text::extract_urls;
use crate::raw::{as_count, body_text, require_object, RawExt};
use crate::timestamps::positive_epoch_timestamp;

/// Post-type checks in priority order. The first truthy key decides.
const POST_TYPE_PRIORITY: &[(&str, &str)] = &[
    ("video", "video"),
    ("video_files", "video"),
    ("image", "image"),
    ("album_preview", "album"),
    ("external_url", "link"),
    ("attached_post", "shared_post"),
    ("attached_event", "event"),
];

/// Typed view of one search-result post
#[derive(Debug, Clone)]
pub struct PostRecord {
    pub post_id: String,
    pub message: String,
    pub timestamp: String,
    pub author: Author,
    /// Reaction counts by type, in source order
    pub reactions: Vec<(String, u64)>,
    pub metrics: FacebookMetrics,
    pub details: FacebookDetails,
}

impl PostRecord {
    pub fn decode(post: &Value) -> Result<Self, ExtractionError> {
        require_object(post)?;

        let message = body_text(post, "message")?;
        let created = post.get("timestamp").cloned().unwrap_or(Value::from(0));

        let reactions: Vec<(String, u64)> = post
            .field("reactions")
            .as_object()
            .map(|map| map.iter().map(|(k, v)| (k.clone(), as_count(v))).collect())
            .unwrap_or_default();
        let reaction = |name: &str| {
            reactions
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, c)| *c)
                .unwrap_or(0)
        };

        let metrics = FacebookMetrics {
            reactions_count: post.count("reactions_count"),
            comments_count: post.count("comments_count"),
            shares_count: post.count("reshare_count"),
            like_count: reaction("like"),
            love_count: reaction("love"),
            wow_count: reaction("wow"),
            haha_count: reaction("haha"),
            sad_count: reaction("sad"),
            angry_count: reaction("angry"),
            care_count: reaction("care"),
        };

        let details = FacebookDetails {
            content_rich: post
                .str_field("message_rich")
                .map(str::to_string)
                .unwrap_or_else(|| message.clone()),
            created_timestamp: created.clone(),
            url: post.text("url"),
            reaction_breakdown: reaction_breakdown(&reactions, metrics.reactions_count),
            total_engagements: metrics
                .reactions_count
                .saturating_add(metrics.comments_count)
                .saturating_add(metrics.shares_count),
            external_urls: external_urls(post, &message),
            media_info: media_info(post),
            post_type: determine_post_type(post).to_string(),
            metadata: FacebookMetadata {
                author_title: post.field("author_title").clone(),
                comments_id: post.id_text("comments_id"),
                shares_id: post.id_text("shares_id"),
                text_format_metadata: post.field("text_format_metadata").clone(),
            },
        };

        let author = post.field("author");
        Ok(Self {
            post_id: post.id_text("post_id"),
            message,
            timestamp: positive_epoch_timestamp(Some(&created)),
            author: Author {
                id: Some(author.id_text("id")),
                name: Some(author.text("name")),
                url: Some(author.text("url")),
                profile_image_url: Some(author.text("profile_picture_url")),
                ..Default::default()
            },
            reactions,
            metrics,
            details,
        })
    }

    pub fn into_parts(self) -> DocumentParts {
        DocumentParts {
            platform_id: self.post_id,
            content: self.message,
            author: self.author,
            timestamp: self.timestamp,
            metrics: Metrics::Facebook(self.metrics),
            details: PlatformDetails::Facebook(self.details),
        }
    }
}

pub fn determine_post_type(post: &Value) -> &'static str {
    POST_TYPE_PRIORITY
        .iter()
        .find(|(key, _)| post.truthy(key))
        .map(|(_, kind)| *kind)
        .unwrap_or("text")
}

/// `{reaction}_percentage` shares of the reported total, 2 decimals
fn reaction_breakdown(reactions: &[(String, u64)], total: u64) -> BTreeMap<String, f64> {
    if total == 0 {
        return BTreeMap::new();
    }

    reactions
        .iter()
        .map(|(name, count)| {
            let pct = (*count as f64 / total as f64 * 100.0 * 100.0).round() / 100.0;
            (format!("{}_percentage", name), pct)
        })
        .collect()
}

fn external_urls(post: &Value, message: &str) -> Vec<String> {
    let mut urls: Vec<String> = ["external_url", "attached_post_url"]
        .iter()
        .filter_map(|key| post.str_field(key))
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect();
    urls.extend(extract_urls(message));
    urls
}

fn media_info(post: &Value) -> FacebookMediaInfo {
    let present = |key: &str| post.get(key).filter(|v| v.is_truthy());

    FacebookMediaInfo {
        image: present("image").map(|image| FacebookImage {
            url: image.text("uri"),
            width: image.count("width"),
            height: image.count("height"),
            id: image.id_text("id"),
        }),
        video: present("video").map(|video| FacebookVideo {
            url: video.text("url"),
            thumbnail: video.text("thumbnail"),
            duration: video.float("duration").unwrap_or(0.0),
        }),
        video_files: present("video_files").cloned(),
        album_preview: present("album_preview").cloned(),
        video_thumbnail: present("video_thumbnail").cloned(),
    }
}
