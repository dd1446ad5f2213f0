use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use ts_rs::TS;

use crate::details::PlatformDetails;
use crate::{ExtractionError, Platform};

/// Canonical, platform-agnostic record ready for indexing.
///
/// Serializes as one flat JSON object: the common fields, then the
/// platform-specific fields from [`PlatformDetails`], then any fields added by
/// the caller through [`Document::with_field`].
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    platform: Platform,
    platform_id: String,
    content: String,
    author: Author,
    timestamp: String,
    metrics: Metrics,
    hashtags: Vec<String>,
    mentions: Vec<String>,
    sentiment: Sentiment,
    emotions: Vec<Emotion>,
    language: Language,
    #[serde(flatten)]
    details: PlatformDetails,
    analyzed_at: String,
    raw_data: Value,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

/// Content-derived fields applied to a document while it is being built
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Analysis {
    pub hashtags: Vec<String>,
    pub mentions: Vec<String>,
    pub sentiment: Sentiment,
    pub emotions: Vec<Emotion>,
    pub language: Language,
}

impl Document {
    /// Start a document with empty enrichment. Timestamps default to now.
    pub fn new(
        platform: Platform,
        platform_id: String,
        content: String,
        metrics: Metrics,
        details: PlatformDetails,
        raw_data: Value,
    ) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            platform,
            platform_id,
            content,
            author: Author::default(),
            timestamp: now.clone(),
            metrics,
            hashtags: Vec::new(),
            mentions: Vec::new(),
            sentiment: Sentiment::Neutral,
            emotions: Vec::new(),
            language: Language::Unknown,
            details,
            analyzed_at: now,
            raw_data,
            extra: BTreeMap::new(),
        }
    }

    pub fn with_author(mut self, author: Author) -> Self {
        self.author = author;
        self
    }

    /// Publication time as RFC 3339
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    pub fn with_analysis(mut self, analysis: Analysis) -> Self {
        self.hashtags = analysis.hashtags;
        self.mentions = analysis.mentions;
        self.sentiment = analysis.sentiment;
        self.emotions = analysis.emotions;
        self.language = analysis.language;
        self
    }

    /// Attach a new top-level field, e.g. a `source_socmed` tag.
    ///
    /// Existing fields can never be replaced; asking for one returns
    /// [`ExtractionError::ReservedField`].
    pub fn with_field(
        mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Self, ExtractionError> {
        let key = key.into();
        let current =
            serde_json::to_value(&self).map_err(|e| ExtractionError::ParseError(e.to_string()))?;

        if current.get(key.as_str()).is_some() {
            return Err(ExtractionError::ReservedField(key));
        }

        self.extra.insert(key, value.into());
        Ok(self)
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn platform_id(&self) -> &str {
        &self.platform_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn hashtags(&self) -> &[String] {
        &self.hashtags
    }

    pub fn mentions(&self) -> &[String] {
        &self.mentions
    }

    pub fn sentiment(&self) -> Sentiment {
        self.sentiment
    }

    pub fn emotions(&self) -> &[Emotion] {
        &self.emotions
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn details(&self) -> &PlatformDetails {
        &self.details
    }

    pub fn analyzed_at(&self) -> &str {
        &self.analyzed_at
    }

    pub fn raw_data(&self) -> &Value {
        &self.raw_data
    }

    /// Fields added by the caller after extraction
    pub fn extra_fields(&self) -> &BTreeMap<String, Value> {
        &self.extra
    }
}

/// Author or channel information. Keys are the union of what the platforms
/// provide; whatever a platform lacks is left out of the output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Author {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followers_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub following_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friends_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_business: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badges: Option<Value>,
}

/// Engagement counters. Each platform reports its own set; they are not
/// merged into a shared superset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Metrics {
    Twitter(TwitterMetrics),
    Instagram(InstagramMetrics),
    Tiktok(TiktokMetrics),
    Facebook(FacebookMetrics),
    Youtube(YoutubeMetrics),
}

impl Metrics {
    /// Headline engagement used in reports. Each platform counts its own signals.
    pub fn engagement(&self) -> u64 {
        match self {
            Metrics::Twitter(m) => m.like_count.saturating_add(m.retweet_count),
            Metrics::Instagram(m) => m.like_count.saturating_add(m.comment_count),
            Metrics::Tiktok(m) => m.like_count.saturating_add(m.share_count),
            Metrics::Facebook(m) => m.reactions_count.saturating_add(m.comments_count),
            Metrics::Youtube(m) => m.view_count,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
pub struct TwitterMetrics {
    pub like_count: u64,
    pub retweet_count: u64,
    pub reply_count: u64,
    pub quote_count: u64,
    pub bookmark_count: u64,
    pub view_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
pub struct InstagramMetrics {
    pub like_count: u64,
    pub comment_count: u64,
    pub play_count: u64,
    pub repost_count: u64,
    pub share_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
pub struct TiktokMetrics {
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
    pub share_count: u64,
    pub download_count: u64,
    pub collect_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
pub struct FacebookMetrics {
    pub reactions_count: u64,
    pub comments_count: u64,
    pub shares_count: u64,
    pub like_count: u64,
    pub love_count: u64,
    pub wow_count: u64,
    pub haha_count: u64,
    pub sad_count: u64,
    pub angry_count: u64,
    pub care_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
pub struct YoutubeMetrics {
    pub view_count: u64,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Id,
    Mixed,
    #[default]
    Unknown,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Id => "id",
            Language::Mixed => "mixed",
            Language::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Love,
    Anger,
    Sadness,
    Fear,
    Surprise,
    Excitement,
    Gratitude,
    Inspiration,
    Humor,
    Creativity,
    Energy,
    Curiosity,
    Nostalgia,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::details::YoutubeDetails;

    fn sample_document() -> Document {
        Document::new(
            Platform::Youtube,
            "abc123".to_string(),
            "Great video".to_string(),
            Metrics::Youtube(YoutubeMetrics { view_count: 42 }),
            PlatformDetails::Youtube(YoutubeDetails::default()),
            serde_json::json!({"videoId": "abc123"}),
        )
    }

    #[test]
    fn test_document_serializes_flat() {
        let doc = sample_document();
        let json = serde_json::to_value(&doc).unwrap();

        assert_eq!(json["platform"], "youtube");
        assert_eq!(json["metrics"]["view_count"], 42);
        assert_eq!(json["sentiment"], "neutral");
        assert_eq!(json["language"], "unknown");
        // platform details land at the top level
        assert_eq!(json["content_type"], "video");
        assert!(json.get("details").is_none());
        assert_eq!(json["raw_data"]["videoId"], "abc123");
    }

    #[test]
    fn test_author_skips_missing_keys() {
        let author = Author {
            id: Some("1".to_string()),
            verified: Some(true),
            ..Default::default()
        };
        let json = serde_json::to_value(&author).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["id", "verified"]);
    }

    #[test]
    fn test_with_field_adds_tag() {
        let doc = sample_document().with_field("source_socmed", "youtube").unwrap();
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["source_socmed"], "youtube");
        assert_eq!(doc.extra_fields().len(), 1);
    }

    #[test]
    fn test_with_field_rejects_existing_keys() {
        let result = sample_document().with_field("platform_id", "other");
        assert!(matches!(result, Err(ExtractionError::ReservedField(key)) if key == "platform_id"));

        // platform-specific keys are protected too
        let result = sample_document().with_field("duration_formatted", "99:99");
        assert!(matches!(result, Err(ExtractionError::ReservedField(_))));

        let tagged = sample_document().with_field("source_socmed", "youtube").unwrap();
        assert!(tagged.with_field("source_socmed", "again").is_err());
    }

    #[test]
    fn test_engagement_per_platform() {
        let tweet = Metrics::Twitter(TwitterMetrics {
            like_count: 5,
            retweet_count: 2,
            reply_count: 100,
            ..Default::default()
        });
        let post = Metrics::Facebook(FacebookMetrics {
            reactions_count: 10,
            comments_count: 3,
            shares_count: 50,
            ..Default::default()
        });
        let video = Metrics::Youtube(YoutubeMetrics { view_count: 42 });

        assert_eq!(tweet.engagement(), 7);
        assert_eq!(post.engagement(), 13);
        assert_eq!(video.engagement(), 42);
    }

    #[test]
    fn test_engagement_saturates() {
        let tweet = Metrics::Twitter(TwitterMetrics {
            like_count: u64::MAX,
            retweet_count: 1,
            ..Default::default()
        });
        let post = Metrics::Facebook(FacebookMetrics {
            reactions_count: u64::MAX - 1,
            comments_count: 9,
            ..Default::default()
        });

        assert_eq!(tweet.engagement(), u64::MAX);
        assert_eq!(post.engagement(), u64::MAX);
    }

    #[test]
    fn test_builder_sets_analysis() {
        let doc = sample_document()
            .with_timestamp("2024-05-01T00:00:00+00:00")
            .with_analysis(Analysis {
                hashtags: vec!["rust".to_string()],
                sentiment: Sentiment::Positive,
                language: Language::En,
                ..Default::default()
            });

        assert_eq!(doc.timestamp(), "2024-05-01T00:00:00+00:00");
        assert_eq!(doc.hashtags(), ["rust".to_string()]);
        assert_eq!(doc.sentiment(), Sentiment::Positive);
        assert_eq!(doc.language(), Language::En);
        assert!(doc.mentions().is_empty());
    }

    #[test]
    fn test_emotion_serialization() {
        let json = serde_json::to_string(&vec![Emotion::Joy, Emotion::Humor]).unwrap();
        assert_eq!(json, "[\"joy\",\"humor\"]");
    }
}
