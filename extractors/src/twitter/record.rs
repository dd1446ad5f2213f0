use serde_json::Value;
use socmed_types::details::{TweetGeo, TweetMedia, TweetPlace, TwitterDetails};
use socmed_types::{Author, ExtractionError, Metrics, PlatformDetails, TwitterMetrics};

use crate::document::DocumentParts;
use crate::raw::{body_text, require_object, RawExt};
use crate::timestamps::parse_twitter_timestamp;

/// Typed view of one `tweet_results.result` object
#[derive(Debug, Clone)]
pub struct TweetRecord {
    pub rest_id: String,
    pub text: String,
    pub created_at: String,
    pub author: Author,
    pub metrics: TwitterMetrics,
    pub details: TwitterDetails,
}

impl TweetRecord {
    pub fn decode(tweet: &Value) -> Result<Self, ExtractionError> {
        require_object(tweet)?;

        let rest_id = tweet.id_text("rest_id");
        if rest_id.is_empty() {
            return Err(ExtractionError::InvalidInput(
                "tweet has no rest_id".to_string(),
            ));
        }

        let legacy = tweet.field("legacy");
        let full_text = body_text(legacy, "full_text")?;
        let text = long_form_text(tweet).unwrap_or(full_text);
        let created_at = legacy.text("created_at");

        let metrics = TwitterMetrics {
            like_count: legacy.count("favorite_count"),
            retweet_count: legacy.count("retweet_count"),
            reply_count: legacy.count("reply_count"),
            quote_count: legacy.count("quote_count"),
            bookmark_count: legacy.count("bookmark_count"),
            view_count: tweet.field("views").count("count"),
        };

        let details = TwitterDetails {
            created_at: created_at.clone(),
            urls: legacy
                .items_at(&["entities", "urls"])
                .iter()
                .map(|u| u.text("expanded_url"))
                .collect(),
            media: legacy
                .items_at(&["extended_entities", "media"])
                .iter()
                .map(|m| TweetMedia {
                    kind: m.text("type"),
                    url: m.text("media_url_https"),
                    id: m.id_text("id_str"),
                })
                .collect(),
            api_language: legacy.text("lang"),
            is_retweet: legacy.flag("retweeted", false),
            is_quote: legacy.flag("is_quote_status", false),
            conversation_id: legacy.id_text("conversation_id_str"),
            source: "twitter".to_string(),
            possibly_sensitive: legacy.flag("possibly_sensitive", false),
            geo: decode_geo(tweet),
        };

        Ok(Self {
            rest_id,
            text,
            created_at,
            author: decode_author(tweet),
            metrics,
            details,
        })
    }

    pub fn into_parts(self) -> DocumentParts {
        DocumentParts {
            platform_id: self.rest_id,
            content: self.text,
            author: self.author,
            timestamp: parse_twitter_timestamp(&self.created_at),
            metrics: Metrics::Twitter(self.metrics),
            details: PlatformDetails::Twitter(self.details),
        }
    }
}

/// Expanded note-tweet text, used instead of `full_text` when present
fn long_form_text(tweet: &Value) -> Option<String> {
    let note = tweet.field("note_tweet");
    if !note.truthy("is_expandable") {
        return None;
    }

    note.at(&["note_tweet_results", "result"])
        .and_then(|result| result.str_field("text"))
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

fn decode_author(tweet: &Value) -> Author {
    let user = tweet.field("core").field("user_results").field("result");
    let user_legacy = user.field("legacy");
    let user_core = user.field("core");

    // Newer payloads move names under `core`; older ones keep them in `legacy`
    let prefer = |key: &str| {
        Some(user_core.text(key))
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| user_legacy.text(key))
    };

    Author {
        id: Some(user.id_text("rest_id")),
        username: Some(prefer("screen_name")),
        display_name: Some(prefer("name")),
        followers_count: Some(user_legacy.count("followers_count")),
        friends_count: Some(user_legacy.count("friends_count")),
        verified: Some(user.field("verification").flag("verified", false)),
        profile_image_url: Some(user.field("avatar").text("image_url")),
        description: Some(user_legacy.text("description")),
        location: Some(user.field("location").text("location")),
        ..Default::default()
    }
}

fn decode_geo(tweet: &Value) -> TweetGeo {
    let coordinates = tweet
        .get("coordinates")
        .filter(|c| c.is_truthy())
        .cloned();

    let place = tweet
        .get("place")
        .filter(|p| p.is_truthy())
        .map(|place| TweetPlace {
            name: place.text("full_name"),
            country: place.text("country"),
            place_type: place.text("place_type"),
        });

    TweetGeo { coordinates, place }
}
