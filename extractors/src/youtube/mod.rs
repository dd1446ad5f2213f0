mod record;

pub use record::YoutubeVideoRecord;

use serde_json::Value;
use socmed_types::{Document, Platform, PlatformExtractor};

use crate::document::{assemble_document, decoded};
use crate::enrichment::{lexicon, Enricher};
use crate::raw::RawExt;

/// Videos from a search response
pub struct YoutubeExtractor {
    enricher: Enricher,
}

impl YoutubeExtractor {
    pub fn new() -> Self {
        Self {
            enricher: Enricher::new(&lexicon::YOUTUBE),
        }
    }
}

impl Default for YoutubeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformExtractor for YoutubeExtractor {
    fn platform(&self) -> Platform {
        Platform::Youtube
    }

    fn extract_items<'a>(&self, raw: &'a Value) -> Vec<&'a Value> {
        raw.items_at(&["data", "contents"])
            .iter()
            .filter(|entry| entry.str_field("type") == Some("video"))
            .filter_map(|entry| entry.object_field("video"))
            .collect()
    }

    fn build_document(&self, item: &Value) -> Option<Document> {
        let mut record = decoded(Platform::Youtube, YoutubeVideoRecord::decode(item))?;
        let content = record.content();
        let enrichment = self.enricher.enrich(&content);

        if let Some(category) = self.enricher.category(&content, &enrichment.hashtags) {
            record.details.category = category.to_string();
        }

        Some(assemble_document(
            Platform::Youtube,
            record.into_parts(),
            enrichment,
            item,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use socmed_types::{Emotion, Language, Metrics, PlatformDetails, Sentiment, YoutubeMetrics};

    fn video(id: &str, title: &str, length: u64) -> Value {
        json!({
            "videoId": id,
            "title": title,
            "descriptionSnippet": "Full walkthrough #speedrun",
            "lengthSeconds": length,
            "publishedTimeText": "2 days ago",
            "stats": {"views": 5400},
            "isLiveNow": false,
            "thumbnails": [{"url": "https://i.ytimg.com/1.jpg", "width": 360, "height": 202}],
            "author": {
                "channelId": "UC123",
                "title": "Speed Channel",
                "canonicalBaseUrl": "/@speedy",
                "avatar": [
                    {"url": "https://yt/small.jpg", "height": 68},
                    {"url": "https://yt/large.jpg", "height": 176}
                ],
                "badges": [{"type": "VERIFIED_CHANNEL", "text": "Verified"}]
            }
        })
    }

    fn contents(entries: Vec<Value>) -> Value {
        json!({"data": {"contents": entries}})
    }

    fn details(doc: &Document) -> &socmed_types::details::YoutubeDetails {
        match doc.details() {
            PlatformDetails::Youtube(d) => d,
            other => panic!("Expected youtube details, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_response() {
        let extractor = YoutubeExtractor::new();

        assert!(extractor.extract(&json!({})).is_empty());
        assert!(extractor.extract(&contents(vec![])).is_empty());
        assert!(extractor
            .extract(&contents(vec![json!({"type": "channel", "channel": {}})]))
            .is_empty());
    }

    #[test]
    fn test_only_video_entries() {
        let raw = contents(vec![
            json!({"type": "video", "video": video("a1", "One", 10)}),
            json!({"type": "playlist", "playlist": {}}),
            json!({"type": "video", "video": {}}),
            json!({"type": "video", "video": video("a2", "Two", 20)}),
        ]);

        let docs = YoutubeExtractor::new().extract(&raw);
        let ids: Vec<&str> = docs.iter().map(|d| d.platform_id()).collect();
        assert_eq!(ids, vec!["a1", "a2"]);
    }

    #[test]
    fn test_duration_formatting() {
        let extractor = YoutubeExtractor::new();

        let doc = extractor.build_document(&video("d1", "Clip", 125)).unwrap();
        assert_eq!(details(&doc).duration_formatted, "02:05");
        assert_eq!(details(&doc).duration_seconds, 125);

        let doc = extractor.build_document(&video("d2", "Clip", 0)).unwrap();
        assert_eq!(details(&doc).duration_formatted, "00:00");

        let doc = extractor.build_document(&video("d3", "Clip", 3725)).unwrap();
        assert_eq!(details(&doc).duration_formatted, "01:02:05");
    }

    #[test]
    fn test_document_fields() {
        let raw = contents(vec![json!({"type": "video", "video": video(
            "xyz",
            "Amazing game run",
            600
        )})]);

        let docs = YoutubeExtractor::new().extract(&raw);
        let doc = &docs[0];

        assert_eq!(doc.content(), "Amazing game run Full walkthrough #speedrun");
        assert_eq!(doc.hashtags(), vec!["speedrun"]);
        assert_eq!(doc.sentiment(), Sentiment::Positive);
        assert_eq!(doc.emotions(), vec![Emotion::Excitement]);
        assert_eq!(doc.language(), Language::En);
        assert_eq!(doc.metrics(), &Metrics::Youtube(YoutubeMetrics { view_count: 5400 }));

        assert_eq!(doc.author().username.as_deref(), Some("speedy"));
        assert_eq!(doc.author().profile_image_url.as_deref(), Some("https://yt/large.jpg"));
        assert_eq!(doc.author().is_verified, Some(true));

        let d = details(doc);
        assert_eq!(d.url, "https://www.youtube.com/watch?v=xyz");
        assert_eq!(d.category, "gaming");
        assert_eq!(d.content_type, "video");
        assert_eq!(d.published_time_text, "2 days ago");
        assert_eq!(d.thumbnails.len(), 1);
        assert_eq!(d.badges, json!([]));
    }

    #[test]
    fn test_video_id_fallbacks() {
        let extractor = YoutubeExtractor::new();

        let nav = json!({"title": "t", "navigationEndpoint": {"watchEndpoint": {"videoId": "nav1"}}});
        assert_eq!(extractor.build_document(&nav).unwrap().platform_id(), "nav1");

        let link = json!({"title": "t", "link": "https://www.youtube.com/watch?v=lnk2&t=30s"});
        assert_eq!(extractor.build_document(&link).unwrap().platform_id(), "lnk2");

        let none = json!({"title": "t"});
        let doc = extractor.build_document(&none).unwrap();
        assert_eq!(doc.platform_id(), "");
        assert_eq!(details(&doc).url, "");
        assert_eq!(details(&doc).category, "general");
    }
}
