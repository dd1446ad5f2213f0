mod record;

pub use record::{engagement_rate, VideoRecord};

use serde_json::Value;
use socmed_types::{Document, Platform, PlatformExtractor};

use crate::document::{assemble_document, decoded};
use crate::enrichment::{lexicon, Enricher};
use crate::raw::RawExt;

/// `type` tag of video entries in search results
const VIDEO_ENTRY: u64 = 1;

/// Videos from a general search response
pub struct TiktokExtractor {
    enricher: Enricher,
}

impl TiktokExtractor {
    pub fn new() -> Self {
        Self {
            enricher: Enricher::new(&lexicon::TIKTOK),
        }
    }
}

impl Default for TiktokExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformExtractor for TiktokExtractor {
    fn platform(&self) -> Platform {
        Platform::Tiktok
    }

    fn extract_items<'a>(&self, raw: &'a Value) -> Vec<&'a Value> {
        raw.items_at(&["data", "data"])
            .iter()
            .filter(|entry| entry.get("type").and_then(Value::as_u64) == Some(VIDEO_ENTRY))
            .filter_map(|entry| entry.object_field("item"))
            .collect()
    }

    fn build_document(&self, item: &Value) -> Option<Document> {
        let mut record = decoded(Platform::Tiktok, VideoRecord::decode(item))?;
        let enrichment = self.enricher.enrich(&record.desc);

        record.details.category = match self.enricher.category(&record.desc, &enrichment.hashtags) {
            Some(category) => category.to_string(),
            None if record.details.music_info.original => "music".to_string(),
            None => "general".to_string(),
        };

        Some(assemble_document(
            Platform::Tiktok,
            record.into_parts(),
            enrichment,
            item,
        ))
    }
}
