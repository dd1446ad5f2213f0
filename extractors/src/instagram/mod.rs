mod record;

pub use record::{determine_media_type, MediaRecord};

use serde_json::Value;
use socmed_types::{Document, Platform, PlatformExtractor};

use crate::document::{assemble_document, decoded};
use crate::enrichment::{lexicon, Enricher};
use crate::raw::RawExt;

/// Media from a hashtag or location media-grid response
pub struct InstagramExtractor {
    enricher: Enricher,
}

impl InstagramExtractor {
    pub fn new() -> Self {
        Self {
            enricher: Enricher::new(&lexicon::INSTAGRAM),
        }
    }
}

impl Default for InstagramExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformExtractor for InstagramExtractor {
    fn platform(&self) -> Platform {
        Platform::Instagram
    }

    fn extract_items<'a>(&self, raw: &'a Value) -> Vec<&'a Value> {
        let mut media = Vec::new();

        for section in raw.items_at(&["data", "media_grid", "sections"]) {
            let layout = section.field("layout_content");

            // A section uses exactly one layout; the first key present wins
            if let Some(one_by_two) = layout.get("one_by_two_item") {
                media.extend(
                    one_by_two
                        .items_at(&["clips", "items"])
                        .iter()
                        .filter_map(|item| item.object_field("media")),
                );
            } else if let Some(two_by_two) = layout.get("two_by_two_items") {
                media.extend(
                    two_by_two
                        .items_at(&[])
                        .iter()
                        .filter_map(|item| item.object_field("media")),
                );
            } else if let Some(medias) = layout.get("medias") {
                media.extend(medias.items_at(&[]).iter().filter_map(|entry| {
                    entry
                        .object_field("media")
                        .or_else(|| Some(entry).filter(|e| e.is_truthy() && e.is_object()))
                }));
            }
        }

        media
    }

    fn build_document(&self, item: &Value) -> Option<Document> {
        let record = decoded(Platform::Instagram, MediaRecord::decode(item))?;
        let enrichment = self.enricher.enrich(&record.caption);
        Some(assemble_document(
            Platform::Instagram,
            record.into_parts(),
            enrichment,
            item,
        ))
    }
}
