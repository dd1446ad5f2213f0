mod record;

pub use record::{determine_post_type, PostRecord};

use serde_json::Value;
use socmed_types::{Document, Platform, PlatformExtractor};

use crate::document::{assemble_document, decoded};
use crate::enrichment::text::reaction_emotions;
use crate::enrichment::{lexicon, Enricher};
use crate::raw::RawExt;

/// Posts from a search response
pub struct FacebookExtractor {
    enricher: Enricher,
}

impl FacebookExtractor {
    pub fn new() -> Self {
        Self {
            enricher: Enricher::new(&lexicon::FACEBOOK),
        }
    }
}

impl Default for FacebookExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformExtractor for FacebookExtractor {
    fn platform(&self) -> Platform {
        Platform::Facebook
    }

    fn extract_items<'a>(&self, raw: &'a Value) -> Vec<&'a Value> {
        raw.items_at(&["data", "results"])
            .iter()
            .filter(|entry| entry.str_field("type") == Some("post"))
            .collect()
    }

    fn build_document(&self, item: &Value) -> Option<Document> {
        let record = decoded(Platform::Facebook, PostRecord::decode(item))?;

        let mut enrichment = self.enricher.enrich(&record.message);
        enrichment.add_emotions(reaction_emotions(
            record.reactions.iter().map(|(name, count)| (name.as_str(), *count)),
        ));

        Some(assemble_document(
            Platform::Facebook,
            record.into_parts(),
            enrichment,
            item,
        ))
    }
}
