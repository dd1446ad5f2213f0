use serde::Serialize;
use socmed_types::Document;

/// Index every enveloped document is addressed to
pub const SEARCH_INDEX: &str = "social_media_posts";

/// Search-index hit shape: `_index`, `_id`, `_score` and the document as `_source`
#[derive(Debug, Clone, Serialize)]
pub struct IndexEnvelope<'a> {
    #[serde(rename = "_index")]
    pub index: &'static str,
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_score")]
    pub score: f64,
    #[serde(rename = "_source")]
    pub source: &'a Document,
}

impl<'a> IndexEnvelope<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self {
            index: SEARCH_INDEX,
            id: format!("{}_{}", document.platform(), document.platform_id()),
            score: 1.0,
            source: document,
        }
    }
}

pub fn wrap_all(documents: &[Document]) -> Vec<IndexEnvelope<'_>> {
    documents.iter().map(IndexEnvelope::new).collect()
}
