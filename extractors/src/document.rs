//! Shared assembly of canonical documents from decoded platform records.

use serde_json::Value;
use socmed_types::{Author, Document, ExtractionError, Metrics, Platform, PlatformDetails};
use tracing::debug;

use crate::enrichment::Enrichment;

/// Fields every platform record maps into before enrichment is applied
#[derive(Debug, Clone)]
pub struct DocumentParts {
    pub platform_id: String,
    pub content: String,
    pub author: Author,
    pub timestamp: String,
    pub metrics: Metrics,
    pub details: PlatformDetails,
}

pub fn assemble_document(
    platform: Platform,
    parts: DocumentParts,
    enrichment: Enrichment,
    raw: &Value,
) -> Document {
    Document::new(
        platform,
        parts.platform_id,
        parts.content,
        parts.metrics,
        parts.details,
        raw.clone(),
    )
    .with_author(parts.author)
    .with_timestamp(parts.timestamp)
    .with_analysis(enrichment.into())
}

/// Unwrap a decode result, logging and dropping items that failed
pub fn decoded<T>(platform: Platform, result: Result<T, ExtractionError>) -> Option<T> {
    match result {
        Ok(record) => Some(record),
        Err(e) => {
            debug!(platform = %platform, error = %e, "Skipping unusable item");
            None
        }
    }
}
