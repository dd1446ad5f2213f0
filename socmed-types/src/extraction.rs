use serde_json::Value;
use std::path::PathBuf;

use crate::{Document, Platform};

/// Core trait that every platform extractor implements
///
/// Extraction is a two-step pass: `extract_items` walks the raw response tree and
/// borrows the platform-native items out of it, then `build_document` converts each
/// item independently. Neither step may fail the whole response.
pub trait PlatformExtractor: Send + Sync {
    /// Which platform's responses this extractor understands
    fn platform(&self) -> Platform;

    /// Locate the content items inside a raw API response.
    /// Returns an empty vector when nothing matches.
    fn extract_items<'a>(&self, raw: &'a Value) -> Vec<&'a Value>;

    /// Build one canonical document, or `None` if the item is unusable
    fn build_document(&self, item: &Value) -> Option<Document>;

    /// Run the full pass over a raw response
    fn extract(&self, raw: &Value) -> Vec<Document> {
        self.extract_items(raw)
            .into_iter()
            .filter_map(|item| self.build_document(item))
            .collect()
    }

    /// Get extractor version for tracking
    fn version(&self) -> String {
        "1.0.0".to_string()
    }
}

/// Extraction error types
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported platform: {platform}. Supported: {}", supported.join(", "))]
    UnsupportedPlatform {
        platform: String,
        supported: Vec<String>,
    },

    #[error("Could not detect platform from filename: {0}")]
    PlatformNotDetected(String),

    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Field already present on document: {0}")]
    ReservedField(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_platform_message() {
        let err = ExtractionError::UnsupportedPlatform {
            platform: "myspace".to_string(),
            supported: vec!["twitter".to_string(), "tiktok".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Unsupported platform: myspace. Supported: twitter, tiktok"
        );
    }
}
