//! Extractors Crate
//!
//! Platform extractors that turn raw social-media API responses into canonical
//! [`Document`](socmed_types::Document)s.
//!
//! # Architecture
//!
//! - **Types**: the document model and the `PlatformExtractor` trait live in `socmed-types`
//! - **Implementations**: one extractor per platform lives in this crate
//!
//! Each extractor walks its platform's response tree, decodes every item into a
//! typed record, and hands the record to a shared assembly step that applies
//! keyword enrichment from the platform's lexicon.
//!
//! # Available Extractors
//!
//! - `TwitterExtractor`: search timeline instructions
//! - `InstagramExtractor`: media grid sections
//! - `TiktokExtractor`: general search results
//! - `FacebookExtractor`: post search results
//! - `YoutubeExtractor`: video search results
//!
//! # Example
//!
//! ```rust,ignore
//! use extractors::TiktokExtractor;
//! use socmed_types::PlatformExtractor;
//!
//! let documents = TiktokExtractor::new().extract(&raw_response);
//! ```

pub mod document;
pub mod enrichment;
pub mod facebook;
pub mod instagram;
pub mod raw;
pub mod tiktok;
pub mod timestamps;
pub mod twitter;
pub mod youtube;

// Re-export commonly used types
pub use enrichment::{Enricher, Enrichment, Lexicon};
pub use facebook::FacebookExtractor;
pub use instagram::InstagramExtractor;
pub use tiktok::TiktokExtractor;
pub use twitter::TwitterExtractor;
pub use youtube::YoutubeExtractor;

// Re-export the extractor trait from socmed-types for convenience
pub use socmed_types::PlatformExtractor;
