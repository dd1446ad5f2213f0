//! Normalization façade
//!
//! Picks the extractor for a platform, runs it over raw responses held in memory
//! or on disk, and aggregates whole batches into a [`SummaryReport`](socmed_types::SummaryReport).
//!
//! ```rust,ignore
//! use socmed_normalizer::Normalizer;
//!
//! let normalizer = Normalizer::default();
//! let documents = normalizer.parse_platform_data("youtube", &raw_response)?;
//! ```

pub mod config;
pub mod envelope;
pub mod normalizer;
pub mod registry;
pub mod summary;

pub use config::NormalizerConfig;
pub use envelope::IndexEnvelope;
pub use normalizer::{
    render_documents, save_parsed_results, tag_source, write_summary_report, Normalizer,
    OutputFormat,
};
pub use registry::ExtractorRegistry;
pub use summary::render_summary;
