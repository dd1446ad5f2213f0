pub mod details;
pub mod document;
pub mod extraction;
pub mod platform;
pub mod summary;

pub use details::PlatformDetails;
pub use document::{
    Analysis, Author, Document, Emotion, FacebookMetrics, InstagramMetrics, Language, Metrics, Sentiment,
    TiktokMetrics, TwitterMetrics, YoutubeMetrics,
};
pub use extraction::{ExtractionError, PlatformExtractor};
pub use platform::Platform;
pub use summary::{BatchResults, PlatformStats, PlatformTable, SentimentBreakdown, SummaryReport};
