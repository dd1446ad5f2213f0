use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use ts_rs::TS;

use crate::{Document, Language, Platform, Sentiment};

/// Cross-platform report over one batch of parsed documents
#[derive(Debug, Clone, Serialize, TS)]
pub struct SummaryReport {
    pub generated_at: String,
    pub total_documents: usize,
    #[ts(type = "Record<Platform, PlatformStats>")]
    pub per_platform: PlatformTable,
    /// Platform with the most documents; ties go to the earliest platform in batch order
    pub most_active_platform: Option<Platform>,
    pub global_total_engagement: u64,
    /// Number of platforms that produced at least one document
    pub platforms_processed: usize,
}

impl SummaryReport {
    /// Fold a batch into a report. Platforms keep their batch order.
    pub fn from_results(results: &BatchResults) -> Self {
        let mut per_platform = PlatformTable::new();

        for (platform, documents) in results.iter() {
            per_platform.insert(*platform, PlatformStats::from_documents(documents));
        }

        // First platform with the highest count wins a tie
        let most_active_platform = per_platform
            .iter()
            .fold(None::<&(Platform, PlatformStats)>, |best, entry| match best {
                Some(b) if b.1.document_count >= entry.1.document_count => Some(b),
                _ => Some(entry),
            })
            .map(|(platform, _)| *platform);

        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            total_documents: results.total_documents(),
            most_active_platform,
            global_total_engagement: per_platform
                .iter()
                .map(|(_, s)| s.total_engagement)
                .fold(0u64, u64::saturating_add),
            platforms_processed: per_platform
                .iter()
                .filter(|(_, s)| s.document_count > 0)
                .count(),
            per_platform,
        }
    }
}

/// Per-platform tallies
#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
pub struct PlatformStats {
    pub document_count: usize,
    pub sentiment_breakdown: SentimentBreakdown,
    pub language_breakdown: BTreeMap<Language, usize>,
    pub total_engagement: u64,
    pub avg_engagement: f64,
}

impl PlatformStats {
    pub fn from_documents(documents: &[Document]) -> Self {
        let mut stats = PlatformStats {
            document_count: documents.len(),
            ..Default::default()
        };

        for doc in documents {
            stats.sentiment_breakdown.record(doc.sentiment());
            *stats.language_breakdown.entry(doc.language()).or_insert(0) += 1;
            stats.total_engagement = stats
                .total_engagement
                .saturating_add(doc.metrics().engagement());
        }

        if stats.document_count > 0 {
            let avg = stats.total_engagement as f64 / stats.document_count as f64;
            stats.avg_engagement = (avg * 100.0).round() / 100.0;
        }

        stats
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
pub struct SentimentBreakdown {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentBreakdown {
    pub fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }
}

/// Platform stats kept in batch order. Serializes as a JSON object whose key
/// order matches insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlatformTable(Vec<(Platform, PlatformStats)>);

impl PlatformTable {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert or replace the stats for a platform, keeping its original position
    pub fn insert(&mut self, platform: Platform, stats: PlatformStats) {
        match self.0.iter_mut().find(|(p, _)| *p == platform) {
            Some(entry) => entry.1 = stats,
            None => self.0.push((platform, stats)),
        }
    }

    pub fn get(&self, platform: Platform) -> Option<&PlatformStats> {
        self.0
            .iter()
            .find(|(p, _)| *p == platform)
            .map(|(_, stats)| stats)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Platform, PlatformStats)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Documents grouped by platform, in the order the platforms were parsed
#[derive(Debug, Clone, Default)]
pub struct BatchResults(Vec<(Platform, Vec<Document>)>);

impl BatchResults {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Store a platform's documents. A repeated platform replaces its earlier entry in place.
    pub fn insert(&mut self, platform: Platform, documents: Vec<Document>) {
        match self.0.iter_mut().find(|(p, _)| *p == platform) {
            Some(entry) => entry.1 = documents,
            None => self.0.push((platform, documents)),
        }
    }

    /// Append documents to a platform's entry, creating it at the end if new
    pub fn extend(&mut self, platform: Platform, documents: Vec<Document>) {
        match self.0.iter_mut().find(|(p, _)| *p == platform) {
            Some(entry) => entry.1.extend(documents),
            None => self.0.push((platform, documents)),
        }
    }

    pub fn get(&self, platform: Platform) -> Option<&[Document]> {
        self.0
            .iter()
            .find(|(p, _)| *p == platform)
            .map(|(_, docs)| docs.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Platform, Vec<Document>)> {
        self.0.iter()
    }

    pub fn platforms(&self) -> Vec<Platform> {
        self.0.iter().map(|(p, _)| *p).collect()
    }

    pub fn total_documents(&self) -> usize {
        self.0.iter().map(|(_, docs)| docs.len()).sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for PlatformTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (platform, stats) in &self.0 {
            map.serialize_entry(platform, stats)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::details::{TwitterDetails, YoutubeDetails};
    use crate::{Analysis, Metrics, PlatformDetails, TwitterMetrics, YoutubeMetrics};

    #[test]
    fn test_sentiment_breakdown_record() {
        let mut breakdown = SentimentBreakdown::default();
        breakdown.record(Sentiment::Positive);
        breakdown.record(Sentiment::Positive);
        breakdown.record(Sentiment::Neutral);

        assert_eq!(breakdown.positive, 2);
        assert_eq!(breakdown.negative, 0);
        assert_eq!(breakdown.neutral, 1);
    }

    #[test]
    fn test_platform_table_keeps_insertion_order() {
        let mut table = PlatformTable::new();
        table.insert(Platform::Youtube, PlatformStats::default());
        table.insert(Platform::Twitter, PlatformStats::default());
        table.insert(
            Platform::Youtube,
            PlatformStats {
                document_count: 3,
                ..Default::default()
            },
        );

        assert_eq!(table.len(), 2);
        assert_eq!(table.get(Platform::Youtube).unwrap().document_count, 3);

        let json = serde_json::to_string(&table).unwrap();
        let youtube_at = json.find("\"youtube\"").unwrap();
        let twitter_at = json.find("\"twitter\"").unwrap();
        assert!(youtube_at < twitter_at);
    }

    fn doc(platform: Platform, sentiment: Sentiment, language: Language, metrics: Metrics) -> Document {
        let details = match platform {
            Platform::Youtube => PlatformDetails::Youtube(YoutubeDetails::default()),
            _ => PlatformDetails::Twitter(TwitterDetails::default()),
        };
        Document::new(
            platform,
            "id".to_string(),
            String::new(),
            metrics,
            details,
            serde_json::Value::Null,
        )
        .with_analysis(Analysis {
            sentiment,
            language,
            ..Default::default()
        })
    }

    fn tweet(likes: u64, retweets: u64, sentiment: Sentiment) -> Document {
        doc(
            Platform::Twitter,
            sentiment,
            Language::En,
            Metrics::Twitter(TwitterMetrics {
                like_count: likes,
                retweet_count: retweets,
                ..Default::default()
            }),
        )
    }

    fn video(views: u64) -> Document {
        doc(
            Platform::Youtube,
            Sentiment::Neutral,
            Language::Mixed,
            Metrics::Youtube(YoutubeMetrics { view_count: views }),
        )
    }

    #[test]
    fn test_report_from_results() {
        let mut results = BatchResults::new();
        results.insert(
            Platform::Twitter,
            vec![
                tweet(10, 2, Sentiment::Positive),
                tweet(1, 0, Sentiment::Negative),
                tweet(0, 0, Sentiment::Positive),
            ],
        );
        results.insert(Platform::Instagram, vec![]);
        results.insert(Platform::Youtube, vec![video(100), video(51)]);

        let report = SummaryReport::from_results(&results);

        assert_eq!(report.total_documents, 5);
        assert_eq!(report.platforms_processed, 2);
        assert_eq!(report.most_active_platform, Some(Platform::Twitter));
        assert_eq!(report.global_total_engagement, 13 + 151);

        let twitter = report.per_platform.get(Platform::Twitter).unwrap();
        assert_eq!(twitter.total_engagement, 13);
        assert_eq!(twitter.avg_engagement, 4.33);
        assert_eq!(twitter.sentiment_breakdown.positive, 2);
        assert_eq!(twitter.sentiment_breakdown.negative, 1);
        assert_eq!(twitter.language_breakdown.get(&Language::En), Some(&3));

        let instagram = report.per_platform.get(Platform::Instagram).unwrap();
        assert_eq!(instagram.document_count, 0);
        assert_eq!(instagram.avg_engagement, 0.0);

        let youtube = report.per_platform.get(Platform::Youtube).unwrap();
        assert_eq!(youtube.avg_engagement, 75.5);
    }

    #[test]
    fn test_most_active_tie_break_follows_batch_order() {
        let mut results = BatchResults::new();
        results.insert(Platform::Youtube, vec![video(1), video(2)]);
        results.insert(Platform::Twitter, vec![tweet(1, 1, Sentiment::Neutral), tweet(0, 0, Sentiment::Neutral)]);

        let report = SummaryReport::from_results(&results);
        assert_eq!(report.most_active_platform, Some(Platform::Youtube));

        let mut reversed = BatchResults::new();
        reversed.insert(Platform::Twitter, vec![tweet(1, 1, Sentiment::Neutral), tweet(0, 0, Sentiment::Neutral)]);
        reversed.insert(Platform::Youtube, vec![video(1), video(2)]);

        let report = SummaryReport::from_results(&reversed);
        assert_eq!(report.most_active_platform, Some(Platform::Twitter));
    }

    #[test]
    fn test_extend_appends_documents() {
        let mut results = BatchResults::new();
        results.extend(Platform::Youtube, vec![video(1)]);
        results.extend(Platform::Twitter, vec![tweet(1, 0, Sentiment::Neutral)]);
        results.extend(Platform::Youtube, vec![video(2), video(3)]);

        assert_eq!(results.platforms(), vec![Platform::Youtube, Platform::Twitter]);
        assert_eq!(results.get(Platform::Youtube).unwrap().len(), 3);
        assert_eq!(results.total_documents(), 4);

        results.insert(Platform::Youtube, vec![video(4)]);
        assert_eq!(results.get(Platform::Youtube).unwrap().len(), 1);
    }

    #[test]
    fn test_engagement_totals_saturate() {
        let mut results = BatchResults::new();
        results.insert(Platform::Youtube, vec![video(u64::MAX), video(10)]);
        results.insert(Platform::Twitter, vec![tweet(u64::MAX, 5, Sentiment::Positive)]);

        let report = SummaryReport::from_results(&results);

        let youtube = report.per_platform.get(Platform::Youtube).unwrap();
        assert_eq!(youtube.total_engagement, u64::MAX);
        assert_eq!(report.per_platform.get(Platform::Twitter).unwrap().total_engagement, u64::MAX);
        assert_eq!(report.global_total_engagement, u64::MAX);
    }

    #[test]
    fn test_empty_batch() {
        let report = SummaryReport::from_results(&BatchResults::new());
        assert_eq!(report.total_documents, 0);
        assert!(report.most_active_platform.is_none());
        assert!(report.per_platform.is_empty());

        let mut all_empty = BatchResults::new();
        all_empty.insert(Platform::Facebook, vec![]);
        all_empty.insert(Platform::Tiktok, vec![]);
        let report = SummaryReport::from_results(&all_empty);
        assert_eq!(report.most_active_platform, Some(Platform::Facebook));
        assert_eq!(report.platforms_processed, 0);
    }

    #[test]
    fn test_report_serializes_in_batch_order() {
        let mut results = BatchResults::new();
        results.insert(Platform::Youtube, vec![video(3)]);
        results.insert(Platform::Twitter, vec![]);

        let json = serde_json::to_string(&SummaryReport::from_results(&results)).unwrap();
        assert!(json.find("\"youtube\":{").unwrap() < json.find("\"twitter\":{").unwrap());
        assert!(json.contains("\"most_active_platform\":\"youtube\""));
    }

    #[test]
    fn test_language_breakdown_keys() {
        let stats = PlatformStats {
            document_count: 2,
            language_breakdown: BTreeMap::from([(Language::Id, 1), (Language::Mixed, 1)]),
            ..Default::default()
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["language_breakdown"]["id"], 1);
        assert_eq!(json["language_breakdown"]["mixed"], 1);
        assert_eq!(json["sentiment_breakdown"]["neutral"], 0);
    }
}
