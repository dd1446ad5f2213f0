use socmed_types::SummaryReport;
use std::fmt;

/// Plain-text rendering of a report for terminal output
pub struct SummaryText<'a>(pub &'a SummaryReport);

impl fmt::Display for SummaryText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;

        writeln!(f, "Summary report ({})", report.generated_at)?;
        writeln!(f, "Total documents: {}", report.total_documents)?;
        writeln!(
            f,
            "Platforms processed: {}/{}",
            report.platforms_processed,
            report.per_platform.len()
        )?;
        match report.most_active_platform {
            Some(platform) => writeln!(f, "Most active platform: {}", platform)?,
            None => writeln!(f, "Most active platform: none")?,
        }
        writeln!(f, "Global engagement: {}", report.global_total_engagement)?;

        for (platform, stats) in report.per_platform.iter() {
            writeln!(f)?;
            writeln!(f, "[{}]", platform)?;
            writeln!(f, "  documents: {}", stats.document_count)?;

            if stats.document_count == 0 {
                continue;
            }

            let sentiment = &stats.sentiment_breakdown;
            writeln!(
                f,
                "  sentiment: positive {}, negative {}, neutral {}",
                sentiment.positive, sentiment.negative, sentiment.neutral
            )?;

            let languages: Vec<String> = stats
                .language_breakdown
                .iter()
                .map(|(language, count)| format!("{} {}", language.as_str(), count))
                .collect();
            writeln!(f, "  languages: {}", languages.join(", "))?;
            writeln!(
                f,
                "  engagement: total {}, avg {:.2}",
                stats.total_engagement, stats.avg_engagement
            )?;
        }

        Ok(())
    }
}

pub fn render_summary(report: &SummaryReport) -> String {
    SummaryText(report).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use socmed_types::{
        Analysis, Document, Language, Metrics, Platform, PlatformDetails, PlatformStats,
        PlatformTable, Sentiment, TiktokMetrics,
    };

    fn tiktok_document(likes: u64, language: Language) -> Document {
        Document::new(
            Platform::Tiktok,
            "t".to_string(),
            "clip".to_string(),
            Metrics::Tiktok(TiktokMetrics {
                like_count: likes,
                ..Default::default()
            }),
            PlatformDetails::Tiktok(Default::default()),
            serde_json::Value::Null,
        )
        .with_analysis(Analysis {
            sentiment: Sentiment::Positive,
            language,
            ..Default::default()
        })
    }

    #[test]
    fn test_render_summary() {
        let mut per_platform = PlatformTable::new();
        per_platform.insert(
            Platform::Tiktok,
            PlatformStats::from_documents(&[
                tiktok_document(3, Language::En),
                tiktok_document(4, Language::Id),
            ]),
        );
        per_platform.insert(Platform::Facebook, PlatformStats::default());

        let report = SummaryReport {
            generated_at: "2024-01-01T00:00:00+00:00".to_string(),
            total_documents: 2,
            per_platform,
            most_active_platform: Some(Platform::Tiktok),
            global_total_engagement: 7,
            platforms_processed: 1,
        };

        let text = render_summary(&report);

        assert!(text.contains("Total documents: 2"));
        assert!(text.contains("Platforms processed: 1/2"));
        assert!(text.contains("Most active platform: tiktok"));
        assert!(text.contains("sentiment: positive 2, negative 0, neutral 0"));
        assert!(text.contains("languages: en 1, id 1"));
        assert!(text.contains("engagement: total 7, avg 3.50"));
        assert!(text.contains("[facebook]\n  documents: 0\n"));
        assert!(!text.contains("[facebook]\n  documents: 0\n  sentiment"));
    }

    #[test]
    fn test_render_empty_report() {
        let report = SummaryReport {
            generated_at: "2024-01-01T00:00:00+00:00".to_string(),
            total_documents: 0,
            per_platform: PlatformTable::new(),
            most_active_platform: None,
            global_total_engagement: 0,
            platforms_processed: 0,
        };

        assert_eq!(
            render_summary(&report),
            "Summary report (2024-01-01T00:00:00+00:00)\n\
             Total documents: 0\n\
             Platforms processed: 0/0\n\
             Most active platform: none\n\
             Global engagement: 0\n"
        );
        assert_eq!(SummaryText(&report).to_string(), render_summary(&report));
    }
}
