//! Content-derived enrichment: hashtags, mentions, sentiment, emotions, language
//! and category, driven by a platform's [`Lexicon`].

pub mod lexicon;
pub mod text;

pub use lexicon::{Lexicon, WordMatch};

use socmed_types::{Analysis, Emotion, Language, Sentiment};

/// Everything derived from a document's text body
#[derive(Debug, Clone, PartialEq)]
pub struct Enrichment {
    pub hashtags: Vec<String>,
    pub mentions: Vec<String>,
    pub sentiment: Sentiment,
    pub emotions: Vec<Emotion>,
    pub language: Language,
}

impl Enrichment {
    /// Merge extra emotions, keeping first-seen order
    pub fn add_emotions(&mut self, extra: impl IntoIterator<Item = Emotion>) {
        for emotion in extra {
            text::push_unique(&mut self.emotions, emotion);
        }
    }
}

impl From<Enrichment> for Analysis {
    fn from(enrichment: Enrichment) -> Self {
        Analysis {
            hashtags: enrichment.hashtags,
            mentions: enrichment.mentions,
            sentiment: enrichment.sentiment,
            emotions: enrichment.emotions,
            language: enrichment.language,
        }
    }
}

/// Stateless enrichment bound to one platform's word tables
#[derive(Debug, Clone, Copy)]
pub struct Enricher {
    lexicon: &'static Lexicon,
}

impl Enricher {
    pub const fn new(lexicon: &'static Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &'static Lexicon {
        self.lexicon
    }

    pub fn enrich(&self, content: &str) -> Enrichment {
        let lexicon = self.lexicon;
        Enrichment {
            hashtags: text::extract_hashtags(content),
            mentions: text::extract_mentions(content),
            sentiment: text::analyze_sentiment(content, lexicon.positive, lexicon.negative),
            emotions: text::detect_emotions(content, lexicon.emotions),
            language: text::detect_language(
                content,
                lexicon.indonesian,
                lexicon.english,
                lexicon.language_match,
            ),
        }
    }

    /// Category bucket for the text, or `None` if no bucket matches
    pub fn category(&self, content: &str, hashtags: &[String]) -> Option<&'static str> {
        text::classify_category(content, hashtags, self.lexicon.categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enrich_twitter_text() {
        let enricher = Enricher::new(&lexicon::TWITTER);
        let enrichment = enricher.enrich("So happy with the new release! #rust @ferris");

        assert_eq!(enrichment.hashtags, vec!["rust"]);
        assert_eq!(enrichment.mentions, vec!["ferris"]);
        assert_eq!(enrichment.sentiment, Sentiment::Positive);
        assert_eq!(enrichment.emotions, vec![Emotion::Joy]);
        assert_eq!(enrichment.language, Language::En);
    }

    #[test]
    fn test_enrich_empty_text() {
        let enrichment = Enricher::new(&lexicon::FACEBOOK).enrich("");

        assert!(enrichment.hashtags.is_empty());
        assert_eq!(enrichment.sentiment, Sentiment::Neutral);
        assert!(enrichment.emotions.is_empty());
        assert_eq!(enrichment.language, Language::Unknown);
    }

    #[test]
    fn test_add_emotions_dedupes() {
        let mut enrichment = Enricher::new(&lexicon::FACEBOOK).enrich("I love this");
        assert_eq!(enrichment.emotions, vec![Emotion::Love]);

        enrichment.add_emotions([Emotion::Love, Emotion::Humor]);
        assert_eq!(enrichment.emotions, vec![Emotion::Love, Emotion::Humor]);
    }

    #[test]
    fn test_tiktok_category() {
        let enricher = Enricher::new(&lexicon::TIKTOK);
        let tags = vec!["OOTD".to_string()];

        assert_eq!(enricher.category("my dance routine", &tags), Some("fashion"));
        assert_eq!(enricher.category("my dance routine", &[]), Some("dance"));
        assert_eq!(enricher.category("zzz", &[]), None);
    }

    #[test]
    fn test_platforms_without_categories() {
        let enricher = Enricher::new(&lexicon::TWITTER);
        assert_eq!(enricher.category("music and dance", &[]), None);
    }
}
