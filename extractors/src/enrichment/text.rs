//! Keyword heuristics over free text. Every function is pure and total.

use regex::Regex;
use socmed_types::{Emotion, Language, Sentiment};
use std::sync::LazyLock;

use super::lexicon::WordMatch;

static HASHTAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#(\w+)").unwrap());

static MENTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@(\w+)").unwrap());

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://(?:[a-zA-Z0-9]|[$-_@.&+]|[!*\(\),]|%[0-9a-fA-F]{2})+").unwrap()
});

/// Reaction share above which a Facebook reaction implies an emotion
const REACTION_THRESHOLDS: &[(&str, f64, Emotion)] = &[
    ("love", 0.3, Emotion::Love),
    ("haha", 0.3, Emotion::Humor),
    ("angry", 0.2, Emotion::Anger),
    ("sad", 0.2, Emotion::Sadness),
    ("wow", 0.3, Emotion::Surprise),
];

pub fn extract_hashtags(text: &str) -> Vec<String> {
    capture_tokens(&HASHTAG_RE, text)
}

pub fn extract_mentions(text: &str) -> Vec<String> {
    capture_tokens(&MENTION_RE, text)
}

pub fn extract_urls(text: &str) -> Vec<String> {
    URL_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

fn capture_tokens(re: &Regex, text: &str) -> Vec<String> {
    re.captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Count words that occur anywhere in `text_lower`, each word at most once
fn count_hits(text_lower: &str, words: &[&str]) -> usize {
    words.iter().filter(|w| text_lower.contains(**w)).count()
}

pub fn analyze_sentiment(text: &str, positive: &[&str], negative: &[&str]) -> Sentiment {
    if text.is_empty() {
        return Sentiment::Neutral;
    }

    let lower = text.to_lowercase();
    let pos = count_hits(&lower, positive);
    let neg = count_hits(&lower, negative);

    match pos.cmp(&neg) {
        std::cmp::Ordering::Greater => Sentiment::Positive,
        std::cmp::Ordering::Less => Sentiment::Negative,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
    }
}

pub fn detect_emotions(text: &str, table: &[(Emotion, &[&str])]) -> Vec<Emotion> {
    let mut emotions = Vec::new();
    if text.is_empty() {
        return emotions;
    }

    let lower = text.to_lowercase();
    for (emotion, keywords) in table {
        if keywords.iter().any(|k| lower.contains(*k)) {
            push_unique(&mut emotions, *emotion);
        }
    }
    emotions
}

/// Emotions implied by reaction shares. Shares are taken over the sum of all
/// reaction counts, not the post's reported total.
pub fn reaction_emotions<'a>(reactions: impl IntoIterator<Item = (&'a str, u64)>) -> Vec<Emotion> {
    let counts: Vec<(&str, u64)> = reactions.into_iter().collect();
    let total = counts.iter().map(|(_, c)| *c).fold(0u64, u64::saturating_add);

    let mut emotions = Vec::new();
    if total == 0 {
        return emotions;
    }

    for (reaction, threshold, emotion) in REACTION_THRESHOLDS {
        let count = counts
            .iter()
            .filter(|(name, _)| name == reaction)
            .map(|(_, c)| *c)
            .fold(0u64, u64::saturating_add);
        if count as f64 / total as f64 > *threshold {
            push_unique(&mut emotions, *emotion);
        }
    }
    emotions
}

pub fn push_unique(emotions: &mut Vec<Emotion>, emotion: Emotion) {
    if !emotions.contains(&emotion) {
        emotions.push(emotion);
    }
}

pub fn detect_language(
    text: &str,
    indonesian: &[&str],
    english: &[&str],
    mode: WordMatch,
) -> Language {
    if text.is_empty() {
        return Language::Unknown;
    }

    let lower = text.to_lowercase();
    let (id_hits, en_hits) = match mode {
        WordMatch::Substring => (count_hits(&lower, indonesian), count_hits(&lower, english)),
        WordMatch::Padded => {
            let padded = format!(" {} ", lower);
            let padded_hits = |words: &[&str]| {
                words
                    .iter()
                    .filter(|w| padded.contains(&format!(" {} ", w)))
                    .count()
            };
            (padded_hits(indonesian), padded_hits(english))
        }
    };

    match id_hits.cmp(&en_hits) {
        std::cmp::Ordering::Greater => Language::Id,
        std::cmp::Ordering::Less => Language::En,
        std::cmp::Ordering::Equal => Language::Mixed,
    }
}

/// First bucket with a keyword equal to a hashtag, else the first bucket with a
/// keyword inside the text. Bucket order decides ties.
pub fn classify_category(
    text: &str,
    hashtags: &[String],
    buckets: &[(&'static str, &[&str])],
) -> Option<&'static str> {
    let tags: Vec<String> = hashtags.iter().map(|t| t.to_lowercase()).collect();

    let by_hashtag = buckets
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| tags.iter().any(|t| t == k)));
    if let Some((name, _)) = by_hashtag {
        return Some(*name);
    }

    let lower = text.to_lowercase();
    buckets
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(*k)))
        .map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSITIVE: &[&str] = &["good", "great", "love"];
    const NEGATIVE: &[&str] = &["bad", "awful", "hate"];

    #[test]
    fn test_hashtags_and_mentions() {
        let text = "Loving #Rust and #rust with @ferris, cc @Bob_2 #café";

        assert_eq!(extract_hashtags(text), vec!["Rust", "rust", "café"]);
        assert_eq!(extract_mentions(text), vec!["ferris", "Bob_2"]);
        assert!(extract_hashtags("").is_empty());
        assert!(extract_mentions("no handles here").is_empty());
    }

    #[test]
    fn test_hashtag_extraction_is_idempotent() {
        let text = "#one #two #one";
        let first = extract_hashtags(text);
        let rejoined: String = first.iter().map(|t| format!("#{} ", t)).collect();

        assert_eq!(first, vec!["one", "two", "one"]);
        assert_eq!(extract_hashtags(&rejoined), first);
        assert_eq!(extract_hashtags(text), first);
    }

    #[test]
    fn test_urls() {
        let urls = extract_urls("read https://example.com/a?b=1 and http://x.io now");
        assert_eq!(urls, vec!["https://example.com/a?b=1", "http://x.io"]);
    }

    #[test]
    fn test_sentiment_symmetry() {
        assert_eq!(analyze_sentiment("This is GOOD", POSITIVE, NEGATIVE), Sentiment::Positive);
        assert_eq!(analyze_sentiment("this is bad", POSITIVE, NEGATIVE), Sentiment::Negative);
        assert_eq!(analyze_sentiment("just a table", POSITIVE, NEGATIVE), Sentiment::Neutral);
        assert_eq!(analyze_sentiment("good but bad", POSITIVE, NEGATIVE), Sentiment::Neutral);
        assert_eq!(analyze_sentiment("", POSITIVE, NEGATIVE), Sentiment::Neutral);
    }

    #[test]
    fn test_sentiment_counts_each_word_once() {
        // "good good good" is one positive hit against two negatives
        assert_eq!(
            analyze_sentiment("good good good, bad and awful", POSITIVE, NEGATIVE),
            Sentiment::Negative
        );
    }

    #[test]
    fn test_emotions_ordered_and_deduplicated() {
        let table: &[(Emotion, &[&str])] = &[
            (Emotion::Joy, &["happy"]),
            (Emotion::Love, &["love"]),
            (Emotion::Joy, &["glad"]),
        ];

        assert_eq!(
            detect_emotions("Love this, so happy and glad", table),
            vec![Emotion::Joy, Emotion::Love]
        );
        assert!(detect_emotions("", table).is_empty());
    }

    #[test]
    fn test_reaction_emotions() {
        let emotions = reaction_emotions([("love", 40), ("like", 60)]);
        assert_eq!(emotions, vec![Emotion::Love]);

        let emotions = reaction_emotions([("haha", 5), ("angry", 3), ("like", 2)]);
        assert_eq!(emotions, vec![Emotion::Humor, Emotion::Anger]);

        // exactly at the threshold does not count
        let emotions = reaction_emotions([("sad", 2), ("like", 8)]);
        assert!(emotions.is_empty());

        assert!(reaction_emotions(Vec::<(&str, u64)>::new()).is_empty());

        // totals saturate instead of overflowing
        let emotions = reaction_emotions([("love", u64::MAX), ("wow", u64::MAX), ("love", 1)]);
        assert_eq!(emotions, vec![Emotion::Love, Emotion::Surprise]);
    }

    #[test]
    fn test_language_guess() {
        let id = &["dan", "yang"];
        let en = &["and", "the"];

        assert_eq!(detect_language("", id, en, WordMatch::Substring), Language::Unknown);
        assert_eq!(detect_language("xyz", id, en, WordMatch::Substring), Language::Mixed);
        assert_eq!(detect_language("the cat and dog", id, en, WordMatch::Substring), Language::En);
        assert_eq!(detect_language("kopi dan roti yang", id, en, WordMatch::Substring), Language::Id);
        assert_eq!(detect_language("dan the", id, en, WordMatch::Substring), Language::Mixed);
    }

    #[test]
    fn test_language_padded_matching() {
        let id = &["dan"];
        let en = &["the"];

        // "dance" contains "dan" as a substring but not as a word
        assert_eq!(detect_language("dance", id, en, WordMatch::Substring), Language::Id);
        assert_eq!(detect_language("dance", id, en, WordMatch::Padded), Language::Mixed);
        assert_eq!(detect_language("The end", id, en, WordMatch::Padded), Language::En);
    }

    #[test]
    fn test_category_order_stability() {
        let buckets: &[(&'static str, &[&str])] = &[
            ("dance", &["dance"]),
            ("music", &["music", "song"]),
            ("food", &["food"]),
        ];

        // hashtag match wins over an earlier bucket matched only in text
        assert_eq!(
            classify_category("dance all day", &["Food".to_string()], buckets),
            Some("food")
        );
        // among text matches, bucket order decides
        assert_eq!(classify_category("a song about food", &[], buckets), Some("music"));
        assert_eq!(classify_category("nothing relevant", &[], buckets), None);

        for _ in 0..3 {
            assert_eq!(
                classify_category("food song dance", &[], buckets),
                Some("dance")
            );
        }
    }
}
