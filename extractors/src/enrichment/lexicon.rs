//! Per-platform word tables.

use socmed_types::Emotion;

/// How language word lists are matched against text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordMatch {
    /// Word appears anywhere in the lowercased text
    Substring,
    /// Word appears surrounded by spaces (text is padded with one space on each side)
    Padded,
}

/// Immutable word tables for one platform
#[derive(Debug)]
pub struct Lexicon {
    pub positive: &'static [&'static str],
    pub negative: &'static [&'static str],
    /// Checked in order; the first hit for each emotion tags it
    pub emotions: &'static [(Emotion, &'static [&'static str])],
    pub indonesian: &'static [&'static str],
    pub english: &'static [&'static str],
    pub language_match: WordMatch,
    /// Category buckets in priority order. Empty for platforms without categories.
    pub categories: &'static [(&'static str, &'static [&'static str])],
}

const SHORT_VIDEO_INDONESIAN: &[&str] = &[
    "dan", "yang", "untuk", "dengan", "dari", "ini", "itu", "tidak", "ada", "saya",
];

const SHORT_VIDEO_ENGLISH: &[&str] = &["and", "the", "to", "of", "a", "in", "for", "is", "on", "that"];

pub static TWITTER: Lexicon = Lexicon {
    positive: &["good", "great", "awesome", "amazing", "excellent", "happy", "love"],
    negative: &["bad", "terrible", "awful", "hate", "angry", "sad", "disappointed"],
    emotions: &[
        (Emotion::Joy, &["happy", "joy", "excited", "amazing", "wonderful"]),
        (Emotion::Anger, &["angry", "mad", "furious", "annoyed", "hate"]),
        (Emotion::Sadness, &["sad", "depressed", "crying", "disappointed"]),
        (Emotion::Fear, &["scared", "afraid", "worried", "anxious"]),
        (Emotion::Surprise, &["wow", "amazing", "surprised", "unbelievable"]),
        (Emotion::Love, &["love", "heart", "adore", "crush"]),
    ],
    indonesian: SHORT_VIDEO_INDONESIAN,
    english: SHORT_VIDEO_ENGLISH,
    language_match: WordMatch::Substring,
    categories: &[],
};

pub static INSTAGRAM: Lexicon = Lexicon {
    positive: &["love", "amazing", "beautiful", "perfect", "awesome", "great", "happy", "good"],
    negative: &["bad", "terrible", "awful", "hate", "angry", "sad", "disappointed", "worst"],
    emotions: &[
        (Emotion::Joy, &["happy", "joy", "excited", "amazing", "wonderful", "love"]),
        (Emotion::Love, &["love", "heart", "adore", "crush", "❤️", "💕", "💖"]),
        (Emotion::Excitement, &["excited", "wow", "amazing", "incredible", "awesome"]),
        (Emotion::Gratitude, &["thank", "grateful", "blessed", "appreciate"]),
        (Emotion::Inspiration, &["inspired", "motivation", "goals", "dream"]),
    ],
    indonesian: SHORT_VIDEO_INDONESIAN,
    english: SHORT_VIDEO_ENGLISH,
    language_match: WordMatch::Substring,
    categories: &[],
};

pub static TIKTOK: Lexicon = Lexicon {
    positive: &[
        "love", "amazing", "fun", "cool", "awesome", "great", "happy", "good", "nice", "best",
    ],
    negative: &[
        "bad", "terrible", "awful", "hate", "angry", "sad", "disappointed", "worst", "boring",
    ],
    emotions: &[
        (Emotion::Joy, &["happy", "joy", "fun", "excited", "amazing", "wonderful", "laugh"]),
        (Emotion::Love, &["love", "heart", "adore", "crush", "❤️", "💕"]),
        (Emotion::Excitement, &["excited", "wow", "amazing", "incredible", "awesome", "omg"]),
        (Emotion::Humor, &["funny", "lol", "haha", "hilarious", "joke", "comedy"]),
        (Emotion::Inspiration, &["inspired", "motivation", "goals", "dream", "believe"]),
        (Emotion::Creativity, &["creative", "art", "design", "diy", "tutorial"]),
        (Emotion::Energy, &["energy", "power", "strong", "fierce", "bold"]),
    ],
    indonesian: SHORT_VIDEO_INDONESIAN,
    english: SHORT_VIDEO_ENGLISH,
    language_match: WordMatch::Substring,
    categories: &[
        ("dance", &["dance", "dancing", "choreography", "moves", "dancechallenge"]),
        ("comedy", &["funny", "comedy", "joke", "humor", "meme", "viral", "hilarious"]),
        ("education", &["tutorial", "how", "learn", "education", "tips", "diy", "howto"]),
        ("lifestyle", &["lifestyle", "daily", "routine", "life", "vlog", "day"]),
        ("food", &["food", "cooking", "recipe", "eat", "delicious", "foodie"]),
        ("fashion", &["fashion", "outfit", "style", "clothing", "ootd", "fashiontok"]),
        ("beauty", &["beauty", "makeup", "skincare", "beautytips", "cosmetics"]),
        ("fitness", &["fitness", "workout", "exercise", "gym", "health", "fit"]),
        ("music", &["music", "singing", "song", "cover", "musician", "musictok"]),
        ("pets", &["pet", "dog", "cat", "animal", "cute", "petsoftiktok"]),
        ("travel", &["travel", "trip", "vacation", "explore", "traveltok"]),
        ("gaming", &["gaming", "game", "gamer", "videogames", "esports"]),
    ],
};

pub static FACEBOOK: Lexicon = Lexicon {
    positive: &[
        "love", "amazing", "great", "awesome", "wonderful", "excellent", "happy", "good", "nice",
        "best", "perfect",
    ],
    negative: &[
        "hate", "terrible", "awful", "bad", "worst", "angry", "sad", "disappointed", "horrible",
        "annoying",
    ],
    emotions: &[
        (Emotion::Joy, &["happy", "joy", "excited", "amazing", "wonderful", "celebrate"]),
        (Emotion::Love, &["love", "heart", "adore", "beautiful", "sweet"]),
        (Emotion::Anger, &["angry", "mad", "furious", "annoyed", "frustrated"]),
        (Emotion::Sadness, &["sad", "depressed", "crying", "disappointed", "heartbroken"]),
        (Emotion::Surprise, &["wow", "amazing", "surprised", "unbelievable", "shocking"]),
        (Emotion::Fear, &["scared", "afraid", "worried", "anxious", "terrified"]),
        (Emotion::Humor, &["funny", "hilarious", "joke", "comedy", "lol", "haha"]),
    ],
    indonesian: &[
        "dan", "yang", "untuk", "dengan", "dari", "ini", "itu", "tidak", "ada", "saya", "kita",
        "mereka",
    ],
    english: &[
        "and", "the", "to", "of", "a", "in", "for", "is", "on", "that", "you", "it", "with", "as",
    ],
    language_match: WordMatch::Padded,
    categories: &[],
};

pub static YOUTUBE: Lexicon = Lexicon {
    positive: &[
        "great", "amazing", "awesome", "excellent", "fantastic", "wonderful", "love", "best",
        "perfect", "incredible",
    ],
    negative: &[
        "terrible", "awful", "horrible", "worst", "hate", "bad", "disappointing", "failed",
        "disaster",
    ],
    emotions: &[
        (Emotion::Excitement, &["excited", "amazing", "incredible", "awesome", "wow"]),
        (Emotion::Joy, &["happy", "joy", "fun", "cheerful", "delighted"]),
        (Emotion::Love, &["love", "adore", "beautiful", "gorgeous", "wonderful"]),
        (Emotion::Curiosity, &["discover", "explore", "learn", "find out", "reveal"]),
        (Emotion::Inspiration, &["inspired", "motivate", "achieve", "success", "dream"]),
        (Emotion::Humor, &["funny", "hilarious", "comedy", "joke", "laugh"]),
        (Emotion::Surprise, &["surprise", "unexpected", "shocking", "unbelievable"]),
        (Emotion::Nostalgia, &["memories", "nostalgic", "remember", "throwback", "classic"]),
    ],
    indonesian: &[
        "dan", "yang", "untuk", "dengan", "dari", "ini", "itu", "tidak", "ada", "saya", "video",
        "channel",
    ],
    english: &[
        "and", "the", "to", "of", "a", "in", "for", "is", "on", "that", "video", "channel",
        "subscribe",
    ],
    language_match: WordMatch::Substring,
    categories: &[
        ("music", &["music", "song", "audio", "album", "artist", "band", "cover", "acoustic", "lyric"]),
        ("gaming", &["gaming", "game", "gameplay", "playthrough", "walkthrough", "review", "trailer"]),
        ("education", &["tutorial", "how to", "learn", "education", "course", "lesson", "guide", "tips"]),
        ("entertainment", &["comedy", "funny", "humor", "entertainment", "show", "movie", "film"]),
        ("vlog", &["vlog", "daily", "life", "routine", "day in the life", "personal"]),
        ("news", &["news", "breaking", "report", "update", "current events", "politics"]),
        ("sports", &["sports", "football", "basketball", "soccer", "olympics", "match", "game"]),
        ("technology", &["tech", "technology", "review", "unboxing", "gadget", "smartphone", "computer"]),
        ("cooking", &["cooking", "recipe", "food", "kitchen", "chef", "baking", "meal"]),
        ("travel", &["travel", "trip", "vacation", "tour", "destination", "adventure"]),
        ("fashion", &["fashion", "style", "outfit", "clothing", "beauty", "makeup"]),
        ("fitness", &["fitness", "workout", "exercise", "health", "gym", "training"]),
        ("diy", &["diy", "craft", "handmade", "build", "create", "project"]),
        ("podcast", &["podcast", "interview", "discussion", "talk", "conversation"]),
    ],
};
