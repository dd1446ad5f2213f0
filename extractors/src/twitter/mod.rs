mod record;

pub use record::TweetRecord;

use serde_json::Value;
use socmed_types::{Document, Platform, PlatformExtractor};

use crate::document::{assemble_document, decoded};
use crate::enrichment::{lexicon, Enricher};
use crate::raw::RawExt;

const ADD_ENTRIES: &str = "TimelineAddEntries";
const TIMELINE_ITEM: &str = "TimelineTimelineItem";
const TIMELINE_MODULE: &str = "TimelineTimelineModule";
const TIMELINE_TWEET: &str = "TimelineTweet";
const VISIBILITY_WRAPPER: &str = "TweetWithVisibilityResults";

/// Tweets from a search timeline response
pub struct TwitterExtractor {
    enricher: Enricher,
}

impl TwitterExtractor {
    pub fn new() -> Self {
        Self {
            enricher: Enricher::new(&lexicon::TWITTER),
        }
    }
}

impl Default for TwitterExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformExtractor for TwitterExtractor {
    fn platform(&self) -> Platform {
        Platform::Twitter
    }

    fn extract_items<'a>(&self, raw: &'a Value) -> Vec<&'a Value> {
        let mut tweets = Vec::new();

        let instructions = raw.items_at(&["data", "result", "timeline", "instructions"]);
        for instruction in instructions {
            if instruction.str_field("type") != Some(ADD_ENTRIES) {
                continue;
            }

            for entry in instruction.items_at(&["entries"]) {
                let content = entry.field("content");
                match content.str_field("entryType") {
                    Some(TIMELINE_ITEM) => {
                        tweets.extend(timeline_tweet(content.field("itemContent")));
                    }
                    Some(TIMELINE_MODULE) => {
                        for item in content.items_at(&["items"]) {
                            tweets.extend(timeline_tweet(item.field("item").field("itemContent")));
                        }
                    }
                    // cursors, user modules and anything else
                    _ => {}
                }
            }
        }

        tweets
    }

    fn build_document(&self, item: &Value) -> Option<Document> {
        let record = decoded(Platform::Twitter, TweetRecord::decode(item))?;
        let enrichment = self.enricher.enrich(&record.text);
        Some(assemble_document(
            Platform::Twitter,
            record.into_parts(),
            enrichment,
            item,
        ))
    }
}

/// The tweet object behind a `TimelineTweet` item, if any
fn timeline_tweet(item_content: &Value) -> Option<&Value> {
    if item_content.str_field("itemType") != Some(TIMELINE_TWEET) {
        return None;
    }

    let result = item_content
        .field("tweet_results")
        .object_field("result")?;

    if result.str_field("__typename") == Some(VISIBILITY_WRAPPER) {
        return result.object_field("tweet");
    }
    Some(result)
}
