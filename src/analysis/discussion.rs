use crate::models::{DiscussionSignal, RawPostItem, SourceTag};
use crate::taxonomy::{classify_category, classify_post_topic, classify_sentiment};

/// Keeps high-engagement posts and annotates them with category, sentiment
/// and topic.
pub struct DiscussionAnalyzer {
    min_engagement: i64,
    max_discussions: usize,
}

impl DiscussionAnalyzer {
    pub fn new(min_engagement: i64, max_discussions: usize) -> Self {
        Self {
            min_engagement,
            max_discussions,
        }
    }

    pub fn analyze(&self, posts: &[RawPostItem]) -> Vec<DiscussionSignal> {
        let mut signals: Vec<DiscussionSignal> = posts
            .iter()
            .filter(|post| post.engagement() > self.min_engagement)
            .map(|post| DiscussionSignal {
                title: post.title.clone(),
                category: classify_category(post),
                sentiment: classify_sentiment(post),
                topic: classify_post_topic(post),
                engagement: post.engagement(),
                community: post.community.clone(),
                source_tag: SourceTag::Post,
            })
            .collect();

        signals.sort_by(|a, b| b.engagement.cmp(&a.engagement));
        signals.truncate(self.max_discussions);

        tracing::debug!(
            "{} of {} posts passed the engagement cutoff",
            signals.len(),
            posts.len()
        );
        signals
    }
}

impl Default for DiscussionAnalyzer {
    fn default() -> Self {
        Self::new(50, 20)
    }
}
