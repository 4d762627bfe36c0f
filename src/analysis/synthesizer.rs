use std::collections::BTreeMap;

use crate::models::{Category, CategoryTrend, DiscussionSignal, SourceTag, UnifiedSignal};

pub type SignalMap = BTreeMap<Category, UnifiedSignal>;

/// Merges repository trends and discussion signals into one entry per
/// category. Fields are last-write-wins; `sources` only ever grows.
pub struct SignalSynthesizer;

impl SignalSynthesizer {
    pub fn new() -> Self {
        Self
    }

    pub fn synthesize(&self, trends: &[CategoryTrend], discussions: &[DiscussionSignal]) -> SignalMap {
        let mut signals = SignalMap::new();

        for trend in trends {
            let mut signal = UnifiedSignal::new(trend.category);
            signal.tech_momentum = Some(trend.momentum as f64);
            signal.sources.push(SourceTag::Repo);
            signals.insert(trend.category, signal);
        }

        for discussion in discussions {
            let signal = signals
                .entry(discussion.category)
                .or_insert_with(|| UnifiedSignal::new(discussion.category));
            signal.social_momentum = Some(discussion.engagement as f64);
            signal.sentiment = Some(discussion.sentiment);
            signal.sources.push(SourceTag::Post);
        }

        tracing::debug!(
            "Synthesized {} signals from {} trends and {} discussions",
            signals.len(),
            trends.len(),
            discussions.len()
        );
        signals
    }
}

impl Default for SignalSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}
