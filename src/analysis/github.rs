use std::collections::BTreeMap;

use crate::models::{Category, CategoryTrend, RawRepoItem, SourceTag};
use crate::taxonomy::classify_category;

/// Aggregates repository telemetry into per-category star totals.
pub struct GitHubAnalyzer {
    max_categories: usize,
}

impl GitHubAnalyzer {
    pub fn new(max_categories: usize) -> Self {
        Self { max_categories }
    }

    pub fn analyze(&self, repos: &[RawRepoItem]) -> Vec<CategoryTrend> {
        let mut stars: BTreeMap<Category, u64> = BTreeMap::new();

        for repo in repos {
            let entry = stars.entry(classify_category(repo)).or_insert(0);
            *entry = entry.saturating_add(repo.star_count);
        }

        let mut trends: Vec<CategoryTrend> = stars
            .into_iter()
            .map(|(category, momentum)| CategoryTrend {
                category,
                momentum,
                source_tag: SourceTag::Repo,
            })
            .collect();

        // Stable sort keeps category order among ties
        trends.sort_by(|a, b| b.momentum.cmp(&a.momentum));
        trends.truncate(self.max_categories);

        tracing::debug!("{} repositories grouped into {} categories", repos.len(), trends.len());
        trends
    }
}

impl Default for GitHubAnalyzer {
    fn default() -> Self {
        Self::new(10)
    }
}
