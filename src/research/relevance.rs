use crate::config::ResearchConfig;
use crate::models::{Corpus, CorpusOpportunity, CorpusTrend};

/// Fraction of keywords that occur as substrings of `text`. Plain
/// containment, no stemming.
pub fn relevance(text: &str, keywords: &[String]) -> f64 {
    if keywords.is_empty() {
        return 0.0;
    }
    let haystack = text.to_lowercase();
    let hits = keywords.iter().filter(|kw| haystack.contains(kw.as_str())).count();
    hits as f64 / keywords.len() as f64
}

pub fn score_opportunity(item: &CorpusOpportunity, keywords: &[String]) -> f64 {
    relevance(&item.searchable_text(), keywords)
}

pub fn score_trend(item: &CorpusTrend, keywords: &[String]) -> f64 {
    relevance(&item.searchable_text(), keywords)
}

#[derive(Debug, Clone, Copy)]
pub struct Ranked<'a, T> {
    pub item: &'a T,
    pub score: f64,
}

/// Corpus items ordered by relevance to one query.
#[derive(Debug, Clone)]
pub struct RankedCorpus<'a> {
    pub opportunities: Vec<Ranked<'a, CorpusOpportunity>>,
    pub trends: Vec<Ranked<'a, CorpusTrend>>,
    /// True when either list had no positive match and was filled from the
    /// base ranking instead.
    pub used_fallback: bool,
}

impl RankedCorpus<'_> {
    pub fn is_empty(&self) -> bool {
        self.opportunities.is_empty() && self.trends.is_empty()
    }
}

pub fn rank_corpus<'a>(corpus: &'a Corpus, keywords: &[String], config: &ResearchConfig) -> RankedCorpus<'a> {
    let mut opportunities = positive_matches(&corpus.opportunities, |o| score_opportunity(o, keywords));
    let mut trends = positive_matches(&corpus.trends, |t| score_trend(t, keywords));
    let mut used_fallback = false;

    if opportunities.is_empty() && !corpus.opportunities.is_empty() {
        tracing::debug!("No opportunity matched {:?}; using base ranking", keywords);
        opportunities = base_ranked(
            &corpus.opportunities,
            |o| o.scores.overall,
            config.opportunity_fallback,
            config.opportunity_fallback_score,
        );
        used_fallback = true;
    }

    if trends.is_empty() && !corpus.trends.is_empty() {
        tracing::debug!("No trend matched {:?}; using base ranking", keywords);
        trends = base_ranked(
            &corpus.trends,
            |t| t.impact_score,
            config.trend_fallback,
            config.trend_fallback_score,
        );
        used_fallback = true;
    }

    RankedCorpus {
        opportunities,
        trends,
        used_fallback,
    }
}

fn positive_matches<'a, T>(items: &'a [T], score: impl Fn(&T) -> f64) -> Vec<Ranked<'a, T>> {
    let mut ranked: Vec<Ranked<'a, T>> = items
        .iter()
        .map(|item| Ranked {
            item,
            score: score(item),
        })
        .filter(|r| r.score > 0.0)
        .collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

fn base_ranked<'a, T>(
    items: &'a [T],
    base: impl Fn(&T) -> f64,
    limit: usize,
    flat_score: f64,
) -> Vec<Ranked<'a, T>> {
    let mut ordered: Vec<&'a T> = items.iter().collect();
    ordered.sort_by(|a, b| base(b).total_cmp(&base(a)));
    ordered
        .into_iter()
        .take(limit)
        .map(|item| Ranked {
            item,
            score: flat_score,
        })
        .collect()
}
