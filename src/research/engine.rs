use crate::config::ResearchConfig;
use crate::models::{Corpus, ResearchContext, ResearchResult, ResearchType};
use crate::research::keywords::extract_keywords;
use crate::research::relevance::rank_corpus;
use crate::research::reports::{build_report, Report, ReportInput};

const ANALYSIS_ID_PREFIX: &str = "research_";
const ANALYSIS_ID_SEED_CHARS: usize = 9;
const PROVENANCE: &str = "curated-corpus";

/// Query-relevance research over a caller-supplied corpus.
///
/// The corpus is passed into every call and never mutated, so one engine
/// and one corpus can be shared across threads.
pub struct ResearchEngine {
    config: ResearchConfig,
}

impl ResearchEngine {
    pub fn new(config: ResearchConfig) -> Self {
        Self { config }
    }

    /// Rank the corpus against `query` and build the report for `kind`.
    pub fn report(&self, corpus: &Corpus, query: &str, kind: ResearchType) -> Report {
        let keywords = extract_keywords(query);
        let ranked = rank_corpus(corpus, &keywords, &self.config);
        tracing::debug!(
            "Query {:?} -> {} keywords, {} opportunities, {} trends (fallback: {})",
            query,
            keywords.len(),
            ranked.opportunities.len(),
            ranked.trends.len(),
            ranked.used_fallback
        );

        if ranked.is_empty() {
            return Report {
                summary: format!("No corpus entries are available to research \"{}\".", query),
                ..Report::default()
            };
        }

        let input = ReportInput {
            query,
            keywords: &keywords,
            ranked: &ranked,
        };
        build_report(kind, &input)
    }

    pub fn research(
        &self,
        corpus: &Corpus,
        query: &str,
        kind: ResearchType,
        context: ResearchContext,
    ) -> ResearchResult {
        let report = self.report(corpus, query, kind);
        tracing::info!(
            "{} research produced {} findings and {} insights",
            kind,
            report.findings.len(),
            report.insights.len()
        );
        into_result(report, context)
    }
}

impl Default for ResearchEngine {
    fn default() -> Self {
        Self::new(ResearchConfig::default())
    }
}

pub fn into_result(report: Report, context: ResearchContext) -> ResearchResult {
    ResearchResult {
        analysis_id: context.analysis_id,
        execution_time_ms: context.execution_time_ms,
        confidence: context.confidence,
        summary: report.summary,
        findings: report.findings,
        insights: report.insights,
        provenance: PROVENANCE.to_string(),
    }
}

/// Prefix, the first nine seed characters with separators removed, then
/// the timestamp.
pub fn generate_analysis_id(seed: &str, timestamp: i64) -> String {
    let stem: String = seed
        .chars()
        .filter(|c| !c.is_ascii_punctuation() && !c.is_whitespace())
        .take(ANALYSIS_ID_SEED_CHARS)
        .collect();
    format!("{}{}_{}", ANALYSIS_ID_PREFIX, stem, timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_analysis_id() {
        assert_eq!(
            generate_analysis_id("3f2a-9c1b-77de-4410", 1_700_000_000_000),
            "research_3f2a9c1b7_1700000000000"
        );
    }

    #[test]
    fn test_analysis_id_is_deterministic() {
        let seed = "a1b2c3d4-e5f6";
        assert_eq!(generate_analysis_id(seed, 42), generate_analysis_id(seed, 42));
        assert_eq!(generate_analysis_id("ab", 1), "research_ab_1");
    }

    #[test]
    fn test_empty_corpus_yields_empty_report() {
        let report = ResearchEngine::default().report(&Corpus::default(), "anything", ResearchType::Market);
        assert!(report.findings.is_empty());
        assert!(report.insights.is_empty());
    }

    #[test]
    fn test_context_is_copied_onto_result() {
        let context = ResearchContext {
            analysis_id: "research_abc_1".to_string(),
            execution_time_ms: 12,
            confidence: 70.0,
        };
        let result = ResearchEngine::default().research(
            &Corpus::default(),
            "q",
            ResearchType::General,
            context,
        );
        assert_eq!(result.analysis_id, "research_abc_1");
        assert_eq!(result.execution_time_ms, 12);
        assert_eq!(result.provenance, "curated-corpus");
    }
}
