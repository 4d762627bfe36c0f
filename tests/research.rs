use std::io::Write;

use pretty_assertions::assert_eq;

use marketpulse::models::{Corpus, ResearchContext, ResearchType};
use marketpulse::research::{extract_keywords, rank_corpus};
use marketpulse::{Error, ResearchConfig, ResearchEngine};

const CORPUS: &str = include_str!("fixtures/corpus.json");

fn corpus() -> Corpus {
    Corpus::from_json(CORPUS).unwrap()
}

fn context() -> ResearchContext {
    ResearchContext {
        analysis_id: "research_test_1".to_string(),
        execution_time_ms: 3,
        confidence: 80.0,
    }
}

#[test]
fn japanese_query_finds_invoicing_opportunity() {
    let corpus = corpus();
    let result = ResearchEngine::default().research(
        &corpus,
        "フリーランス 請求書 管理",
        ResearchType::Market,
        context(),
    );

    let finding = result
        .findings
        .iter()
        .find(|f| f.title.contains("フリーランス向け請求書自動化"))
        .expect("invoicing opportunity should be reported");
    assert!(finding.confidence > 0.0);
    assert!(!result.insights.is_empty());
}

#[test]
fn japanese_keywords_rank_matching_items_first() {
    let corpus = corpus();
    let keywords = extract_keywords("フリーランス 請求書 管理");
    let ranked = rank_corpus(&corpus, &keywords, &ResearchConfig::default());

    assert!(!ranked.used_fallback);
    assert_eq!(ranked.opportunities.len(), 1);
    assert_eq!(ranked.opportunities[0].item.id, "freelance-invoicing");
    assert_eq!(ranked.trends[0].item.id, "invoice-digitization");
}

#[test]
fn unmatched_query_falls_back_for_every_report_type() {
    let corpus = corpus();
    let engine = ResearchEngine::default();

    for kind in ResearchType::ALL {
        let result = engine.research(&corpus, "quantum knitting cooperative", kind, context());
        assert!(!result.findings.is_empty(), "{} returned no findings", kind);
        assert!(!result.insights.is_empty(), "{} returned no insights", kind);
        assert!(result
            .findings
            .iter()
            .all(|f| f.confidence > 0.0 && f.confidence <= 100.0));
    }
}

#[test]
fn fallback_prefers_highest_base_rank() {
    let corpus = corpus();
    let ranked = rank_corpus(&corpus, &[], &ResearchConfig::default());

    assert!(ranked.used_fallback);
    let ids: Vec<&str> = ranked.opportunities.iter().map(|r| r.item.id.as_str()).collect();
    assert_eq!(ids, vec!["ai-support-desk", "freelance-invoicing", "clinic-scheduling"]);
    assert!(ranked.trends.iter().all(|t| t.score == 0.2));
}

#[test]
fn unknown_type_uses_general_report() {
    let corpus = corpus();
    let engine = ResearchEngine::default();
    let general = engine.report(&corpus, "ai support", ResearchType::General);
    let unknown = engine.report(&corpus, "ai support", ResearchType::from("swot"));
    assert_eq!(general, unknown);
}

#[test]
fn competitor_report_flags_blue_ocean() {
    let corpus = corpus();
    let report = ResearchEngine::default().report(&corpus, "scheduling clinics", ResearchType::Competitor);
    assert!(report
        .insights
        .iter()
        .any(|i| i.starts_with("Blue ocean candidates") && i.contains("Clinic Scheduling Assistant")));
}

#[test]
fn research_is_reproducible_and_leaves_corpus_untouched() {
    let corpus = corpus();
    let before = corpus.clone();
    let engine = ResearchEngine::default();

    let first = engine.research(&corpus, "AI agents for support", ResearchType::Technology, context());
    let second = engine.research(&corpus, "AI agents for support", ResearchType::Technology, context());

    assert_eq!(first, second);
    assert_eq!(corpus, before);
}

#[test]
fn concurrent_research_over_shared_corpus() {
    let corpus = corpus();
    let engine = ResearchEngine::default();
    let expected = engine.report(&corpus, "invoicing", ResearchType::Pricing);

    let (engine, corpus) = (&engine, &corpus);
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(move || engine.report(corpus, "invoicing", ResearchType::Pricing)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn corpus_loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CORPUS.as_bytes()).unwrap();

    let loaded = Corpus::from_json(&std::fs::read_to_string(file.path()).unwrap()).unwrap();
    assert_eq!(loaded.opportunities.len(), 3);
    assert_eq!(loaded.trends.len(), 2);
}

#[test]
fn malformed_corpus_fails_at_the_boundary() {
    let err = Corpus::from_json(r#"{"opportunities": [{"id": "x", "title": "t"}]}"#).unwrap_err();
    assert!(matches!(err, Error::ParseError(_)));
    assert!(err.is_input_error());
}
