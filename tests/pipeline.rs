use std::io::Write;

use pretty_assertions::assert_eq;

use marketpulse::analysis::{RecommendationEngine, RiskAssessor, SignalMap};
use marketpulse::models::{
    Category, CollectedData, ImpactTier, PriorityTier, RawPostItem, RawRepoItem, Sentiment, SourceTag,
    UnifiedSignal,
};
use marketpulse::{AnalysisPipeline, Error};

fn post(title: &str, upvotes: i64, comments: u64) -> RawPostItem {
    RawPostItem {
        title: title.to_string(),
        body: String::new(),
        upvote_score: upvotes,
        comment_count: comments,
        community: "startups".to_string(),
    }
}

/// Five categories, each with 40k stars and one enthusiastic 300-engagement post.
fn hot_market() -> CollectedData {
    CollectedData::new(
        vec![
            RawRepoItem::new("ai-bot", 40_000),
            RawRepoItem::new("fast-cli", 40_000),
            RawRepoItem::new("react-kit", 40_000),
            RawRepoItem::new("etl-lake", 40_000),
            RawRepoItem::new("k8s-operator", 40_000),
        ],
        vec![
            post("Great LLM release", 250, 50),
            post("Love this new CLI", 250, 50),
            post("Awesome React hooks", 250, 50),
            post("Great SQL dashboard", 250, 50),
            post("Excellent Kubernetes tips", 250, 50),
        ],
    )
}

#[test]
fn single_small_repo_stays_below_every_cutoff() {
    let data = CollectedData::new(vec![RawRepoItem::new("ai-bot", 2000).with_description("neural network")], vec![]);
    let analysis = AnalysisPipeline::default().analyze(&data);

    assert_eq!(analysis.signal_count, 1);
    let signal = &analysis.signals[0];
    assert_eq!(signal.category, Category::AiMl);
    assert_eq!(signal.tech_momentum, Some(2000.0));
    assert_eq!(signal.social_momentum, None);
    assert_eq!(signal.sources, vec![SourceTag::Repo]);

    // min(2000/1000, 40) is 2, not 40. Even 40 would miss the strict > 40
    // opportunity cutoff, so this signal is never an opportunity.
    assert!(analysis.insights.is_empty());
    assert!(analysis.opportunities.is_empty());
    assert!(analysis.recommendations.is_empty());

    assert_eq!(analysis.risks.len(), 1);
    assert!(analysis.risks[0].description.starts_with("Limited data"));
    assert_eq!(analysis.confidence, 55.0);
    assert_eq!(analysis.total_items, 1);
}

#[test]
fn corroborated_category_becomes_an_insight() {
    let data = CollectedData::new(
        vec![RawRepoItem::new("ai-bot", 2000)],
        vec![post("Great AI agent launch", 250, 50)],
    );
    let analysis = AnalysisPipeline::default().analyze(&data);

    // 2 + 30 + 20 + 10
    assert_eq!(analysis.insights.len(), 1);
    let insight = &analysis.insights[0];
    assert_eq!(insight.category, Category::AiMl);
    assert_eq!(insight.momentum, 62.0);
    assert_eq!(insight.confidence, 95.0);
    assert_eq!(insight.impact, ImpactTier::Medium);

    assert_eq!(analysis.opportunities.len(), 1);
    assert_eq!(analysis.opportunities[0].score, 62.0);
    assert_eq!(analysis.recommendations[0].priority, PriorityTier::High);
}

#[test]
fn hot_market_reports_crowding_first() {
    let analysis = AnalysisPipeline::default().analyze(&hot_market());

    assert_eq!(analysis.signal_count, 5);
    assert_eq!(analysis.insights.len(), 5);
    assert!(analysis.insights.iter().all(|i| i.momentum == 100.0));
    assert_eq!(analysis.opportunities.len(), 5);

    assert_eq!(analysis.risks.len(), 2);
    assert!(analysis.risks[0].description.starts_with("Intense competition"));
    assert_eq!(analysis.risks[0].probability, 0.8);
    assert_eq!(analysis.risks[0].impact, 0.7);
    assert!(analysis.risks[1].description.contains("incumbents"));

    let actions: Vec<&str> = analysis.recommendations.iter().map(|r| r.action.as_str()).collect();
    assert_eq!(actions.len(), 2);
    assert_eq!(actions[0], "Focus investment on AI/ML");
    assert!(actions[1].starts_with("Deep-dive"));
}

#[test]
fn crowding_from_signal_map() {
    let signals: SignalMap = [
        Category::AiMl,
        Category::DeveloperTools,
        Category::WebDevelopment,
        Category::DataAnalytics,
        Category::DevOps,
    ]
    .into_iter()
    .map(|category| {
        let signal = UnifiedSignal {
            category,
            tech_momentum: Some(40_000.0),
            social_momentum: Some(300.0),
            sentiment: Some(Sentiment::Positive),
            sources: vec![SourceTag::Repo, SourceTag::Post],
        };
        (category, signal)
    })
    .collect();

    let risks = RiskAssessor::new().assess(&signals);
    assert!(risks
        .iter()
        .any(|r| r.description.starts_with("Intense competition") && r.probability == 0.8));
}

#[test]
fn empty_map_has_no_recommendations() {
    assert!(RecommendationEngine::new().recommend(&SignalMap::new()).is_empty());
}

#[test]
fn analysis_is_deterministic_and_pure() {
    let data = hot_market();
    let before = data.clone();
    let pipeline = AnalysisPipeline::default();

    let first = pipeline.analyze(&data);
    let second = pipeline.analyze(&data);

    assert_eq!(first, second);
    assert_eq!(data, before);
}

#[test]
fn concurrent_callers_share_one_pipeline() {
    let data = hot_market();
    let pipeline = AnalysisPipeline::default();
    let expected = pipeline.analyze(&data);

    let (pipeline, data) = (&pipeline, &data);
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(move || pipeline.analyze(data))).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn collector_payload_loads_from_file() {
    let payload = r#"{
        "repos": [
            {"name": "ai-bot", "starCount": 2000, "topics": ["llm"]},
            {"name": "fast-cli", "description": "A developer CLI", "language": "Rust", "starCount": 900}
        ],
        "posts": [
            {"title": "Raised our seed round", "body": "funding news", "upvoteScore": 120, "commentCount": 30, "community": "startups"}
        ],
        "summary": {"totalItems": 3, "perSourceCounts": {"repo": 2, "post": 1}}
    }"#;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(payload.as_bytes()).unwrap();

    let data = CollectedData::from_json(&std::fs::read_to_string(file.path()).unwrap()).unwrap();
    assert_eq!(data.repos.len(), 2);
    assert_eq!(data.summary.per_source_counts["repo"], 2);

    let analysis = AnalysisPipeline::default().analyze(&data);
    assert_eq!(analysis.total_items, 3);
    assert!(analysis.signal_count >= 2);
}

#[test]
fn blank_community_is_rejected() {
    let payload = r#"{
        "repos": [],
        "posts": [{"title": "t", "body": "", "upvoteScore": 1, "commentCount": 0, "community": " "}],
        "summary": {"totalItems": 1}
    }"#;
    let err = CollectedData::from_json(payload).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
    assert!(err.is_input_error());
}
