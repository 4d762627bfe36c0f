pub mod github;
pub mod discussion;
pub mod synthesizer;
pub mod scoring;
pub mod generators;
pub mod risks;
pub mod recommendations;
pub mod pipeline;

pub use github::GitHubAnalyzer;
pub use discussion::DiscussionAnalyzer;
pub use synthesizer::{SignalMap, SignalSynthesizer};
pub use scoring::{confidence_from_volume, impact_tier, timeframe, Scorer, ScoringWeights};
pub use generators::InsightGenerator;
pub use risks::RiskAssessor;
pub use recommendations::RecommendationEngine;
pub use pipeline::AnalysisPipeline;
