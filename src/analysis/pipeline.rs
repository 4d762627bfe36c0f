use crate::analysis::discussion::DiscussionAnalyzer;
use crate::analysis::generators::InsightGenerator;
use crate::analysis::github::GitHubAnalyzer;
use crate::analysis::recommendations::RecommendationEngine;
use crate::analysis::risks::RiskAssessor;
use crate::analysis::scoring::confidence_from_volume;
use crate::analysis::synthesizer::SignalSynthesizer;
use crate::config::PipelineConfig;
use crate::models::{CollectedData, MarketAnalysis};

/// Whole-pipeline entry point: raw collector data in, market analysis out.
///
/// Holds no mutable state. One pipeline can serve any number of concurrent
/// callers, and the same input always produces the same analysis.
pub struct AnalysisPipeline {
    github: GitHubAnalyzer,
    discussions: DiscussionAnalyzer,
    synthesizer: SignalSynthesizer,
    generator: InsightGenerator,
    risks: RiskAssessor,
    recommendations: RecommendationEngine,
}

impl AnalysisPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            github: GitHubAnalyzer::new(config.max_categories),
            discussions: DiscussionAnalyzer::new(config.min_engagement, config.max_discussions),
            synthesizer: SignalSynthesizer::new(),
            generator: InsightGenerator::new(config.max_insights, config.max_opportunities),
            risks: RiskAssessor::new(),
            recommendations: RecommendationEngine::new(),
        }
    }

    pub fn analyze(&self, data: &CollectedData) -> MarketAnalysis {
        // Step 1: Per-source aggregation
        let trends = self.github.analyze(&data.repos);
        let discussions = self.discussions.analyze(&data.posts);
        tracing::info!(
            "Aggregated {} category trends and {} discussion signals",
            trends.len(),
            discussions.len()
        );

        // Step 2: Merge into one signal per category
        let signals = self.synthesizer.synthesize(&trends, &discussions);

        // Step 3: Derive results
        let insights = self.generator.insights(&signals);
        let opportunities = self.generator.opportunities(&signals);
        let risks = self.risks.assess(&signals);
        let recommendations = self.recommendations.recommend(&signals);

        tracing::info!(
            "Generated {} insights, {} opportunities, {} risks, {} recommendations",
            insights.len(),
            opportunities.len(),
            risks.len(),
            recommendations.len()
        );

        MarketAnalysis {
            insights,
            opportunities,
            risks,
            recommendations,
            confidence: confidence_from_volume(data.summary.total_items),
            total_items: data.summary.total_items,
            signal_count: signals.len(),
            signals: signals.into_values().collect(),
        }
    }
}

impl Default for AnalysisPipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}
