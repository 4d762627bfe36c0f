use crate::analysis::scoring::{timeframe, Scorer};
use crate::analysis::synthesizer::SignalMap;
use crate::models::{PriorityTier, Recommendation, Timeframe};

const FOCUS_THRESHOLD: f64 = 60.0;
const EMERGING_FLOOR: f64 = 40.0;
const SINGLE_SOURCE_LIMIT: usize = 2;

pub struct RecommendationEngine {
    scorer: Scorer,
}

impl RecommendationEngine {
    pub fn new() -> Self {
        Self {
            scorer: Scorer::new(),
        }
    }

    /// Rules fire independently and are emitted in a fixed order: focus,
    /// deep-dive, monitor, expand data.
    pub fn recommend(&self, signals: &SignalMap) -> Vec<Recommendation> {
        let ranked = self.scorer.rank(signals);
        let mut recommendations = Vec::new();

        if let Some(top) = ranked.first().filter(|s| s.momentum > FOCUS_THRESHOLD) {
            recommendations.push(Recommendation {
                action: format!("Focus investment on {}", top.signal.category),
                priority: PriorityTier::High,
                timeframe: timeframe(top.momentum),
                rationale: format!(
                    "{} leads all tracked categories with momentum {:.0}/100",
                    top.signal.category, top.momentum
                ),
            });
        }

        let correlated: Vec<String> = ranked
            .iter()
            .filter(|s| s.signal.is_multi_source())
            .map(|s| s.signal.category.to_string())
            .collect();
        if !correlated.is_empty() {
            recommendations.push(Recommendation {
                action: format!("Deep-dive into correlated categories: {}", correlated.join(", ")),
                priority: PriorityTier::Medium,
                timeframe: Timeframe::OneToThreeMonths,
                rationale: format!(
                    "{} categories show activity confirmed by more than one source",
                    correlated.len()
                ),
            });
        }

        let emerging: Vec<String> = ranked
            .iter()
            .filter(|s| s.momentum > EMERGING_FLOOR && s.momentum <= FOCUS_THRESHOLD)
            .map(|s| s.signal.category.to_string())
            .collect();
        if !emerging.is_empty() {
            recommendations.push(Recommendation {
                action: format!("Monitor emerging categories: {}", emerging.join(", ")),
                priority: PriorityTier::Low,
                timeframe: Timeframe::ThreeToSixMonths,
                rationale: "Moderate momentum; revisit once the signal strengthens".to_string(),
            });
        }

        let single_source = ranked.iter().filter(|s| s.signal.is_single_source()).count();
        if single_source > SINGLE_SOURCE_LIMIT {
            recommendations.push(Recommendation {
                action: "Expand data collection to corroborate single-source categories".to_string(),
                priority: PriorityTier::Medium,
                timeframe: Timeframe::OneToThreeMonths,
                rationale: format!("{} categories are backed by a single source", single_source),
            });
        }

        recommendations
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}
