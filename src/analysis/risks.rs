use crate::analysis::scoring::Scorer;
use crate::analysis::synthesizer::SignalMap;
use crate::models::{RiskFactor, Sentiment};

const CROWDED_MOMENTUM: f64 = 70.0;
const CROWDED_CATEGORY_COUNT: usize = 3;
const INCUMBENT_STARS: f64 = 10_000.0;

/// Four independent heuristics over the signal map. Each rule emits at most
/// one risk; the result is ordered by probability x impact.
pub struct RiskAssessor {
    scorer: Scorer,
}

impl RiskAssessor {
    pub fn new() -> Self {
        Self {
            scorer: Scorer::new(),
        }
    }

    pub fn assess(&self, signals: &SignalMap) -> Vec<RiskFactor> {
        let mut risks: Vec<RiskFactor> = [
            self.crowding(signals),
            concentration(signals),
            negative_sentiment(signals),
            sparsity(signals),
        ]
        .into_iter()
        .flatten()
        .collect();

        risks.sort_by(|a, b| b.severity().total_cmp(&a.severity()));
        risks
    }

    fn crowding(&self, signals: &SignalMap) -> Option<RiskFactor> {
        let hot: Vec<String> = self
            .scorer
            .rank(signals)
            .into_iter()
            .filter(|s| s.momentum > CROWDED_MOMENTUM)
            .map(|s| s.signal.category.to_string())
            .collect();

        if hot.len() <= CROWDED_CATEGORY_COUNT {
            return None;
        }
        tracing::debug!("Crowding risk: {} hot categories", hot.len());
        Some(RiskFactor {
            description: format!(
                "Intense competition: {} categories are running hot ({})",
                hot.len(),
                hot.join(", ")
            ),
            probability: 0.8,
            impact: 0.7,
            mitigation: "Differentiate on a narrow niche instead of racing incumbents on features"
                .to_string(),
        })
    }
}

impl Default for RiskAssessor {
    fn default() -> Self {
        Self::new()
    }
}

fn concentration(signals: &SignalMap) -> Option<RiskFactor> {
    let dominated: Vec<String> = signals
        .values()
        .filter(|s| s.tech_momentum.is_some_and(|m| m > INCUMBENT_STARS))
        .map(|s| s.category.to_string())
        .collect();

    if dominated.is_empty() {
        return None;
    }
    tracing::debug!("Concentration risk in {:?}", dominated);
    Some(RiskFactor {
        description: format!(
            "Category dominated by incumbents: {} already concentrate heavy repository activity",
            dominated.join(", ")
        ),
        probability: 0.6,
        impact: 0.8,
        mitigation: "Target underserved segments or build on top of incumbent ecosystems".to_string(),
    })
}

fn negative_sentiment(signals: &SignalMap) -> Option<RiskFactor> {
    let negative: Vec<String> = signals
        .values()
        .filter(|s| s.sentiment == Some(Sentiment::Negative))
        .map(|s| s.category.to_string())
        .collect();

    if negative.is_empty() {
        return None;
    }
    tracing::debug!("Sentiment risk in {:?}", negative);
    Some(RiskFactor {
        description: format!("Negative market sentiment in {}", negative.join(", ")),
        probability: 0.5,
        impact: 0.5,
        mitigation: "Validate demand directly with users before committing resources".to_string(),
    })
}

fn sparsity(signals: &SignalMap) -> Option<RiskFactor> {
    let single = signals.values().filter(|s| s.is_single_source()).count();

    if single * 2 <= signals.len() {
        return None;
    }
    tracing::debug!("Sparsity risk: {}/{} single-source signals", single, signals.len());
    Some(RiskFactor {
        description: format!(
            "Limited data reduces confidence: {} of {} categories rely on a single source",
            single,
            signals.len()
        ),
        probability: 0.7,
        impact: 0.4,
        mitigation: "Add collectors so single-source categories can be corroborated".to_string(),
    })
}
