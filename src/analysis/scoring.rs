use crate::analysis::synthesizer::SignalMap;
use crate::models::{ImpactTier, Sentiment, Timeframe, UnifiedSignal};

/// Scale and cap for each momentum term. Every term is capped before
/// summing and the sum is clamped to 0-100.
#[derive(Debug, Clone)]
pub struct ScoringWeights {
    pub tech_divisor: f64,
    pub tech_cap: f64,
    pub social_divisor: f64,
    pub social_cap: f64,
    pub positive_sentiment_bonus: f64,
    pub multi_source_bonus: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            tech_divisor: 1000.0,
            tech_cap: 40.0,
            social_divisor: 10.0,
            social_cap: 30.0,
            positive_sentiment_bonus: 20.0,
            multi_source_bonus: 10.0,
        }
    }
}

const BASE_CONFIDENCE: f64 = 60.0;
const MAX_CONFIDENCE: f64 = 95.0;

pub struct Scorer {
    weights: ScoringWeights,
}

impl Scorer {
    pub fn new() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn momentum(&self, signal: &UnifiedSignal) -> f64 {
        let w = &self.weights;

        let tech = signal
            .tech_momentum
            .map(|m| (m / w.tech_divisor).min(w.tech_cap))
            .unwrap_or(0.0);
        let social = signal
            .social_momentum
            .map(|m| (m / w.social_divisor).min(w.social_cap))
            .unwrap_or(0.0);
        let sentiment = if signal.sentiment == Some(Sentiment::Positive) {
            w.positive_sentiment_bonus
        } else {
            0.0
        };
        let diversity = if signal.is_multi_source() {
            w.multi_source_bonus
        } else {
            0.0
        };

        let score = tech + social + sentiment + diversity;
        if score.is_nan() {
            return 0.0;
        }
        score.clamp(0.0, 100.0)
    }

    pub fn confidence(&self, signal: &UnifiedSignal) -> f64 {
        let mut confidence = BASE_CONFIDENCE;

        if signal.is_multi_source() {
            confidence += 20.0;
        }
        if signal.tech_momentum.is_some() && signal.social_momentum.is_some() {
            confidence += 15.0;
        }
        if signal.sentiment == Some(Sentiment::Positive) {
            confidence += 5.0;
        }

        confidence.min(MAX_CONFIDENCE)
    }

    /// Score every signal and order by momentum, highest first. Ties keep
    /// category order.
    pub fn rank<'a>(&self, signals: &'a SignalMap) -> Vec<ScoredSignal<'a>> {
        let mut scored: Vec<ScoredSignal<'a>> = signals
            .values()
            .map(|signal| ScoredSignal {
                signal,
                momentum: self.momentum(signal),
                confidence: self.confidence(signal),
            })
            .collect();
        scored.sort_by(|a, b| b.momentum.total_cmp(&a.momentum));
        scored
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ScoredSignal<'a> {
    pub signal: &'a UnifiedSignal,
    pub momentum: f64,
    pub confidence: f64,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new()
    }
}

pub fn impact_tier(momentum: f64) -> ImpactTier {
    match momentum {
        m if m > 85.0 => ImpactTier::Transformative,
        m if m > 70.0 => ImpactTier::High,
        m if m > 50.0 => ImpactTier::Medium,
        _ => ImpactTier::Low,
    }
}

pub fn timeframe(momentum: f64) -> Timeframe {
    match momentum {
        m if m > 80.0 => Timeframe::OneToThreeMonths,
        m if m > 60.0 => Timeframe::ThreeToSixMonths,
        m if m > 40.0 => Timeframe::SixToTwelveMonths,
        _ => Timeframe::OverTwelveMonths,
    }
}

/// Headline confidence for a whole run, from the number of collected items.
pub fn confidence_from_volume(items: usize) -> f64 {
    match items {
        n if n > 200 => 85.0,
        n if n > 100 => 75.0,
        n if n > 50 => 65.0,
        _ => 55.0,
    }
}
