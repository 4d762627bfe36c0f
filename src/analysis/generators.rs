use crate::analysis::scoring::{impact_tier, timeframe, ScoredSignal, Scorer};
use crate::analysis::synthesizer::SignalMap;
use crate::models::{CompetitionTier, Insight, MarketSizeTier, Opportunity, UnifiedSignal};

const INSIGHT_THRESHOLD: f64 = 50.0;
const OPPORTUNITY_THRESHOLD: f64 = 40.0;
const MAX_EVIDENCE: usize = 3;

/// Turns the synthesized signal map into ranked insights and opportunities.
pub struct InsightGenerator {
    scorer: Scorer,
    max_insights: usize,
    max_opportunities: usize,
}

impl InsightGenerator {
    pub fn new(max_insights: usize, max_opportunities: usize) -> Self {
        Self {
            scorer: Scorer::new(),
            max_insights,
            max_opportunities,
        }
    }

    pub fn insights(&self, signals: &SignalMap) -> Vec<Insight> {
        self.scorer
            .rank(signals)
            .into_iter()
            .filter(|s| s.momentum > INSIGHT_THRESHOLD)
            .take(self.max_insights)
            .map(|s| self.build_insight(&s))
            .collect()
    }

    pub fn opportunities(&self, signals: &SignalMap) -> Vec<Opportunity> {
        self.scorer
            .rank(signals)
            .into_iter()
            .filter(|s| s.momentum > OPPORTUNITY_THRESHOLD && !s.signal.sources.is_empty())
            .take(self.max_opportunities)
            .map(|s| self.build_opportunity(&s))
            .collect()
    }

    fn build_insight(&self, scored: &ScoredSignal<'_>) -> Insight {
        let signal = scored.signal;
        let impact = impact_tier(scored.momentum);
        let window = timeframe(scored.momentum);
        let strength = if scored.momentum > 70.0 { "strong" } else { "rising" };

        Insight {
            category: signal.category,
            momentum: scored.momentum,
            confidence: scored.confidence,
            timeframe: window,
            impact,
            evidence: evidence_for(signal),
            narrative: format!(
                "{} is showing {} momentum ({:.0}/100). Expect {} impact within {}.",
                signal.category, strength, scored.momentum, impact, window
            ),
        }
    }

    fn build_opportunity(&self, scored: &ScoredSignal<'_>) -> Opportunity {
        let signal = scored.signal;
        let competition = competition_tier(scored.momentum);
        let market_size = market_size_tier(scored.momentum);
        let sources: Vec<String> = signal.sources.iter().map(|s| s.to_string()).collect();

        Opportunity {
            title: format!("{} opportunity", signal.category),
            category: signal.category,
            description: format!(
                "{} carries momentum {:.0}/100 from {} signal(s) ({}); {} market, {} competition.",
                signal.category,
                scored.momentum,
                signal.sources.len(),
                sources.join(", "),
                market_size,
                competition
            ),
            market_size,
            competition,
            barriers: barriers_for(competition),
            timeline: timeframe(scored.momentum),
            score: scored.momentum,
        }
    }
}

impl Default for InsightGenerator {
    fn default() -> Self {
        Self::new(5, 5)
    }
}

pub fn competition_tier(momentum: f64) -> CompetitionTier {
    match momentum {
        m if m > 80.0 => CompetitionTier::High,
        m if m > 60.0 => CompetitionTier::Medium,
        _ => CompetitionTier::Low,
    }
}

pub fn market_size_tier(momentum: f64) -> MarketSizeTier {
    match momentum {
        m if m > 80.0 => MarketSizeTier::Large,
        m if m > 60.0 => MarketSizeTier::Medium,
        _ => MarketSizeTier::Small,
    }
}

fn barriers_for(competition: CompetitionTier) -> Vec<String> {
    let barriers: &[&str] = match competition {
        CompetitionTier::High => &[
            "Established players with strong network effects",
            "High customer acquisition cost",
            "Differentiation required to win share",
        ],
        CompetitionTier::Medium => &[
            "Growing field of competitors",
            "Clear positioning needed",
        ],
        CompetitionTier::Low => &["Market education required"],
    };
    barriers.iter().map(|b| b.to_string()).collect()
}

fn evidence_for(signal: &UnifiedSignal) -> Vec<String> {
    let mut evidence = Vec::new();

    if let Some(tech) = signal.tech_momentum {
        evidence.push(format!("{:.0} stars across tracked repositories", tech));
    }
    if let Some(social) = signal.social_momentum {
        evidence.push(format!("{:.0} interactions on high-engagement discussions", social));
    }
    if let Some(sentiment) = signal.sentiment {
        evidence.push(format!("Community sentiment is {}", sentiment));
    }
    if signal.is_multi_source() {
        evidence.push(format!("Corroborated by {} source signals", signal.sources.len()));
    }

    evidence.truncate(MAX_EVIDENCE);
    evidence
}
