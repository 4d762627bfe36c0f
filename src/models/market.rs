use serde::{Deserialize, Serialize};

use super::signal::{Category, UnifiedSignal};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ImpactTier {
    Low,
    Medium,
    High,
    Transformative,
}

impl std::fmt::Display for ImpactTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImpactTier::Low => write!(f, "low"),
            ImpactTier::Medium => write!(f, "medium"),
            ImpactTier::High => write!(f, "high"),
            ImpactTier::Transformative => write!(f, "transformative"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Timeframe {
    #[serde(rename = "1-3 months")]
    OneToThreeMonths,
    #[serde(rename = "3-6 months")]
    ThreeToSixMonths,
    #[serde(rename = "6-12 months")]
    SixToTwelveMonths,
    #[serde(rename = "12+ months")]
    OverTwelveMonths,
}

impl Timeframe {
    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::OneToThreeMonths => "1-3 months",
            Timeframe::ThreeToSixMonths => "3-6 months",
            Timeframe::SixToTwelveMonths => "6-12 months",
            Timeframe::OverTwelveMonths => "12+ months",
        }
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CompetitionTier {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for CompetitionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompetitionTier::Low => write!(f, "low"),
            CompetitionTier::Medium => write!(f, "medium"),
            CompetitionTier::High => write!(f, "high"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MarketSizeTier {
    Small,
    Medium,
    Large,
}

impl std::fmt::Display for MarketSizeTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarketSizeTier::Small => write!(f, "small"),
            MarketSizeTier::Medium => write!(f, "medium"),
            MarketSizeTier::Large => write!(f, "large"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PriorityTier {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriorityTier::Low => write!(f, "low"),
            PriorityTier::Medium => write!(f, "medium"),
            PriorityTier::High => write!(f, "high"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub category: Category,
    pub momentum: f64,
    pub confidence: f64,
    pub timeframe: Timeframe,
    pub impact: ImpactTier,
    pub evidence: Vec<String>,
    pub narrative: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub title: String,
    pub category: Category,
    pub description: String,
    pub market_size: MarketSizeTier,
    pub competition: CompetitionTier,
    pub barriers: Vec<String>,
    pub timeline: Timeframe,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactor {
    pub description: String,
    pub probability: f64,
    pub impact: f64,
    pub mitigation: String,
}

impl RiskFactor {
    pub fn severity(&self) -> f64 {
        self.probability * self.impact
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub action: String,
    pub priority: PriorityTier,
    pub timeframe: Timeframe,
    pub rationale: String,
}

/// Aggregate result of one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketAnalysis {
    pub insights: Vec<Insight>,
    pub opportunities: Vec<Opportunity>,
    pub risks: Vec<RiskFactor>,
    pub recommendations: Vec<Recommendation>,
    pub confidence: f64,
    pub total_items: usize,
    pub signal_count: usize,
    pub signals: Vec<UnifiedSignal>,
}
