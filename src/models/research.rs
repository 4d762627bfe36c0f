use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ResearchType {
    Market,
    Competitor,
    Pricing,
    Trend,
    Customer,
    Technology,
    General,
}

impl ResearchType {
    pub const ALL: [ResearchType; 7] = [
        ResearchType::Market,
        ResearchType::Competitor,
        ResearchType::Pricing,
        ResearchType::Trend,
        ResearchType::Customer,
        ResearchType::Technology,
        ResearchType::General,
    ];
}

impl From<&str> for ResearchType {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "market" => ResearchType::Market,
            "competitor" | "competitors" | "competition" => ResearchType::Competitor,
            "pricing" | "price" => ResearchType::Pricing,
            "trend" | "trends" => ResearchType::Trend,
            "customer" | "customers" | "persona" => ResearchType::Customer,
            "technology" | "tech" => ResearchType::Technology,
            _ => ResearchType::General,
        }
    }
}

impl std::fmt::Display for ResearchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResearchType::Market => write!(f, "market"),
            ResearchType::Competitor => write!(f, "competitor"),
            ResearchType::Pricing => write!(f, "pricing"),
            ResearchType::Trend => write!(f, "trend"),
            ResearchType::Customer => write!(f, "customer"),
            ResearchType::Technology => write!(f, "technology"),
            ResearchType::General => write!(f, "general"),
        }
    }
}

/// Caller-supplied bookkeeping copied onto the result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResearchContext {
    pub analysis_id: String,
    pub execution_time_ms: u64,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResearchFinding {
    pub title: String,
    pub description: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResearchResult {
    pub analysis_id: String,
    pub execution_time_ms: u64,
    pub confidence: f64,
    pub summary: String,
    pub findings: Vec<ResearchFinding>,
    pub insights: Vec<String>,
    pub provenance: String,
}
