use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub pricing: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricingModel {
    pub model: String,
    pub price_range: String,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketData {
    pub size: String,
    /// Annual growth in percent.
    pub growth_rate: f64,
}

/// Stored 0-100 scores. A high `competition` score means little competition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityScores {
    pub market_size: f64,
    pub competition: f64,
    pub feasibility: f64,
    pub timing: f64,
    pub overall: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CorpusOpportunity {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub pain_points: Vec<String>,
    #[serde(default)]
    pub target_customers: Vec<String>,
    #[serde(default)]
    pub competitors: Vec<Competitor>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub pricing: Option<PricingModel>,
    pub market: MarketData,
    pub scores: OpportunityScores,
}

impl CorpusOpportunity {
    /// Every text field joined into one lower-cased search target.
    pub fn searchable_text(&self) -> String {
        let mut parts: Vec<&str> = vec![&self.title, &self.description, &self.category];
        parts.extend(self.tags.iter().map(String::as_str));
        parts.extend(self.pain_points.iter().map(String::as_str));
        parts.extend(self.target_customers.iter().map(String::as_str));
        for competitor in &self.competitors {
            parts.push(&competitor.name);
            if let Some(ref description) = competitor.description {
                parts.push(description);
            }
        }
        parts.extend(self.tech_stack.iter().map(String::as_str));
        if let Some(ref pricing) = self.pricing {
            parts.push(&pricing.model);
            parts.push(&pricing.price_range);
        }
        parts.join(" ").to_lowercase()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CorpusTrend {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub related_technologies: Vec<String>,
    pub adoption_stage: String,
    pub timeframe: String,
    pub impact_score: f64,
    /// Annual growth in percent.
    pub growth_rate: f64,
}

impl CorpusTrend {
    pub fn searchable_text(&self) -> String {
        let mut parts: Vec<&str> = vec![&self.title, &self.description, &self.category];
        parts.extend(self.tags.iter().map(String::as_str));
        parts.extend(self.related_technologies.iter().map(String::as_str));
        parts.push(&self.adoption_stage);
        parts.join(" ").to_lowercase()
    }
}

/// The curated research corpus. Read-only once loaded.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Corpus {
    #[serde(default)]
    pub opportunities: Vec<CorpusOpportunity>,
    #[serde(default)]
    pub trends: Vec<CorpusTrend>,
}

impl Corpus {
    pub fn new(opportunities: Vec<CorpusOpportunity>, trends: Vec<CorpusTrend>) -> Self {
        Self {
            opportunities,
            trends,
        }
    }

    pub fn from_json(input: &str) -> Result<Self> {
        let corpus: Corpus = serde_json::from_str(input)
            .map_err(|e| Error::ParseError(format!("Corpus does not match record shape: {}", e)))?;
        corpus.validate()?;
        Ok(corpus)
    }

    pub fn is_empty(&self) -> bool {
        self.opportunities.is_empty() && self.trends.is_empty()
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for opp in &self.opportunities {
            check_id(&opp.id, "opportunity", &mut seen)?;
            let scores = &opp.scores;
            for (name, value) in [
                ("marketSize", scores.market_size),
                ("competition", scores.competition),
                ("feasibility", scores.feasibility),
                ("timing", scores.timing),
                ("overall", scores.overall),
            ] {
                check_score(&opp.id, name, value)?;
            }
            check_finite(&opp.id, "growthRate", opp.market.growth_rate)?;
        }

        let mut seen = HashSet::new();
        for trend in &self.trends {
            check_id(&trend.id, "trend", &mut seen)?;
            check_score(&trend.id, "impactScore", trend.impact_score)?;
            check_finite(&trend.id, "growthRate", trend.growth_rate)?;
        }

        Ok(())
    }
}

fn check_id<'a>(id: &'a str, kind: &str, seen: &mut HashSet<&'a str>) -> Result<()> {
    if id.trim().is_empty() {
        return Err(Error::InvalidCorpus(format!("{} with an empty id", kind)));
    }
    if !seen.insert(id) {
        return Err(Error::InvalidCorpus(format!("duplicate {} id '{}'", kind, id)));
    }
    Ok(())
}

fn check_score(id: &str, field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(Error::InvalidCorpus(format!(
            "'{}' has {} = {} (expected 0-100)",
            id, field, value
        )));
    }
    Ok(())
}

fn check_finite(id: &str, field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::InvalidCorpus(format!("'{}' has non-finite {}", id, field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "opportunities": [{
            "id": "opp-1",
            "title": "Invoice automation",
            "description": "Billing for freelancers",
            "category": "SaaS",
            "painPoints": ["請求書の作成が面倒"],
            "competitors": [{"name": "freee"}],
            "market": {"size": "¥50B", "growthRate": 12.5},
            "scores": {"marketSize": 80, "competition": 65, "feasibility": 70, "timing": 75, "overall": 72}
        }],
        "trends": []
    }"#;

    #[test]
    fn test_from_json_and_searchable_text() {
        let corpus = Corpus::from_json(SAMPLE).unwrap();
        let text = corpus.opportunities[0].searchable_text();
        assert!(text.contains("invoice automation"));
        assert!(text.contains("請求書"));
        assert!(text.contains("freee"));
    }

    #[test]
    fn test_out_of_range_score_rejected() {
        let input = SAMPLE.replace("\"overall\": 72", "\"overall\": 172");
        let err = Corpus::from_json(&input).unwrap_err();
        assert!(matches!(err, Error::InvalidCorpus(_)));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut corpus = Corpus::from_json(SAMPLE).unwrap();
        let copy = corpus.opportunities[0].clone();
        corpus.opportunities.push(copy);
        assert!(matches!(corpus.validate(), Err(Error::InvalidCorpus(_))));
    }
}
