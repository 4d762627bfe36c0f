use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub corpus_path: Option<PathBuf>,
    pub concurrency_limit: usize,
    pub default_format: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let corpus_path = env::var("MARKETPULSE_CORPUS").ok().map(PathBuf::from);

        let concurrency_limit = match env::var("MARKETPULSE_CONCURRENCY") {
            Ok(raw) => raw.trim().parse::<usize>().ok().filter(|n| *n > 0).ok_or_else(|| {
                Error::Config(format!(
                    "MARKETPULSE_CONCURRENCY must be a positive integer, got '{}'",
                    raw
                ))
            })?,
            Err(_) => 4,
        };

        let default_format = match env::var("MARKETPULSE_FORMAT") {
            Ok(raw) => parse_format(&raw)?,
            Err(_) => "text".to_string(),
        };

        Ok(Self {
            corpus_path,
            concurrency_limit,
            default_format,
        })
    }
}

pub const OUTPUT_FORMATS: [&str; 3] = ["json", "text", "markdown"];

fn parse_format(raw: &str) -> Result<String> {
    let format = raw.trim().to_lowercase();
    if OUTPUT_FORMATS.contains(&format.as_str()) {
        Ok(format)
    } else {
        Err(Error::Config(format!(
            "MARKETPULSE_FORMAT must be one of {}, got '{}'",
            OUTPUT_FORMATS.join(", "),
            raw
        )))
    }
}

/// Cutoffs for the signal pipeline. The defaults are part of the scoring
/// contract and are not read from the environment.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub min_engagement: i64,
    pub max_categories: usize,
    pub max_discussions: usize,
    pub max_insights: usize,
    pub max_opportunities: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_engagement: 50,
            max_categories: 10,
            max_discussions: 20,
            max_insights: 5,
            max_opportunities: 5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResearchConfig {
    pub opportunity_fallback: usize,
    pub trend_fallback: usize,
    pub opportunity_fallback_score: f64,
    pub trend_fallback_score: f64,
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            opportunity_fallback: 5,
            trend_fallback: 3,
            opportunity_fallback_score: 0.3,
            trend_fallback_score: 0.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_defaults_match_cutoffs() {
        let config = PipelineConfig::default();
        assert_eq!(config.min_engagement, 50);
        assert_eq!(config.max_categories, 10);
        assert_eq!(config.max_discussions, 20);
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format("json").unwrap(), "json");
        assert_eq!(parse_format(" Markdown ").unwrap(), "markdown");
        assert!(matches!(parse_format("yaml"), Err(Error::Config(_))));
        assert!(matches!(parse_format(""), Err(Error::Config(_))));
    }

    #[test]
    fn test_research_fallback_scores() {
        let config = ResearchConfig::default();
        assert_eq!(config.opportunity_fallback_score, 0.3);
        assert_eq!(config.trend_fallback_score, 0.2);
    }
}
