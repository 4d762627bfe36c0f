use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// A repository record as handed over by the code-hosting collector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawRepoItem {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    pub star_count: u64,
    #[serde(default)]
    pub topics: Option<Vec<String>>,
}

impl RawRepoItem {
    pub fn new(name: impl Into<String>, star_count: u64) -> Self {
        Self {
            name: name.into(),
            description: None,
            language: None,
            star_count,
            topics: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_topics(mut self, topics: &[&str]) -> Self {
        self.topics = Some(topics.iter().map(|t| t.to_string()).collect());
        self
    }
}

/// A community discussion post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawPostItem {
    pub title: String,
    pub body: String,
    pub upvote_score: i64,
    pub comment_count: u64,
    pub community: String,
}

impl RawPostItem {
    pub fn engagement(&self) -> i64 {
        self.upvote_score.saturating_add(self.comment_count.min(i64::MAX as u64) as i64)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSummary {
    pub total_items: usize,
    #[serde(default)]
    pub per_source_counts: BTreeMap<String, usize>,
}

/// The fixed record shape collectors hand to the pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CollectedData {
    pub repos: Vec<RawRepoItem>,
    pub posts: Vec<RawPostItem>,
    pub summary: CollectionSummary,
}

impl CollectedData {
    /// Build a payload whose summary is derived from the item lists.
    pub fn new(repos: Vec<RawRepoItem>, posts: Vec<RawPostItem>) -> Self {
        let mut per_source_counts = BTreeMap::new();
        per_source_counts.insert("repo".to_string(), repos.len());
        per_source_counts.insert("post".to_string(), posts.len());

        Self {
            summary: CollectionSummary {
                total_items: repos.len() + posts.len(),
                per_source_counts,
            },
            repos,
            posts,
        }
    }

    pub fn from_json(input: &str) -> Result<Self> {
        let data: CollectedData = serde_json::from_str(input)
            .map_err(|e| Error::ParseError(format!("Collector payload does not match record shape: {}", e)))?;
        data.validate()?;
        Ok(data)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(idx) = self.repos.iter().position(|r| r.name.trim().is_empty()) {
            return Err(Error::InvalidInput(format!("repos[{}] has an empty name", idx)));
        }

        for (idx, post) in self.posts.iter().enumerate() {
            if post.title.trim().is_empty() {
                return Err(Error::InvalidInput(format!("posts[{}] has an empty title", idx)));
            }
            if post.community.trim().is_empty() {
                return Err(Error::InvalidInput(format!(
                    "posts[{}] has an empty community",
                    idx
                )));
            }
        }

        let counted = self.repos.len() + self.posts.len();
        if self.summary.total_items != counted {
            tracing::warn!(
                "Collector summary reports {} items but payload carries {}",
                self.summary.total_items,
                counted
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_accepts_optional_fields() {
        let input = r#"{
            "repos": [{"name": "ai-bot", "starCount": 2000}],
            "posts": [],
            "summary": {"totalItems": 1}
        }"#;
        let data = CollectedData::from_json(input).unwrap();
        assert_eq!(data.repos[0].star_count, 2000);
        assert!(data.repos[0].description.is_none());
        assert!(data.summary.per_source_counts.is_empty());
    }

    #[test]
    fn test_missing_required_field_is_parse_error() {
        let input = r#"{"repos": [{"name": "x"}], "posts": [], "summary": {"totalItems": 1}}"#;
        let err = CollectedData::from_json(input).unwrap_err();
        assert!(matches!(err, Error::ParseError(_)));
        assert!(err.to_string().contains("starCount"));
    }

    #[test]
    fn test_empty_repo_name_rejected() {
        let data = CollectedData::new(vec![RawRepoItem::new("  ", 10)], vec![]);
        assert!(matches!(data.validate(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_engagement_adds_comments() {
        let post = RawPostItem {
            title: "t".into(),
            body: String::new(),
            upvote_score: 40,
            comment_count: 11,
            community: "startups".into(),
        };
        assert_eq!(post.engagement(), 51);
    }
}
