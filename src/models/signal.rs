use serde::{Deserialize, Serialize};

/// Market category. Variant order is the classification priority; `Other`
/// is the fallback and always sorts last.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    #[serde(rename = "AI/ML")]
    AiMl,
    #[serde(rename = "Developer Tools")]
    DeveloperTools,
    #[serde(rename = "Web Development")]
    WebDevelopment,
    #[serde(rename = "Data & Analytics")]
    DataAnalytics,
    #[serde(rename = "DevOps/Infrastructure")]
    DevOps,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::AiMl => "AI/ML",
            Category::DeveloperTools => "Developer Tools",
            Category::WebDevelopment => "Web Development",
            Category::DataAnalytics => "Data & Analytics",
            Category::DevOps => "DevOps/Infrastructure",
            Category::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Negative => write!(f, "negative"),
            Sentiment::Neutral => write!(f, "neutral"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PostTopic {
    Funding,
    #[serde(rename = "Product Launch")]
    ProductLaunch,
    #[serde(rename = "M&A")]
    MergersAcquisitions,
    #[serde(rename = "AI/Tech")]
    AiTech,
    SaaS,
    General,
}

impl std::fmt::Display for PostTopic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostTopic::Funding => write!(f, "Funding"),
            PostTopic::ProductLaunch => write!(f, "Product Launch"),
            PostTopic::MergersAcquisitions => write!(f, "M&A"),
            PostTopic::AiTech => write!(f, "AI/Tech"),
            PostTopic::SaaS => write!(f, "SaaS"),
            PostTopic::General => write!(f, "General"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SourceTag {
    Repo,
    Post,
}

impl std::fmt::Display for SourceTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceTag::Repo => write!(f, "repo"),
            SourceTag::Post => write!(f, "post"),
        }
    }
}

/// Aggregated repository activity for one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTrend {
    pub category: Category,
    pub momentum: u64,
    pub source_tag: SourceTag,
}

/// One high-engagement post, annotated by the classifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiscussionSignal {
    pub title: String,
    pub category: Category,
    pub sentiment: Sentiment,
    pub topic: PostTopic,
    pub engagement: i64,
    pub community: String,
    pub source_tag: SourceTag,
}

/// Per-category merge of technical and social evidence.
///
/// `tech_momentum` and `social_momentum` are `None` when no source of that
/// kind contributed, which is distinct from a contribution of zero.
/// `sources` is append-only and may hold duplicates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedSignal {
    pub category: Category,
    pub tech_momentum: Option<f64>,
    pub social_momentum: Option<f64>,
    pub sentiment: Option<Sentiment>,
    pub sources: Vec<SourceTag>,
}

impl UnifiedSignal {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            tech_momentum: None,
            social_momentum: None,
            sentiment: None,
            sources: Vec::new(),
        }
    }

    pub fn is_multi_source(&self) -> bool {
        self.sources.len() > 1
    }

    pub fn is_single_source(&self) -> bool {
        self.sources.len() == 1
    }

    pub fn has_source(&self, tag: SourceTag) -> bool {
        self.sources.contains(&tag)
    }
}
