pub mod sentiment;

use regex::Regex;
use std::sync::LazyLock;

use crate::models::{Category, PostTopic, RawPostItem, RawRepoItem};

pub use sentiment::classify_sentiment;

/// Raw items that can be routed to a market category.
pub trait Classifiable {
    /// Lower-cased text the category rules run against.
    fn classification_text(&self) -> String;
}

impl Classifiable for RawRepoItem {
    fn classification_text(&self) -> String {
        let mut text = self.name.clone();
        if let Some(ref description) = self.description {
            text.push(' ');
            text.push_str(description);
        }
        for topic in self.topics.iter().flatten() {
            text.push(' ');
            text.push_str(topic);
        }
        text.to_lowercase()
    }
}

impl Classifiable for RawPostItem {
    fn classification_text(&self) -> String {
        format!("{} {}", self.title, self.body).to_lowercase()
    }
}

// First match wins, so the order here is the tie-break between rules.
static CATEGORY_RULES: LazyLock<Vec<(Category, Regex)>> = LazyLock::new(|| {
    vec![
        (
            Category::AiMl,
            Regex::new(
                r"\b(ai|ml|llms?|gpt|nlp|openai|neural|machine[- ]learning|deep[- ]learning|artificial intelligence|transformers?|chatbots?|agents?|diffusion|pytorch|tensorflow|embeddings?|rag)\b",
            )
            .unwrap(),
        ),
        (
            Category::DeveloperTools,
            Regex::new(
                r"\b(framework|cli|sdk|library|devtools?|developer tools?|ide|editor|linter|compiler|debugger|testing|lsp|plugin|vscode|neovim)\b",
            )
            .unwrap(),
        ),
        (
            Category::WebDevelopment,
            Regex::new(
                r"\b(web|react|vue|angular|svelte|next\.?js|nuxt|frontend|front-end|css|html|javascript|typescript|browser|http|website)\b",
            )
            .unwrap(),
        ),
        (
            Category::DataAnalytics,
            Regex::new(
                r"\b(data|analytics|database|sql|etl|visualization|dashboard|bigquery|spark|warehouse|pandas|olap)\b",
            )
            .unwrap(),
        ),
        (
            Category::DevOps,
            Regex::new(
                r"\b(devops|kubernetes|k8s|docker|containers?|terraform|infrastructure|ci/cd|cloud|deploy(ment)?|monitoring|observability|serverless|helm)\b",
            )
            .unwrap(),
        ),
    ]
});

static TOPIC_RULES: LazyLock<Vec<(PostTopic, Regex)>> = LazyLock::new(|| {
    vec![
        (
            PostTopic::Funding,
            Regex::new(
                r"\b(funding|funded|raised?|raising|series [a-d]|seed round|pre-seed|investors?|investment|valuation|vc)\b",
            )
            .unwrap(),
        ),
        (
            PostTopic::ProductLaunch,
            Regex::new(
                r"\b(launch(ed|ing)?|releas(e|ed|ing)|introducing|announcing|show hn|beta|just shipped)\b",
            )
            .unwrap(),
        ),
        (
            PostTopic::MergersAcquisitions,
            Regex::new(r"\b(acquisitions?|acquir(e|es|ed|ing)|mergers?|merg(e|ed|ing)|buyout)\b").unwrap(),
        ),
        (
            PostTopic::AiTech,
            Regex::new(r"\b(ai|gpt|llms?|machine learning|models?|algorithms?|tech|technology)\b").unwrap(),
        ),
        (
            PostTopic::SaaS,
            Regex::new(r"\b(saas|subscriptions?|mrr|arr|churn|b2b|pricing|recurring revenue)\b").unwrap(),
        ),
    ]
});

/// Route an item to the first category whose rule matches, else `Other`.
pub fn classify_category<T: Classifiable + ?Sized>(item: &T) -> Category {
    let text = item.classification_text();
    CATEGORY_RULES
        .iter()
        .find(|(_, pattern)| pattern.is_match(&text))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other)
}

pub fn classify_post_topic(post: &RawPostItem) -> PostTopic {
    let text = post.classification_text();
    TOPIC_RULES
        .iter()
        .find(|(_, pattern)| pattern.is_match(&text))
        .map(|(topic, _)| *topic)
        .unwrap_or(PostTopic::General)
}
