use regex::Regex;
use std::sync::LazyLock;

use crate::models::{RawPostItem, Sentiment};

const POSITIVE_WORDS: &[&str] = &[
    "amazing",
    "awesome",
    "best",
    "breakthrough",
    "easy",
    "excellent",
    "exciting",
    "fast",
    "good",
    "great",
    "growth",
    "helpful",
    "impressive",
    "innovative",
    "love",
    "profitable",
    "success",
    "successful",
    "useful",
    "win",
];

const NEGATIVE_WORDS: &[&str] = &[
    "awful",
    "bad",
    "broken",
    "bug",
    "concern",
    "decline",
    "difficult",
    "expensive",
    "fail",
    "failed",
    "failure",
    "hate",
    "issue",
    "layoffs",
    "problem",
    "scam",
    "shutdown",
    "slow",
    "terrible",
    "worst",
];

static POSITIVE_PATTERN: LazyLock<Regex> = LazyLock::new(|| word_pattern(POSITIVE_WORDS));
static NEGATIVE_PATTERN: LazyLock<Regex> = LazyLock::new(|| word_pattern(NEGATIVE_WORDS));

fn word_pattern(words: &[&str]) -> Regex {
    Regex::new(&format!(r"\b({})\b", words.join("|"))).unwrap()
}

/// Count word-list hits in the title and body. Ties are neutral.
pub fn classify_sentiment(post: &RawPostItem) -> Sentiment {
    let text = format!("{} {}", post.title, post.body).to_lowercase();
    let positive = POSITIVE_PATTERN.find_iter(&text).count();
    let negative = NEGATIVE_PATTERN.find_iter(&text).count();

    match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => Sentiment::Positive,
        std::cmp::Ordering::Less => Sentiment::Negative,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, body: &str) -> RawPostItem {
        RawPostItem {
            title: title.to_string(),
            body: body.to_string(),
            upvote_score: 0,
            comment_count: 0,
            community: "saas".to_string(),
        }
    }

    #[test]
    fn test_classify_sentiment() {
        assert_eq!(classify_sentiment(&post("Great tool", "love it")), Sentiment::Positive);
        assert_eq!(classify_sentiment(&post("Broken again", "")), Sentiment::Negative);
        assert_eq!(classify_sentiment(&post("Release notes", "")), Sentiment::Neutral);
    }

    #[test]
    fn test_ties_are_neutral() {
        assert_eq!(classify_sentiment(&post("Great idea", "bad timing")), Sentiment::Neutral);
    }

    #[test]
    fn test_repeated_words_are_counted() {
        let p = post("bad bad bad", "but great");
        assert_eq!(classify_sentiment(&p), Sentiment::Negative);
    }
}
