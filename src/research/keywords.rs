use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// English and Japanese function words dropped from research queries.
const STOP_WORDS: &[&str] = &[
    // English
    "a", "about", "an", "and", "are", "as", "at", "be", "by", "can", "do", "for", "from", "how",
    "in", "into", "is", "it", "its", "me", "my", "of", "on", "or", "our", "so", "than", "that",
    "the", "their", "this", "to", "us", "was", "we", "what", "when", "where", "which", "who",
    "why", "will", "with", "you", "your",
    // Japanese
    "の", "に", "は", "を", "が", "と", "で", "へ", "や", "も", "から", "まで", "より", "など",
    "こと", "もの", "ため", "よう", "これ", "それ", "あれ", "この", "その", "あの", "する",
    "した", "して", "います", "です", "ます", "について", "における", "に関する", "とは",
];

static STOP_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| STOP_WORDS.iter().copied().collect());

static PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").unwrap());

/// Lower-case, strip punctuation, split on whitespace, then drop short
/// tokens, stop words and duplicates. First occurrence order is kept.
pub fn extract_keywords(query: &str) -> Vec<String> {
    let lowered = query.to_lowercase();
    let cleaned = PUNCTUATION.replace_all(&lowered, " ");

    let mut seen = HashSet::new();
    cleaned
        .split_whitespace()
        .filter(|token| token.chars().count() >= 2)
        .filter(|token| !STOP_SET.contains(token))
        .filter(|token| seen.insert(token.to_string()))
        .map(str::to_string)
        .collect()
}
