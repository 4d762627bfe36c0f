use proptest::prelude::*;

use marketpulse::analysis::Scorer;
use marketpulse::classify_category;
use marketpulse::models::{Category, RawRepoItem, Sentiment, SourceTag, UnifiedSignal};
use marketpulse::research::{extract_keywords, relevance};

fn sentiment() -> impl Strategy<Value = Option<Sentiment>> {
    prop_oneof![
        Just(None),
        Just(Some(Sentiment::Positive)),
        Just(Some(Sentiment::Neutral)),
        Just(Some(Sentiment::Negative)),
    ]
}

fn sources() -> impl Strategy<Value = Vec<SourceTag>> {
    prop::collection::vec(prop_oneof![Just(SourceTag::Repo), Just(SourceTag::Post)], 0..4)
}

fn signal() -> impl Strategy<Value = UnifiedSignal> {
    (
        prop::option::of(0.0f64..1e7),
        prop::option::of(0.0f64..1e5),
        sentiment(),
        sources(),
    )
        .prop_map(|(tech, social, sentiment, sources)| UnifiedSignal {
            category: Category::Other,
            tech_momentum: tech,
            social_momentum: social,
            sentiment,
            sources,
        })
}

proptest! {
    #[test]
    fn momentum_stays_in_range(s in signal()) {
        let m = Scorer::new().momentum(&s);
        prop_assert!((0.0..=100.0).contains(&m));
    }

    #[test]
    fn confidence_stays_in_range(s in signal()) {
        let c = Scorer::new().confidence(&s);
        prop_assert!((60.0..=95.0).contains(&c));
    }

    #[test]
    fn momentum_never_drops_with_more_stars(s in signal(), extra in 0.0f64..1e6) {
        let scorer = Scorer::new();
        let mut more = s.clone();
        more.tech_momentum = Some(s.tech_momentum.unwrap_or(0.0) + extra);
        prop_assert!(scorer.momentum(&more) >= scorer.momentum(&s));
    }

    #[test]
    fn momentum_never_drops_with_more_engagement(s in signal(), extra in 0.0f64..1e5) {
        let scorer = Scorer::new();
        let mut more = s.clone();
        more.social_momentum = Some(s.social_momentum.unwrap_or(0.0) + extra);
        prop_assert!(scorer.momentum(&more) >= scorer.momentum(&s));
    }

    #[test]
    fn momentum_never_drops_when_sentiment_turns_positive(s in signal()) {
        let scorer = Scorer::new();
        let mut positive = s.clone();
        positive.sentiment = Some(Sentiment::Positive);
        prop_assert!(scorer.momentum(&positive) >= scorer.momentum(&s));
    }

    #[test]
    fn momentum_never_drops_with_another_source(
        s in signal(),
        tag in prop_oneof![Just(SourceTag::Repo), Just(SourceTag::Post)],
    ) {
        let scorer = Scorer::new();
        let mut wider = s.clone();
        wider.sources.push(tag);
        prop_assert!(scorer.momentum(&wider) >= scorer.momentum(&s));
    }

    #[test]
    fn any_repo_gets_a_category(name in "\\PC{1,40}", description in prop::option::of("\\PC{0,80}")) {
        let mut repo = RawRepoItem::new(name, 1);
        repo.description = description;
        prop_assert_eq!(classify_category(&repo), classify_category(&repo.clone()));

        // AI/ML is the first rule, so an AI token always wins
        repo.name = format!("ai {}", repo.name);
        prop_assert_eq!(classify_category(&repo), Category::AiMl);
    }

    #[test]
    fn relevance_is_a_fraction(text in "\\PC{0,120}", words in prop::collection::vec("[a-z]{2,8}", 0..6)) {
        let r = relevance(&text, &words);
        prop_assert!((0.0..=1.0).contains(&r));
    }

    #[test]
    fn keywords_are_unique_and_long_enough(query in "\\PC{0,120}") {
        let keywords = extract_keywords(&query);
        let mut seen = std::collections::HashSet::new();
        for kw in &keywords {
            prop_assert!(kw.chars().count() >= 2);
            prop_assert!(seen.insert(kw.clone()));
        }
    }
}
