pub mod keywords;
pub mod relevance;
pub mod reports;
pub mod engine;

pub use keywords::extract_keywords;
pub use relevance::{rank_corpus, relevance, score_opportunity, score_trend, Ranked, RankedCorpus};
pub use reports::{build_report, builder_for, Report, ReportBuilder, ReportInput};
pub use engine::{generate_analysis_id, into_result, ResearchEngine};
