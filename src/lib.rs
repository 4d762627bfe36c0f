pub mod config;
pub mod error;
pub mod models;
pub mod taxonomy;
pub mod analysis;
pub mod research;

pub use config::{Config, PipelineConfig, ResearchConfig};
pub use error::{Error, Result};
pub use analysis::AnalysisPipeline;
pub use research::{generate_analysis_id, ResearchEngine};
pub use taxonomy::{classify_category, classify_post_topic, classify_sentiment};
