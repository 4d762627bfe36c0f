use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use clap::{Parser, Subcommand};
use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::Semaphore;
use tracing_subscriber::EnvFilter;

use marketpulse::models::{CollectedData, Corpus, MarketAnalysis, ResearchContext, ResearchResult, ResearchType};
use marketpulse::research::into_result;
use marketpulse::{generate_analysis_id, AnalysisPipeline, Config, PipelineConfig, ResearchEngine};

#[derive(Parser, Debug)]
#[command(name = "marketpulse")]
#[command(version = "0.1.0")]
#[command(about = "Synthesize market signals and research a curated opportunity corpus")]
struct Args {
    /// Output format (json, text, markdown)
    #[arg(short, long, global = true, value_parser = marketpulse::config::OUTPUT_FORMATS)]
    format: Option<String>,

    /// Output file (defaults to stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the signal pipeline over collector output
    Analyze {
        /// Collector payload (JSON with repos, posts and summary)
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Research one query against the corpus
    Research {
        /// Free-text research question
        #[arg(short, long)]
        query: String,

        /// Report kind (market, competitor, pricing, trend, customer, technology, general)
        #[arg(short = 't', long = "type", default_value = "general")]
        kind: String,

        /// Corpus file (defaults to MARKETPULSE_CORPUS)
        #[arg(long)]
        corpus: Option<PathBuf>,
    },

    /// Research many queries concurrently, one per line of the input file
    Batch {
        #[arg(long)]
        queries: PathBuf,

        #[arg(short = 't', long = "type", default_value = "general")]
        kind: String,

        #[arg(long)]
        corpus: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays parseable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("marketpulse=info")),
        )
        .init();

    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env()?;
    let format = args
        .format
        .clone()
        .unwrap_or_else(|| config.default_format.clone());

    let rendered = match &args.command {
        Command::Analyze { input } => {
            let data = CollectedData::from_json(&std::fs::read_to_string(input)?)?;
            tracing::info!(
                "Loaded {} repositories and {} posts from {}",
                data.repos.len(),
                data.posts.len(),
                input.display()
            );
            let analysis = AnalysisPipeline::new(PipelineConfig::default()).analyze(&data);
            render_analysis(&analysis, &format)?
        }
        Command::Research { query, kind, corpus } => {
            let corpus = load_corpus(corpus.as_deref(), &config)?;
            let engine = ResearchEngine::default();
            let result = run_research(&engine, &corpus, query, ResearchType::from(kind.as_str()));
            render_research(&result, &format)?
        }
        Command::Batch { queries, kind, corpus } => {
            let corpus = Arc::new(load_corpus(corpus.as_deref(), &config)?);
            let queries: Vec<String> = std::fs::read_to_string(queries)?
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect();
            let results = run_batch(
                queries,
                ResearchType::from(kind.as_str()),
                corpus,
                config.concurrency_limit,
            )
            .await?;
            serde_json::to_string_pretty(&results)?
        }
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &rendered)?;
        tracing::info!("Output written to: {}", path.display());
    } else {
        println!("{}", rendered);
    }

    Ok(())
}

fn load_corpus(path: Option<&Path>, config: &Config) -> anyhow::Result<Corpus> {
    let path = path
        .or(config.corpus_path.as_deref())
        .ok_or_else(|| anyhow::anyhow!("No corpus given; pass --corpus or set MARKETPULSE_CORPUS"))?;
    let corpus = Corpus::from_json(&std::fs::read_to_string(path)?)?;
    tracing::info!(
        "Loaded corpus with {} opportunities and {} trends",
        corpus.opportunities.len(),
        corpus.trends.len()
    );
    Ok(corpus)
}

fn run_research(engine: &ResearchEngine, corpus: &Corpus, query: &str, kind: ResearchType) -> ResearchResult {
    let started = Instant::now();
    let report = engine.report(corpus, query, kind);
    let context = ResearchContext {
        analysis_id: generate_analysis_id(&uuid::Uuid::new_v4().to_string(), Utc::now().timestamp_millis()),
        execution_time_ms: started.elapsed().as_millis() as u64,
        confidence: report.mean_confidence(),
    };
    into_result(report, context)
}

async fn run_batch(
    queries: Vec<String>,
    kind: ResearchType,
    corpus: Arc<Corpus>,
    concurrency_limit: usize,
) -> anyhow::Result<Vec<ResearchResult>> {
    let engine = Arc::new(ResearchEngine::default());
    let semaphore = Arc::new(Semaphore::new(concurrency_limit));

    let pb = ProgressBar::new(queries.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} queries")?
            .progress_chars("#>-"),
    );

    let tasks = queries.into_iter().map(|query| {
        let sem = semaphore.clone();
        let engine = engine.clone();
        let corpus = corpus.clone();
        let pb = pb.clone();

        async move {
            let _permit = sem.acquire_owned().await?;
            let result =
                tokio::task::spawn_blocking(move || run_research(&engine, &corpus, &query, kind)).await?;
            pb.inc(1);
            anyhow::Ok(result)
        }
    });

    let results = join_all(tasks).await.into_iter().collect::<anyhow::Result<Vec<_>>>();
    pb.finish_with_message("Research complete");
    results
}

fn render_analysis(analysis: &MarketAnalysis, format: &str) -> anyhow::Result<String> {
    Ok(match format {
        "json" => serde_json::to_string_pretty(analysis)?,
        "markdown" => analysis_markdown(analysis),
        _ => analysis_text(analysis),
    })
}

fn render_research(result: &ResearchResult, format: &str) -> anyhow::Result<String> {
    Ok(match format {
        "json" => serde_json::to_string_pretty(result)?,
        "markdown" => research_markdown(result),
        _ => research_text(result),
    })
}

fn analysis_text(analysis: &MarketAnalysis) -> String {
    let mut output = String::new();

    output.push_str("\n=== Market Analysis ===\n\n");
    output.push_str(&format!("Items analyzed: {}\n", analysis.total_items));
    output.push_str(&format!("Categories: {}\n", analysis.signal_count));
    output.push_str(&format!("Confidence: {:.0}%\n\n", analysis.confidence));

    output.push_str("Insights:\n");
    for insight in &analysis.insights {
        output.push_str(&format!(
            "  - {} [{}] momentum {:.0}, confidence {:.0}%\n    {}\n",
            insight.category, insight.impact, insight.momentum, insight.confidence, insight.narrative
        ));
    }

    output.push_str("\nOpportunities:\n");
    for opp in &analysis.opportunities {
        output.push_str(&format!(
            "  - {} (score {:.0}, competition {}, {})\n",
            opp.title, opp.score, opp.competition, opp.timeline
        ));
    }

    if !analysis.risks.is_empty() {
        output.push_str("\nRisks:\n");
        for risk in &analysis.risks {
            output.push_str(&format!(
                "  - {} (p={:.1}, impact={:.1})\n    Mitigation: {}\n",
                risk.description, risk.probability, risk.impact, risk.mitigation
            ));
        }
    }

    if !analysis.recommendations.is_empty() {
        output.push_str("\nRecommendations:\n");
        for rec in &analysis.recommendations {
            output.push_str(&format!("  - [{}] {} ({})\n", rec.priority, rec.action, rec.timeframe));
        }
    }

    output
}

fn analysis_markdown(analysis: &MarketAnalysis) -> String {
    let mut output = String::new();

    output.push_str("# Market Analysis\n\n");
    output.push_str(&format!(
        "**Items analyzed:** {} | **Categories:** {} | **Confidence:** {:.0}%\n\n",
        analysis.total_items, analysis.signal_count, analysis.confidence
    ));

    output.push_str("## Insights\n\n");
    output.push_str("| Category | Momentum | Confidence | Impact | Timeframe |\n");
    output.push_str("|----------|----------|------------|--------|-----------|\n");
    for insight in &analysis.insights {
        output.push_str(&format!(
            "| {} | {:.0} | {:.0}% | {} | {} |\n",
            insight.category, insight.momentum, insight.confidence, insight.impact, insight.timeframe
        ));
    }

    output.push_str("\n## Opportunities\n\n");
    for opp in &analysis.opportunities {
        output.push_str(&format!("- **{}**: {}\n", opp.title, opp.description));
    }

    if !analysis.risks.is_empty() {
        output.push_str("\n## Risks\n\n");
        for risk in &analysis.risks {
            output.push_str(&format!("- **{}**: {}\n", risk.description, risk.mitigation));
        }
    }

    if !analysis.recommendations.is_empty() {
        output.push_str("\n## Recommendations\n\n");
        for rec in &analysis.recommendations {
            output.push_str(&format!("- **{}** ({}): {}\n", rec.action, rec.priority, rec.rationale));
        }
    }

    output
}

fn research_text(result: &ResearchResult) -> String {
    let mut output = String::new();

    output.push_str(&format!("\n=== Research {} ===\n\n", result.analysis_id));
    output.push_str(&format!("{}\n", result.summary));
    output.push_str(&format!(
        "Confidence: {:.0}% ({} ms, source: {})\n\n",
        result.confidence, result.execution_time_ms, result.provenance
    ));

    output.push_str("Findings:\n");
    for finding in &result.findings {
        output.push_str(&format!(
            "  - {} ({:.0}%)\n    {}\n",
            finding.title, finding.confidence, finding.description
        ));
    }

    output.push_str("\nInsights:\n");
    for insight in &result.insights {
        output.push_str(&format!("  - {}\n", insight));
    }

    output
}

fn research_markdown(result: &ResearchResult) -> String {
    let mut output = String::new();

    output.push_str(&format!("# Research `{}`\n\n{}\n\n", result.analysis_id, result.summary));

    output.push_str("## Findings\n\n");
    output.push_str("| Finding | Confidence |\n|---------|------------|\n");
    for finding in &result.findings {
        output.push_str(&format!("| {} | {:.0}% |\n", finding.title, finding.confidence));
    }

    output.push_str("\n## Insights\n\n");
    for insight in &result.insights {
        output.push_str(&format!("- {}\n", insight));
    }

    output.push_str(&format!(
        "\n---\n*{} ms, source: {}*\n",
        result.execution_time_ms, result.provenance
    ));

    output
}
