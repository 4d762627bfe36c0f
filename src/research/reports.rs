use std::collections::BTreeMap;

use crate::models::{CorpusOpportunity, CorpusTrend, ResearchFinding, ResearchType};
use crate::research::relevance::{Ranked, RankedCorpus};

const TOP_OPPORTUNITIES: usize = 5;
const TOP_TRENDS: usize = 3;
const TREND_REPORT_LIMIT: usize = 5;
const BLUE_OCEAN_COMPETITION: f64 = 70.0;
const HIGH_GROWTH_RATE: f64 = 20.0;

pub struct ReportInput<'a> {
    pub query: &'a str,
    pub keywords: &'a [String],
    pub ranked: &'a RankedCorpus<'a>,
}

impl<'a> ReportInput<'a> {
    fn opportunities(&self, limit: usize) -> impl Iterator<Item = &'a Ranked<'a, CorpusOpportunity>> {
        self.ranked.opportunities.iter().take(limit)
    }

    fn trends(&self, limit: usize) -> impl Iterator<Item = &'a Ranked<'a, CorpusTrend>> {
        self.ranked.trends.iter().take(limit)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub summary: String,
    pub findings: Vec<ResearchFinding>,
    pub insights: Vec<String>,
}

impl Report {
    pub fn mean_confidence(&self) -> f64 {
        if self.findings.is_empty() {
            return 0.0;
        }
        self.findings.iter().map(|f| f.confidence).sum::<f64>() / self.findings.len() as f64
    }
}

pub type ReportBuilder = fn(&ReportInput<'_>) -> Report;

/// Dispatch table from report kind to builder.
pub fn builder_for(kind: ResearchType) -> ReportBuilder {
    match kind {
        ResearchType::Market => market_report,
        ResearchType::Competitor => competitor_report,
        ResearchType::Pricing => pricing_report,
        ResearchType::Trend => trend_report,
        ResearchType::Customer => customer_report,
        ResearchType::Technology => technology_report,
        ResearchType::General => general_report,
    }
}

/// Run the builder for `kind`, then backfill an overview finding or insight
/// if the builder's primary source came up empty.
pub fn build_report(kind: ResearchType, input: &ReportInput<'_>) -> Report {
    let mut report = builder_for(kind)(input);

    if report.findings.is_empty() {
        if let Some(finding) = overview_finding(input) {
            report.findings.push(finding);
        }
    }
    if report.insights.is_empty() && !input.ranked.is_empty() {
        report.insights.push(format!(
            "{} opportunities and {} trends relate to this query",
            input.ranked.opportunities.len(),
            input.ranked.trends.len()
        ));
    }

    report
}

/// Scale a stored 0-100 score into a finding confidence in `[1, cap]`.
fn scaled_confidence(score: f64, scale: f64, cap: f64) -> f64 {
    let value = (score * scale).clamp(1.0, cap);
    (value * 10.0).round() / 10.0
}

fn finding(title: String, description: String, confidence: f64) -> ResearchFinding {
    ResearchFinding {
        title,
        description,
        confidence,
    }
}

fn overview_finding(input: &ReportInput<'_>) -> Option<ResearchFinding> {
    if let Some(top) = input.ranked.opportunities.first() {
        return Some(finding(
            top.item.title.clone(),
            top.item.description.clone(),
            scaled_confidence(top.item.scores.overall, 1.0, 95.0),
        ));
    }
    input.ranked.trends.first().map(|top| {
        finding(
            top.item.title.clone(),
            top.item.description.clone(),
            scaled_confidence(top.item.impact_score, 1.0, 95.0),
        )
    })
}

fn join_titles<'a>(titles: impl Iterator<Item = &'a str>) -> String {
    titles.collect::<Vec<_>>().join(", ")
}

fn blue_ocean_insight(input: &ReportInput<'_>) -> Option<String> {
    let candidates: Vec<&CorpusOpportunity> = input
        .opportunities(TOP_OPPORTUNITIES)
        .map(|r| r.item)
        .filter(|o| o.scores.competition > BLUE_OCEAN_COMPETITION)
        .collect();
    if candidates.is_empty() {
        return None;
    }
    Some(format!(
        "Blue ocean candidates: {}",
        join_titles(candidates.iter().map(|o| o.title.as_str()))
    ))
}

/// Most frequent values with their counts. Ties keep alphabetical order.
fn most_common<'a>(values: impl Iterator<Item = &'a String>, limit: usize) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value.clone()).or_insert(0) += 1;
    }
    let mut counted: Vec<(String, usize)> = counts.into_iter().collect();
    counted.sort_by(|a, b| b.1.cmp(&a.1));
    counted.truncate(limit);
    counted
}

fn market_report(input: &ReportInput<'_>) -> Report {
    let mut findings = Vec::new();

    for r in input.opportunities(TOP_OPPORTUNITIES) {
        let o = r.item;
        findings.push(finding(
            format!("{}: {} market", o.title, o.market.size),
            format!(
                "{} Growing {:.1}% per year, market size score {:.0}/100.",
                o.description, o.market.growth_rate, o.scores.market_size
            ),
            scaled_confidence(o.scores.market_size, 1.0, 95.0),
        ));
    }
    for r in input.trends(TOP_TRENDS) {
        let t = r.item;
        findings.push(finding(
            format!("Market driver: {}", t.title),
            format!("{} ({}, expected within {})", t.description, t.adoption_stage, t.timeframe),
            scaled_confidence(t.impact_score, 0.9, 95.0),
        ));
    }

    let mut insights = Vec::new();
    let growing: Vec<&CorpusOpportunity> = input
        .opportunities(TOP_OPPORTUNITIES)
        .map(|r| r.item)
        .filter(|o| o.market.growth_rate > HIGH_GROWTH_RATE)
        .collect();
    if !growing.is_empty() {
        insights.push(format!(
            "High-growth markets (>{:.0}%/yr): {}",
            HIGH_GROWTH_RATE,
            join_titles(growing.iter().map(|o| o.title.as_str()))
        ));
    }
    insights.extend(blue_ocean_insight(input));
    if let Some(largest) = input
        .opportunities(TOP_OPPORTUNITIES)
        .max_by(|a, b| a.item.scores.market_size.total_cmp(&b.item.scores.market_size))
    {
        insights.push(format!(
            "Largest addressable market: {} ({})",
            largest.item.title, largest.item.market.size
        ));
    }

    Report {
        summary: format!(
            "Market research for \"{}\": {} opportunities and {} trends analysed.",
            input.query,
            input.ranked.opportunities.len(),
            input.ranked.trends.len()
        ),
        findings,
        insights,
    }
}

fn competitor_report(input: &ReportInput<'_>) -> Report {
    let mut findings = Vec::new();
    let mut crowded = Vec::new();

    for r in input.opportunities(TOP_OPPORTUNITIES) {
        let o = r.item;
        let description = if o.competitors.is_empty() {
            "No established competitors recorded.".to_string()
        } else {
            let names: Vec<String> = o
                .competitors
                .iter()
                .map(|c| match c.description {
                    Some(ref d) => format!("{} ({})", c.name, d),
                    None => c.name.clone(),
                })
                .collect();
            format!("Key competitors: {}.", names.join("; "))
        };
        if o.competitors.len() >= 3 {
            crowded.push(o.title.as_str());
        }
        findings.push(finding(
            format!("Competitive landscape: {}", o.title),
            description,
            scaled_confidence(o.scores.competition, 1.0, 95.0),
        ));
    }

    let mut insights = Vec::new();
    insights.extend(blue_ocean_insight(input));
    if !crowded.is_empty() {
        insights.push(format!("Crowded markets (3+ competitors): {}", crowded.join(", ")));
    }
    let names = most_common(
        input
            .opportunities(TOP_OPPORTUNITIES)
            .flat_map(|r| r.item.competitors.iter().map(|c| &c.name)),
        1,
    );
    if let Some((name, count)) = names.first().filter(|(_, count)| *count > 1) {
        insights.push(format!("{} competes across {} of the matched opportunities", name, count));
    }

    Report {
        summary: format!(
            "Competitor analysis for \"{}\" across {} opportunities.",
            input.query,
            input.ranked.opportunities.len()
        ),
        findings,
        insights,
    }
}

fn pricing_report(input: &ReportInput<'_>) -> Report {
    let mut findings = Vec::new();

    for r in input.opportunities(TOP_OPPORTUNITIES) {
        let o = r.item;
        let Some(ref pricing) = o.pricing else {
            continue;
        };
        let mut description = format!("{} model at {}", pricing.model, pricing.price_range);
        if let Some(ref notes) = pricing.notes {
            description.push_str(&format!(". {}", notes));
        }
        let competitor_prices: Vec<String> = o
            .competitors
            .iter()
            .filter_map(|c| c.pricing.as_ref().map(|p| format!("{} {}", c.name, p)))
            .collect();
        if !competitor_prices.is_empty() {
            description.push_str(&format!(". Competitors: {}", competitor_prices.join(", ")));
        }
        findings.push(finding(
            format!("{} pricing", o.title),
            description,
            scaled_confidence(o.scores.feasibility, 0.9, 90.0),
        ));
    }

    let mut insights = Vec::new();
    let models = most_common(
        input
            .opportunities(TOP_OPPORTUNITIES)
            .filter_map(|r| r.item.pricing.as_ref().map(|p| &p.model)),
        1,
    );
    if let Some((model, count)) = models.first() {
        insights.push(format!(
            "Dominant pricing model: {} ({} of {} priced opportunities)",
            model,
            count,
            findings.len()
        ));
    }

    Report {
        summary: format!(
            "Pricing research for \"{}\": {} pricing models found.",
            input.query,
            findings.len()
        ),
        findings,
        insights,
    }
}

fn trend_report(input: &ReportInput<'_>) -> Report {
    let mut findings = Vec::new();

    for r in input.trends(TREND_REPORT_LIMIT) {
        let t = r.item;
        findings.push(finding(
            t.title.clone(),
            format!(
                "{} Adoption: {}, horizon {}, growth {:.1}%/yr.",
                t.description, t.adoption_stage, t.timeframe, t.growth_rate
            ),
            scaled_confidence(t.impact_score, 1.0, 95.0),
        ));
    }

    let mut insights = Vec::new();
    if let Some(fastest) = input
        .trends(TREND_REPORT_LIMIT)
        .max_by(|a, b| a.item.growth_rate.total_cmp(&b.item.growth_rate))
    {
        insights.push(format!(
            "Fastest-growing trend: {} (+{:.1}%/yr)",
            fastest.item.title, fastest.item.growth_rate
        ));
    }
    let early: Vec<&CorpusTrend> = input
        .trends(TREND_REPORT_LIMIT)
        .map(|r| r.item)
        .filter(|t| {
            let stage = t.adoption_stage.to_lowercase();
            stage.contains("early") || stage.contains("emerging")
        })
        .collect();
    if !early.is_empty() {
        insights.push(format!(
            "Early-stage trends worth watching: {}",
            join_titles(early.iter().map(|t| t.title.as_str()))
        ));
    }

    Report {
        summary: format!(
            "Trend analysis for \"{}\": {} trends matched.",
            input.query,
            input.ranked.trends.len()
        ),
        findings,
        insights,
    }
}

fn customer_report(input: &ReportInput<'_>) -> Report {
    let mut findings = Vec::new();

    for r in input.opportunities(TOP_OPPORTUNITIES) {
        let o = r.item;
        if o.target_customers.is_empty() && o.pain_points.is_empty() {
            continue;
        }
        findings.push(finding(
            format!("Customer needs: {}", o.title),
            format!(
                "Target customers: {}. Pain points: {}.",
                if o.target_customers.is_empty() {
                    "unspecified".to_string()
                } else {
                    o.target_customers.join(", ")
                },
                if o.pain_points.is_empty() {
                    "unspecified".to_string()
                } else {
                    o.pain_points.join("; ")
                }
            ),
            scaled_confidence(o.scores.overall, 1.0, 95.0),
        ));
    }

    let mut insights = Vec::new();
    let segments = most_common(
        input
            .opportunities(TOP_OPPORTUNITIES)
            .flat_map(|r| r.item.target_customers.iter()),
        3,
    );
    if !segments.is_empty() {
        let listed: Vec<String> = segments.iter().map(|(s, n)| format!("{} ({})", s, n)).collect();
        insights.push(format!("Most targeted segments: {}", listed.join(", ")));
    }
    if let Some(pain) = input
        .opportunities(TOP_OPPORTUNITIES)
        .find_map(|r| r.item.pain_points.first())
    {
        insights.push(format!("Most relevant pain point: {}", pain));
    }

    Report {
        summary: format!(
            "Customer research for \"{}\": {} customer profiles drawn from matched opportunities.",
            input.query,
            findings.len()
        ),
        findings,
        insights,
    }
}

fn technology_report(input: &ReportInput<'_>) -> Report {
    let mut findings = Vec::new();

    for r in input.opportunities(TOP_OPPORTUNITIES) {
        let o = r.item;
        if o.tech_stack.is_empty() {
            continue;
        }
        findings.push(finding(
            format!("{} stack", o.title),
            format!("Built with {}.", o.tech_stack.join(", ")),
            scaled_confidence(o.scores.feasibility, 1.0, 90.0),
        ));
    }
    for r in input.trends(TOP_TRENDS) {
        let t = r.item;
        if t.related_technologies.is_empty() {
            continue;
        }
        findings.push(finding(
            format!("Technology trend: {}", t.title),
            format!("Related technologies: {}.", t.related_technologies.join(", ")),
            scaled_confidence(t.impact_score, 0.9, 90.0),
        ));
    }

    let mut insights = Vec::new();
    let technologies = most_common(
        input
            .opportunities(TOP_OPPORTUNITIES)
            .flat_map(|r| r.item.tech_stack.iter())
            .chain(input.trends(TOP_TRENDS).flat_map(|r| r.item.related_technologies.iter())),
        3,
    );
    if !technologies.is_empty() {
        let listed: Vec<String> = technologies.iter().map(|(t, n)| format!("{} ({})", t, n)).collect();
        insights.push(format!("Most referenced technologies: {}", listed.join(", ")));
    }

    Report {
        summary: format!(
            "Technology research for \"{}\": {} stack and trend findings.",
            input.query,
            findings.len()
        ),
        findings,
        insights,
    }
}

fn general_report(input: &ReportInput<'_>) -> Report {
    let mut findings = Vec::new();

    for r in input.opportunities(3) {
        let o = r.item;
        findings.push(finding(
            o.title.clone(),
            format!("{} Overall score {:.0}/100.", o.description, o.scores.overall),
            scaled_confidence(o.scores.overall, 1.0, 100.0),
        ));
    }
    for r in input.trends(2) {
        let t = r.item;
        findings.push(finding(
            t.title.clone(),
            t.description.clone(),
            scaled_confidence(t.impact_score, 1.0, 100.0),
        ));
    }

    let mut insights = Vec::new();
    if let Some(top) = input.ranked.opportunities.first() {
        insights.push(format!(
            "Top-ranked opportunity: {} (overall {:.0}/100)",
            top.item.title, top.item.scores.overall
        ));
    }
    insights.extend(blue_ocean_insight(input));
    if let Some(top) = input.ranked.trends.first() {
        insights.push(format!("Leading trend: {} ({})", top.item.title, top.item.adoption_stage));
    }
    if !input.keywords.is_empty() && input.ranked.used_fallback {
        insights.push(format!(
            "No direct match for {}; showing the highest-ranked corpus entries",
            input.keywords.join(", ")
        ));
    }

    Report {
        summary: format!(
            "Research overview for \"{}\": {} opportunities and {} trends.",
            input.query,
            input.ranked.opportunities.len(),
            input.ranked.trends.len()
        ),
        findings,
        insights,
    }
}
