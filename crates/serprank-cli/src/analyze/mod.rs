//! The `analyze` command: SERP lookup, rank resolution, page comparison and
//! explanation, rendered as text or JSON on stdout.

mod pipeline;
mod render;
mod report;

use clap::{Args, ValueEnum};
use serprank_analyzer::PageFetcher;
use serprank_core::AppConfig;
use serprank_serp::SerpApiClient;
use serprank_summarizer::GroqSummarizer;

pub(crate) use pipeline::{run_analysis, AnalysisInput, MissingInput};
pub(crate) use render::{render_json, render_text};

/// Result depths offered for the SERP lookup.
pub const SEARCH_DEPTHS: [u32; 4] = [10, 20, 50, 100];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Search keyword to check
    #[arg(long)]
    pub keyword: String,
    /// Your website: a domain (example.com) or a full URL
    #[arg(long)]
    pub site: String,
    /// How many Google results to search (10, 20, 50 or 100)
    #[arg(long, default_value = "10", value_parser = parse_depth)]
    pub depth: u32,
    /// Google country code (gl), e.g. in, us, gb, ca, au
    #[arg(long, default_value = "in")]
    pub country: String,
    /// Google interface language (hl)
    #[arg(long, default_value = "en")]
    pub language: String,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Also print every searched result, not only the top 10
    #[arg(long)]
    pub all_results: bool,
}

fn parse_depth(raw: &str) -> Result<u32, String> {
    let depth: u32 = raw
        .parse()
        .map_err(|_| format!("'{raw}' is not a whole number"))?;
    if SEARCH_DEPTHS.contains(&depth) {
        Ok(depth)
    } else {
        Err(format!("depth must be one of {SEARCH_DEPTHS:?}, got {depth}"))
    }
}

/// Builds the production collaborators from `config`, runs the pipeline and
/// prints the report.
///
/// # Errors
///
/// Returns an error if a client cannot be constructed or any pipeline step
/// fails; nothing is printed to stdout in that case.
pub(crate) async fn run_analyze(config: &AppConfig, args: &AnalyzeArgs) -> anyhow::Result<()> {
    let serp = SerpApiClient::with_base_url(
        config.serp_api_key.as_deref(),
        config.serp_timeout_secs,
        &config.serp_base_url,
    )?;
    let summarizer = GroqSummarizer::with_base_url(
        config.summarizer_api_key.as_deref(),
        &config.summarizer_model,
        config.summarizer_timeout_secs,
        &config.summarizer_base_url,
    )?;
    let fetcher = PageFetcher::new(config.page_timeout_secs, &config.page_user_agent)?;

    let input = AnalysisInput {
        keyword: args.keyword.clone(),
        site: args.site.clone(),
        depth: args.depth,
        country: args.country.to_lowercase(),
        language: args.language.to_lowercase(),
    };

    let report = run_analysis(&serp, &summarizer, &fetcher, &input).await?;

    let output = match args.format {
        OutputFormat::Text => render_text(&report, args.all_results),
        OutputFormat::Json => render_json(&report)?,
    };
    println!("{output}");
    Ok(())
}
