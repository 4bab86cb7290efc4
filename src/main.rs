//! # reviewer-calls CLI
//!
//! Searches the web for open calls for reviewers of the selected conferences
//! and prints the ranked candidates.
//!
//! ## Features
//!
//! - Registry selection by short name, CCF rank, area and limit
//! - Recruitment-window pre-selection unless a conference is named
//! - DuckDuckGo or Serper search with automatic fallback
//! - Progress tracking across conferences
//! - Summary table on stdout and an optional JSON report

mod telemetry;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use chrono::{Datelike, Local};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use reviewer_calls::conference::{
    ConferenceFilter, VALID_AREAS, VALID_RANKS, guess_year, load_conferences,
};
use reviewer_calls::explorer::ExplorerConfig;
use reviewer_calls::fetcher::FetcherConfig;
use reviewer_calls::known_urls::KnownUrls;
use reviewer_calls::pipeline::{DiscoveryConfig, DiscoveryReport, in_recruitment_window, run_discovery};
use reviewer_calls::scoring::Decision;
use reviewer_calls::search::{DateRange, ProviderKind};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::instrument;

#[derive(Parser, Debug)]
#[command(author, version, about = "Discover open calls for reviewers of academic conferences", long_about = None)]
struct Cli {
    /// Conference registry
    #[arg(long, default_value = "conferences.yaml")]
    conferences: PathBuf,

    /// Calls already in the dataset
    #[arg(long, default_value = "calls.yaml")]
    calls: PathBuf,

    /// Previously rejected URLs; a missing file is treated as empty
    #[arg(long, default_value = "rejected_urls.yaml")]
    rejected: PathBuf,

    /// Extra URL to treat as known (repeatable)
    #[arg(long = "known-url")]
    known_urls: Vec<String>,

    /// Only this conference (short name)
    #[arg(long)]
    conference: Option<String>,

    /// Only conferences with this CCF rank
    #[arg(long, value_parser = parse_rank)]
    rank: Option<String>,

    /// Only conferences in this area
    #[arg(long, value_parser = parse_area)]
    area: Option<String>,

    /// Search at most this many conferences
    #[arg(long)]
    limit: Option<usize>,

    /// Primary search provider (duckduckgo, serper)
    #[arg(long, default_value = "duckduckgo")]
    search_provider: ProviderKind,

    /// Serper API key
    #[arg(long, env = "SERPER_API_KEY", hide_env_values = true)]
    serper_key: Option<String>,

    /// Search date range (d, w, m, y, none)
    #[arg(long, default_value = "m")]
    date_range: DateRange,

    /// First run: search the past year instead of the configured range
    #[arg(long)]
    init: bool,

    /// Maximum exploration depth
    #[arg(long, default_value = "3")]
    max_depth: u32,

    /// Maximum pages fetched per conference
    #[arg(long, default_value = "50")]
    max_pages: usize,

    /// Maximum concurrent requests
    #[arg(long, default_value = "10")]
    concurrency: usize,

    /// Keep rejected candidates in the report
    #[arg(long)]
    include_rejected: bool,

    /// Write the report as JSON
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn parse_choice(value: &str, valid: &[&str], what: &str) -> Result<String, String> {
    let upper = value.to_uppercase();
    if valid.contains(&upper.as_str()) {
        Ok(upper)
    } else {
        Err(format!("invalid {what} '{value}', expected one of {}", valid.join(", ")))
    }
}

fn parse_rank(value: &str) -> Result<String, String> {
    parse_choice(value, VALID_RANKS, "rank")
}

fn parse_area(value: &str) -> Result<String, String> {
    parse_choice(value, VALID_AREAS, "area")
}

impl Cli {
    fn discovery_config(&self) -> anyhow::Result<DiscoveryConfig> {
        let config = DiscoveryConfig::builder()
            .fetcher(FetcherConfig::builder().concurrency(self.concurrency).build())
            .explorer(
                ExplorerConfig::builder()
                    .max_depth(self.max_depth)
                    .max_pages(self.max_pages)
                    .build(),
            )
            .provider(self.search_provider)
            .serper_key(self.serper_key.clone())
            .date_range(if self.init { DateRange::Year } else { self.date_range })
            .include_rejected(self.include_rejected)
            .build();
        config.scoring.validate()?;
        Ok(config)
    }

    fn conference_filter(&self) -> ConferenceFilter {
        let mut filter = ConferenceFilter::new();
        if let Some(conference) = &self.conference {
            filter = filter.conference(conference.clone());
        }
        if let Some(rank) = &self.rank {
            filter = filter.rank(rank.clone());
        }
        if let Some(area) = &self.area {
            filter = filter.area(area.clone());
        }
        if let Some(limit) = self.limit {
            filter = filter.limit(limit);
        }
        filter
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _telemetry = telemetry::init_tracing(cli.log_file.as_deref(), cli.quiet)?;

    discover_command(cli).await
}

#[instrument(skip_all)]
async fn discover_command(cli: Cli) -> anyhow::Result<()> {
    let filter = cli.conference_filter();
    filter.validate()?;
    let config = cli.discovery_config()?;

    let conferences = load_conferences(&cli.conferences)
        .with_context(|| format!("failed to load conferences from {}", cli.conferences.display()))?;
    let known = KnownUrls::load(&cli.calls, Some(cli.rejected.as_path()), &cli.known_urls)
        .with_context(|| format!("failed to load known URLs from {}", cli.calls.display()))?;

    let today = Local::now().date_naive();
    let year = guess_year(today);
    let conferences = if cli.conference.is_some() {
        conferences
    } else {
        in_recruitment_window(conferences, &config.window, today.month())
    };
    let selected = filter.apply(conferences);

    if selected.is_empty() {
        println!("No conferences selected");
        return Ok(());
    }
    println!(
        "Searching {} conference(s) for {} calls using {:?} (date range {})",
        selected.len(),
        year,
        config.provider,
        config.date_range
    );

    let progress_bar = if cli.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(selected.len() as u64)
    };
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} ({eta}) {msg}")?
            .progress_chars("##-"),
    );
    progress_bar.set_message("Discovering...");

    let (progress_sender, mut progress_receiver) = mpsc::channel(100);
    let progress_handle = tokio::spawn({
        let progress_bar = progress_bar.clone();
        async move {
            while let Some(conference) = progress_receiver.recv().await {
                progress_bar.inc(1);
                progress_bar.set_message(format!("Finished {conference}"));
            }
            progress_bar.finish_with_message("Discovery completed");
        }
    });

    let start_time = Instant::now();
    let report = run_discovery(&selected, &known, year, &config, Some(progress_sender)).await?;
    wait_for_progress(progress_handle).await?;

    print_summary(&report);
    println!("Completed in {:.2?}", start_time.elapsed());

    if let Some(path) = &cli.output {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}

async fn wait_for_progress(handle: JoinHandle<()>) -> anyhow::Result<()> {
    handle.await.context("progress reporting task failed")
}

fn print_summary(report: &DiscoveryReport) {
    let count = |decision: Decision| {
        report
            .candidates
            .iter()
            .filter(|c| c.decision == decision)
            .count()
    };

    println!();
    println!(
        "Searched {} conference(s): {} succeeded, {} failed",
        report.searched,
        report.succeeded,
        report.failures.len()
    );
    println!(
        "Found {} candidate(s): {} accept, {} gray zone, {} reject",
        report.candidates.len(),
        count(Decision::Accept),
        count(Decision::GrayZone),
        count(Decision::Reject)
    );

    if !report.candidates.is_empty() {
        println!();
        println!(
            "{:<10} {:<10} {:>6}  {:<9} {:<18} {:<13} URL",
            "DECISION", "CONF", "SCORE", "STRENGTH", "ROLE", "LABEL"
        );
        for candidate in &report.candidates {
            println!(
                "{:<10} {:<10} {:>6.2}  {:<9} {:<18} {:<13} {}",
                candidate.decision.to_string(),
                candidate.conference,
                candidate.final_score,
                candidate.strength.to_string(),
                candidate.role.to_string(),
                candidate.label.to_string(),
                candidate.url()
            );
        }
    }

    for failure in &report.failures {
        println!("Failed: {}", failure.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["reviewer-calls"]);
        let config = cli.discovery_config().unwrap();
        assert_eq!(config.explorer.max_depth, 3);
        assert_eq!(config.explorer.max_pages, 50);
        assert_eq!(config.fetcher.concurrency, 10);
        assert_eq!(config.date_range, DateRange::Month);
        assert_eq!(config.provider, ProviderKind::DuckDuckGo);
    }

    #[test]
    fn test_init_forces_year_range() {
        let cli = Cli::parse_from(["reviewer-calls", "--init", "--date-range", "w"]);
        assert_eq!(cli.discovery_config().unwrap().date_range, DateRange::Year);
    }

    #[test]
    fn test_rank_and_area_validated() {
        let cli = Cli::parse_from(["reviewer-calls", "--rank", "a", "--area", "se"]);
        assert_eq!(cli.rank.as_deref(), Some("A"));
        assert_eq!(cli.area.as_deref(), Some("SE"));
        assert!(Cli::try_parse_from(["reviewer-calls", "--rank", "D"]).is_err());
        assert!(Cli::try_parse_from(["reviewer-calls", "--area", "XX"]).is_err());
    }

    #[test]
    fn test_known_urls_repeatable() {
        let cli = Cli::parse_from([
            "reviewer-calls",
            "--known-url",
            "https://a.org/cfr",
            "--known-url",
            "https://b.org/cfr",
            "--search-provider",
            "serper",
        ]);
        assert_eq!(cli.known_urls.len(), 2);
        assert_eq!(cli.search_provider, ProviderKind::Serper);
    }

    #[tokio::test]
    async fn test_progress_task_panic_is_reported() {
        let handle: JoinHandle<()> = tokio::spawn(async { panic!("progress bar broke") });
        let err = wait_for_progress(handle).await.unwrap_err();
        assert!(err.to_string().contains("progress reporting task failed"));

        assert!(wait_for_progress(tokio::spawn(async {})).await.is_ok());
    }
}
