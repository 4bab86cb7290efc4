//! Batch runner over many conferences

use std::any::Any;
use std::collections::HashSet;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

use super::{Candidate, DiscoveryConfig, discover_conference};
use crate::conference::{Conference, RecruitmentWindow};
use crate::error::{Error, Result};
use crate::fetcher::{Fetcher, PageSource};
use crate::known_urls::KnownUrls;
use crate::search::{FallbackSearch, SearchProvider};
use crate::urls::normalize_url;

/// A conference whose discovery did not complete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConferenceFailure {
    pub conference: String,
    pub message: String,
}

/// Outcome of a discovery run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryReport {
    /// Candidates by final score, best first
    pub candidates: Vec<Candidate>,

    /// Conferences attempted
    pub searched: usize,

    /// Conferences that completed, with or without candidates
    pub succeeded: usize,

    pub failures: Vec<ConferenceFailure>,
}

/// Conferences plausibly recruiting in `current_month`, in registry order
pub fn in_recruitment_window(
    conferences: Vec<Conference>,
    window: &RecruitmentWindow,
    current_month: u32,
) -> Vec<Conference> {
    let total = conferences.len();
    let selected: Vec<Conference> = conferences
        .into_iter()
        .filter(|c| window.contains(c, current_month))
        .collect();
    info!(total, selected = selected.len(), current_month, "Applied recruitment window");
    selected
}

/// Run discovery for `conferences` with one shared fetcher and the search
/// backend named in `config`.
///
/// Fails only if the fetcher or the search backend cannot be built.
pub async fn run_discovery(
    conferences: &[Conference],
    known: &KnownUrls,
    year: i32,
    config: &DiscoveryConfig,
    progress: Option<mpsc::Sender<String>>,
) -> Result<DiscoveryReport> {
    let fetcher = Fetcher::new(config.fetcher.clone())?;
    let search = FallbackSearch::from_kind(
        config.provider,
        config.serper_key.clone(),
        config.date_range,
    )?;

    Ok(run_discovery_with(&fetcher, &search, conferences, known, year, config, progress).await)
}

/// Run discovery for `conferences` one at a time over the given page source
/// and search backend.
///
/// A conference that panics is recorded as a failure and the batch moves
/// on. When `progress` is given, each conference's short name is sent once
/// it is finished.
#[instrument(skip_all, fields(conferences = conferences.len(), year = year))]
pub async fn run_discovery_with<P: PageSource, S: SearchProvider>(
    source: &P,
    search: &S,
    conferences: &[Conference],
    known: &KnownUrls,
    year: i32,
    config: &DiscoveryConfig,
    progress: Option<mpsc::Sender<String>>,
) -> DiscoveryReport {
    let mut report = DiscoveryReport::default();
    let mut candidates = Vec::new();

    for conference in conferences {
        report.searched += 1;
        info!(conference = %conference.short_name, "Discovering");

        let run = discover_conference(source, search, conference, known, year, config);
        match AssertUnwindSafe(run).catch_unwind().await {
            Ok(found) => {
                report.succeeded += 1;
                candidates.extend(found);
            }
            Err(payload) => {
                let err = Error::Discovery {
                    conference: conference.short_name.clone(),
                    message: panic_message(payload),
                };
                error!("{}", err);
                report.failures.push(ConferenceFailure {
                    conference: conference.short_name.clone(),
                    message: err.to_string(),
                });
            }
        }

        if let Some(sender) = &progress {
            if sender.send(conference.short_name.clone()).await.is_err() {
                debug!("Progress receiver dropped");
            }
        }
    }

    report.candidates = rank_candidates(candidates);
    info!(
        searched = report.searched,
        succeeded = report.succeeded,
        failed = report.failures.len(),
        candidates = report.candidates.len(),
        "Discovery finished"
    );
    report
}

/// Drop repeated URLs, keeping the first occurrence, then order by final
/// score descending and URL ascending
pub fn rank_candidates(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let mut seen = HashSet::new();
    let mut ranked: Vec<Candidate> = candidates
        .into_iter()
        .filter(|c| seen.insert(normalize_url(c.url())))
        .collect();
    ranked.sort_by(|a, b| {
        b.final_score
            .total_cmp(&a.final_score)
            .then_with(|| a.url().cmp(b.url()))
    });
    ranked
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
