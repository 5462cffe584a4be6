//! Sequential sitemap harvest loop.
//!
//! One fetch in flight at a time, a fixed politeness delay between
//! requests, and continue-on-error per sitemap: a failed reference
//! contributes zero rows and never aborts the run.

use crate::config::Config;
use crate::extract::{self, ExtractError};
use crate::fetch::{FetchClient, FetchError};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// One `(source_sitemap, url)` pair extracted from a sitemap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedUrl {
    pub source_sitemap: String,
    pub url: String,
}

/// Why a single sitemap produced no URLs.
#[derive(Debug, Error)]
pub enum SitemapFailure {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Parse(#[from] ExtractError),
}

/// Errors that abort the whole run.
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),
    #[error("reading input list: {0}")]
    Io(#[from] std::io::Error),
    #[error("building http client: {0}")]
    Client(#[source] FetchError),
}

/// Per-reference outcome, for the run summary.
#[derive(Debug, Clone, Serialize)]
pub struct ReferenceOutcome {
    pub reference: String,
    pub urls: usize,
    pub error: Option<String>,
}

/// Accumulated result of one run.
#[derive(Debug, Default)]
pub struct HarvestReport {
    pub rows: Vec<ExtractedUrl>,
    pub outcomes: Vec<ReferenceOutcome>,
}

impl HarvestReport {
    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.error.is_some()).count()
    }
}

/// Read the sitemap reference list: one URL per line, blank lines skipped.
pub async fn read_references(path: &Path) -> Result<Vec<String>, HarvestError> {
    if !path.exists() {
        return Err(HarvestError::MissingInput(path.to_path_buf()));
    }
    let text = tokio::fs::read_to_string(path).await?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Run the harvest: fetch and extract every reference in order.
pub async fn run(config: &Config) -> Result<HarvestReport, HarvestError> {
    let references = read_references(&config.input).await?;
    let client = FetchClient::new(config.profile, config.timeout).map_err(HarvestError::Client)?;

    info!(count = references.len(), "starting harvest");

    let mut report = HarvestReport::default();
    for (i, reference) in references.iter().enumerate() {
        if i > 0 {
            tokio::time::sleep(config.delay).await;
        }

        match harvest_one(&client, reference).await {
            Ok(urls) => {
                info!(reference, count = urls.len(), "extracted");
                report.outcomes.push(ReferenceOutcome {
                    reference: reference.clone(),
                    urls: urls.len(),
                    error: None,
                });
                for url in urls {
                    report.rows.push(ExtractedUrl {
                        source_sitemap: reference.clone(),
                        url,
                    });
                }
            }
            Err(e) => {
                warn!(reference, error = %e, "sitemap failed");
                report.outcomes.push(ReferenceOutcome {
                    reference: reference.clone(),
                    urls: 0,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    Ok(report)
}

/// Fetch one sitemap and extract its locations.
async fn harvest_one(client: &FetchClient, reference: &str) -> Result<Vec<String>, SitemapFailure> {
    let body = client.fetch(reference).await?;
    Ok(extract::extract_locations(&body)?)
}
