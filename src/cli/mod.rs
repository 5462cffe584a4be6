//! Command-line interface for the sitesweep binary.

pub mod output;

use crate::config::Config;
use crate::fetch::profile::ProfileKind;
use crate::harvest::{self, HarvestReport};
use crate::report;
use anyhow::{Context, Result};
use clap::Parser;
use output::Styled;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Harvest URLs from XML sitemaps into a dated CSV report.
#[derive(Debug, Parser)]
#[command(name = "sitesweep", version, about)]
pub struct Cli {
    /// Input file with one sitemap URL per line.
    #[arg(short, long, default_value = "sitemaps.txt")]
    pub input: PathBuf,

    /// Directory for the dated CSV report.
    #[arg(short, long, default_value = "csv")]
    pub output_dir: PathBuf,

    /// Politeness delay between fetches, in milliseconds.
    #[arg(long, default_value_t = 2000)]
    pub delay_ms: u64,

    /// Per-request timeout, in seconds.
    #[arg(long, default_value_t = 20)]
    pub timeout_secs: u64,

    /// Header profile sent with each request.
    #[arg(long, value_enum, default_value_t = ProfileKind::Hardened)]
    pub profile: ProfileKind,

    /// Suppress the summary (log lines still go to stderr).
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the run summary as JSON on stdout.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            input: self.input.clone(),
            output_dir: self.output_dir.clone(),
            delay: Duration::from_millis(self.delay_ms),
            timeout: Duration::from_secs(self.timeout_secs),
            profile: self.profile,
        }
    }
}

/// Run the harvest and write the report.
pub async fn run(cli: Cli) -> Result<()> {
    let config = cli.config();
    let start = Instant::now();

    let report = harvest::run(&config).await.context("harvest failed")?;
    let written = report::write_report(
        &report.rows,
        &config.output_dir,
        chrono::Local::now().date_naive(),
    )
    .context("writing csv report")?;

    if cli.json {
        print_json_summary(&report, written.as_deref(), start.elapsed());
    } else if !cli.quiet {
        print_summary(&report, written.as_deref(), start.elapsed());
    }

    Ok(())
}

fn print_summary(report: &HarvestReport, written: Option<&Path>, elapsed: Duration) {
    let s = Styled::new();

    eprintln!();
    for outcome in &report.outcomes {
        match &outcome.error {
            None => eprintln!(
                "  {} {:<60} {} urls",
                s.ok_sym(),
                outcome.reference,
                outcome.urls
            ),
            Some(err) => eprintln!(
                "  {} {:<60} {}",
                s.fail_sym(),
                outcome.reference,
                s.red(err)
            ),
        }
    }

    eprintln!();
    eprintln!(
        "  {}: {} sitemaps, {} failed, {} urls in {:.1}s",
        s.bold("Done"),
        report.outcomes.len(),
        report.failed_count(),
        report.rows.len(),
        elapsed.as_secs_f64()
    );

    match written {
        Some(path) => eprintln!("  {}", s.green(&format!("Report: {}", path.display()))),
        None => eprintln!("  {}", s.yellow("No URLs extracted, no report written.")),
    }
}

fn print_json_summary(report: &HarvestReport, written: Option<&Path>, elapsed: Duration) {
    output::print_json(&serde_json::json!({
        "sitemaps": report.outcomes.len(),
        "failed": report.failed_count(),
        "urls": report.rows.len(),
        "outcomes": report.outcomes,
        "report": written.map(|p| p.display().to_string()),
        "duration_ms": elapsed.as_millis(),
    }));
}
