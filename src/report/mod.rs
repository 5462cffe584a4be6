//! CSV report writing.
//!
//! Rows go into `<output_dir>/sitemap_urls_<YYYY-MM-DD>.csv` with a fixed
//! `source_sitemap,url` header. When there are no rows, no file is written.

use crate::harvest::ExtractedUrl;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("creating output directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("writing csv: {0}")]
    Csv(#[from] csv::Error),
}

/// Path of the report for a given date.
pub fn report_path(output_dir: &Path, date: NaiveDate) -> PathBuf {
    output_dir.join(format!("sitemap_urls_{}.csv", date.format("%Y-%m-%d")))
}

/// Write the accumulated rows, creating the output directory if absent.
///
/// Returns the written path, or `None` when there was nothing to write.
pub fn write_report(
    rows: &[ExtractedUrl],
    output_dir: &Path,
    date: NaiveDate,
) -> Result<Option<PathBuf>, ReportError> {
    if rows.is_empty() {
        return Ok(None);
    }

    std::fs::create_dir_all(output_dir)?;
    let path = report_path(output_dir, date);

    let mut writer = csv::Writer::from_path(&path)?;
    writer.write_record(["source_sitemap", "url"])?;
    for row in rows {
        writer.write_record([&row.source_sitemap, &row.url])?;
    }
    writer.flush()?;

    info!(path = %path.display(), rows = rows.len(), "report written");
    Ok(Some(path))
}
