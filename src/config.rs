//! Run configuration passed into the harvest driver.

use crate::fetch::profile::ProfileKind;
use std::path::PathBuf;
use std::time::Duration;

/// Everything the driver needs for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Input file with one sitemap URL per line.
    pub input: PathBuf,
    /// Directory the dated CSV report is written into.
    pub output_dir: PathBuf,
    /// Politeness delay between successive fetches.
    pub delay: Duration,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Header profile to send.
    pub profile: ProfileKind,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("sitemaps.txt"),
            output_dir: PathBuf::from("csv"),
            delay: Duration::from_secs(2),
            timeout: Duration::from_secs(20),
            profile: ProfileKind::Hardened,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_tool() {
        let config = Config::default();
        assert_eq!(config.input, PathBuf::from("sitemaps.txt"));
        assert_eq!(config.delay, Duration::from_secs(2));
        assert_eq!(config.timeout, Duration::from_secs(20));
        assert_eq!(config.profile, ProfileKind::Hardened);
    }
}
