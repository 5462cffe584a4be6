//! Browser identity profiles — present as a real desktop browser.
//!
//! Sitemap endpoints behind WAFs often reject obvious automation. The
//! hardened profile carries the full header set a desktop Chrome sends on
//! navigation; the basic profile is just a realistic user-agent.

use clap::ValueEnum;
use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, UPGRADE_INSECURE_REQUESTS,
    USER_AGENT,
};

/// Desktop Chrome on Windows.
const CHROME_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Which header profile to send with each request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProfileKind {
    /// Realistic user-agent only.
    Basic,
    /// Full Chrome-on-Windows navigation header set.
    Hardened,
}

impl ProfileKind {
    /// Build the default header map for this profile.
    pub fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(CHROME_UA));

        if let ProfileKind::Basic = self {
            return headers;
        }

        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,\
                 image/avif,image/webp,*/*;q=0.8",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
        headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));

        // Client-hint and fetch-metadata headers Chrome sends on navigation.
        let hints: [(&str, &str); 7] = [
            (
                "sec-ch-ua",
                "\"Chromium\";v=\"124\", \"Google Chrome\";v=\"124\", \"Not-A.Brand\";v=\"99\"",
            ),
            ("sec-ch-ua-mobile", "?0"),
            ("sec-ch-ua-platform", "\"Windows\""),
            ("sec-fetch-dest", "document"),
            ("sec-fetch-mode", "navigate"),
            ("sec-fetch-site", "none"),
            ("sec-fetch-user", "?1"),
        ];
        for (name, value) in hints {
            headers.insert(
                HeaderName::from_static(name),
                HeaderValue::from_static(value),
            );
        }

        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_profile_is_user_agent_only() {
        let headers = ProfileKind::Basic.headers();
        assert_eq!(headers.len(), 1);
        let ua = headers.get(USER_AGENT).unwrap().to_str().unwrap();
        assert!(ua.contains("Chrome/"));
        assert!(ua.contains("Windows NT"));
    }

    #[test]
    fn test_hardened_profile_carries_fetch_metadata() {
        let headers = ProfileKind::Hardened.headers();
        assert!(headers.len() > 8);
        assert!(headers.contains_key(USER_AGENT));
        assert!(headers.contains_key(ACCEPT));
        assert_eq!(
            headers.get("sec-fetch-mode").unwrap().to_str().unwrap(),
            "navigate"
        );
        assert_eq!(
            headers
                .get("sec-ch-ua-platform")
                .unwrap()
                .to_str()
                .unwrap(),
            "\"Windows\""
        );
    }
}
