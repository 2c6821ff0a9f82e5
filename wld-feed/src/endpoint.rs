use serde::{Deserialize, Serialize};

/// Public warspotting instance.
pub const DEFAULT_HOST: &str = "ukr.warspotting.net";

/// Country whose losses the dashboard shows.
pub const DEFAULT_COUNTRY: &str = "russia";

/// The two read-only feeds the dashboard consumes.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Feed {
    Losses,
    Stats,
}

impl Feed {
    fn path_segment(self) -> &'static str {
        match self {
            Feed::Losses => "losses",
            Feed::Stats => "stats",
        }
    }
}

/// Where the feeds live.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Bare host name, or a full `http(s)://` base for mirrors and local testing.
    pub host: String,
    pub country: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
        }
    }
}

impl FeedConfig {
    pub fn new(host: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            country: country.into(),
        }
    }

    fn base_url(&self) -> String {
        let host = self.host.trim().trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("https://{}", host)
        }
    }

    /// `https://<host>/api/<feed>/<country>/`
    pub fn url(&self, feed: Feed) -> String {
        format!(
            "{}/api/{}/{}/",
            self.base_url(),
            feed.path_segment(),
            self.country.trim().trim_matches('/')
        )
    }

    pub fn losses_url(&self) -> String {
        self.url(Feed::Losses)
    }

    pub fn stats_url(&self) -> String {
        self.url(Feed::Stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let config = FeedConfig::default();
        assert_eq!(
            config.losses_url(),
            "https://ukr.warspotting.net/api/losses/russia/"
        );
        assert_eq!(
            config.stats_url(),
            "https://ukr.warspotting.net/api/stats/russia/"
        );
    }

    #[test]
    fn test_explicit_scheme_and_slashes() {
        let config = FeedConfig::new("http://127.0.0.1:8080/", "/ukraine/");
        assert_eq!(
            config.url(Feed::Losses),
            "http://127.0.0.1:8080/api/losses/ukraine/"
        );
    }
}
