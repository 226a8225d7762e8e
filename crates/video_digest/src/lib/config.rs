use std::{net::SocketAddr, time::Duration};

/// How transcripts are obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TranscriptStrategy {
    /// Fetch captions directly
    Direct,
    /// Fetch captions through a random proxy from the pool, with retries
    Proxied,
    /// List and download caption tracks via the YouTube Data API
    CaptionsApi,
}

/// Process wide settings, read once at startup
#[derive(Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub strategy: TranscriptStrategy,
    pub language: String,
    pub proxies: Vec<String>,
    pub deepseek_api_key: Option<String>,
    pub deepseek_base_url: String,
    pub youtube_api_key: Option<String>,
    pub youtube_oauth_token: Option<String>,
    pub youtube_api_base_url: String,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            strategy: TranscriptStrategy::Proxied,
            language: "es".into(),
            proxies: Vec::new(),
            deepseek_api_key: None,
            deepseek_base_url: "https://api.deepseek.com".into(),
            youtube_api_key: None,
            youtube_oauth_token: None,
            youtube_api_base_url: "https://www.googleapis.com/youtube/v3".into(),
            request_timeout: Duration::from_secs(30),
        }
    }
}
