use rand::seq::SliceRandom;

use crate::transcript::{
    AcquireError, LanguagePreference, ProxyEndpoint, Transcript, TranscriptAcquirer,
    TranscriptFetcher,
};

/// Fixed set of proxies. Every draw is independent, repeats are allowed.
#[derive(Debug, Clone, Default)]
pub struct ProxyPool {
    endpoints: Vec<ProxyEndpoint>,
}

impl ProxyPool {
    pub fn new(endpoints: Vec<ProxyEndpoint>) -> Self {
        Self { endpoints }
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// Picks a proxy uniformly at random
    pub fn choose(&self) -> Option<&ProxyEndpoint> {
        self.endpoints.choose(&mut rand::thread_rng())
    }
}

/// Fetches captions through a randomly chosen proxy, retrying with a fresh
/// draw up to [`ProxiedFetch::MAX_ATTEMPTS`] times
pub struct ProxiedFetch<F> {
    fetcher: F,
    pool: ProxyPool,
    languages: LanguagePreference,
}

impl<F> ProxiedFetch<F> {
    pub const MAX_ATTEMPTS: usize = 3;

    pub fn new(fetcher: F, pool: ProxyPool, language: impl Into<String>) -> Self {
        Self {
            fetcher,
            pool,
            languages: LanguagePreference::with_fallback(language),
        }
    }
}

impl<F> TranscriptAcquirer for ProxiedFetch<F>
where
    F: TranscriptFetcher + Send + Sync,
{
    fn strategy(&self) -> &'static str {
        "proxied"
    }

    #[tracing::instrument(skip(self), fields(pool_size = self.pool.len()))]
    async fn acquire(&self, video_id: &str) -> Result<Transcript, AcquireError> {
        if self.pool.is_empty() {
            tracing::error!("Proxy pool is empty; set PROXY_POOL");
            return Err(AcquireError::ConfigurationMissing("proxy pool"));
        }

        for attempt in 1..=Self::MAX_ATTEMPTS {
            let Some(proxy) = self.pool.choose() else {
                break;
            };
            let proxy_host = proxy.redacted();
            tracing::info!(attempt, proxy = %proxy_host, "Fetching transcript through proxy");

            match self
                .fetcher
                .fetch(video_id, &self.languages, Some(proxy))
                .await
            {
                Ok(fragments) => match Transcript::from_fragments(fragments) {
                    Some(transcript) => {
                        tracing::info!(attempt, "Transcript fetched");
                        return Ok(transcript);
                    }
                    None => {
                        tracing::warn!(attempt, proxy = %proxy_host, "Fetched transcript is empty")
                    }
                },
                Err(e) => {
                    tracing::warn!(attempt, proxy = %proxy_host, error = %e, "Failed to fetch transcript through proxy")
                }
            }
        }

        tracing::error!(
            attempts = Self::MAX_ATTEMPTS,
            "Could not fetch transcript after exhausting all attempts"
        );
        Err(AcquireError::NoTranscriptAvailable {
            video_id: video_id.to_string(),
        })
    }
}
