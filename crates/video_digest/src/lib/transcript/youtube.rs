use std::{future::Future, time::Duration};

use yt_transcript_rs::{
    api::YouTubeTranscriptApi,
    proxies::{GenericProxyConfig, ProxyConfig},
};

use crate::transcript::{CaptionFragment, LanguagePreference, ProxyEndpoint, TranscriptFetcher};

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid proxy configuration: {0}")]
    Proxy(String),
    #[error("transcript client error: {0}")]
    Client(String),
    #[error("no transcript in languages {languages:?}: {message}")]
    NotFound {
        languages: Vec<String>,
        message: String,
    },
    #[error("video lists no transcripts: {0}")]
    NoneListed(String),
    #[error("timed out after {0:?}")]
    Timeout(Duration),
}

/// The two transcript calls a fetch is made of, bound to one connection
/// (and so to at most one proxy)
pub trait TranscriptSession {
    fn fetch_languages(
        &self,
        video_id: &str,
        languages: &[String],
    ) -> impl Future<Output = Result<Vec<CaptionFragment>, FetchError>> + Send;

    /// Language codes of every transcript the video offers, in listing order
    fn available_languages(
        &self,
        video_id: &str,
    ) -> impl Future<Output = Result<Vec<String>, FetchError>> + Send;
}

/// Fetches the preferred languages. When that fails and the preference
/// allows it, lists the video's transcripts and fetches the first one, once.
pub async fn fetch_with_fallback<S>(
    session: &S,
    video_id: &str,
    languages: &LanguagePreference,
) -> Result<Vec<CaptionFragment>, FetchError>
where
    S: TranscriptSession + Sync,
{
    let preferred = session
        .fetch_languages(video_id, &languages.preferred)
        .await;

    match preferred {
        Ok(fragments) => Ok(fragments),
        Err(e) if languages.fallback_to_any => {
            tracing::warn!(error = %e, video_id, "Preferred languages unavailable, trying any language");

            let available = session.available_languages(video_id).await?;
            let Some(first) = available.into_iter().next() else {
                return Err(FetchError::NoneListed(video_id.to_string()));
            };
            session.fetch_languages(video_id, &[first]).await
        }
        Err(e) => Err(e),
    }
}

/// [`TranscriptFetcher`] backed by YouTube's public transcript endpoints
#[derive(Debug, Clone)]
pub struct YtTranscriptFetcher {
    timeout: Duration,
}

impl Default for YtTranscriptFetcher {
    fn default() -> Self {
        Self::new(Duration::from_secs(30))
    }
}

impl YtTranscriptFetcher {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn session(&self, proxy: Option<&ProxyEndpoint>) -> Result<YtSession, FetchError> {
        let proxy_config = proxy
            .map(|p| {
                GenericProxyConfig::new(Some(p.address.clone()), Some(p.address.clone()))
                    .map(|c| Box::new(c) as Box<dyn ProxyConfig + Send + Sync>)
                    .map_err(|e| FetchError::Proxy(e.to_string()))
            })
            .transpose()?;

        let api = YouTubeTranscriptApi::new(None, proxy_config, None)
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(YtSession {
            api,
            timeout: self.timeout,
        })
    }
}

impl TranscriptFetcher for YtTranscriptFetcher {
    type Error = FetchError;

    async fn fetch(
        &self,
        video_id: &str,
        languages: &LanguagePreference,
        proxy: Option<&ProxyEndpoint>,
    ) -> Result<Vec<CaptionFragment>, Self::Error> {
        let session = self.session(proxy)?;
        fetch_with_fallback(&session, video_id, languages).await
    }
}

struct YtSession {
    api: YouTubeTranscriptApi,
    timeout: Duration,
}

impl TranscriptSession for YtSession {
    async fn fetch_languages(
        &self,
        video_id: &str,
        languages: &[String],
    ) -> Result<Vec<CaptionFragment>, FetchError> {
        let codes = languages.iter().map(String::as_str).collect::<Vec<_>>();

        let fetched = tokio::time::timeout(
            self.timeout,
            self.api.fetch_transcript(video_id, &codes, false),
        )
        .await
        .map_err(|_| FetchError::Timeout(self.timeout))?
        .map_err(|e| FetchError::NotFound {
            languages: languages.to_vec(),
            message: e.to_string(),
        })?;

        Ok(fetched
            .snippets
            .into_iter()
            .map(|s| CaptionFragment {
                text: s.text,
                start: s.start,
                duration: s.duration,
            })
            .collect())
    }

    async fn available_languages(&self, video_id: &str) -> Result<Vec<String>, FetchError> {
        let list = tokio::time::timeout(self.timeout, self.api.list_transcripts(video_id))
            .await
            .map_err(|_| FetchError::Timeout(self.timeout))?
            .map_err(|e| FetchError::NoneListed(e.to_string()))?;

        Ok(list
            .transcripts()
            .map(|t| t.language_code().to_string())
            .collect())
    }
}
