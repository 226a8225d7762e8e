use crate::transcript::{
    AcquireError, LanguagePreference, Transcript, TranscriptAcquirer, TranscriptFetcher,
};

/// Fetches captions straight from YouTube, without a proxy
pub struct DirectFetch<F> {
    fetcher: F,
    languages: LanguagePreference,
}

impl<F> DirectFetch<F> {
    pub fn new(fetcher: F, language: impl Into<String>) -> Self {
        Self {
            fetcher,
            languages: LanguagePreference::with_fallback(language),
        }
    }
}

impl<F> TranscriptAcquirer for DirectFetch<F>
where
    F: TranscriptFetcher + Send + Sync,
{
    fn strategy(&self) -> &'static str {
        "direct"
    }

    #[tracing::instrument(skip(self))]
    async fn acquire(&self, video_id: &str) -> Result<Transcript, AcquireError> {
        let no_transcript = || AcquireError::NoTranscriptAvailable {
            video_id: video_id.to_string(),
        };

        let fragments = self
            .fetcher
            .fetch(video_id, &self.languages, None)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to fetch transcript");
                no_transcript()
            })?;

        Transcript::from_fragments(fragments).ok_or_else(|| {
            tracing::warn!("Fetched transcript is empty");
            no_transcript()
        })
    }
}
