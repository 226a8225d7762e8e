pub mod builder;

use crate::{error::DigestError, transcript::TranscriptAcquirer, Summarizer};

/// Result of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest {
    pub video_id: String,
    pub summary: String,
}

// Transcript acquisition followed by summarization, one video per call
#[derive(Debug)]
pub struct VideoDigest<T, S>
where
    T: TranscriptAcquirer + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    acquirer: T,
    summarizer: S,
}

impl<T, S> VideoDigest<T, S>
where
    T: TranscriptAcquirer + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    pub fn new(acquirer: T, summarizer: S) -> Self {
        VideoDigest {
            acquirer,
            summarizer,
        }
    }

    /// Fetches the transcript of `video_id` and summarizes it.
    /// The summarizer is only called with a non-empty transcript.
    #[tracing::instrument(skip(self), fields(strategy = self.acquirer.strategy()))]
    pub async fn process(&self, video_id: &str) -> Result<Digest, DigestError> {
        let video_id = video_id.trim();
        if video_id.is_empty() {
            return Err(DigestError::MissingInput);
        }

        tracing::info!("Processing video");

        let transcript = self
            .acquirer
            .acquire(video_id)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to acquire transcript"))?;

        let summary_resp = self
            .summarizer
            .summarize(transcript.as_str())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, model = S::SUMMARIZER_MODEL, "Failed to summarize transcript");
                DigestError::SummarizationFailed(e.to_string())
            })?;

        Ok(Digest {
            video_id: video_id.to_string(),
            summary: summary_resp.summary,
        })
    }
}
