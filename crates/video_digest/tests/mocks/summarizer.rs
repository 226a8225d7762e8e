use std::sync::{Arc, Mutex};
use video_digest::{Summarizer, SummaryResponse};

/// Ways the chat completion upstream can let a summary down
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SummaryFailure {
    #[error("upstream rejected the request: {0}")]
    Rejected(String),
    #[error("completion response has no content")]
    Empty,
}

#[derive(Clone)]
pub struct MockSummarizer {
    pub reply: Result<String, SummaryFailure>,
    /// Transcripts handed to the summarizer, in call order
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockSummarizer {
    pub fn new(summary: &str) -> Self {
        Self::replying(Ok(summary.to_string()))
    }

    pub fn failing(failure: SummaryFailure) -> Self {
        Self::replying(Err(failure))
    }

    fn replying(reply: Result<String, SummaryFailure>) -> Self {
        Self {
            reply,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl Summarizer for MockSummarizer {
    const SUMMARIZER_MODEL: &'static str = "mock-chat";
    type Error = SummaryFailure;

    async fn summarize(&self, content: &str) -> Result<SummaryResponse, Self::Error> {
        self.calls.lock().unwrap().push(content.to_string());
        self.reply
            .clone()
            .map(|summary| SummaryResponse { summary })
    }
}
