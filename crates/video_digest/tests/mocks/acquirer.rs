use std::sync::{Arc, Mutex};
use video_digest::transcript::{AcquireError, Transcript, TranscriptAcquirer};
use video_digest::transcript::CaptionFragment;

#[derive(Debug, Clone, Copy)]
pub enum Failure {
    NoTranscript,
    NoCaptions,
    Empty,
}

#[derive(Clone)]
pub struct MockAcquirer {
    pub transcript: String,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<Failure>,
}

impl MockAcquirer {
    pub fn new(transcript: &str) -> Self {
        Self {
            transcript: transcript.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(failure: Failure) -> Self {
        Self {
            transcript: String::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(failure),
        }
    }
}

impl TranscriptAcquirer for MockAcquirer {
    fn strategy(&self) -> &'static str {
        "mock"
    }

    async fn acquire(&self, video_id: &str) -> Result<Transcript, AcquireError> {
        self.calls.lock().unwrap().push(video_id.to_string());
        let video_id = video_id.to_string();

        match self.fail_with {
            Some(Failure::NoTranscript) => Err(AcquireError::NoTranscriptAvailable { video_id }),
            Some(Failure::NoCaptions) => Err(AcquireError::NoCaptionsFound { video_id }),
            Some(Failure::Empty) => Transcript::from_fragments(vec![CaptionFragment::new("")])
                .ok_or(AcquireError::NoTranscriptAvailable { video_id }),
            None => Transcript::from_fragments(vec![CaptionFragment::new(self.transcript.clone())])
                .ok_or(AcquireError::NoTranscriptAvailable { video_id }),
        }
    }
}
