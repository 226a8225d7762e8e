use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};
use video_digest::transcript::{
    youtube::{FetchError, TranscriptSession},
    CaptionFragment,
};

#[derive(Debug, Clone, PartialEq)]
pub enum SessionCall {
    Fetch(Vec<String>),
    List,
}

/// Replays scripted fetch outcomes in order and answers listings with a fixed set
#[derive(Clone)]
pub struct MockSession {
    pub fetches: Arc<Mutex<VecDeque<Result<Vec<CaptionFragment>, String>>>>,
    pub listing: Result<Vec<String>, String>,
    pub calls: Arc<Mutex<Vec<SessionCall>>>,
}

impl MockSession {
    pub fn new(fetches: Vec<Result<Vec<CaptionFragment>, String>>, listing: &[&str]) -> Self {
        Self {
            fetches: Arc::new(Mutex::new(fetches.into())),
            listing: Ok(listing.iter().map(|l| l.to_string()).collect()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_listing_error(mut self, msg: &str) -> Self {
        self.listing = Err(msg.to_string());
        self
    }

    pub fn calls(&self) -> Vec<SessionCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl TranscriptSession for MockSession {
    async fn fetch_languages(
        &self,
        _video_id: &str,
        languages: &[String],
    ) -> Result<Vec<CaptionFragment>, FetchError> {
        self.calls
            .lock()
            .unwrap()
            .push(SessionCall::Fetch(languages.to_vec()));

        let outcome = self
            .fetches
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err("no more scripted fetches".to_string()));

        outcome.map_err(|message| FetchError::NotFound {
            languages: languages.to_vec(),
            message,
        })
    }

    async fn available_languages(&self, video_id: &str) -> Result<Vec<String>, FetchError> {
        self.calls.lock().unwrap().push(SessionCall::List);
        self.listing
            .clone()
            .map_err(|_| FetchError::NoneListed(video_id.to_string()))
    }
}
