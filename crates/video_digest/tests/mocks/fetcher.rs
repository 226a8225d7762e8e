use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};
use video_digest::transcript::{
    CaptionFragment, LanguagePreference, ProxyEndpoint, TranscriptFetcher,
};

#[derive(Debug, Clone)]
pub struct FetchCall {
    pub video_id: String,
    pub languages: LanguagePreference,
    pub proxy: Option<String>,
}

/// Replays scripted outcomes in order; the last one repeats once the script runs out
#[derive(Clone)]
pub struct MockFetcher {
    pub outcomes: Arc<Mutex<VecDeque<Result<Vec<CaptionFragment>, String>>>>,
    pub calls: Arc<Mutex<Vec<FetchCall>>>,
}

impl MockFetcher {
    pub fn scripted(outcomes: Vec<Result<Vec<CaptionFragment>, String>>) -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(outcomes.into())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn returning(texts: &[&str]) -> Self {
        Self::scripted(vec![Ok(fragments(texts))])
    }

    pub fn failing(msg: &str) -> Self {
        Self::scripted(vec![Err(msg.to_string())])
    }
}

pub fn fragments(texts: &[&str]) -> Vec<CaptionFragment> {
    texts.iter().map(|t| CaptionFragment::new(*t)).collect()
}

impl TranscriptFetcher for MockFetcher {
    type Error = String;

    async fn fetch(
        &self,
        video_id: &str,
        languages: &LanguagePreference,
        proxy: Option<&ProxyEndpoint>,
    ) -> Result<Vec<CaptionFragment>, Self::Error> {
        self.calls.lock().unwrap().push(FetchCall {
            video_id: video_id.to_string(),
            languages: languages.clone(),
            proxy: proxy.map(|p| p.address.clone()),
        });

        let mut outcomes = self.outcomes.lock().unwrap();
        if outcomes.len() > 1 {
            outcomes.pop_front().unwrap()
        } else {
            outcomes.front().cloned().unwrap()
        }
    }
}
