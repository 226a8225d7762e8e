use std::sync::LazyLock;

use regex::Regex;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;

use crate::transcript::{AcquireError, CaptionFragment, Transcript, TranscriptAcquirer};

static SRT_MARKUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?[A-Za-z][^>]*>").unwrap());

/// How requests to the YouTube Data API are authenticated
#[derive(Clone)]
pub enum CaptionsAuth {
    OAuth(String),
    ApiKey(String),
    Missing,
}

impl CaptionsAuth {
    /// An OAuth token wins over an API key when both are present
    pub fn from_credentials(oauth_token: Option<String>, api_key: Option<String>) -> Self {
        match (oauth_token, api_key) {
            (Some(token), _) if !token.is_empty() => Self::OAuth(token),
            (_, Some(key)) if !key.is_empty() => Self::ApiKey(key),
            _ => Self::Missing,
        }
    }

    fn apply(&self, request: RequestBuilder) -> Result<RequestBuilder, AcquireError> {
        match self {
            Self::OAuth(token) => Ok(request.bearer_auth(token)),
            Self::ApiKey(key) => Ok(request.query(&[("key", key)])),
            Self::Missing => Err(AcquireError::ConfigurationMissing(
                "YOUTUBE_OAUTH_TOKEN or YOUTUBE_API_KEY",
            )),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CaptionListResponse {
    #[serde(default)]
    pub items: Vec<CaptionItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CaptionItem {
    pub id: String,
    pub snippet: CaptionSnippet,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionSnippet {
    pub track_kind: TrackKind,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    Standard,
    Asr,
    Forced,
    #[serde(other)]
    Other,
}

/// Picks the caption track to download.
///
/// Among tracks in `language` (prefix match, so `es` accepts `es-419`) a
/// human authored track beats an auto-generated one. When no track is in the
/// language the first listed track is used.
pub fn select_track<'a>(tracks: &'a [CaptionItem], language: &str) -> Option<&'a CaptionItem> {
    let in_language = |kind: TrackKind| {
        tracks
            .iter()
            .find(|t| t.snippet.track_kind == kind && t.snippet.language.starts_with(language))
    };

    in_language(TrackKind::Standard)
        .or_else(|| in_language(TrackKind::Asr))
        .or_else(|| tracks.first())
}

/// Extracts cue text from an SRT document, one fragment per cue.
///
/// Cues are separated by lines that are blank once trimmed. Inline markup
/// such as `<i>` or `<font color="...">` is dropped.
pub fn parse_srt(srt: &str) -> Vec<CaptionFragment> {
    let mut fragments = Vec::new();
    let mut block = Vec::new();

    for line in srt.lines().map(str::trim) {
        if line.is_empty() {
            fragments.extend(cue_text(&block));
            block.clear();
        } else {
            block.push(line);
        }
    }
    fragments.extend(cue_text(&block));

    fragments
}

fn cue_text(block: &[&str]) -> Option<CaptionFragment> {
    // cue text starts after the timing line
    let body = match block.iter().position(|line| line.contains("-->")) {
        Some(timing) => &block[timing + 1..],
        None => block,
    };

    let text = body
        .iter()
        .map(|line| SRT_MARKUP_RE.replace_all(line, ""))
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    (!text.is_empty()).then(|| CaptionFragment::new(text))
}

/// Lists caption tracks through the YouTube Data API and downloads one as SRT
pub struct CaptionsApiFetch {
    client: Client,
    auth: CaptionsAuth,
    language: String,
    base_url: String,
}

impl CaptionsApiFetch {
    pub fn new(client: Client, auth: CaptionsAuth, language: impl Into<String>) -> Self {
        Self {
            client,
            auth,
            language: language.into(),
            base_url: "https://www.googleapis.com/youtube/v3".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub async fn list_captions(&self, video_id: &str) -> Result<Vec<CaptionItem>, AcquireError> {
        let request = self
            .client
            .get(format!("{}/captions", self.base_url))
            .query(&[("part", "snippet"), ("videoId", video_id)]);

        let resp = self
            .auth
            .apply(request)?
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            tracing::error!(status, "Caption listing returned an error");
            return Err(AcquireError::ListingFailed { status });
        }

        Ok(resp.json::<CaptionListResponse>().await?.items)
    }

    pub async fn download_caption(&self, caption_id: &str) -> Result<String, AcquireError> {
        let request = self
            .client
            .get(format!("{}/captions/{}", self.base_url, caption_id))
            .query(&[("tfmt", "srt")]);

        let resp = self
            .auth
            .apply(request)?
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            tracing::error!(status, caption_id, "Caption download returned an error");
            return Err(AcquireError::DownloadFailed { status });
        }

        Ok(resp.text().await?)
    }
}

impl TranscriptAcquirer for CaptionsApiFetch {
    fn strategy(&self) -> &'static str {
        "captions-api"
    }

    #[tracing::instrument(skip(self))]
    async fn acquire(&self, video_id: &str) -> Result<Transcript, AcquireError> {
        let tracks = self.list_captions(video_id).await?;

        let track = select_track(&tracks, &self.language).ok_or_else(|| {
            tracing::warn!("Video has no caption tracks");
            AcquireError::NoCaptionsFound {
                video_id: video_id.to_string(),
            }
        })?;
        tracing::info!(
            caption_id = %track.id,
            language = %track.snippet.language,
            kind = ?track.snippet.track_kind,
            "Selected caption track"
        );

        let srt = self.download_caption(&track.id).await?;

        Transcript::from_fragments(parse_srt(&srt)).ok_or_else(|| {
            tracing::warn!(caption_id = %track.id, "Downloaded caption track is empty");
            AcquireError::NoTranscriptAvailable {
                video_id: video_id.to_string(),
            }
        })
    }
}
