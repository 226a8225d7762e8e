use std::{fmt::Display, future::Future};

use serde::Deserialize;

pub trait Summarizer {
    const SUMMARIZER_MODEL: &str;

    type Error: Display + Send;

    fn summarize(
        &self,
        content: &str,
    ) -> impl Future<Output = Result<SummaryResponse, Self::Error>> + Send;
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}
