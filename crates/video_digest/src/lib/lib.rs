pub mod config;
pub mod error;
mod llm;
mod processor;
pub mod server;
pub mod tracing;
pub mod transcript;

pub use llm::deepseek;
pub use llm::summarizer::{Summarizer, SummaryResponse};
pub use processor::{builder::VideoDigestBuilder, Digest, VideoDigest};
