pub mod deepseek;
pub mod summarizer;
