//! TextBrief LLM Integration
//!
//! Ollama API client and mode-aware text summarization

mod backend;
mod chunking;
mod client;
mod mode;
mod postprocess;
mod prompts;
mod summarize;
mod types;

pub use backend::SummaryBackend;
pub use chunking::{chunk_words, split_words, CHUNK_WORDS, DIRECT_WORD_LIMIT};
pub use client::OllamaClient;
pub use mode::{LengthPolicy, Mode};
pub use postprocess::{format_bullets, normalize_terminator, split_sentences};
pub use prompts::summarize_prompt;
pub use summarize::Summarizer;
pub use types::{GenerateOptions, GenerateRequest, GenerateResponse};
