//! Prompt templates for summarization

use crate::mode::LengthPolicy;

/// Base prompt for summary generation
pub const BASE_PROMPT: &str = "You are a summarizer. Condense the text below into a shorter version \
that preserves its salient content. State only facts from the text; no interpretation or opinion. \
Respond with the summary alone, no preamble.";

/// Prompt for a single summarization call
pub fn summarize_prompt(text: &str, policy: &LengthPolicy) -> String {
    format!(
        "{}\n\nTarget length: between {} and {} tokens.\n\nText:\n{}\n\nSummary:",
        BASE_PROMPT, policy.min_length, policy.max_length, text
    )
}
