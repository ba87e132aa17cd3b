//! Word-count based input chunking
//!
//! The backend model has a bounded input capacity. Splitting at a fixed
//! word count approximates staying under that capacity without running a
//! tokenizer first; it is a documented approximation, not a token-exact
//! guarantee.

/// Inputs at or below this word count are summarized in a single call
pub const DIRECT_WORD_LIMIT: usize = 500;

/// Maximum words per chunk on the long-input path
pub const CHUNK_WORDS: usize = 400;

/// Split text into whitespace-delimited words
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Partition words into consecutive chunks of up to `chunk_size` words,
/// preserving order. The final chunk may be shorter. Each chunk is
/// re-joined with single spaces.
pub fn chunk_words(words: &[&str], chunk_size: usize) -> Vec<String> {
    words.chunks(chunk_size).map(|c| c.join(" ")).collect()
}
