use std::sync::Arc;
use textbrief_common::Result;
use tracing::{debug, info};

use crate::backend::SummaryBackend;
use crate::chunking::{chunk_words, split_words, CHUNK_WORDS, DIRECT_WORD_LIMIT};
use crate::mode::Mode;
use crate::postprocess::{format_bullets, normalize_terminator};

/// Summarizer for arbitrary-length text using a map-reduce strategy
///
/// Inputs over the direct word limit are chunked, each chunk summarized
/// independently, and the joined chunk summaries reduced with one final
/// backend call. Shorter inputs take a single call.
pub struct Summarizer {
    backend: Arc<dyn SummaryBackend>,
}

impl Summarizer {
    /// Create new summarizer
    pub fn new(backend: Arc<dyn SummaryBackend>) -> Self {
        Self { backend }
    }

    /// Produce a mode-formatted summary of `text`
    pub async fn summarize(&self, text: &str, mode: Mode) -> Result<String> {
        let policy = mode.length_policy();
        let words = split_words(text);
        info!(
            "Starting summarization - {} words, mode {:?}",
            words.len(),
            mode
        );

        let raw = if words.len() > DIRECT_WORD_LIMIT {
            // Map phase: summarize each chunk with the same policy
            let chunks = chunk_words(&words, CHUNK_WORDS);
            info!("Split input into {} chunks", chunks.len());

            let mut chunk_summaries = Vec::with_capacity(chunks.len());
            for (i, chunk) in chunks.iter().enumerate() {
                debug!("Summarizing chunk {}/{}", i + 1, chunks.len());
                chunk_summaries.push(self.backend.summarize(chunk, &policy).await?);
            }

            // Reduce phase: one more pass over the joined chunk summaries
            let combined = chunk_summaries.join(" ");
            debug!("Combined chunk summaries - Length: {} chars", combined.len());
            self.backend.summarize(&combined, &policy).await?
        } else {
            debug!("Input is short, using direct summarization");
            self.backend.summarize(text, &policy).await?
        };

        let summary = normalize_terminator(&raw);
        Ok(match mode {
            Mode::Bullet => format_bullets(&summary),
            _ => summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::LengthPolicy;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use textbrief_common::TextBriefError;

    /// Backend stub that echoes the first `min_length` words of its input,
    /// without terminal punctuation, and records every call
    struct EchoBackend {
        calls: AtomicUsize,
        inputs: Mutex<Vec<String>>,
    }

    impl EchoBackend {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                inputs: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl SummaryBackend for EchoBackend {
        async fn summarize(&self, text: &str, policy: &LengthPolicy) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inputs.lock().unwrap().push(text.to_string());
            let words: Vec<&str> = text.split_whitespace().take(policy.min_length).collect();
            Ok(words.join(" "))
        }
    }

    /// Backend stub that always fails
    struct FailingBackend;

    #[async_trait]
    impl SummaryBackend for FailingBackend {
        async fn summarize(&self, _text: &str, _policy: &LengthPolicy) -> Result<String> {
            Err(TextBriefError::backend("model exploded"))
        }
    }

    fn words(n: usize) -> String {
        (0..n)
            .map(|i| format!("w{}", i))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[tokio::test]
    async fn test_short_input_single_backend_call() {
        let backend = Arc::new(EchoBackend::new());
        let summarizer = Summarizer::new(backend.clone());

        summarizer.summarize(&words(500), Mode::Brief).await.unwrap();
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_long_input_chunked_plus_recombination() {
        let backend = Arc::new(EchoBackend::new());
        let summarizer = Summarizer::new(backend.clone());

        // 1000 words: 400 + 400 + 200 chunk calls, then one reduce call
        summarizer
            .summarize(&words(1000), Mode::Detailed)
            .await
            .unwrap();
        assert_eq!(backend.calls.load(Ordering::SeqCst), 4);

        let inputs = backend.inputs.lock().unwrap();
        assert_eq!(inputs[0].split_whitespace().count(), 400);
        assert_eq!(inputs[1].split_whitespace().count(), 400);
        assert_eq!(inputs[2].split_whitespace().count(), 200);

        // Chunking loses and duplicates nothing
        let rejoined = format!("{} {} {}", inputs[0], inputs[1], inputs[2]);
        assert_eq!(rejoined, words(1000));
    }

    #[tokio::test]
    async fn test_boundary_at_direct_limit() {
        let backend = Arc::new(EchoBackend::new());
        let summarizer = Summarizer::new(backend.clone());

        summarizer.summarize(&words(501), Mode::Brief).await.unwrap();
        // 501 words: two chunks (400 + 101) plus the reduce call
        assert_eq!(backend.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_unterminated_output_gets_ellipsis() {
        let backend = Arc::new(EchoBackend::new());
        let summarizer = Summarizer::new(backend);

        let summary = summarizer
            .summarize("A short sentence", Mode::Brief)
            .await
            .unwrap();
        assert!(summary.ends_with("..."));
    }

    #[tokio::test]
    async fn test_bullet_mode_formats_points() {
        struct SentenceBackend;

        #[async_trait]
        impl SummaryBackend for SentenceBackend {
            async fn summarize(&self, _text: &str, _policy: &LengthPolicy) -> Result<String> {
                Ok("First finding. Second finding. Third finding.".to_string())
            }
        }

        let summarizer = Summarizer::new(Arc::new(SentenceBackend));
        let summary = summarizer.summarize("some input", Mode::Bullet).await.unwrap();
        assert_eq!(
            summary,
            "\n• First finding.\n• Second finding.\n• Third finding."
        );
    }

    #[tokio::test]
    async fn test_non_bullet_modes_skip_bullets() {
        let backend = Arc::new(EchoBackend::new());
        let summarizer = Summarizer::new(backend);

        let summary = summarizer
            .summarize("plain words here", Mode::Detailed)
            .await
            .unwrap();
        assert!(!summary.contains('•'));
    }

    #[tokio::test]
    async fn test_backend_failure_propagates() {
        let summarizer = Summarizer::new(Arc::new(FailingBackend));
        let err = summarizer
            .summarize(&words(10), Mode::Brief)
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 500);
    }

    #[tokio::test]
    async fn test_chunk_failure_aborts_whole_request() {
        /// Fails on the second call, after one chunk already succeeded
        struct FlakyBackend {
            calls: AtomicUsize,
        }

        #[async_trait]
        impl SummaryBackend for FlakyBackend {
            async fn summarize(&self, _text: &str, _policy: &LengthPolicy) -> Result<String> {
                if self.calls.fetch_add(1, Ordering::SeqCst) == 1 {
                    Err(TextBriefError::backend("timeout"))
                } else {
                    Ok("partial summary".to_string())
                }
            }
        }

        let backend = Arc::new(FlakyBackend {
            calls: AtomicUsize::new(0),
        });
        let summarizer = Summarizer::new(backend.clone());

        assert!(summarizer.summarize(&words(900), Mode::Brief).await.is_err());
        // No further calls after the failing chunk
        assert_eq!(backend.calls.load(Ordering::SeqCst), 2);
    }
}
