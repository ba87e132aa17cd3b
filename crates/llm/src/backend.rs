use crate::mode::LengthPolicy;
use async_trait::async_trait;
use textbrief_common::Result;

/// Opaque summarization backend
///
/// One call takes input text and a length policy and returns shorter text.
/// The production implementation is [`crate::OllamaClient`]; tests use
/// in-process stubs. Implementations must be safe for concurrent
/// invocation, as the server shares one instance across requests.
#[async_trait]
pub trait SummaryBackend: Send + Sync {
    /// Summarize `text` to roughly `policy` length
    async fn summarize(&self, text: &str, policy: &LengthPolicy) -> Result<String>;
}
