use serde::{Deserialize, Serialize};

fn default_mode() -> String {
    "brief".to_string()
}

/// Summarization request body
#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeRequest {
    /// Text to summarize; absent is treated as blank and rejected
    #[serde(default)]
    pub text: String,

    /// Presentation mode; absent means "brief"
    #[serde(default = "default_mode")]
    pub mode: String,
}

/// Successful summarization response
#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    /// Final formatted summary
    pub summary: String,
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable failure message
    pub error: String,
}
