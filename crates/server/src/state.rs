use std::sync::Arc;
use textbrief_common::AppConfig;
use textbrief_llm::Summarizer;

/// Shared application state
///
/// Constructed once at startup; read-only for the process lifetime.
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Summarizer backed by the loaded model client
    pub summarizer: Arc<Summarizer>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: AppConfig, summarizer: Arc<Summarizer>) -> Self {
        Self { config, summarizer }
    }
}
