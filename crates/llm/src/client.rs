use async_trait::async_trait;
use reqwest::Client;
use textbrief_common::{Result, TextBriefError};
use tracing::{debug, info};

use crate::backend::SummaryBackend;
use crate::mode::LengthPolicy;
use crate::prompts::summarize_prompt;
use crate::types::{GenerateOptions, GenerateRequest, GenerateResponse};

/// Ollama API client
#[derive(Debug, Clone)]
pub struct OllamaClient {
    base_url: String,
    model: String,
    client: Client,
}

impl OllamaClient {
    /// Create new Ollama client
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let model = model.into();
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(300)) // 5 minutes for LLM calls
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        info!("Ollama client initialized: {} (model: {})", base_url, model);
        Ok(Self {
            base_url,
            model,
            client,
        })
    }

    /// Generate text with Ollama
    ///
    /// One attempt per call. A failed call fails the whole request; there
    /// is no retry on the summarization path.
    pub async fn generate(&self, request: GenerateRequest) -> Result<String> {
        let url = format!("{}/api/generate", self.base_url);

        debug!(
            "Sending generate request to Ollama - Model: {}, Prompt length: {}",
            request.model,
            request.prompt.len()
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| TextBriefError::backend(format!("Failed to send request: {}", e)))?
            .error_for_status()
            .map_err(|e| TextBriefError::backend(format!("Ollama API error: {}", e)))?;

        let result: GenerateResponse = response
            .json()
            .await
            .map_err(|e| TextBriefError::backend(format!("Failed to parse response: {}", e)))?;

        if result.response.is_empty() {
            return Err(TextBriefError::backend("Empty response from Ollama"));
        }

        debug!("Received response from Ollama - Length: {}", result.response.len());
        Ok(result.response)
    }

    /// Test connection to Ollama
    pub async fn test_connection(&self) -> Result<bool> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| TextBriefError::backend(format!("Failed to connect to Ollama: {}", e)))?;
        Ok(response.status().is_success())
    }
}

#[async_trait]
impl SummaryBackend for OllamaClient {
    async fn summarize(&self, text: &str, policy: &LengthPolicy) -> Result<String> {
        let request = GenerateRequest {
            model: self.model.clone(),
            prompt: summarize_prompt(text, policy),
            stream: Some(false),
            options: Some(GenerateOptions {
                // Deterministic output
                temperature: Some(0.0),
                top_p: Some(0.9),
                num_predict: Some(policy.max_length as i32),
            }),
        };

        self.generate(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = OllamaClient::new("http://localhost:11434", "llama3.2").unwrap();
        assert_eq!(client.model, "llama3.2");
        assert_eq!(client.base_url, "http://localhost:11434");
    }
}
