//! TextBrief HTTP Server
//!
//! Actix-web REST API: a landing page and a single summarization endpoint

pub mod routes;
pub mod state;
pub mod types;

use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use textbrief_common::{AppConfig, Result};
use textbrief_llm::{OllamaClient, Summarizer};
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

use crate::state::AppState;

/// Start the HTTP server
///
/// Builds the backend client and summarizer once; all requests share the
/// same read-only state.
pub async fn start_server(config: AppConfig) -> Result<()> {
    config.validate()?;

    let client = OllamaClient::new(&config.ollama_base_url, &config.llm_model)?;

    // Startup probe; the server still comes up if the backend is down
    match client.test_connection().await {
        Ok(true) => info!("Ollama backend reachable at {}", config.ollama_base_url),
        Ok(false) => warn!("Ollama backend at {} returned an error status", config.ollama_base_url),
        Err(e) => warn!("Ollama backend not reachable: {}", e),
    }

    let summarizer = Arc::new(Summarizer::new(Arc::new(client)));
    let state = Arc::new(AppState::new(config.clone(), summarizer));
    let bind_addr = config.server_bind_address();

    info!("Starting server on {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .service(routes::summarize::summarize)
            .service(routes::home::home)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}
