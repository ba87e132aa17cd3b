use actix_web::{http::StatusCode, post, web, HttpResponse};
use std::sync::Arc;
use tracing::error;

use crate::state::AppState;
use crate::types::{ErrorResponse, SummarizeRequest, SummarizeResponse};
use textbrief_llm::Mode;

#[post("/summarize")]
pub async fn summarize(
    req: web::Json<SummarizeRequest>,
    state: web::Data<Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    if req.text.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse {
            error: "No text provided.".to_string(),
        }));
    }

    let mode = Mode::from_label(&req.mode);

    match state.summarizer.summarize(&req.text, mode).await {
        Ok(summary) => Ok(HttpResponse::Ok().json(SummarizeResponse { summary })),
        Err(e) => {
            error!("Summarization failed: {}", e);
            let status = StatusCode::from_u16(e.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            Ok(HttpResponse::build(status).json(ErrorResponse {
                error: e.to_string(),
            }))
        }
    }
}
