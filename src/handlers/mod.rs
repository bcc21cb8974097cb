/// HTTP handlers for the card catalog and the assistant
pub mod assistant;
pub mod cards;

#[cfg(test)]
mod test_handlers;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use serde::Serialize;
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

use crate::generator::FallbackGenerator;
use crate::repository_traits::CardRepository;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn CardRepository>,
    pub assistant: Arc<FallbackGenerator>,
}

impl AppState {
    pub fn new(repo: Arc<dyn CardRepository>, assistant: Arc<FallbackGenerator>) -> Self {
        Self { repo, assistant }
    }
}

/// JSON error body: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Runs each request inside a span tagged with a fresh request id.
async fn request_span(req: Request, next: Next) -> Response {
    let span = tracing::info_span!(
        "request",
        request_id = %Uuid::new_v4(),
        method = %req.method(),
        path = %req.uri().path(),
    );
    async move {
        let response = next.run(req).await;
        tracing::debug!(status = response.status().as_u16(), "Request finished");
        response
    }
    .instrument(span)
    .await
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/cards", get(cards::list_cards))
        .route("/api/cards/:id", get(cards::get_card))
        .route("/api/banks", get(cards::list_banks))
        .route("/api/banks/overview", get(cards::banks_overview))
        .route("/api/banks/:bank/cards", get(cards::bank_cards))
        .route("/api/compare", get(cards::compare))
        .route("/api/chat", post(assistant::chat))
        .route("/api/compare-analysis", post(assistant::compare_analysis))
        .layer(middleware::from_fn(request_span))
        .with_state(state)
}
