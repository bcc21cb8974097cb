use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use super::AppState;
use crate::models::{AnalysisReply, AnalysisRequest, ChatReply, ChatRequest};

/// Reply used when the request body cannot be read.
pub const APOLOGY: &str = "I'm having trouble processing your request right now. Please try asking about specific credit cards, banks, or features you're interested in, and I'll do my best to help you!";

/// `POST /api/chat`. Always answers with 200.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Json<ChatReply> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Unreadable chat request");
            return Json(ChatReply {
                response: APOLOGY.to_string(),
            });
        }
    };

    let catalog = state.repo.all_cards().await;
    let response = state.assistant.chat_reply(&request.message, &catalog).await;
    Json(ChatReply { response })
}

/// `POST /api/compare-analysis`. Always answers with 200.
pub async fn compare_analysis(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Json<AnalysisReply> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Unreadable compare-analysis request");
            return Json(AnalysisReply {
                analysis: APOLOGY.to_string(),
            });
        }
    };

    tracing::info!(cards = request.cards.len(), "Generating comparison analysis");
    let analysis = state.assistant.compare_analysis(&request.cards).await;
    Json(AnalysisReply { analysis })
}
