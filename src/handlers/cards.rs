use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use super::{AppState, ErrorBody};
use crate::analysis::Comparison;
use crate::filters::CardFilter;
use crate::models::CreditCard;

fn with_summaries(cards: Vec<CreditCard>) -> Vec<CreditCard> {
    cards.into_iter().map(CreditCard::with_summary).collect()
}

/// `GET /api/cards` with optional filter and sort parameters.
pub async fn list_cards(
    State(state): State<AppState>,
    Query(filter): Query<CardFilter>,
) -> Json<Vec<CreditCard>> {
    let cards = state.repo.all_cards().await;
    let selected = filter.apply(&cards);
    tracing::debug!(total = cards.len(), selected = selected.len(), "Listing cards");
    Json(with_summaries(selected))
}

pub async fn get_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CreditCard>, (StatusCode, Json<ErrorBody>)> {
    match state.repo.card_by_id(&id).await {
        Some(card) => Ok(Json(card.with_summary())),
        None => {
            tracing::debug!(%id, "Card not found");
            Err((StatusCode::NOT_FOUND, Json(ErrorBody::new("Card not found"))))
        }
    }
}

pub async fn list_banks(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.repo.banks().await)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BankOverview {
    pub bank: String,
    pub card_count: usize,
    pub cards: Vec<CreditCard>,
}

/// `GET /api/banks/overview`: every bank with its cards, in bank order.
pub async fn banks_overview(State(state): State<AppState>) -> Json<Vec<BankOverview>> {
    let cards = state.repo.all_cards().await;
    let overview = state
        .repo
        .banks()
        .await
        .into_iter()
        .map(|bank| {
            let cards = with_summaries(cards.iter().filter(|c| c.bank == bank).cloned().collect());
            BankOverview {
                card_count: cards.len(),
                bank,
                cards,
            }
        })
        .collect();
    Json(overview)
}

pub async fn bank_cards(
    State(state): State<AppState>,
    Path(bank): Path<String>,
) -> Json<Vec<CreditCard>> {
    Json(with_summaries(state.repo.cards_by_bank(&bank).await))
}

#[derive(Debug, Default, Deserialize)]
pub struct CompareQuery {
    /// Comma-separated card ids.
    #[serde(default)]
    pub ids: Option<String>,
}

impl CompareQuery {
    pub fn ids(&self) -> Vec<String> {
        self.ids
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// `GET /api/compare?ids=a,b`: the selected cards plus the comparison table.
pub async fn compare(
    State(state): State<AppState>,
    Query(query): Query<CompareQuery>,
) -> Json<Comparison> {
    let ids = query.ids();
    let cards = state.repo.compare_cards(&ids).await;
    tracing::debug!(requested = ids.len(), found = cards.len(), "Comparing cards");
    Json(Comparison::new(with_summaries(cards)))
}
