use super::*;
use crate::catalog::seed_cards;
use crate::generator::{FallbackGenerator, MockTextGenerator};
use crate::repository::{LatencyProfile, StaticCardRepository};
use crate::repository_traits::MockCardRepository;
use crate::responder::RuleBasedResponder;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::time::Duration;
use tower::ServiceExt;

fn app() -> Router {
    router(AppState::new(
        Arc::new(StaticCardRepository::seeded(LatencyProfile::none())),
        Arc::new(FallbackGenerator::rule_based()),
    ))
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(req).await.expect("router is infallible");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, body)
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    send(app(), req).await
}

fn post_raw(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build")
}

fn ids(body: &Value) -> Vec<String> {
    body.as_array()
        .map(|cards| {
            cards
                .iter()
                .filter_map(|c| c["id"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[tokio::test]
async fn health_says_ok() {
    let (status, body) = get_json("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("ok".to_string()));
}

#[tokio::test]
async fn lists_all_cards_in_camel_case() {
    let (status, body) = get_json("/api/cards").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body).len(), 8);
    assert_eq!(body[0]["annualFee"], 2500);
    assert_eq!(body[0]["features"]["loungeAccess"], true);
    assert_eq!(body[0]["benefits"][0]["type"], "Reward Points");
}

#[tokio::test]
async fn card_listing_applies_filters_and_sort() {
    let (_, body) = get_json("/api/cards?loungeAccess=true&sort=annualFee").await;
    assert_eq!(ids(&body), vec!["hdfc-regalia", "sbi-elite", "axis-magnus"]);

    let (_, body) = get_json("/api/cards?quick=noAnnualFee").await;
    assert_eq!(ids(&body), vec!["icici-amazon-pay"]);

    let (_, body) = get_json("/api/cards?search=flip&bank=all").await;
    assert_eq!(ids(&body), vec!["axis-flipkart"]);
}

#[tokio::test]
async fn single_card_or_404() {
    let (status, body) = get_json("/api/cards/icici-coral").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Coral Credit Card");

    let (status, body) = get_json("/api/cards/not-a-card").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Card not found"}));
}

#[tokio::test]
async fn banks_and_bank_cards() {
    let (_, body) = get_json("/api/banks").await;
    assert_eq!(body, json!(["HDFC Bank", "Axis Bank", "SBI Card", "ICICI Bank"]));

    let (_, body) = get_json("/api/banks/SBI%20Card/cards").await;
    assert_eq!(ids(&body), vec!["sbi-simply-click", "sbi-elite"]);

    let (_, body) = get_json("/api/banks/Nobody/cards").await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn bank_overview_groups_cards() {
    let (_, body) = get_json("/api/banks/overview").await;
    let rows = body.as_array().expect("overview is a list");
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["bank"], "HDFC Bank");
    assert_eq!(rows[0]["cardCount"], 2);
    assert_eq!(rows[3]["cards"][1]["id"], "icici-coral");
}

#[tokio::test]
async fn compare_returns_cards_and_table() {
    let (status, body) = get_json("/api/compare?ids=icici-coral,%20hdfc-regalia,missing").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["cards"]), vec!["hdfc-regalia", "icici-coral"]);
    assert_eq!(body["table"][0]["label"], "Annual Fee");
    assert_eq!(body["table"][0]["values"], json!(["₹2,500", "₹500"]));

    let (_, body) = get_json("/api/compare").await;
    assert_eq!(body["cards"], json!([]));
}

#[tokio::test]
async fn chat_answers_with_rule_based_text() {
    let (status, body) = send(app(), post_raw("/api/chat", r#"{"message":"hdfc"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    let text = body["response"].as_str().expect("response text");
    assert!(text.starts_with("🏦 **HDFC Bank Credit Cards**"));
}

#[tokio::test]
async fn malformed_chat_body_gets_apology_with_200() {
    let (status, body) = send(app(), post_raw("/api/chat", "{not json")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], assistant::APOLOGY);

    let (status, body) = send(app(), post_raw("/api/chat", r#"{"msg":"hi"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], assistant::APOLOGY);
}

#[tokio::test]
async fn compare_analysis_uses_fallback_report() {
    let cards = seed_cards();
    let payload = json!({ "cards": &cards[..2] }).to_string();
    let (status, body) = send(app(), post_raw("/api/compare-analysis", &payload)).await;
    assert_eq!(status, StatusCode::OK);
    let analysis = body["analysis"].as_str().expect("analysis text");
    assert!(analysis.contains("• For maximum rewards: Axis Bank Magnus Credit Card"));

    let (status, body) = send(app(), post_raw("/api/compare-analysis", "[]")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["analysis"], assistant::APOLOGY);
}

#[tokio::test]
async fn chat_prefers_language_model_when_available() {
    let mut model = MockTextGenerator::new();
    model
        .expect_chat_reply()
        .withf(|message, catalog| message.to_string() == "hello" && catalog.len() == 8)
        .returning(|_, _| Ok("Hello from the model".to_string()));
    let assistant = FallbackGenerator::new(
        Some(Arc::new(model)),
        RuleBasedResponder::default(),
        Duration::from_secs(5),
    );
    let app = router(AppState::new(
        Arc::new(StaticCardRepository::seeded(LatencyProfile::none())),
        Arc::new(assistant),
    ));
    let (_, body) = send(app, post_raw("/api/chat", r#"{"message":"hello"}"#)).await;
    assert_eq!(body["response"], "Hello from the model");
}

#[tokio::test]
async fn handlers_go_through_the_repository_trait() {
    let mut repo = MockCardRepository::new();
    repo.expect_card_by_id()
        .withf(|id| id.to_string() == "hdfc-regalia")
        .times(1)
        .returning(|_| None);
    let app = router(AppState::new(
        Arc::new(repo),
        Arc::new(FallbackGenerator::rule_based()),
    ));
    let req = Request::builder()
        .uri("/api/cards/hdfc-regalia")
        .body(Body::empty())
        .expect("request should build");
    let (status, _) = send(app, req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn card_without_summary_gets_composed_text() {
    let mut card = seed_cards().remove(0);
    card.summary = None;
    let expected = card.summary_text();

    let mut repo = MockCardRepository::new();
    repo.expect_card_by_id()
        .returning(move |_| Some(card.clone()));
    let app = router(AppState::new(
        Arc::new(repo),
        Arc::new(FallbackGenerator::rule_based()),
    ));
    let req = Request::builder()
        .uri("/api/cards/hdfc-regalia")
        .body(Body::empty())
        .expect("request should build");
    let (status, body) = send(app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"], Value::String(expected));
    assert!(
        body["summary"]
            .as_str()
            .is_some_and(|s| s.starts_with("The Regalia Credit Card from HDFC Bank is a "))
    );
}

#[tokio::test]
async fn every_listed_card_carries_a_summary() {
    let (_, body) = get_json("/api/cards").await;
    let cards = body.as_array().expect("card list");
    assert!(cards.iter().all(|c| c["summary"].as_str().is_some_and(|s| !s.is_empty())));

    let (_, body) = get_json("/api/compare?ids=icici-coral").await;
    assert!(body["cards"][0]["summary"].is_string());
}
