// SPDX-FileCopyrightText: 2026 Atrio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end integration tests for the complete Atrio request pipeline.
//!
//! Each test builds an isolated site state over a temp SQLite file and
//! drives the real router through tower's oneshot. Tests are independent
//! and order-insensitive.

use std::time::Duration;

use atrio_assistant::AssistantEngine;
use atrio_gemini::GeminiClient;
use atrio_storage::queries::{case_studies, inquiries};
use atrio_storage::Database;
use atrio_web::{build_router, SiteState, ToastStore};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use tempfile::TempDir;
use tower::ServiceExt;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A complete, well-formed contact submission.
const VALID_FORM: &str = "name=Jane+Doe&email=jane@example.com&phone=%2B1-202-555-0147\
    &company=Acme+Corp&country=USA&job_title=CTO&job_details=Need+an+AI+roadmap";

async fn test_state() -> (SiteState, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("atrio.db");
    let db = Database::open(db_path.to_str().unwrap()).await.unwrap();

    let state = SiteState {
        engine: AssistantEngine::new(db.clone(), None),
        db,
        toasts: ToastStore::default(),
        site_name: "AI Solutions".to_string(),
    };
    (state, dir)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

fn form_post(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

fn assistant_post(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/assistant")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Extracts the session cookie pair ("atrio_sid=...") from a response.
fn session_cookie(response: &Response) -> String {
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("response should set a session cookie")
        .to_str()
        .unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}

// ---- Test 1: Home page rendering ----

#[tokio::test]
async fn test_home_page_renders_site_name_and_contact_form() {
    let (state, _dir) = test_state().await;
    let app = build_router(state);

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("AI Solutions"));
    assert!(html.contains("action=\"/contact\""));
    assert!(html.contains("name=\"job_details\""));
}

#[tokio::test]
async fn test_home_page_lists_recent_case_studies() {
    let (state, _dir) = test_state().await;
    case_studies::insert_case_study(
        &state.db,
        "Retail Forecasting",
        "retail-forecasting",
        "Cut stockouts by forty percent",
    )
    .await
    .unwrap();
    let app = build_router(state);

    let response = app.oneshot(get("/")).await.unwrap();
    let html = body_text(response).await;
    assert!(html.contains("/case-studies/retail-forecasting"));
    assert!(html.contains("Retail Forecasting"));
}

// ---- Test 2: Contact form happy path ----

#[tokio::test]
async fn test_valid_inquiry_redirects_and_persists() {
    let (state, _dir) = test_state().await;
    let db = state.db.clone();
    let app = build_router(state);

    let response = app
        .oneshot(form_post("/contact", VALID_FORM.to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");

    assert_eq!(inquiries::count_inquiries(&db).await.unwrap(), 1);
    let stored = inquiries::get_inquiry(&db, 1).await.unwrap().unwrap();
    assert_eq!(stored.name, "Jane Doe");
    assert_eq!(stored.email, "jane@example.com");
    assert_eq!(stored.phone, "+1-202-555-0147");
    assert_eq!(stored.company_name, "Acme Corp");
    assert_eq!(stored.job_details, "Need an AI roadmap");
}

#[tokio::test]
async fn test_success_toast_shows_once_after_redirect() {
    let (state, _dir) = test_state().await;
    let app = build_router(state);

    let response = app
        .clone()
        .oneshot(form_post("/contact", VALID_FORM.to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let cookie = session_cookie(&response);

    // The followed redirect displays the queued toast.
    let response = app
        .clone()
        .oneshot(get_with_cookie("/", &cookie))
        .await
        .unwrap();
    let html = body_text(response).await;
    assert!(html.contains("Inquiry submitted successfully"));

    // Displaying drained the queue; a reload is clean.
    let response = app.oneshot(get_with_cookie("/", &cookie)).await.unwrap();
    let html = body_text(response).await;
    assert!(!html.contains("Inquiry submitted successfully"));
}

// ---- Test 3: Contact form validation ----

#[tokio::test]
async fn test_missing_fields_rerender_with_error_toast() {
    let (state, _dir) = test_state().await;
    let db = state.db.clone();
    let app = build_router(state);

    let body = "name=Jane+Doe&email=jane@example.com".to_string();
    let response = app.oneshot(form_post("/contact", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Please fill all the fields"));
    assert_eq!(inquiries::count_inquiries(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_invalid_phone_rerenders_with_error_toast() {
    let (state, _dir) = test_state().await;
    let db = state.db.clone();
    let app = build_router(state);

    let body = VALID_FORM.replace("%2B1-202-555-0147", "not-a-phone");
    let response = app.oneshot(form_post("/contact", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Enter a valid phone number with country code"));
    assert_eq!(inquiries::count_inquiries(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_validation_toast_does_not_survive_reload() {
    let (state, _dir) = test_state().await;
    let app = build_router(state);

    let response = app
        .clone()
        .oneshot(form_post("/contact", "name=only".to_string()))
        .await
        .unwrap();
    let cookie = session_cookie(&response);
    let html = body_text(response).await;
    assert!(html.contains("Please fill all the fields"));

    let response = app.oneshot(get_with_cookie("/", &cookie)).await.unwrap();
    let html = body_text(response).await;
    assert!(!html.contains("Please fill all the fields"));
}

// ---- Test 4: Assistant endpoint ----

#[tokio::test]
async fn test_assistant_returns_model_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains("You are an AI assistant for AI Solutions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "chatcmpl-e2e",
            "object": "chat.completion",
            "model": "gemini-2.0-flash",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "We offer AI strategy consulting."},
                "finish_reason": "stop"
            }]
        })))
        .mount(&server)
        .await;

    let (mut state, _dir) = test_state().await;
    let client = GeminiClient::new(
        "test-key".into(),
        "gemini-2.0-flash".into(),
        server.uri(),
        Duration::from_secs(5),
    )
    .unwrap();
    state.engine = AssistantEngine::new(state.db.clone(), Some(client));
    let app = build_router(state);

    let response = app
        .oneshot(assistant_post(r#"{"query": "What do you offer?"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let reply: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(reply["reply"], "We offer AI strategy consulting.");
}

#[tokio::test]
async fn test_assistant_falls_back_without_credentials() {
    let (state, _dir) = test_state().await;
    let app = build_router(state);

    let response = app
        .oneshot(assistant_post(r#"{"query": "hello"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let reply: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    let text = reply["reply"].as_str().unwrap();
    assert!(text.contains("having trouble connecting to the AI service"));
    assert!(text.contains("Technical error:"));
}

#[tokio::test]
async fn test_assistant_falls_back_on_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .expect(1)
        .mount(&server)
        .await;

    let (mut state, _dir) = test_state().await;
    let client = GeminiClient::new(
        "test-key".into(),
        "gemini-2.0-flash".into(),
        server.uri(),
        Duration::from_secs(5),
    )
    .unwrap();
    state.engine = AssistantEngine::new(state.db.clone(), Some(client));
    let app = build_router(state);

    let response = app
        .oneshot(assistant_post(r#"{"query": "hello"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let reply: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    let text = reply["reply"].as_str().unwrap();
    assert!(text.contains("Technical error:"), "got: {text}");
}

// ---- Test 5: Case-study pages ----

#[tokio::test]
async fn test_case_study_detail_and_unknown_slug() {
    let (state, _dir) = test_state().await;
    case_studies::insert_case_study(
        &state.db,
        "Churn Model",
        "churn-model",
        "Reduced churn for a subscription business",
    )
    .await
    .unwrap();
    let app = build_router(state);

    let response = app
        .clone()
        .oneshot(get("/case-studies/churn-model"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Churn Model"));
    assert!(html.contains("Reduced churn"));

    let response = app.oneshot(get("/case-studies/no-such-study")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---- Test 6: Session isolation ----

#[tokio::test]
async fn test_toasts_do_not_leak_across_sessions() {
    let (state, _dir) = test_state().await;
    let app = build_router(state);

    // Visitor A submits a valid inquiry.
    let response = app
        .clone()
        .oneshot(form_post("/contact", VALID_FORM.to_string()))
        .await
        .unwrap();
    let cookie_a = session_cookie(&response);

    // Visitor B arrives without a cookie and sees a clean page.
    let response = app.clone().oneshot(get("/")).await.unwrap();
    let html = body_text(response).await;
    assert!(!html.contains("Inquiry submitted successfully"));

    // Visitor A still finds the queued toast.
    let response = app.oneshot(get_with_cookie("/", &cookie_a)).await.unwrap();
    let html = body_text(response).await;
    assert!(html.contains("Inquiry submitted successfully"));
}

// ---- Test 7: Health endpoint ----

#[tokio::test]
async fn test_health_reports_status_and_assistant_state() {
    let (state, _dir) = test_state().await;
    let app = build_router(state);

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let health: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(health["status"], "ok");
    assert_eq!(health["site"], "AI Solutions");
    assert_eq!(health["assistant_configured"], false);
}
