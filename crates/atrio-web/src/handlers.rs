// SPDX-FileCopyrightText: 2026 Atrio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the site.
//!
//! Handles GET /, POST /contact, POST /api/assistant,
//! GET /case-studies/{slug}, and GET /health.

use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use atrio_assistant::fallback_reply;
use atrio_storage::queries::{case_studies, inquiries};

use crate::intake::InquiryForm;
use crate::pages;
use crate::server::SiteState;
use crate::toast::Severity;

/// Name of the session cookie tying toast queues to a visitor.
pub const SESSION_COOKIE: &str = "atrio_sid";

/// Case studies shown on the home page.
const HOME_CASE_STUDIES: usize = 3;

/// Returns the jar and session id, minting a new session cookie when the
/// request carries none.
fn ensure_session(jar: CookieJar) -> (CookieJar, String) {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        let sid = cookie.value().to_string();
        return (jar, sid);
    }

    let sid = uuid::Uuid::new_v4().to_string();
    let cookie = Cookie::build((SESSION_COOKIE, sid.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    (jar.add(cookie), sid)
}

/// Drains the session's toasts and renders the home page.
async fn render_home(state: &SiteState, jar: CookieJar, session_id: &str) -> Response {
    let toasts = state.toasts.drain(session_id);
    let studies = match case_studies::list_first(&state.db, HOME_CASE_STUDIES).await {
        Ok(list) => list,
        Err(e) => {
            error!(error = %e, "failed to load case studies for home page");
            Vec::new()
        }
    };
    (
        jar,
        Html(pages::home_page(&state.site_name, &toasts, &studies)),
    )
        .into_response()
}

/// GET /
pub async fn get_home(State(state): State<SiteState>, jar: CookieJar) -> Response {
    let (jar, sid) = ensure_session(jar);
    render_home(&state, jar, &sid).await
}

/// POST /contact
///
/// Valid submissions are persisted, queue a success toast, and redirect
/// back to the home page. Invalid or failed submissions queue an error
/// toast and re-render the page directly, without a redirect.
pub async fn post_contact(
    State(state): State<SiteState>,
    jar: CookieJar,
    Form(form): Form<InquiryForm>,
) -> Response {
    let (jar, sid) = ensure_session(jar);

    let record = match form.validate() {
        Ok(record) => record,
        Err(e) => {
            debug!(error = %e, "inquiry submission rejected");
            state.toasts.push(&sid, Severity::Error, e.to_string());
            return render_home(&state, jar, &sid).await;
        }
    };

    match inquiries::create_inquiry(&state.db, &record).await {
        Ok(id) => {
            info!(inquiry_id = id, "inquiry stored");
            state
                .toasts
                .push(&sid, Severity::Success, "Inquiry submitted successfully");
            (jar, Redirect::to("/")).into_response()
        }
        Err(e) => {
            error!(error = %e, "failed to store inquiry");
            state.toasts.push(
                &sid,
                Severity::Error,
                "Something went wrong saving your inquiry. Please try again.",
            );
            render_home(&state, jar, &sid).await
        }
    }
}

/// Request body for POST /api/assistant.
#[derive(Debug, Deserialize)]
pub struct AssistantRequest {
    /// Raw visitor query text.
    pub query: String,
}

/// Response body for POST /api/assistant.
#[derive(Debug, Serialize)]
pub struct AssistantReply {
    /// HTML-formatted reply for inline rendering.
    pub reply: String,
}

/// POST /api/assistant
///
/// Always answers 200. Failures inside the pipeline are logged and
/// converted into the fallback reply here, at the boundary; the visitor
/// never sees an unhandled fault.
pub async fn post_assistant(
    State(state): State<SiteState>,
    Json(body): Json<AssistantRequest>,
) -> Json<AssistantReply> {
    let reply = match state.engine.reply(&body.query).await {
        Ok(text) => text,
        Err(e) => {
            error!(error = %e, "assistant reply failed, serving fallback");
            fallback_reply(&e)
        }
    };
    Json(AssistantReply { reply })
}

/// GET /case-studies/{slug}
pub async fn get_case_study(
    State(state): State<SiteState>,
    jar: CookieJar,
    Path(slug): Path<String>,
) -> Response {
    let (jar, _sid) = ensure_session(jar);

    match case_studies::get_by_slug(&state.db, &slug).await {
        Ok(Some(study)) => (
            jar,
            Html(pages::case_study_page(&state.site_name, &study)),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            jar,
            Html(pages::not_found_page(&state.site_name)),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, slug, "failed to load case study");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                jar,
                Html(pages::error_page(&state.site_name)),
            )
                .into_response()
        }
    }
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status string.
    pub status: String,
    /// Binary version.
    pub version: String,
    /// Configured site name.
    pub site: String,
    /// Whether a chat-completion client is available.
    pub assistant_configured: bool,
}

/// GET /health
pub async fn get_health(State(state): State<SiteState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        site: state.site_name.clone(),
        assistant_configured: state.engine.is_configured(),
    })
}
