//! Request handlers

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::debug;

use site_core::{resolve, Page};

use crate::state::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "site-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

fn page_response(state: &AppState, page: Page) -> Response {
    let status = StatusCode::from_u16(page.http_status()).unwrap_or(StatusCode::OK);
    (status, Html(state.page(page).to_string())).into_response()
}

/// Handler: GET on every path in the route table
pub async fn handle_page(State(state): State<AppState>, uri: Uri) -> Response {
    let page = resolve(uri.path());
    debug!(path = uri.path(), ?page, "serving page");
    page_response(&state, page)
}

/// Fallback for paths outside the route table
pub async fn handle_not_found(State(state): State<AppState>, uri: Uri) -> Response {
    debug!(path = uri.path(), "no route, serving not-found page");
    page_response(&state, Page::NotFound)
}
