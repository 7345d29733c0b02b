//! Router construction

use std::path::Path;

use axum::{routing::get, Router};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use site_core::routes;

use crate::handlers::{handle_health, handle_not_found, handle_page};
use crate::state::AppState;

/// Build the application router
///
/// Page routes come straight from the site route table; anything else falls
/// through to the not-found page.
pub fn build_router(state: AppState, assets_dir: &Path, pkg_dir: &Path) -> Router {
    let pages = routes::paths().fold(Router::<AppState>::new(), |router, path| {
        router.route(path, get(handle_page))
    });

    pages
        .route("/health", get(handle_health))
        .nest_service("/assets", ServeDir::new(assets_dir))
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .fallback(handle_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
