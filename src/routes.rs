use axum::{
    http::header::{CACHE_CONTROL, CONTENT_TYPE},
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::models::AppState;

// Embed the default stylesheet in the binary
pub const DEFAULT_STYLESHEET: &str = include_str!("../static/styles.css");

pub fn build_router(state: AppState) -> Router {
    // Always serve styles.css - use custom if provided, otherwise use embedded default
    let stylesheet_content = state.custom_css.clone().unwrap_or_else(|| DEFAULT_STYLESHEET.to_string());

    Router::new()
        .route("/", get(handlers::system::root_get))
        .route("/healthz", get(handlers::system::healthz))
        .route("/instances", get(handlers::instances::instances_get))
        .route("/instances/add", post(handlers::instances::instances_add_post))
        .route("/instances/delete", post(handlers::instances::instances_delete_post))
        .route("/memos", get(handlers::memos::memos_get))
        .route("/memos/add", post(handlers::memos::memos_add_post))
        .route("/memos/:memo_id/delete", post(handlers::memos::memo_delete_post))
        .route("/confirm/:action/:id", get(handlers::system::confirmation_get))
        .route("/static/styles.css", get(move || {
            let css = stylesheet_content.clone();
            async move { ([(CONTENT_TYPE, "text/css")], css) }
        }))
        // Lists are re-read from the backend on every request; never serve them from a cache.
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(SetResponseHeaderLayer::if_not_present(
                    CACHE_CONTROL,
                    HeaderValue::from_static("no-store"),
                )),
        )
        .with_state(state)
}
