//! opsdesk: terminal and web front-ends for a database-instance registry and a memo board.
//!
//! Both front-ends share one core: the [`api`] layer talks to the REST backend, [`forms`]
//! validates input before anything is sent, [`services`] sequence validate → request →
//! reload, [`render`] turns records into table views and [`pagination`] computes the memo
//! page buttons.

pub mod config;
pub mod error;
pub mod models;
pub mod api;
pub mod forms;
pub mod pagination;
pub mod render;
pub mod services;
pub mod utils;
pub mod templates;
pub mod handlers;
pub mod routes;

pub use error::{ApiError, FormError, ServiceError};
pub use models::AppState;
pub use routes::build_router;

/// HTTP client used for every backend call
pub fn build_http_client() -> Result<reqwest::Client, ApiError> {
    let mut builder = reqwest::Client::builder()
        .user_agent(format!("opsdesk/{}", env!("CARGO_PKG_VERSION")));
    if let Some(timeout) = config::get_http_timeout() {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| ApiError::InvalidRequest(format!("failed to create HTTP client: {}", e)))
}

/// Build application state from the environment (after loading `.env` or `env_file`).
pub fn build_state_from_env(env_file: Option<&str>) -> Result<AppState, ApiError> {
    config::load_env_file(env_file);
    let client = build_http_client()?;
    Ok(AppState {
        api_base_url: config::get_api_base_url(),
        public_base_url: config::get_public_base_url(),
        client,
        memo_page_size: config::get_memo_page_size(),
        custom_css: None,
    })
}
