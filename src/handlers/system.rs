use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::models::{AppState, ConfirmationAction};
use crate::templates::ConfirmationTemplate;
use super::helpers::{
    absolute_url_from_state, build_template_globals, memos_path, plain_html, render_template,
    TemplateGlobals,
};

#[derive(Deserialize)]
pub struct ConfirmQuery {
    page: Option<usize>,
    page_size: Option<usize>,
}

pub async fn root_get(State(state): State<AppState>) -> impl IntoResponse {
    Redirect::to(&absolute_url_from_state(&state, "/instances"))
}

pub async fn healthz() -> &'static str {
    "ok"
}

/// Explicit confirmation step for destructive actions. Nothing is sent to the backend
/// until the form on this page is submitted; "Cancel" just goes back to the list.
pub async fn confirmation_get(
    State(state): State<AppState>,
    jar: CookieJar,
    Path((action, id)): Path<(String, String)>,
    Query(q): Query<ConfirmQuery>,
) -> Response {
    let Some(action) = ConfirmationAction::from_str(&action) else {
        return plain_html(StatusCode::NOT_FOUND, format!("Unknown action '{}'", action));
    };

    let (target_path, cancel_path, hidden_fields) = match action {
        ConfirmationAction::DeleteInstance => (
            "/instances/delete".to_string(),
            "/instances".to_string(),
            vec![("instance_name".to_string(), id.clone())],
        ),
        ConfirmationAction::DeleteMemo => {
            let page = q.page.unwrap_or(1).max(1);
            let page_size = q.page_size.filter(|n| *n >= 1).unwrap_or(state.memo_page_size);
            (
                format!("/memos/{}/delete", urlencoding::encode(&id)),
                memos_path(page, page_size),
                vec![
                    ("page".to_string(), page.to_string()),
                    ("page_size".to_string(), page_size.to_string()),
                ],
            )
        }
    };

    let (jar, globals) = build_template_globals(&state, jar);
    let TemplateGlobals { api_hostname, base_url, flash_messages, has_flash_messages } = globals;
    render_template(jar, ConfirmationTemplate {
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
        title: action.title().to_string(),
        message: action.prompt(&id),
        target_url: absolute_url_from_state(&state, &target_path),
        confirm_label: "Delete".to_string(),
        cancel_url: absolute_url_from_state(&state, &cancel_path),
        hidden_fields,
    })
}
