use axum::{
    extract::{Form, Path, Query, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::error::ServiceError;
use crate::models::{AppState, MemoRecord};
use crate::pagination::{page_window, PageWindow};
use crate::render::TableView;
use crate::services::{self, DeleteOutcome};
use crate::templates::{MemosPageTemplate, PageLink};
use crate::handlers::helpers::{
    build_template_globals, memos_path, redirect_with_flash, render_template, FlashMessage,
    TemplateGlobals,
};

#[derive(Deserialize)]
pub struct MemoPageQuery {
    page: Option<usize>,
    page_size: Option<usize>,
}

#[derive(Deserialize)]
pub struct AddMemoForm {
    #[serde(default)]
    content: String,
    page: Option<usize>,
    page_size: Option<usize>,
}

#[derive(Deserialize)]
pub struct DeleteMemoForm {
    page: Option<usize>,
    page_size: Option<usize>,
}

fn resolve_paging(state: &AppState, page: Option<usize>, page_size: Option<usize>) -> (usize, usize) {
    let page = page.unwrap_or(1).max(1);
    let page_size = page_size.filter(|n| *n >= 1).unwrap_or(state.memo_page_size);
    (page, page_size)
}

pub fn page_links(window: &PageWindow, page_size: usize) -> Vec<PageLink> {
    window
        .buttons()
        .into_iter()
        .map(|b| PageLink {
            label: b.label(),
            href: memos_path(b.target(), page_size),
            current: b.is_current(),
        })
        .collect()
}

pub async fn memos_get(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(q): Query<MemoPageQuery>,
) -> Response {
    let (page, page_size) = resolve_paging(&state, q.page, q.page_size);
    let (jar, globals) = build_template_globals(&state, jar);
    let TemplateGlobals { api_hostname, base_url, mut flash_messages, .. } = globals;

    let (table, window, load_failed) = match services::fetch_memo_page(&state, page, page_size).await {
        Ok(listing) => (listing.table, listing.window, false),
        Err(e) => {
            tracing::error!(%e, page, "Failed to load memos");
            flash_messages.push(FlashMessage::error(format!("Error loading memo list: {}", e)));
            (TableView::from_records::<MemoRecord>(&[]), page_window(page, page), true)
        }
    };
    let has_flash_messages = !flash_messages.is_empty();

    render_template(jar, MemosPageTemplate {
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
        table: &table,
        page_links: page_links(&window, page_size),
        current_page: window.current_page,
        total_pages: window.total_pages,
        page_size,
        load_failed,
    })
}

pub async fn memos_add_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<AddMemoForm>,
) -> impl IntoResponse {
    let (page, page_size) = resolve_paging(&state, form.page, form.page_size);
    let flash = match services::add_memo(&state, &form.content, page, page_size).await {
        Ok(done) => FlashMessage::ok(done.message),
        Err(ServiceError::Form(e)) => FlashMessage::error(e.to_string()),
        Err(e) => {
            tracing::error!(%e, "Failed to add memo");
            FlashMessage::error(format!("Failed to add memo: {}", e))
        }
    };
    redirect_with_flash(&state, jar, &memos_path(page, page_size), flash)
}

/// Reached from the confirmation page, so the delete is already confirmed.
pub async fn memo_delete_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(memo_id): Path<String>,
    Form(form): Form<DeleteMemoForm>,
) -> impl IntoResponse {
    let (page, page_size) = resolve_paging(&state, form.page, form.page_size);
    let flash = match services::delete_memo(&state, &memo_id, page, page_size, |_| true).await {
        Ok(DeleteOutcome::Deleted(done)) => FlashMessage::ok(done.message),
        Ok(DeleteOutcome::Declined) => FlashMessage::ok("Nothing was deleted."),
        Err(ServiceError::Form(e)) => FlashMessage::error(e.to_string()),
        Err(e) => {
            tracing::error!(%e, %memo_id, "Failed to delete memo");
            FlashMessage::error(format!("Failed to delete memo: {}", e))
        }
    };
    redirect_with_flash(&state, jar, &memos_path(page, page_size), flash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_links_follow_window() {
        let links = page_links(&page_window(6, 10), 5);
        let labels: Vec<&str> = links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["Prev", "4", "5", "6", "7", "8", "Next"]);
        assert_eq!(links[0].href, "/memos?page=5&page_size=5");
        assert_eq!(links[6].href, "/memos?page=7&page_size=5");
        assert!(links[3].current);
        assert_eq!(links.iter().filter(|l| l.current).count(), 1);
    }
}
