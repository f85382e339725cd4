use crate::api;
use crate::error::{ApiError, FormError, ServiceError};
use crate::forms;
use crate::models::{AppState, ConfirmationAction, MemoPage, MemoRecord};
use crate::pagination::{page_window, PageWindow};
use crate::render::TableView;
use super::{DeleteOutcome, Mutation};

/// One rendered page of memos with its pagination controls
#[derive(Debug, Clone)]
pub struct MemoListing {
    pub page: MemoPage,
    pub table: TableView,
    pub window: PageWindow,
}

impl MemoListing {
    pub fn new(page: MemoPage) -> Self {
        let table = TableView::from_records(&page.memos);
        let window = page_window(page.current_page, page.total_pages);
        Self { page, table, window }
    }
}

/// Fetch `page` (1-based; 0 is read as 1) from the backend.
pub async fn fetch_memo_page(state: &AppState, page: usize, page_size: usize) -> Result<MemoListing, ApiError> {
    let page = page.max(1);
    let page_size = page_size.max(1);
    let memo_page = api::load_memos(&state.client, &state.api_base_url, page, page_size).await?;
    Ok(MemoListing::new(memo_page))
}

/// Validate, create, then re-fetch the page the user is on.
pub async fn add_memo(
    state: &AppState,
    content: &str,
    current_page: usize,
    page_size: usize,
) -> Result<Mutation<MemoListing>, ServiceError> {
    let content = forms::memo_content(content)?;
    let created = api::create_memo(&state.client, &state.api_base_url, content).await?;
    tracing::info!(memo_id = %created.id, "Memo created");
    let listing = fetch_memo_page(state, current_page, page_size).await?;
    Ok(Mutation { message: "Memo added.".into(), listing })
}

/// Ask `confirm` first; only a confirmed delete reaches the backend. Re-fetches the current page.
pub async fn delete_memo<F>(
    state: &AppState,
    memo_id: &str,
    current_page: usize,
    page_size: usize,
    confirm: F,
) -> Result<DeleteOutcome<MemoListing>, ServiceError>
where
    F: FnOnce(&str) -> bool,
{
    if memo_id.trim().is_empty() {
        return Err(FormError::MissingField("Memo id").into());
    }
    if !confirm(&ConfirmationAction::DeleteMemo.prompt(memo_id)) {
        tracing::info!(memo_id, "Memo delete declined");
        return Ok(DeleteOutcome::Declined);
    }
    api::delete_memo(&state.client, &state.api_base_url, memo_id).await?;
    let listing = fetch_memo_page(state, current_page, page_size).await?;
    Ok(DeleteOutcome::Deleted(Mutation { message: "Memo deleted.".into(), listing }))
}

pub async fn show_memo(state: &AppState, memo_id: &str) -> Result<MemoRecord, ServiceError> {
    if memo_id.trim().is_empty() {
        return Err(FormError::MissingField("Memo id").into());
    }
    Ok(api::get_memo(&state.client, &state.api_base_url, memo_id).await?)
}
