use serde_json::{json, Value};

use crate::error::ApiError;
use crate::models::{MemoPage, MemoRecord};
use super::client::api_call;

pub const MEMO_ENDPOINT: &str = "/api/memo/";

fn memo_endpoint(id: &str) -> String {
    format!("/api/memo/{}", urlencoding::encode(id))
}

/// Fetch one page of memos. Every call goes to the backend; pages are not cached.
pub async fn load_memos(
    client: &reqwest::Client,
    api_base_url: &str,
    page: usize,
    page_size: usize,
) -> Result<MemoPage, ApiError> {
    let params = vec![
        ("page".to_string(), page.to_string()),
        ("page_size".to_string(), page_size.to_string()),
    ];
    let payload = api_call(client, api_base_url, "GET", MEMO_ENDPOINT, None, Some(params)).await?;
    parse_memo_page(&payload, page, page_size)
}

/// Accepts `{"data": [...], "total_pages": n}` and the older bare-array form.
/// The bare form carries no page count, so a full page implies there may be a next one.
pub fn parse_memo_page(payload: &Value, page: usize, page_size: usize) -> Result<MemoPage, ApiError> {
    let (items, total_pages) = match payload {
        Value::Array(arr) => {
            let total = if page_size > 0 && arr.len() >= page_size { page + 1 } else { page };
            (arr, total)
        }
        Value::Object(obj) => {
            let arr = obj
                .get("data")
                .and_then(|d| d.as_array())
                .ok_or_else(|| ApiError::Malformed("memo page payload has no `data` array".into()))?;
            let total = obj
                .get("total_pages")
                .and_then(|t| t.as_u64().or_else(|| t.as_str().and_then(|s| s.trim().parse().ok())))
                .and_then(|t| usize::try_from(t).ok())
                .unwrap_or(1);
            (arr, total)
        }
        _ => return Err(ApiError::Malformed("memo page payload is neither an object nor an array".into())),
    };

    let mut memos = Vec::with_capacity(items.len());
    for item in items {
        if !item.is_object() {
            tracing::warn!(?item, "Skipping non-object memo entry");
            continue;
        }
        match serde_json::from_value::<MemoRecord>(item.clone()) {
            Ok(memo) => memos.push(memo),
            Err(e) => tracing::warn!(%e, ?item, "Skipping unreadable memo entry"),
        }
    }

    Ok(MemoPage {
        memos,
        current_page: page,
        total_pages: total_pages.max(1),
        page_size,
    })
}

pub async fn get_memo(
    client: &reqwest::Client,
    api_base_url: &str,
    memo_id: &str,
) -> Result<MemoRecord, ApiError> {
    let payload = api_call(client, api_base_url, "GET", &memo_endpoint(memo_id), None, None).await?;
    parse_memo(payload)
}

/// Create a memo; the backend assigns the id.
pub async fn create_memo(
    client: &reqwest::Client,
    api_base_url: &str,
    content: &str,
) -> Result<MemoRecord, ApiError> {
    let body = json!({ "content": content });
    let payload = api_call(client, api_base_url, "POST", MEMO_ENDPOINT, Some(body), None).await?;
    parse_memo(payload)
}

pub async fn delete_memo(
    client: &reqwest::Client,
    api_base_url: &str,
    memo_id: &str,
) -> Result<(), ApiError> {
    api_call(client, api_base_url, "DELETE", &memo_endpoint(memo_id), None, None).await?;
    Ok(())
}

fn parse_memo(payload: Value) -> Result<MemoRecord, ApiError> {
    if !payload.is_object() {
        return Err(ApiError::Malformed("expected a memo object".into()));
    }
    serde_json::from_value(payload).map_err(|e| ApiError::Malformed(e.to_string()))
}
