use serde_json::Value;
use yansi::Paint;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::ApiError;

static SILENT: AtomicBool = AtomicBool::new(false);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        println!("{}", msg);
    }
}

/// Body keys whose values never reach the request echo
const REDACTED_KEYS: &[&str] = &["password"];

fn redacted(body: &Value) -> Value {
    match body {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| {
                    if REDACTED_KEYS.contains(&k.as_str()) {
                        (k.clone(), Value::from("***"))
                    } else {
                        (k.clone(), redacted(v))
                    }
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(redacted).collect()),
        other => other.clone(),
    }
}

fn curl_line(method: &str, url_for_log: &str, body: Option<&Value>) -> String {
    let mut parts = Vec::new();
    parts.push(Paint::new("curl").fg(yansi::Color::Green).bold().to_string());
    parts.push(format!("-X {}", Paint::new(method).fg(yansi::Color::Yellow).bold()));
    parts.push(format!("'{}'", Paint::new(url_for_log).fg(yansi::Color::Cyan)));

    if let Some(d) = body {
        parts.push(format!("{} {}",
            Paint::new("-H").fg(yansi::Color::Magenta),
            Paint::new("'Content-Type: application/json'").fg(yansi::Color::Magenta)
        ));
        let json_str = serde_json::to_string_pretty(&redacted(d)).unwrap_or_default();
        let escaped_json = json_str.replace('\'', "'\\''");
        parts.push(format!("{} {}",
            Paint::new("-d").fg(yansi::Color::Blue),
            Paint::new(format!("'{}'", escaped_json)).fg(yansi::Color::White)
        ));
    }
    parts.join(" ")
}

/// Pull a human readable reason out of an error body (`{"detail": ...}` or `{"message": ...}`).
pub fn error_detail(body: &Value) -> Option<String> {
    for key in ["detail", "message", "error"] {
        match body.get(key) {
            Some(Value::String(s)) if !s.trim().is_empty() => return Some(s.trim().to_string()),
            Some(Value::String(_)) | Some(Value::Null) | None => {}
            Some(other) => return Some(crate::utils::value_to_short_string(other)),
        }
    }
    None
}

/// Core HTTP client function for making backend calls.
/// Returns the parsed JSON body (`Value::Null` for an empty body) of a 2xx response.
pub async fn api_call(
    client: &reqwest::Client,
    api_base_url: &str,
    method: &str,
    endpoint: &str,
    body: Option<Value>,
    params: Option<Vec<(String, String)>>,
) -> Result<Value, ApiError> {
    let url = format!("{}{}", api_base_url, endpoint);

    // --- Curl Logging ---
    let mut url_for_log = url.clone();
    if let Some(ref p) = params {
        if !p.is_empty() {
            url_for_log = format!("{}?{}", url_for_log, crate::utils::build_query_string(p));
        }
    }
    log_output(format!("Request:\n{}", curl_line(method, &url_for_log, body.as_ref())));
    // --------------------

    tracing::info!(method, endpoint, ?params, "API Request");

    let mut req = match method {
        "GET" => client.get(&url),
        "POST" => client.post(&url),
        "PUT" => client.put(&url),
        "DELETE" => client.delete(&url),
        other => return Err(ApiError::InvalidRequest(format!("unsupported method {}", other))),
    };

    if let Some(ref p) = params {
        req = req.query(p);
    }

    if let Some(ref b) = body {
        req = req.json(b);
    }

    let resp = req.send().await.map_err(|e| {
        tracing::error!(%e, method, endpoint, "API request failed");
        ApiError::Network(e.to_string())
    })?;
    let status = resp.status();
    let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;

    let parsed: Option<Value> = if text.trim().is_empty() {
        Some(Value::Null)
    } else {
        serde_json::from_str(&text).ok()
    };

    // Grayed out response body
    let response_str = Paint::new(&text).rgb(100, 100, 100).to_string();
    log_output(format!("Response ({}):\n{}", status.as_u16(), response_str));
    tracing::info!(status = status.as_u16(), endpoint, "API Response");

    if !status.is_success() {
        let detail = parsed
            .as_ref()
            .and_then(error_detail)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());
        tracing::error!(status = status.as_u16(), %detail, endpoint, "Backend returned an error");
        return Err(ApiError::Status { status: status.as_u16(), detail });
    }

    parsed.ok_or_else(|| ApiError::Malformed(format!("{} {} did not return JSON", method, endpoint)))
}
