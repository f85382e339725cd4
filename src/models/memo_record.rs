use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::utils::{deserialize_optional_text, deserialize_text};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoRecord {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub content: String,
    #[serde(default, deserialize_with = "deserialize_optional_text", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl MemoRecord {
    /// `created_at` as `YYYY-MM-DD HH:MM`, or the raw value when it is not a timestamp we know.
    pub fn created_display(&self) -> String {
        self.created_at.as_deref().map(format_timestamp).unwrap_or_default()
    }
}

/// The backend emits naive ISO timestamps (`2024-05-01T09:30:12.123456`); RFC 3339 is accepted too.
pub fn format_timestamp(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    raw.to_string()
}
