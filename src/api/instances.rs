use serde_json::Value;

use crate::error::ApiError;
use crate::models::{ConflictAction, InstanceRecord};
use super::client::api_call;

pub const LIST_INSTANCES_ENDPOINT: &str = "/api/instance_setup/list_instances/";
pub const ADD_INSTANCE_ENDPOINT: &str = "/api/instance_setup/add_instance/";
pub const DELETE_INSTANCE_ENDPOINT: &str = "/api/instance_setup/delete_instance/";

/// Load every instance profile from the backend.
pub async fn load_instances(
    client: &reqwest::Client,
    api_base_url: &str,
) -> Result<Vec<InstanceRecord>, ApiError> {
    let payload = api_call(client, api_base_url, "GET", LIST_INSTANCES_ENDPOINT, None, None).await?;
    parse_instance_list(&payload)
}

/// Validate a `{"instances": [...]}` payload. Entries that are not objects, or that lack a
/// cluster or instance name, are skipped; a missing or non-array `instances` is an error.
pub fn parse_instance_list(payload: &Value) -> Result<Vec<InstanceRecord>, ApiError> {
    let arr = payload
        .get("instances")
        .and_then(|v| v.as_array())
        .ok_or_else(|| ApiError::Malformed("instance list payload has no `instances` array".into()))?;

    let mut out = Vec::with_capacity(arr.len());
    for item in arr {
        if !item.is_object() {
            tracing::warn!(?item, "Skipping non-object instance entry");
            continue;
        }
        match serde_json::from_value::<InstanceRecord>(item.clone()) {
            Ok(record) if record.is_listable() => out.push(record),
            Ok(_) => tracing::warn!(?item, "Skipping instance without cluster_name/instance_name"),
            Err(e) => tracing::warn!(%e, ?item, "Skipping unreadable instance entry"),
        }
    }
    Ok(out)
}

/// Submit a new instance profile. Returns the backend's message.
pub async fn add_instance(
    client: &reqwest::Client,
    api_base_url: &str,
    body: Value,
    on_conflict: Option<ConflictAction>,
) -> Result<String, ApiError> {
    let params = on_conflict.map(|a| vec![("action".to_string(), a.as_str().to_string())]);
    let payload = api_call(client, api_base_url, "POST", ADD_INSTANCE_ENDPOINT, Some(body), params).await?;
    Ok(message_from(&payload).unwrap_or_else(|| "Instance added successfully".into()))
}

/// Delete an instance profile by name. Returns the backend's message.
pub async fn delete_instance(
    client: &reqwest::Client,
    api_base_url: &str,
    instance_name: &str,
) -> Result<String, ApiError> {
    let params = vec![("instance_name".to_string(), instance_name.to_string())];
    let payload = api_call(client, api_base_url, "DELETE", DELETE_INSTANCE_ENDPOINT, None, Some(params)).await?;
    Ok(message_from(&payload).unwrap_or_else(|| "Instance deleted successfully".into()))
}

fn message_from(payload: &Value) -> Option<String> {
    payload
        .get("message")
        .and_then(|m| m.as_str())
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_instance_list_keeps_order() {
        let payload = json!({"instances": [
            {"environment": "prod", "db_type": "mysql", "region": "ap-northeast-2",
             "cluster_name": "c1", "instance_name": "db-1", "host": "10.0.0.1", "port": 3306},
            {"cluster_name": "c1", "instance_name": "db-2", "host": "10.0.0.2", "port": "3307"},
        ]});
        let list = parse_instance_list(&payload).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].instance_name, "db-1");
        assert_eq!(list[0].port, "3306");
        assert_eq!(list[1].port, "3307");
    }

    #[test]
    fn test_parse_instance_list_skips_invalid_entries() {
        let payload = json!({"instances": [
            {"cluster_name": "c1", "instance_name": "ok"},
            {"instance_name": "no-cluster"},
            {"cluster_name": "c1", "instance_name": ""},
            "garbage",
        ]});
        let list = parse_instance_list(&payload).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].instance_name, "ok");
    }

    #[test]
    fn test_parse_instance_list_rejects_non_array() {
        assert!(matches!(parse_instance_list(&json!({"instances": {"a": 1}})), Err(ApiError::Malformed(_))));
        assert!(matches!(parse_instance_list(&json!([])), Err(ApiError::Malformed(_))));
        assert!(matches!(parse_instance_list(&Value::Null), Err(ApiError::Malformed(_))));
    }

    #[test]
    fn test_message_from() {
        assert_eq!(message_from(&json!({"message": "done"})).as_deref(), Some("done"));
        assert_eq!(message_from(&json!({})), None);
    }
}
