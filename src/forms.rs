//! Client-side checks run before any create request is sent.

use serde_json::{Map, Value};

use crate::error::FormError;
use crate::models::InstanceForm;

/// Fail on the first field that is empty after trimming, in the order given.
pub fn require(fields: &[(&'static str, &str)]) -> Result<(), FormError> {
    for &(label, value) in fields {
        if value.trim().is_empty() {
            return Err(FormError::MissingField(label));
        }
    }
    Ok(())
}

/// Validate the add-instance form and build the JSON body for the backend.
/// Blank optional fields are left out so the backend's defaults apply.
pub fn instance_payload(form: &InstanceForm) -> Result<Value, FormError> {
    require(&[
        ("Instance Name", form.instance_name.as_str()),
        ("Host", form.host.as_str()),
        ("User", form.user.as_str()),
        ("Password", form.password.as_str()),
    ])?;

    let mut body = Map::new();
    body.insert("instance_name".into(), Value::from(form.instance_name.trim()));
    body.insert("host".into(), Value::from(form.host.trim()));
    body.insert("user".into(), Value::from(form.user.trim()));
    // Passwords are sent as typed.
    body.insert("password".into(), Value::from(form.password.as_str()));

    let optional = [
        ("environment", &form.environment),
        ("db_type", &form.db_type),
        ("region", &form.region),
        ("cluster_name", &form.cluster_name),
        ("db", &form.db),
    ];
    for (key, value) in optional {
        let v = value.trim();
        if !v.is_empty() {
            body.insert(key.into(), Value::from(v));
        }
    }

    let port = form.port.trim();
    if !port.is_empty() {
        let parsed = port
            .parse::<u16>()
            .ok()
            .filter(|p| *p > 0)
            .ok_or_else(|| FormError::InvalidPort(port.to_string()))?;
        body.insert("port".into(), Value::from(parsed));
    }

    Ok(Value::Object(body))
}

/// Memo content must have something besides whitespace. The content itself is kept as typed.
pub fn memo_content(content: &str) -> Result<&str, FormError> {
    require(&[("Memo content", content)])?;
    Ok(content)
}
