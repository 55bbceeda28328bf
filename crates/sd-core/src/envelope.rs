//! Response envelopes of the spider API.
//!
//! Most endpoints wrap their payload as `{status, message, data}`. Lists
//! nest a page inside `data` as `{list, total}`, while the preview endpoint
//! puts its rows at the top level under `items`. These shapes differ on
//! purpose and are decoded as they are.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::ports::errors::TransportError;

/// Deserializes `null` (as the Go backend emits for nil slices) as `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One page of a collection: `data = {list, total}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default, deserialize_with = "null_as_default")]
    pub list: Vec<T>,
    #[serde(default)]
    pub total: u64,
}

/// Fails with [`TransportError::Rejected`] when the body reports `status: "error"`.
///
/// The backend occasionally answers a failed request with HTTP 200 and an
/// error envelope, so the HTTP status alone is not enough.
pub fn check_status(body: &Value) -> Result<(), TransportError> {
    if body.get("status").and_then(Value::as_str) == Some("error") {
        let message = body
            .get("error")
            .and_then(Value::as_str)
            .or_else(|| body.get("message").and_then(Value::as_str))
            .unwrap_or("request rejected")
            .to_string();
        return Err(TransportError::Rejected { message });
    }
    Ok(())
}

fn take_field(mut body: Value, field: &str) -> Value {
    body.get_mut(field).map(Value::take).unwrap_or(Value::Null)
}

fn from_value<T: DeserializeOwned>(value: Value, what: &str) -> Result<T, TransportError> {
    serde_json::from_value(value).map_err(|e| TransportError::Decode(format!("{what}: {e}")))
}

/// Decodes a required `data` payload.
pub fn decode_data<T: DeserializeOwned>(body: Value) -> Result<T, TransportError> {
    check_status(&body)?;
    let data = take_field(body, "data");
    if data.is_null() {
        return Err(TransportError::Decode("data: missing from response".to_string()));
    }
    from_value(data, "data")
}

/// Decodes an optional `data` payload; absent or `null` yields `T::default()`.
pub fn decode_data_or_default<T: DeserializeOwned + Default>(
    body: Value,
) -> Result<T, TransportError> {
    check_status(&body)?;
    let data = take_field(body, "data");
    if data.is_null() {
        return Ok(T::default());
    }
    from_value(data, "data")
}

/// Decodes `data = {list, total}`.
///
/// A page holding more rows than its total is rejected: the total is
/// authoritative, so such a page cannot be projected consistently.
pub fn decode_page<T: DeserializeOwned>(body: Value) -> Result<Page<T>, TransportError> {
    check_status(&body)?;
    let page: Page<T> = from_value(take_field(body, "data"), "data")?;
    if page.list.len() as u64 > page.total {
        return Err(TransportError::Decode(format!(
            "data: page holds {} rows but total is {}",
            page.list.len(),
            page.total
        )));
    }
    Ok(page)
}

/// Decodes the top-level `items` array used by the preview endpoint.
pub fn decode_items<T: DeserializeOwned>(body: Value) -> Result<Vec<T>, TransportError> {
    check_status(&body)?;
    let items = take_field(body, "items");
    if items.is_null() {
        return Ok(Vec::new());
    }
    from_value(items, "items")
}
