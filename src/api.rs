//! Decoding of finance API payloads
//!
//! The transport lives elsewhere; these helpers turn response bodies into
//! the typed models. Transaction listings come wrapped in a paginated
//! envelope, failures in an `{ "error": "..." }` body.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::error::{LensError, LensResult};
use crate::models::Transaction;

const UNKNOWN_ERROR: &str = "Unknown error";
const REQUEST_FAILED: &str = "Request failed";

/// Paginated listing as returned by the transactions endpoint
///
/// Missing `data` or `meta` fields decode as `None`.
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    pub data: Option<Vec<T>>,
    pub meta: Option<Value>,
}

impl<T> Page<T> {
    pub fn into_items(self) -> Vec<T> {
        self.data.unwrap_or_default()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Listing<T> {
    Bare(Vec<T>),
    Paged(Page<T>),
}

/// Decode any JSON body into `T`
pub fn decode<T: DeserializeOwned>(body: &str) -> LensResult<T> {
    Ok(serde_json::from_str(body)?)
}

/// Decode a transaction listing, paged or bare
///
/// A page with a missing or null `data` yields an empty list.
pub fn decode_transactions(body: &str) -> LensResult<Vec<Transaction>> {
    decode_listing(body)
}

/// Decode a listing of any record type, paged or bare
pub fn decode_listing<T: DeserializeOwned>(body: &str) -> LensResult<Vec<T>> {
    let listing: Listing<T> = serde_json::from_str(body)?;
    Ok(match listing {
        Listing::Bare(items) => items,
        Listing::Paged(page) => page.into_items(),
    })
}

/// Turn a failed response into an API error
///
/// Bodies that are not JSON report `"Unknown error"`. Otherwise the `error`
/// field is surfaced as-is; when it is missing, null, `false`, `0` or an
/// empty string, or the body is not an object, the message is
/// `"Request failed"`.
pub fn decode_error(status: u16, body: &str) -> LensError {
    let message = match serde_json::from_str::<Value>(body) {
        Ok(value) => error_message(&value).unwrap_or_else(|| REQUEST_FAILED.to_string()),
        Err(_) => UNKNOWN_ERROR.to_string(),
    };
    warn!(status, %message, "API request failed");
    LensError::api(status, message)
}

fn error_message(body: &Value) -> Option<String> {
    match body.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(msg) if msg.is_empty() => None,
        Value::String(msg) => Some(msg.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
