//! Decoding of the JSON envelope every response shares.
//!
//! ```json
//! {"request_id": 123, "error_code": 30611, "error_msg": "..."}
//! {"request_id": 123, "response_params": {...}}
//! ```

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::{Error, Result};

/// A decoded successful response.
///
/// Dereferences to the operation-specific `data`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse<T> {
    /// Identifier the service assigned to the request
    pub request_id: u64,
    /// Operation-specific payload
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Discard the request identifier.
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Transform the payload, keeping the request identifier.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            request_id: self.request_id,
            data: f(self.data),
        }
    }
}

impl<T> std::ops::Deref for ApiResponse<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.data
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    request_id: Option<u64>,
    error_code: Option<i64>,
    #[serde(default)]
    error_msg: Option<String>,
    response_params: Option<Value>,
}

/// Parse the envelope, failing on a reported error code.
fn open(body: &[u8]) -> Result<(u64, Option<Value>)> {
    let envelope: Envelope = serde_json::from_slice(body)?;

    if let Some(code) = envelope.error_code {
        tracing::debug!(
            code,
            request_id = ?envelope.request_id,
            server_message = envelope.error_msg.as_deref().unwrap_or_default(),
            "push service reported an error"
        );
        return Err(Error::from_error_code(code, envelope.request_id));
    }

    let request_id = envelope
        .request_id
        .ok_or_else(|| Error::MalformedResponse("missing request_id".to_string()))?;

    Ok((request_id, envelope.response_params))
}

/// Decode a response whose `response_params` must match `T`.
///
/// # Errors
///
/// - [`Error::Json`] if the body is not JSON or `response_params` does not
///   have the shape of `T`
/// - [`Error::Server`] if the envelope carries an `error_code`
/// - [`Error::MalformedResponse`] if `request_id` or `response_params` is
///   missing from a successful envelope
///
/// # Example
///
/// ```
/// use baidupush_rs::client::decode;
/// use baidupush_rs::models::PushResult;
///
/// let body = br#"{"request_id": 7, "response_params": {"msg_id": "m", "send_time": "1700000000"}}"#;
/// let response = decode::<PushResult>(body).unwrap();
/// assert_eq!(response.request_id, 7);
/// assert_eq!(response.send_time, 1700000000);
/// ```
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<ApiResponse<T>> {
    let (request_id, params) = open(body)?;
    let params =
        params.ok_or_else(|| Error::MalformedResponse("missing response_params".to_string()))?;

    Ok(ApiResponse {
        request_id,
        data: serde_json::from_value(params)?,
    })
}

/// Decode a response whose payload carries nothing the caller needs.
pub fn decode_ack(body: &[u8]) -> Result<ApiResponse<()>> {
    let (request_id, _) = open(body)?;
    Ok(ApiResponse {
        request_id,
        data: (),
    })
}
