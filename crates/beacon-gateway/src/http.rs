//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks and transport error mapping so the client
//! stays focused on request construction and response mapping.

use beacon_core::DirectoryError;
use reqwest::StatusCode;

/// Map a `reqwest` failure to the error taxonomy.
///
/// Decoding is done with `serde_json` on the raw body, so any error surfacing
/// from `reqwest` itself means no usable response arrived.
pub fn transport_error(error: &reqwest::Error) -> DirectoryError {
    if error.is_decode() {
        return DirectoryError::Protocol(error.to_string());
    }
    DirectoryError::Network(error.to_string())
}

/// Return the response unchanged when its status is 2xx; otherwise
/// [`DirectoryError::Server`] with the status and response body.
pub async fn check_success(resp: reqwest::Response) -> Result<reqwest::Response, DirectoryError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    Err(server_error(resp).await)
}

/// Return the response unchanged only when its status is exactly `expected`.
pub async fn check_exact(
    resp: reqwest::Response,
    expected: StatusCode,
) -> Result<reqwest::Response, DirectoryError> {
    if resp.status() == expected {
        return Ok(resp);
    }
    Err(server_error(resp).await)
}

/// Read the full body, treating a broken stream as a transport failure.
pub async fn body_bytes(resp: reqwest::Response) -> Result<Vec<u8>, DirectoryError> {
    resp.bytes()
        .await
        .map(|bytes| bytes.to_vec())
        .map_err(|e| transport_error(&e))
}

async fn server_error(resp: reqwest::Response) -> DirectoryError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    let message = if body.trim().is_empty() {
        status.canonical_reason().unwrap_or("unexpected status").to_string()
    } else {
        body
    };
    DirectoryError::Server {
        status: status.as_u16(),
        message,
    }
}
