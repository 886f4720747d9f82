//! Response body helpers.

use axum::body::{Body, to_bytes};
use axum::response::Response;
use serde_json::Value;

/// Read the full body and parse it as JSON. Panics on invalid JSON.
pub async fn json_body(resp: Response<Body>) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body is not JSON")
}

/// Read the full body as raw bytes.
pub async fn raw_body(resp: Response<Body>) -> Vec<u8> {
    to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body")
        .to_vec()
}
