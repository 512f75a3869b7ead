//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use stock_core::ItemId;
use stock_store::StoreError;

/// Why a mutating request failed the credential gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthFailure {
    /// No credential was supplied, or it was empty.
    #[error("Authentication required for this action")]
    Missing,
    /// The credential is not in the credential store.
    #[error("Invalid teacher credentials")]
    Unknown,
}

/// Errors that can occur during gateway request handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// The caller did not present a known teacher credential.
    #[error("{0}")]
    Unauthorized(AuthFailure),

    /// An item with this identifier already exists.
    #[error("Item ID already exists")]
    Conflict(ItemId),

    /// No item has this identifier.
    #[error("Stock item not found")]
    NotFound(ItemId),

    /// The store accepted the request but reported that nothing was written.
    #[error("{0}")]
    Internal(String),

    /// An error propagated from the store layer.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The request is malformed or contains invalid values.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl GatewayError {
    /// HTTP status this error is reported with.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            GatewayError::Conflict(_) | GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::Internal(_) | GatewayError::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({"detail": self.to_string()}))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_error_status_codes_map_correctly() {
        let cases = [
            (GatewayError::Unauthorized(AuthFailure::Missing), StatusCode::UNAUTHORIZED),
            (GatewayError::Unauthorized(AuthFailure::Unknown), StatusCode::UNAUTHORIZED),
            (GatewayError::Conflict(ItemId::new("A1")), StatusCode::BAD_REQUEST),
            (GatewayError::NotFound(ItemId::new("A1")), StatusCode::NOT_FOUND),
            (
                GatewayError::Internal("Failed to update stock item".to_owned()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (GatewayError::InvalidRequest("bad".to_owned()), StatusCode::BAD_REQUEST),
        ];
        for (err, expected) in cases {
            let resp = err.into_response();
            assert_eq!(resp.status(), expected);
        }
    }

    #[test]
    fn gateway_error_store_variant_returns_500() {
        let err = GatewayError::from(StoreError::Unavailable("connection refused".to_owned()));
        let resp = err.into_response();
        assert_eq!(
            resp.status(),
            StatusCode::INTERNAL_SERVER_ERROR,
            "Store errors must map to 500"
        );
    }

    #[test]
    fn auth_failure_messages_are_distinct() {
        assert_eq!(
            GatewayError::Unauthorized(AuthFailure::Missing).to_string(),
            "Authentication required for this action"
        );
        assert_eq!(
            GatewayError::Unauthorized(AuthFailure::Unknown).to_string(),
            "Invalid teacher credentials"
        );
    }

    #[tokio::test]
    async fn gateway_error_body_carries_detail() {
        let resp = GatewayError::NotFound(ItemId::new("X")).into_response();
        let bytes = match axum::body::to_bytes(resp.into_body(), 1024).await {
            Ok(b) => b,
            Err(e) => panic!("failed to read body: {e}"),
        };
        let body: serde_json::Value = match serde_json::from_slice(&bytes) {
            Ok(v) => v,
            Err(e) => panic!("invalid JSON: {e}"),
        };
        assert_eq!(body["detail"], "Stock item not found");
    }
}
