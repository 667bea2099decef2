use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use receipt_protocol::{messages, ProtocolError, ValidationResponse};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid receipt payload: {0}")]
    InvalidPayload(#[from] ProtocolError),

    #[error("receipt failed validation: {}", .0.join(" "))]
    Validation(Vec<String>),

    #[error("receipt not found: {0}")]
    ReceiptNotFound(String),

    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("store error: {0}")]
    Store(#[from] receipt_store::StoreError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServerError {
    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidPayload(_) | Self::Validation(_) | Self::InvalidPath(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::ReceiptNotFound(_) => StatusCode::NOT_FOUND,
            Self::Store(_) | Self::Config(_) | Self::Io(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Validation(errors) => {
                (status, Json(ValidationResponse::new(errors))).into_response()
            }
            Self::InvalidPayload(_) => (status, messages::INVALID_RECEIPT).into_response(),
            Self::ReceiptNotFound(_) => (status, messages::RECEIPT_NOT_FOUND).into_response(),
            Self::InvalidPath(_) => (status, messages::INVALID_URL).into_response(),
            other => {
                tracing::error!(error = %other, "request failed");
                (status, messages::INTERNAL_ERROR).into_response()
            }
        }
    }
}

pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(
            ServerError::Validation(vec![]).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServerError::InvalidPath("/invalid-url".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServerError::ReceiptNotFound("x".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServerError::Store(receipt_store::StoreError::LockPoisoned).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn validation_display_lists_errors() {
        let err = ServerError::Validation(vec![
            "Retailer is required.".into(),
            "Total is required.".into(),
        ]);
        assert_eq!(
            err.to_string(),
            "receipt failed validation: Retailer is required. Total is required."
        );
    }

    #[test]
    fn into_response_uses_status() {
        let response = ServerError::ReceiptNotFound("x".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
