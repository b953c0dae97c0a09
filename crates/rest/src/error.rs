//! Error types for the public API.
//!
//! Every error is answered with a small JSON body sharing the envelope's
//! `version_number`:
//!
//! ```json
//! {"version_number": "2.0", "success": false, "status": 404, "message": "Card not found"}
//! ```
//!
//! # Error Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound | 404 |
//! | Forbidden | 403 |
//! | BadRequest | 400 |
//! | StorageError (any) | 500 |

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nrdb_persistence::error::StorageError;
use nrdb_persistence::types::RecordKind;

use crate::responses::envelope::API_VERSION;
use crate::responses::headers::ApiHeaders;

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// Record not found (HTTP 404).
    NotFound {
        /// Kind of the missing record.
        kind: RecordKind,
        /// The code or id that was requested.
        key: String,
    },

    /// Access denied (HTTP 403).
    Forbidden {
        /// Error message.
        message: String,
    },

    /// Malformed path or query (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },
}

impl RestError {
    /// Returns the HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            RestError::NotFound { .. } => StatusCode::NOT_FOUND,
            RestError::Forbidden { .. } => StatusCode::FORBIDDEN,
            RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the message sent to the client.
    ///
    /// Internal details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            RestError::NotFound { kind, .. } => format!("{} not found", kind.label()),
            RestError::Forbidden { message } | RestError::BadRequest { message } => {
                message.clone()
            }
            RestError::InternalError { .. } => "Internal server error".to_string(),
        }
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::NotFound { kind, key } => {
                write!(f, "{} not found: {}", kind.label(), key)
            }
            RestError::Forbidden { message } => write!(f, "Forbidden: {}", message),
            RestError::BadRequest { message } => write!(f, "Bad request: {}", message),
            RestError::InternalError { message } => write!(f, "Internal error: {}", message),
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = serde_json::json!({
            "version_number": API_VERSION,
            "success": false,
            "status": status.as_u16(),
            "message": self.public_message(),
        });

        (
            status,
            ApiHeaders::for_error().to_header_map(),
            body.to_string(),
        )
            .into_response()
    }
}

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        RestError::InternalError {
            message: err.to_string(),
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::header;
    use nrdb_persistence::error::BackendError;

    #[test]
    fn test_status_mapping() {
        let not_found = RestError::NotFound {
            kind: RecordKind::Card,
            key: "99999".to_string(),
        };
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.public_message(), "Card not found");

        let forbidden = RestError::Forbidden {
            message: "Deck not shared".to_string(),
        };
        assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_storage_error_is_internal() {
        let err: RestError = StorageError::Backend(BackendError::QueryError {
            message: "disk I/O error".to_string(),
        })
        .into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Internal server error");
        assert!(err.to_string().contains("disk I/O error"));
    }

    #[tokio::test]
    async fn test_error_body() {
        let response = RestError::NotFound {
            kind: RecordKind::Mwl,
            key: "x".to_string(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json; charset=UTF-8"
        );

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["version_number"], "2.0");
        assert_eq!(body["success"], false);
        assert_eq!(body["status"], 404);
        assert_eq!(body["message"], "MWL not found");
    }
}
