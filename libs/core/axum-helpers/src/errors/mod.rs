use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    Router,
};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Application error type, mapped onto the AWS-SNS-shaped error envelope on
/// the way out through [`IntoResponse`].
///
/// The `Type`/`Code` pairing mirrors the action-dispatch API's error
/// vocabulary; callers construct variants rather than status codes directly
/// so every handler produces the same envelope shape.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("{0}")]
    InvalidParameter(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    AlreadyExists(String),

    #[error("upstream broker unavailable: {0}")]
    Throttled(String),

    #[error("internal error: {0}")]
    Internal(String),

    #[error("not authorized: {0}")]
    Authorization(String),

    #[error("request body error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),
}

impl AppError {
    /// The HTTP status this error maps onto, for callers that need it before
    /// (or instead of) converting into a full response — e.g. metrics.
    pub fn status_code(&self) -> StatusCode {
        self.parts().0
    }

    fn parts(&self) -> (StatusCode, &'static str, &'static str) {
        match self {
            AppError::InvalidParameter(_) => {
                (StatusCode::BAD_REQUEST, "Sender", "InvalidParameter")
            }
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "Sender", "NotFound"),
            AppError::AlreadyExists(_) => (StatusCode::CONFLICT, "Sender", "AlreadyExists"),
            AppError::Throttled(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "Receiver", "Throttled")
            }
            AppError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Receiver", "InternalError")
            }
            AppError::Authorization(_) => {
                (StatusCode::FORBIDDEN, "Sender", "AuthorizationError")
            }
            AppError::JsonExtractorRejection(_) => {
                (StatusCode::BAD_REQUEST, "Sender", "InvalidParameter")
            }
        }
    }
}

/// The inner `Error` object of the AWS-SNS-shaped error envelope.
#[derive(Serialize)]
pub struct ErrorBody {
    #[serde(rename = "Type")]
    pub error_type: &'static str,
    #[serde(rename = "Code")]
    pub code: &'static str,
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "HttpStatusCode")]
    pub http_status_code: u16,
}

/// Top-level error envelope returned for every non-2xx response.
#[derive(Serialize)]
pub struct ErrorResponse {
    #[serde(rename = "Error")]
    pub error: ErrorBody,
    #[serde(rename = "RequestId")]
    pub request_id: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, code) = self.parts();
        let message = self.to_string();

        match status {
            StatusCode::INTERNAL_SERVER_ERROR | StatusCode::SERVICE_UNAVAILABLE => {
                tracing::error!(code, "{}", message);
            }
            _ => tracing::info!(code, "{}", message),
        }

        let body = ErrorResponse {
            error: ErrorBody {
                error_type,
                code,
                message,
                http_status_code: status.as_u16(),
            },
            request_id: Uuid::new_v4().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Fallback handler for unmatched routes, in the same envelope shape as every
/// other error response.
pub async fn not_found() -> AppError {
    AppError::NotFound("the requested resource could not be found".to_string())
}

/// Attaches the shared 404 fallback to a router.
pub fn with_not_found_fallback<S: Clone + Send + Sync + 'static>(router: Router<S>) -> Router<S> {
    router.fallback(not_found)
}
