use actix_web::error::QueryPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Errors surfaced by the HTTP layer
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

impl ApiError {
    fn error_tag(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "not_found",
            ApiError::Validation(_) => "validation_failed",
            ApiError::InvalidQuery(_) => "invalid_query",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) | ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = ErrorResponse {
            error: self.error_tag().to_string(),
            message: self.to_string(),
            status_code: self.status_code().as_u16(),
        };
        HttpResponse::build(self.status_code())
            .content_type("application/json")
            .body(serde_json::to_string(&body).unwrap_or_else(|_| {
                r#"{"error":"internal","message":"error body serialization failed","status_code":500}"#
                    .to_string()
            }))
    }
}

/// Map query deserialization failures onto the standard error body.
pub fn handle_query_payload_error(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Query payload error on {}: {}", req.path(), err);
    ApiError::InvalidQuery(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::NotFound("x".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Validation("x".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidQuery("x".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_error_tags() {
        assert_eq!(ApiError::NotFound("x".to_string()).error_tag(), "not_found");
        assert_eq!(
            ApiError::Validation("x".to_string()).error_tag(),
            "validation_failed"
        );
        assert_eq!(
            ApiError::InvalidQuery("x".to_string()).error_tag(),
            "invalid_query"
        );
    }

    #[test]
    fn test_display_keeps_detail() {
        let err = ApiError::NotFound("profile 'ghost'".to_string());
        assert_eq!(err.to_string(), "Not found: profile 'ghost'");
    }
}
