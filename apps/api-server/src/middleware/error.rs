//! Error handling - the closed set of failures a handler may return.
//!
//! Every failure is turned into a JSON body here; nothing propagates to the
//! client as anything but a status code plus body.

use std::fmt;

use actix_web::error::JsonPayloadError;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use buffer_core::DomainError;
use buffer_core::error::RepoError;
use buffer_core::ports::PasswordError;
use buffer_shared::{ErrorResponse, FieldErrors};

const CONFLICT_MESSAGE: &str = "The submitted data conflicts with an existing record.";

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    /// The addressed record does not exist. Carries the full client message.
    NotFound(String),
    /// The payload failed field-level checks.
    Validation(FieldErrors),
    /// Anything else. The detail is logged and never sent to the client.
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Validation(errors) => write!(f, "Validation errors: {:?}", errors),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        match self {
            AppError::NotFound(msg) => response.json(ErrorResponse::new(msg.as_str())),
            AppError::Validation(errors) => response.json(errors),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                response.json(ErrorResponse::internal_error())
            }
        }
    }
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::Validation(errors)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, .. } => {
                AppError::NotFound(format!("{} not found", entity_type))
            }
            DomainError::Duplicate(msg) => {
                tracing::warn!("Constraint violation: {}", msg);
                AppError::Validation(FieldErrors::non_field(CONFLICT_MESSAGE))
            }
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Resource not found".to_string()),
            RepoError::Constraint(msg) => {
                tracing::warn!("Constraint violation: {}", msg);
                AppError::Validation(FieldErrors::non_field(CONFLICT_MESSAGE))
            }
            RepoError::Connection(msg) => {
                AppError::Internal(format!("Database connection error: {}", msg))
            }
            RepoError::Query(msg) => AppError::Internal(format!("Database query error: {}", msg)),
        }
    }
}

impl From<PasswordError> for AppError {
    fn from(err: PasswordError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<JsonPayloadError> for AppError {
    fn from(err: JsonPayloadError) -> Self {
        let message = match err {
            JsonPayloadError::ContentType => {
                "Unsupported media type; expected application/json.".to_string()
            }
            other => format!("JSON parse error - {}", other),
        };
        AppError::Validation(FieldErrors::non_field(message))
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn internal_errors_do_not_leak_detail() {
        let (status, body) =
            body_json(RepoError::Query("relation \"posts\" does not exist".into()).into()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({"error": "Internal server error"}));
    }

    #[actix_web::test]
    async fn domain_not_found_names_the_entity() {
        let err: AppError = RepoError::NotFound.into_domain("Post", 99999).into();
        let (status, body) = body_json(err).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({"error": "Post not found"}));
    }

    #[actix_web::test]
    async fn constraint_violations_are_bad_requests() {
        let (status, body) = body_json(
            RepoError::Constraint("duplicate key value violates unique constraint".into()).into(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({"non_field_errors": [CONFLICT_MESSAGE]}));
    }
}
