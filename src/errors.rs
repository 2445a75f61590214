use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Session expired or quiz not started: {0}")]
    SessionNotStarted(String),

    #[error("Quiz session aborted: {0}")]
    FatalSession(String),

    #[error("Completion service failure: {0}")]
    ServiceFailure(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::SessionNotStarted(_) => "SESSION_NOT_STARTED",
            AppError::FatalSession(_) => "FATAL_SESSION",
            AppError::ServiceFailure(_) => "SERVICE_FAILURE",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// The caller must send the user back to the start of the quiz.
    pub fn requires_restart(&self) -> bool {
        matches!(
            self,
            AppError::SessionNotStarted(_) | AppError::FatalSession(_)
        )
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
    pub restart: bool,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::SessionNotStarted(_) => StatusCode::CONFLICT,
            AppError::FatalSession(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::ServiceFailure(_) => StatusCode::BAD_GATEWAY,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.error_code(),
            restart: self.requires_restart(),
        })
    }
}

impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::ServiceFailure(err.to_string())
    }
}
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::NotFound("test".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::ValidationError("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::SessionNotStarted("test".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::FatalSession("test".into()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::SessionNotStarted("x".into()).error_code(),
            "SESSION_NOT_STARTED"
        );
        assert_eq!(AppError::FatalSession("x".into()).error_code(), "FATAL_SESSION");
        assert_eq!(
            AppError::ServiceFailure("x".into()).error_code(),
            "SERVICE_FAILURE"
        );
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::ServiceFailure("timeout".into());
        assert_eq!(err.to_string(), "Completion service failure: timeout");
    }

    #[test]
    fn test_restart_required_only_for_session_errors() {
        assert!(AppError::SessionNotStarted("x".into()).requires_restart());
        assert!(AppError::FatalSession("x".into()).requires_restart());
        assert!(!AppError::ValidationError("x".into()).requires_restart());
        assert!(!AppError::BadRequest("x".into()).requires_restart());
    }
}
