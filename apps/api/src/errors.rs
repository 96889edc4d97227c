use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::assembly::AssembleError;
use crate::frameworks::UnknownFramework;
use crate::i18n::UnknownLocale;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    FrameworkNotFound(#[from] UnknownFramework),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Required fields are blank and blanks are not allowed. Carries the localized message.
    #[error("{0}")]
    RequiredFieldsMissing(String),

    #[error("AI enhancement is not configured")]
    AiUnavailable,

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

impl From<UnknownLocale> for AppError {
    fn from(e: UnknownLocale) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl From<AssembleError> for AppError {
    fn from(e: AssembleError) -> Self {
        match e {
            AssembleError::FrameworkNotFound(e) => AppError::FrameworkNotFound(e),
            AssembleError::RequiredFieldsMissing(msg) => AppError::RequiredFieldsMissing(msg),
        }
    }
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::FrameworkNotFound(e) => {
                (StatusCode::NOT_FOUND, "FRAMEWORK_NOT_FOUND", e.to_string())
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::RequiredFieldsMissing(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "REQUIRED_FIELDS_MISSING",
                msg.clone(),
            ),
            AppError::AiUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "AI_UNAVAILABLE",
                "AI enhancement is not configured on this server".to_string(),
            ),
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    "The AI provider could not complete the request".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
