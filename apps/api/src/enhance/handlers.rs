//! Axum route handlers for the AI enhancement API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::enhance::extract::ExtractionFailure;
use crate::enhance::{enhance_fields, prompts, suggest_missing, EnhanceOutcome};
use crate::errors::AppError;
use crate::frameworks::{FieldValues, Framework};
use crate::i18n::{self, Locale};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    pub framework: String,
    pub locale: Option<String>,
    #[serde(default)]
    pub fields: FieldValues,
    /// Overrides the configured Gemini model for this call only.
    pub model: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EnhanceResponse {
    pub enhanced: bool,
    pub fields: FieldValues,
    pub ignored_keys: Vec<String>,
    /// Localized `ai_success` / `ai_failed` message.
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<ExtractionFailure>,
}

impl EnhanceResponse {
    fn localized(outcome: EnhanceOutcome, locale: Locale) -> Self {
        let key = if outcome.enhanced { "ai_success" } else { "ai_failed" };
        Self {
            enhanced: outcome.enhanced,
            fields: outcome.fields,
            ignored_keys: outcome.ignored_keys,
            message: i18n::message(locale, key),
            failure: outcome.failure,
        }
    }
}

struct Resolved {
    framework: Framework,
    locale: Locale,
}

fn resolve(request: &EnhanceRequest) -> Result<Resolved, AppError> {
    Ok(Resolved {
        framework: request.framework.parse::<Framework>()?,
        locale: i18n::parse_or_default(request.locale.as_deref())?,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/enhance
///
/// Sends the non-blank fields as a rough draft and merges the model's
/// completed fields back. An unparseable reply returns the input unchanged.
pub async fn handle_enhance(
    State(state): State<AppState>,
    Json(request): Json<EnhanceRequest>,
) -> Result<Json<EnhanceResponse>, AppError> {
    let Resolved { framework, locale } = resolve(&request)?;

    if prompts::draft_from_fields(framework, &request.fields).is_empty() {
        return Err(AppError::Validation(i18n::message(locale, "ai_empty_input")));
    }

    let generator = state.generator()?;
    let settings = state.config.model_settings(request.model.as_deref());
    let outcome = enhance_fields(generator, &settings, framework, locale, request.fields).await?;

    Ok(Json(EnhanceResponse::localized(outcome, locale)))
}

/// POST /api/v1/suggest
///
/// Asks the model for the blank fields only. Filled fields are sent as context
/// and never overwritten.
pub async fn handle_suggest(
    State(state): State<AppState>,
    Json(request): Json<EnhanceRequest>,
) -> Result<Json<EnhanceResponse>, AppError> {
    let Resolved { framework, locale } = resolve(&request)?;

    if prompts::draft_from_fields(framework, &request.fields).is_empty() {
        return Err(AppError::Validation(i18n::message(locale, "ai_empty_input")));
    }

    let generator = state.generator()?;
    let settings = state.config.model_settings(request.model.as_deref());
    let outcome = suggest_missing(generator, &settings, framework, locale, request.fields).await?;

    Ok(Json(EnhanceResponse::localized(outcome, locale)))
}
