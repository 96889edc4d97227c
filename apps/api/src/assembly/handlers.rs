//! Axum route handlers for prompt assembly, preview and export.

use axum::{
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assembly::{assemble_for, export_filename};
use crate::errors::AppError;
use crate::frameworks::{FieldValues, Framework};
use crate::i18n::{self, Locale};

#[derive(Debug, Deserialize)]
pub struct AssembleRequest {
    pub framework: String,
    pub locale: Option<String>,
    #[serde(default)]
    pub fields: FieldValues,
    #[serde(default)]
    pub allow_blanks: bool,
}

#[derive(Debug, Serialize)]
pub struct AssembleResponse {
    pub prompt: String,
    pub filename: String,
}

fn run(request: AssembleRequest, allow_blanks: bool) -> Result<AssembleResponse, AppError> {
    let framework: Framework = request.framework.parse()?;
    let locale: Locale = i18n::parse_or_default(request.locale.as_deref())?;

    let prompt = assemble_for(framework, locale, &request.fields, allow_blanks)?;
    debug!(
        framework = framework.name(),
        %locale,
        chars = prompt.chars().count(),
        "assembled prompt"
    );

    Ok(AssembleResponse {
        prompt,
        filename: export_filename(framework, locale),
    })
}

/// POST /api/v1/prompts/assemble
pub async fn handle_assemble(
    Json(request): Json<AssembleRequest>,
) -> Result<Json<AssembleResponse>, AppError> {
    let allow_blanks = request.allow_blanks;
    Ok(Json(run(request, allow_blanks)?))
}

/// POST /api/v1/prompts/preview
///
/// Live preview while typing: blanks are always allowed.
pub async fn handle_preview(
    Json(request): Json<AssembleRequest>,
) -> Result<Json<AssembleResponse>, AppError> {
    Ok(Json(run(request, true)?))
}

/// POST /api/v1/prompts/export
///
/// The assembled prompt as a downloadable UTF-8 text file.
pub async fn handle_export(Json(request): Json<AssembleRequest>) -> Result<Response, AppError> {
    let allow_blanks = request.allow_blanks;
    let AssembleResponse { prompt, filename } = run(request, allow_blanks)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        prompt,
    )
        .into_response())
}
