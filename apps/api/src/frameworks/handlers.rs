//! Axum route handlers for the framework catalogue.

use axum::{
    extract::{Path, Query},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::frameworks::{examples::example_for, FieldValues, Framework};
use crate::i18n::{self, Locale};

#[derive(Debug, Default, Deserialize)]
pub struct LocaleQuery {
    pub locale: Option<String>,
}

impl LocaleQuery {
    pub fn locale(&self) -> Result<Locale, AppError> {
        Ok(i18n::parse_or_default(self.locale.as_deref())?)
    }
}

#[derive(Debug, Serialize)]
pub struct FieldView {
    pub name: &'static str,
    pub label: String,
    pub help: String,
    pub required: bool,
}

#[derive(Debug, Serialize)]
pub struct FrameworkView {
    pub name: &'static str,
    pub locale: Locale,
    pub fields: Vec<FieldView>,
}

impl FrameworkView {
    fn new(framework: Framework, locale: Locale) -> Self {
        let fields = framework
            .fields()
            .iter()
            .map(|&name| FieldView {
                name,
                label: i18n::label(locale, name),
                help: i18n::help(locale, name),
                required: framework.is_required(name),
            })
            .collect();

        Self {
            name: framework.name(),
            locale,
            fields,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExampleResponse {
    pub framework: &'static str,
    pub locale: Locale,
    pub fields: FieldValues,
}

/// GET /api/v1/frameworks
pub async fn handle_list_frameworks(
    Query(query): Query<LocaleQuery>,
) -> Result<Json<Vec<FrameworkView>>, AppError> {
    let locale = query.locale()?;
    Ok(Json(
        Framework::ALL
            .iter()
            .map(|&f| FrameworkView::new(f, locale))
            .collect(),
    ))
}

/// GET /api/v1/frameworks/:name
pub async fn handle_get_framework(
    Path(name): Path<String>,
    Query(query): Query<LocaleQuery>,
) -> Result<Json<FrameworkView>, AppError> {
    let framework: Framework = name.parse()?;
    Ok(Json(FrameworkView::new(framework, query.locale()?)))
}

/// GET /api/v1/frameworks/:name/example
///
/// Preset values that fill the form with a worked example.
pub async fn handle_get_example(
    Path(name): Path<String>,
    Query(query): Query<LocaleQuery>,
) -> Result<Json<ExampleResponse>, AppError> {
    let framework: Framework = name.parse()?;
    let locale = query.locale()?;

    Ok(Json(ExampleResponse {
        framework: framework.name(),
        locale,
        fields: example_for(framework, locale),
    }))
}
