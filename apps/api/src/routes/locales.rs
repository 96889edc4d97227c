use axum::Json;
use serde::Serialize;

use crate::i18n::Locale;

#[derive(Debug, Serialize)]
pub struct LocaleView {
    pub code: Locale,
    pub name: &'static str,
    pub parent: Option<Locale>,
    pub rtl: bool,
}

/// GET /api/v1/locales
pub async fn handle_list_locales() -> Json<Vec<LocaleView>> {
    Json(
        Locale::ALL
            .iter()
            .map(|&locale| LocaleView {
                code: locale,
                name: locale.display_name(),
                parent: locale.parent(),
                rtl: locale.is_rtl(),
            })
            .collect(),
    )
}
