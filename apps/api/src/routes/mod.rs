pub mod health;
pub mod locales;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assembly::handlers as assembly;
use crate::enhance::handlers as enhance;
use crate::frameworks::handlers as frameworks;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/locales", get(locales::handle_list_locales))
        // Framework catalogue
        .route(
            "/api/v1/frameworks",
            get(frameworks::handle_list_frameworks),
        )
        .route(
            "/api/v1/frameworks/:name",
            get(frameworks::handle_get_framework),
        )
        .route(
            "/api/v1/frameworks/:name/example",
            get(frameworks::handle_get_example),
        )
        // Assembly API
        .route("/api/v1/prompts/assemble", post(assembly::handle_assemble))
        .route("/api/v1/prompts/preview", post(assembly::handle_preview))
        .route("/api/v1/prompts/export", post(assembly::handle_export))
        // AI enhancement (503 when no generator is configured)
        .route("/api/v1/enhance", post(enhance::handle_enhance))
        .route("/api/v1/suggest", post(enhance::handle_suggest))
        .with_state(state)
}
