pub mod health;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::editor::handlers as editor;
use crate::export::handlers as export;
use crate::gateway::handlers as gateway;
use crate::render::handlers as render;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Aggregates
        .route("/api/v1/resume", get(gateway::handle_get_resume))
        .route("/api/v1/input", get(editor::handle_get_input))
        // Form editor
        .route(
            "/api/v1/input/personal-info",
            put(editor::handle_put_personal_info),
        )
        .route(
            "/api/v1/input/personal-info/photo",
            post(editor::handle_upload_photo),
        )
        .route(
            "/api/v1/input/summary-keywords",
            put(editor::handle_put_summary_keywords),
        )
        .route(
            "/api/v1/input/experience",
            post(editor::handle_add_experience),
        )
        .route(
            "/api/v1/input/experience/:id",
            patch(editor::handle_update_experience),
        )
        .route(
            "/api/v1/input/experience/:id",
            delete(editor::handle_remove_experience),
        )
        .route(
            "/api/v1/input/education",
            post(editor::handle_add_education),
        )
        .route(
            "/api/v1/input/education/:id",
            patch(editor::handle_update_education),
        )
        .route(
            "/api/v1/input/education/:id",
            delete(editor::handle_remove_education),
        )
        .route("/api/v1/input/skills", post(editor::handle_add_skill))
        .route(
            "/api/v1/input/skills/:id",
            patch(editor::handle_update_skill),
        )
        .route(
            "/api/v1/input/skills/:id",
            delete(editor::handle_remove_skill),
        )
        // Generation
        .route("/api/v1/generate", post(gateway::handle_generate))
        // Preview and export
        .route("/api/v1/preview", get(render::handle_preview))
        .route("/api/v1/export/pdf", post(export::handle_export_pdf))
        .route("/api/v1/export/docx", post(export::handle_export_docx))
        .with_state(state)
}
