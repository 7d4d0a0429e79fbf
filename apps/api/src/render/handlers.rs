//! Axum route handler for the Preview API.

use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;

use crate::models::resume::TemplateName;
use crate::render::render_resume;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct PreviewParams {
    pub template: Option<String>,
}

/// GET /api/v1/preview?template=modern|creative|classic
///
/// Renders the current resume aggregate. An unknown or absent selector
/// falls back to the modern template.
pub async fn handle_preview(
    State(state): State<AppState>,
    Query(params): Query<PreviewParams>,
) -> Html<String> {
    let template = params
        .template
        .as_deref()
        .map(TemplateName::parse_or_default)
        .unwrap_or_default();
    tracing::debug!(template = template.as_str(), "preview requested");

    let resume = state.store.snapshot_resume().await;
    Html(render_resume(&resume, template))
}
