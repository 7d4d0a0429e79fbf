//! Axum route handlers for the Export API.
//!
//! Failures are logged and surfaced to the caller as a transient
//! `EXPORT_ERROR` notice; nothing is retried and no state changes.

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue},
};
use tracing::error;

use crate::errors::AppError;
use crate::export::export_file_name;
use crate::models::resume::TemplateName;
use crate::render::handlers::PreviewParams;
use crate::render::render_resume;
use crate::state::AppState;

const PDF_MIME: &str = "application/pdf";
const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// POST /api/v1/export/pdf?template=...
pub async fn handle_export_pdf(
    State(state): State<AppState>,
    Query(params): Query<PreviewParams>,
) -> Result<(HeaderMap, Vec<u8>), AppError> {
    let (html, owner) = rendered_document(&state, &params).await;
    let file_name = export_file_name(&owner, "pdf");

    let bytes = state
        .exporter
        .to_pdf(&html, &file_name)
        .await
        .map_err(|e| {
            error!("PDF export failed: {e}");
            AppError::Export(e.to_string())
        })?;

    Ok((attachment_headers(PDF_MIME, &file_name), bytes))
}

/// POST /api/v1/export/docx?template=...
pub async fn handle_export_docx(
    State(state): State<AppState>,
    Query(params): Query<PreviewParams>,
) -> Result<(HeaderMap, Vec<u8>), AppError> {
    let (html, owner) = rendered_document(&state, &params).await;
    let file_name = export_file_name(&owner, "docx");

    let bytes = state
        .exporter
        .to_docx(&html, &file_name)
        .await
        .map_err(|e| {
            error!("DOCX export failed: {e}");
            AppError::Export(e.to_string())
        })?;

    Ok((attachment_headers(DOCX_MIME, &file_name), bytes))
}

/// Both adapters operate on the currently rendered visual document: the
/// resume aggregate as it stands, through the selected template.
async fn rendered_document(state: &AppState, params: &PreviewParams) -> (String, String) {
    let template = params
        .template
        .as_deref()
        .map(TemplateName::parse_or_default)
        .unwrap_or_default();

    let resume = state.store.snapshot_resume().await;
    let owner = resume.personal_info.name.clone();
    (render_resume(&resume, template), owner)
}

fn attachment_headers(mime: &str, file_name: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(mime) {
        headers.insert(header::CONTENT_TYPE, value);
    }
    if let Ok(value) = HeaderValue::from_str(&format!("attachment; filename=\"{file_name}\"")) {
        headers.insert(header::CONTENT_DISPOSITION, value);
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_headers_carry_download_name() {
        let headers = attachment_headers(PDF_MIME, "John_Doe_Resume.pdf");
        assert_eq!(headers[header::CONTENT_TYPE], PDF_MIME);
        assert_eq!(
            headers[header::CONTENT_DISPOSITION],
            "attachment; filename=\"John_Doe_Resume.pdf\""
        );
    }
}
