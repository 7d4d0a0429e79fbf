//! Axum route handlers for the Form Editor API.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::editor::encode_data_uri;
use crate::errors::AppError;
use crate::models::input::{UserExperienceInput, UserInput};
use crate::models::resume::{Education, PersonalInfo, Skill};
use crate::state::AppState;
use crate::store::{EducationPatch, ExperiencePatch, SkillPatch};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryKeywordsRequest {
    pub summary_keywords: String,
}

/// GET /api/v1/input
///
/// Returns the current raw input aggregate.
pub async fn handle_get_input(State(state): State<AppState>) -> Json<UserInput> {
    Json(state.store.snapshot_input().await)
}

/// PUT /api/v1/input/personal-info
pub async fn handle_put_personal_info(
    State(state): State<AppState>,
    Json(info): Json<PersonalInfo>,
) -> Json<PersonalInfo> {
    state.store.set_personal_info(info.clone()).await;
    Json(info)
}

/// PUT /api/v1/input/summary-keywords
pub async fn handle_put_summary_keywords(
    State(state): State<AppState>,
    Json(request): Json<SummaryKeywordsRequest>,
) -> StatusCode {
    state
        .store
        .set_summary_keywords(request.summary_keywords)
        .await;
    StatusCode::NO_CONTENT
}

/// POST /api/v1/input/personal-info/photo
///
/// Accepts a multipart image upload, reads it fully into memory, and stores
/// it as an inline `data:` URI on the personal info record.
pub async fn handle_upload_photo(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<StatusCode, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let content_type = field.content_type().unwrap_or_default().to_string();
        if !content_type.starts_with("image/") {
            continue;
        }

        let bytes: bytes::Bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        if bytes.is_empty() {
            return Err(AppError::Validation("Uploaded image is empty".to_string()));
        }

        let data_uri = encode_data_uri(&content_type, &bytes);
        state.store.set_profile_picture(data_uri).await;
        return Ok(StatusCode::NO_CONTENT);
    }

    Err(AppError::Validation(
        "No image field found in upload".to_string(),
    ))
}

// ── Experience ──────────────────────────────────────────────────────────

/// POST /api/v1/input/experience — appends an empty entry with a fresh id.
pub async fn handle_add_experience(
    State(state): State<AppState>,
) -> (StatusCode, Json<UserExperienceInput>) {
    (StatusCode::CREATED, Json(state.store.add_experience().await))
}

/// PATCH /api/v1/input/experience/:id
pub async fn handle_update_experience(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(patch): Json<ExperiencePatch>,
) -> Result<Json<UserExperienceInput>, AppError> {
    state
        .store
        .update_experience(id, patch)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Experience entry {id} not found")))
}

/// DELETE /api/v1/input/experience/:id
pub async fn handle_remove_experience(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    if state.store.remove_experience(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Experience entry {id} not found")))
    }
}

// ── Education ───────────────────────────────────────────────────────────

/// POST /api/v1/input/education
pub async fn handle_add_education(
    State(state): State<AppState>,
) -> (StatusCode, Json<Education>) {
    (StatusCode::CREATED, Json(state.store.add_education().await))
}

/// PATCH /api/v1/input/education/:id
pub async fn handle_update_education(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(patch): Json<EducationPatch>,
) -> Result<Json<Education>, AppError> {
    state
        .store
        .update_education(id, patch)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Education entry {id} not found")))
}

/// DELETE /api/v1/input/education/:id
pub async fn handle_remove_education(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    if state.store.remove_education(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Education entry {id} not found")))
    }
}

// ── Skills ──────────────────────────────────────────────────────────────

/// POST /api/v1/input/skills
pub async fn handle_add_skill(State(state): State<AppState>) -> (StatusCode, Json<Skill>) {
    (StatusCode::CREATED, Json(state.store.add_skill().await))
}

/// PATCH /api/v1/input/skills/:id
pub async fn handle_update_skill(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(patch): Json<SkillPatch>,
) -> Result<Json<Skill>, AppError> {
    state
        .store
        .update_skill(id, patch)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Skill {id} not found")))
}

/// DELETE /api/v1/input/skills/:id
pub async fn handle_remove_skill(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    if state.store.remove_skill(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Skill {id} not found")))
    }
}
