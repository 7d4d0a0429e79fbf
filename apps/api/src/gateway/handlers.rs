//! Axum route handlers for the Generation API.

use std::sync::atomic::{AtomicBool, Ordering};

use axum::{extract::State, Json};
use tracing::info;

use crate::errors::AppError;
use crate::gateway::{attach_ids, ContentGenerator};
use crate::models::resume::ResumeData;
use crate::state::AppState;
use crate::store::ResumeStore;

/// Releases the busy flag when the generation attempt ends, successful or
/// not, so a failure re-arms the generate action.
pub struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Attempts to mark generation as in flight. Returns `None` if another
/// call already holds the flag — the sole mutual-exclusion mechanism; there
/// is no queueing of a second request.
pub fn try_acquire(flag: &AtomicBool) -> Option<BusyGuard<'_>> {
    flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .ok()
        .map(|_| BusyGuard(flag))
}

/// POST /api/v1/generate
///
/// Snapshot → gateway call → positional id re-attachment → merge.
/// While a call is outstanding the busy flag rejects re-triggering, but
/// form editing stays unrestricted; edits made mid-flight are picked up by
/// the merge's copy-through of personal info, education, and skills.
pub async fn handle_generate(State(state): State<AppState>) -> Result<Json<ResumeData>, AppError> {
    let _guard = try_acquire(&state.generation_busy).ok_or_else(|| {
        AppError::Conflict("A generation request is already in progress".to_string())
    })?;

    let resume = run_generation(&state.store, state.generator.as_ref()).await?;
    Ok(Json(resume))
}

/// GET /api/v1/resume
///
/// Returns the current resume aggregate (the render input).
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<ResumeData> {
    Json(state.store.snapshot_resume().await)
}

/// Runs one generation attempt against a snapshot of the raw input and
/// merges the output. On any failure the store is left untouched.
pub async fn run_generation(
    store: &ResumeStore,
    generator: &dyn ContentGenerator,
) -> Result<ResumeData, AppError> {
    let input = store.snapshot_input().await;

    if input.summary_keywords.trim().is_empty() && input.experience.is_empty() {
        return Err(AppError::Validation(
            "Add summary keywords or at least one experience entry before generating".to_string(),
        ));
    }

    let content = generator
        .generate(&input)
        .await
        .map_err(|e| AppError::Generation(e.to_string()))?;

    // Positional mapping is authoritative — the snapshot taken above is the
    // request list the identifiers are drawn from.
    let experience = attach_ids(&input.experience, content.experience);

    info!(
        entries = experience.len(),
        "generation succeeded; merging into the resume aggregate"
    );

    Ok(store.apply_generation(content.summary, experience).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::gateway::{GeneratedContent, GeneratedExperience, GenerationError};
    use crate::models::input::UserInput;

    struct FixedGenerator(GeneratedContent);

    #[async_trait]
    impl ContentGenerator for FixedGenerator {
        async fn generate(&self, _input: &UserInput) -> Result<GeneratedContent, GenerationError> {
            Ok(self.0.clone())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl ContentGenerator for FailingGenerator {
        async fn generate(&self, _input: &UserInput) -> Result<GeneratedContent, GenerationError> {
            Err(GenerationError::Api {
                status: 503,
                message: "model overloaded".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_successful_generation_merges_with_positional_ids() {
        let store = ResumeStore::new();
        let input = store.snapshot_input().await;
        let raw_ids: Vec<u64> = input.experience.iter().map(|e| e.id).collect();

        let generated = GeneratedContent {
            summary: "Rewritten summary.".to_string(),
            experience: input
                .experience
                .iter()
                .map(|e| GeneratedExperience {
                    job_title: format!("{} (rewritten)", e.job_title),
                    company: e.company.clone(),
                    dates: e.dates.clone(),
                    bullet_points: vec!["Did the thing".to_string()],
                })
                .collect(),
        };

        let resume = run_generation(&store, &FixedGenerator(generated))
            .await
            .unwrap();

        assert_eq!(resume.summary, "Rewritten summary.");
        let derived_ids: Vec<u64> = resume.experience.iter().map(|e| e.id).collect();
        assert_eq!(derived_ids, raw_ids);
    }

    #[tokio::test]
    async fn test_failed_generation_leaves_resume_unchanged_with_message() {
        let store = ResumeStore::new();
        let before = store.snapshot_resume().await;

        let err = run_generation(&store, &FailingGenerator).await.unwrap_err();

        match err {
            AppError::Generation(msg) => assert!(!msg.is_empty()),
            other => panic!("expected Generation error, got {other:?}"),
        }
        assert_eq!(store.snapshot_resume().await, before);
    }

    #[tokio::test]
    async fn test_blank_credential_fails_at_request_time_and_keeps_resume() {
        // Startup does not require a credential; a client built without one
        // must reject the generation call itself, before any network I/O.
        let store = ResumeStore::new();
        let before = store.snapshot_resume().await;
        let client = crate::gateway::GeminiClient::new(String::new());

        let err = run_generation(&store, &client).await.unwrap_err();
        match err {
            AppError::Generation(msg) => assert!(msg.contains("GEMINI_API_KEY")),
            other => panic!("expected Generation error, got {other:?}"),
        }
        assert_eq!(store.snapshot_resume().await, before);
    }

    #[tokio::test]
    async fn test_busy_flag_blocks_second_acquire_until_released() {
        let flag = AtomicBool::new(false);

        let guard = try_acquire(&flag).expect("first acquire succeeds");
        assert!(try_acquire(&flag).is_none(), "second acquire is rejected");

        drop(guard);
        assert!(
            try_acquire(&flag).is_some(),
            "flag re-arms once the attempt ends"
        );
    }

    #[tokio::test]
    async fn test_generation_with_nothing_to_generate_is_rejected() {
        let store = ResumeStore::new();
        store.set_summary_keywords(String::new()).await;
        let input = store.snapshot_input().await;
        for exp in &input.experience {
            store.remove_experience(exp.id).await;
        }

        let generated = GeneratedContent {
            summary: "unused".to_string(),
            experience: vec![],
        };
        let err = run_generation(&store, &FixedGenerator(generated))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
