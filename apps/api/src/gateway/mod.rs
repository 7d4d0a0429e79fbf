//! Content Generation Gateway — builds a prompt from the raw input, invokes
//! the generative model under a fixed output schema, and re-attaches stable
//! identifiers to the returned experience entries.
//!
//! ARCHITECTURAL RULE: no other module may call the Gemini API directly.
//! All model interactions go through `GeminiClient` in this module.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::input::{UserExperienceInput, UserInput};
use crate::models::resume::Experience;

pub mod client;
pub mod handlers;
pub mod prompts;

pub use client::{GeminiClient, GenerationError};

/// Structured model output, exactly as constrained by the response schema.
/// The model never sees or returns identifiers; `attach_ids` restores them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub summary: String,
    pub experience: Vec<GeneratedExperience>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedExperience {
    pub job_title: String,
    pub company: String,
    pub dates: String,
    pub bullet_points: Vec<String>,
}

/// Seam for the generation call, carried in `AppState` as
/// `Arc<dyn ContentGenerator>` so tests substitute a fake transport.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self, input: &UserInput) -> Result<GeneratedContent, GenerationError>;
}

/// Re-associates returned experience entries with the identifiers of the
/// raw entries at the same ordinal position.
///
/// Positional mapping is authoritative: anything the model may have echoed
/// back is ignored. A response shorter than the request is remapped as far
/// as it goes; surplus entries with no raw counterpart are dropped. Either
/// mismatch is logged.
pub fn attach_ids(
    raw: &[UserExperienceInput],
    generated: Vec<GeneratedExperience>,
) -> Vec<Experience> {
    if generated.len() != raw.len() {
        warn!(
            requested = raw.len(),
            returned = generated.len(),
            "model returned a different number of experience entries than requested; \
             remapping the common prefix"
        );
    }

    raw.iter()
        .zip(generated)
        .map(|(input, gen)| Experience {
            id: input.id,
            job_title: gen.job_title,
            company: gen.company,
            dates: gen.dates,
            bullet_points: gen.bullet_points,
        })
        .collect()
}
