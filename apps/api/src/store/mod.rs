//! Resume Aggregate Store — in-memory holder of the two parallel records:
//! the raw user input (editable) and the derived resume (display-ready).
//!
//! All form mutations go through here, as does the generation merge. The
//! store is the only shared mutable state in the service; handlers take
//! cloned snapshots and never hold the lock across an await point.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Deserialize;
use tokio::sync::RwLock;

use crate::models::input::{UserExperienceInput, UserInput};
use crate::models::resume::{Education, Experience, PersonalInfo, ResumeData, Skill};

mod seed;

/// Per-field patch for a raw experience entry. Absent fields are untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperiencePatch {
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub dates: Option<String>,
    pub duties: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationPatch {
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub dates: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillPatch {
    pub name: Option<String>,
}

struct Records {
    input: UserInput,
    resume: ResumeData,
}

/// Thread-safe store for one resume session.
///
/// Ids are minted from a monotonically increasing counter, so an id removed
/// from a list never reappears within the session.
#[derive(Clone)]
pub struct ResumeStore {
    records: Arc<RwLock<Records>>,
    next_id: Arc<AtomicU64>,
}

impl ResumeStore {
    /// Creates a store seeded with the sample resume, so the preview is
    /// meaningful before the first generation run.
    pub fn new() -> Self {
        let input = seed::sample_input();
        let resume = seed::sample_resume(&input);
        Self::with_records(input, resume)
    }

    pub fn with_records(input: UserInput, resume: ResumeData) -> Self {
        let max_seeded_id = input
            .experience
            .iter()
            .map(|e| e.id)
            .chain(input.education.iter().map(|e| e.id))
            .chain(input.skills.iter().map(|s| s.id))
            .max()
            .unwrap_or(0);

        Self {
            records: Arc::new(RwLock::new(Records { input, resume })),
            next_id: Arc::new(AtomicU64::new(max_seeded_id + 1)),
        }
    }

    fn mint_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    // ── Snapshots ───────────────────────────────────────────────────────

    pub async fn snapshot_input(&self) -> UserInput {
        self.records.read().await.input.clone()
    }

    pub async fn snapshot_resume(&self) -> ResumeData {
        self.records.read().await.resume.clone()
    }

    // ── Personal info / summary keywords ────────────────────────────────

    pub async fn set_personal_info(&self, info: PersonalInfo) {
        self.records.write().await.input.personal_info = info;
    }

    pub async fn set_profile_picture(&self, data_uri: String) {
        self.records.write().await.input.personal_info.profile_picture_url = Some(data_uri);
    }

    pub async fn set_summary_keywords(&self, keywords: String) {
        self.records.write().await.input.summary_keywords = keywords;
    }

    // ── Experience list ─────────────────────────────────────────────────

    pub async fn add_experience(&self) -> UserExperienceInput {
        let entry = UserExperienceInput {
            id: self.mint_id(),
            job_title: String::new(),
            company: String::new(),
            dates: String::new(),
            duties: String::new(),
        };
        self.records.write().await.input.experience.push(entry.clone());
        entry
    }

    pub async fn update_experience(&self, id: u64, patch: ExperiencePatch) -> Option<UserExperienceInput> {
        let mut records = self.records.write().await;
        let entry = records.input.experience.iter_mut().find(|e| e.id == id)?;
        if let Some(v) = patch.job_title {
            entry.job_title = v;
        }
        if let Some(v) = patch.company {
            entry.company = v;
        }
        if let Some(v) = patch.dates {
            entry.dates = v;
        }
        if let Some(v) = patch.duties {
            entry.duties = v;
        }
        Some(entry.clone())
    }

    pub async fn remove_experience(&self, id: u64) -> bool {
        let mut records = self.records.write().await;
        let before = records.input.experience.len();
        records.input.experience.retain(|e| e.id != id);
        records.input.experience.len() < before
    }

    // ── Education list ──────────────────────────────────────────────────

    pub async fn add_education(&self) -> Education {
        let entry = Education {
            id: self.mint_id(),
            degree: String::new(),
            institution: String::new(),
            dates: String::new(),
        };
        self.records.write().await.input.education.push(entry.clone());
        entry
    }

    pub async fn update_education(&self, id: u64, patch: EducationPatch) -> Option<Education> {
        let mut records = self.records.write().await;
        let entry = records.input.education.iter_mut().find(|e| e.id == id)?;
        if let Some(v) = patch.degree {
            entry.degree = v;
        }
        if let Some(v) = patch.institution {
            entry.institution = v;
        }
        if let Some(v) = patch.dates {
            entry.dates = v;
        }
        Some(entry.clone())
    }

    pub async fn remove_education(&self, id: u64) -> bool {
        let mut records = self.records.write().await;
        let before = records.input.education.len();
        records.input.education.retain(|e| e.id != id);
        records.input.education.len() < before
    }

    // ── Skills list ─────────────────────────────────────────────────────

    pub async fn add_skill(&self) -> Skill {
        let entry = Skill {
            id: self.mint_id(),
            name: String::new(),
        };
        self.records.write().await.input.skills.push(entry.clone());
        entry
    }

    pub async fn update_skill(&self, id: u64, patch: SkillPatch) -> Option<Skill> {
        let mut records = self.records.write().await;
        let entry = records.input.skills.iter_mut().find(|s| s.id == id)?;
        if let Some(v) = patch.name {
            entry.name = v;
        }
        Some(entry.clone())
    }

    pub async fn remove_skill(&self, id: u64) -> bool {
        let mut records = self.records.write().await;
        let before = records.input.skills.len();
        records.input.skills.retain(|s| s.id != id);
        records.input.skills.len() < before
    }

    // ── Generation merge ────────────────────────────────────────────────

    /// Merges gateway output into the resume aggregate.
    ///
    /// `summary` and `experience` are replaced wholesale; personal info,
    /// education, and skills are copied fresh from the current raw input,
    /// so edits made while the generation call was in flight are carried
    /// into the displayed resume. On generation failure this is simply
    /// never called and the prior aggregate stays intact.
    pub async fn apply_generation(&self, summary: String, experience: Vec<Experience>) -> ResumeData {
        let mut records = self.records.write().await;
        records.resume = ResumeData {
            personal_info: records.input.personal_info.clone(),
            summary,
            experience,
            education: records.input.education.clone(),
            skills: records.input.skills.clone(),
        };
        records.resume.clone()
    }
}

impl Default for ResumeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_store() -> ResumeStore {
        ResumeStore::new()
    }

    #[tokio::test]
    async fn test_apply_generation_copies_untouched_sections_from_input() {
        let store = empty_store();

        // Edit everything the gateway never sees.
        let mut info = store.snapshot_input().await.personal_info;
        info.name = "Edited Mid-Flight".to_string();
        store.set_personal_info(info).await;
        let edu = store.add_education().await;
        store
            .update_education(
                edu.id,
                EducationPatch {
                    degree: Some("M.S. in Robotics".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let skill = store.add_skill().await;
        store
            .update_skill(
                skill.id,
                SkillPatch {
                    name: Some("Kubernetes".to_string()),
                },
            )
            .await
            .unwrap();

        let resume = store
            .apply_generation("A new summary.".to_string(), vec![])
            .await;

        let input = store.snapshot_input().await;
        assert_eq!(resume.personal_info, input.personal_info);
        assert_eq!(resume.education, input.education);
        assert_eq!(resume.skills, input.skills);
        assert_eq!(resume.summary, "A new summary.");
    }

    #[tokio::test]
    async fn test_add_then_remove_restores_list_and_never_reuses_id() {
        let store = empty_store();
        let before = store.snapshot_input().await.experience;

        let added = store.add_experience().await;
        assert!(store.remove_experience(added.id).await);

        let after = store.snapshot_input().await.experience;
        assert_eq!(before, after);

        // The transient id is never minted again.
        let next = store.add_experience().await;
        assert_ne!(next.id, added.id);
    }

    #[tokio::test]
    async fn test_add_then_remove_education_and_skills() {
        let store = empty_store();

        let edu_before = store.snapshot_input().await.education;
        let edu = store.add_education().await;
        assert!(store.remove_education(edu.id).await);
        assert_eq!(store.snapshot_input().await.education, edu_before);

        let skills_before = store.snapshot_input().await.skills;
        let skill = store.add_skill().await;
        assert!(store.remove_skill(skill.id).await);
        assert_eq!(store.snapshot_input().await.skills, skills_before);
    }

    #[tokio::test]
    async fn test_update_experience_patches_single_field() {
        let store = empty_store();
        let added = store.add_experience().await;

        let updated = store
            .update_experience(
                added.id,
                ExperiencePatch {
                    company: Some("Acme".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.company, "Acme");
        assert_eq!(updated.job_title, ""); // untouched fields stay empty
    }

    #[tokio::test]
    async fn test_remove_unknown_id_is_a_no_op() {
        let store = empty_store();
        assert!(!store.remove_experience(u64::MAX).await);
        assert!(!store.remove_education(u64::MAX).await);
        assert!(!store.remove_skill(u64::MAX).await);
    }

    #[tokio::test]
    async fn test_resume_untouched_until_generation_applied() {
        let store = empty_store();
        let resume_before = store.snapshot_resume().await;

        // Form edits alone never move the displayed resume.
        store.set_summary_keywords("totally new keywords".to_string()).await;
        store.add_skill().await;

        assert_eq!(store.snapshot_resume().await, resume_before);
    }

    #[tokio::test]
    async fn test_empty_strings_are_accepted_as_field_values() {
        let store = empty_store();
        let added = store.add_experience().await;
        let updated = store
            .update_experience(
                added.id,
                ExperiencePatch {
                    job_title: Some(String::new()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.job_title, "");
    }
}
