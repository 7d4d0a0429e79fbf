//! Display-ready resume data — the sole input to the template renderer.
//!
//! `summary` and `experience` are produced by the generation gateway;
//! everything else is copied through from the raw input at merge time.

use serde::{Deserialize, Serialize};

/// Contact block. Exactly one per resume, mutated in place by the editor.
/// `profile_picture_url` is an opaque `data:` URI produced by the photo upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificates_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
}

/// A derived experience entry. The id is inherited from the raw input entry
/// at the same ordinal position — never from anything the model returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: u64,
    pub job_title: String,
    pub company: String,
    pub dates: String,
    pub bullet_points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: u64,
    pub degree: String,
    pub institution: String,
    pub dates: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: u64,
    pub name: String,
}

/// The resume aggregate. Sole render input; never edited field-by-field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
}

/// Template selector. Unknown names fall back to `Modern` at parse time,
/// so the renderer itself never sees an invalid selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateName {
    #[default]
    Modern,
    Creative,
    Classic,
}

impl TemplateName {
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "modern" => TemplateName::Modern,
            "creative" => TemplateName::Creative,
            "classic" => TemplateName::Classic,
            _ => TemplateName::Modern,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateName::Modern => "modern",
            TemplateName::Creative => "creative",
            TemplateName::Classic => "classic",
        }
    }
}
