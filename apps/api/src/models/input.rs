//! User-authored resume data — the sole edit and generation input.

use serde::{Deserialize, Serialize};

use crate::models::resume::{Education, PersonalInfo, Skill};

/// A raw experience entry as typed by the user. `duties` is free text that
/// the gateway rewrites into bullet points; the id survives the rewrite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserExperienceInput {
    pub id: u64,
    pub job_title: String,
    pub company: String,
    pub dates: String,
    pub duties: String,
}

/// The raw input aggregate. Order of the repeatable lists is insertion
/// order and is display-significant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    pub personal_info: PersonalInfo,
    pub summary_keywords: String,
    pub experience: Vec<UserExperienceInput>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_input_round_trips_through_json() {
        let input = UserInput {
            personal_info: PersonalInfo {
                name: "Jane Roe".to_string(),
                title: "Data Engineer".to_string(),
                email: "jane@example.com".to_string(),
                phone: "555-0100".to_string(),
                location: "Austin, TX".to_string(),
                linkedin: Some("linkedin.com/in/janeroe".to_string()),
                certificates_url: None,
                profile_picture_url: None,
            },
            summary_keywords: "pipelines, warehousing".to_string(),
            experience: vec![UserExperienceInput {
                id: 1,
                job_title: "Data Engineer".to_string(),
                company: "Acme".to_string(),
                dates: "2021 - Present".to_string(),
                duties: "Built ETL pipelines".to_string(),
            }],
            education: vec![],
            skills: vec![Skill {
                id: 1,
                name: "SQL".to_string(),
            }],
        };

        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("summaryKeywords"));
        let recovered: UserInput = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, input);
    }
}
