//! Prompt and response-schema constants for the generation gateway.

use serde_json::{json, Value};

use crate::models::input::UserInput;

/// Generation prompt template.
/// Replace: `{summary_keywords}`, `{work_history}`.
pub const GENERATION_PROMPT_TEMPLATE: &str = r#"Act as a professional resume writer and career coach.
Based on the following information, generate a professional summary and detailed, action-oriented bullet points for each work experience.
The tone should be confident, professional, and results-focused. Use strong action verbs.

**Summary Keywords:**
{summary_keywords}

**Work History:**
{work_history}

Return the response in a structured JSON format."#;

/// Builds the generation prompt by embedding the summary keywords and, per
/// experience entry, its title, company, dates, and raw duties.
pub fn build_prompt(input: &UserInput) -> String {
    let work_history = input
        .experience
        .iter()
        .map(|exp| {
            format!(
                "- Job Title: {}\n  Company: {}\n  Dates: {}\n  Key Duties/Achievements: {}",
                exp.job_title, exp.company, exp.dates, exp.duties
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    GENERATION_PROMPT_TEMPLATE
        .replace("{summary_keywords}", &input.summary_keywords)
        .replace("{work_history}", &work_history)
}

/// The fixed response schema sent with every generation request.
///
/// Constrains the reply to exactly
/// `{ summary: string, experience: [{ jobTitle, company, dates, bulletPoints }] }`,
/// all fields required. Identifiers are deliberately absent — they are
/// re-attached positionally after the call.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": {
                "type": "STRING",
                "description": "A 2-4 sentence professional summary based on the provided keywords and experience."
            },
            "experience": {
                "type": "ARRAY",
                "description": "An array of work experiences, one per entry in the work history, in the same order.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "jobTitle": { "type": "STRING" },
                        "company": { "type": "STRING" },
                        "dates": { "type": "STRING" },
                        "bulletPoints": {
                            "type": "ARRAY",
                            "description": "3-5 action-oriented bullet points describing responsibilities and achievements.",
                            "items": { "type": "STRING" }
                        }
                    },
                    "required": ["jobTitle", "company", "dates", "bulletPoints"]
                }
            }
        },
        "required": ["summary", "experience"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::input::UserExperienceInput;
    use crate::models::resume::PersonalInfo;

    fn sample_input() -> UserInput {
        UserInput {
            personal_info: PersonalInfo {
                name: "Jane Roe".to_string(),
                title: "Engineer".to_string(),
                email: "jane@example.com".to_string(),
                phone: "555-0100".to_string(),
                location: "Austin, TX".to_string(),
                linkedin: None,
                certificates_url: None,
                profile_picture_url: None,
            },
            summary_keywords: "distributed systems, mentoring".to_string(),
            experience: vec![UserExperienceInput {
                id: 7,
                job_title: "Staff Engineer".to_string(),
                company: "Widgets LLC".to_string(),
                dates: "2019 - 2023".to_string(),
                duties: "Ran the platform team".to_string(),
            }],
            education: vec![],
            skills: vec![],
        }
    }

    #[test]
    fn test_build_prompt_embeds_keywords_and_every_experience_field() {
        let prompt = build_prompt(&sample_input());

        assert!(prompt.contains("distributed systems, mentoring"));
        assert!(prompt.contains("Staff Engineer"));
        assert!(prompt.contains("Widgets LLC"));
        assert!(prompt.contains("2019 - 2023"));
        assert!(prompt.contains("Ran the platform team"));
    }

    #[test]
    fn test_build_prompt_leaves_no_unfilled_placeholders() {
        let prompt = build_prompt(&sample_input());
        assert!(!prompt.contains("{summary_keywords}"));
        assert!(!prompt.contains("{work_history}"));
    }

    #[test]
    fn test_response_schema_requires_exactly_the_contract_fields() {
        let schema = response_schema();

        assert_eq!(schema["required"], json!(["summary", "experience"]));
        let item = &schema["properties"]["experience"]["items"];
        assert_eq!(
            item["required"],
            json!(["jobTitle", "company", "dates", "bulletPoints"])
        );
        // No identifier field is ever requested from the model.
        assert!(item["properties"].get("id").is_none());
    }
}
