//! Sample resume seeded into a fresh store.

use crate::models::input::{UserExperienceInput, UserInput};
use crate::models::resume::{Education, Experience, PersonalInfo, ResumeData, Skill};

pub fn sample_input() -> UserInput {
    UserInput {
        personal_info: PersonalInfo {
            name: "John Doe".to_string(),
            title: "Senior Software Engineer".to_string(),
            email: "john.doe@example.com".to_string(),
            phone: "123-456-7890".to_string(),
            location: "San Francisco, CA".to_string(),
            linkedin: Some("linkedin.com/in/johndoe".to_string()),
            certificates_url: Some("github.com/johndoe".to_string()),
            profile_picture_url: None,
        },
        summary_keywords: "Experienced full-stack developer specializing in React, Node.js, \
                           and cloud technologies. Proven track record of delivering \
                           high-quality software solutions."
            .to_string(),
        experience: vec![
            UserExperienceInput {
                id: 1,
                job_title: "Senior Software Engineer".to_string(),
                company: "Tech Solutions Inc.".to_string(),
                dates: "Jan 2020 - Present".to_string(),
                duties: "Led a team to develop a new client-facing dashboard. Mentored junior \
                         developers. Improved application performance by 20%."
                    .to_string(),
            },
            UserExperienceInput {
                id: 2,
                job_title: "Software Engineer".to_string(),
                company: "Innovate Co.".to_string(),
                dates: "Jun 2017 - Dec 2019".to_string(),
                duties: "Worked on the core product API. Wrote unit and integration tests. \
                         Refactored legacy code to modern standards."
                    .to_string(),
            },
        ],
        education: vec![Education {
            id: 3,
            degree: "B.S. in Computer Science".to_string(),
            institution: "State University".to_string(),
            dates: "2013 - 2017".to_string(),
        }],
        skills: vec![
            Skill { id: 4, name: "JavaScript".to_string() },
            Skill { id: 5, name: "TypeScript".to_string() },
            Skill { id: 6, name: "React".to_string() },
            Skill { id: 7, name: "Node.js".to_string() },
            Skill { id: 8, name: "AWS".to_string() },
            Skill { id: 9, name: "Docker".to_string() },
        ],
    }
}

/// Display aggregate shown before the first generation run. Personal info,
/// education, and skills mirror the seeded input; summary and bullets are
/// pre-written sample prose.
pub fn sample_resume(input: &UserInput) -> ResumeData {
    ResumeData {
        personal_info: input.personal_info.clone(),
        summary: "Highly skilled and results-oriented Senior Software Engineer with over 7 \
                  years of experience in designing, developing, and deploying scalable web \
                  applications. Expert in JavaScript, React, and Node.js with a strong \
                  background in cloud infrastructure and DevOps principles."
            .to_string(),
        experience: vec![
            Experience {
                id: 1,
                job_title: "Senior Software Engineer".to_string(),
                company: "Tech Solutions Inc.".to_string(),
                dates: "Jan 2020 - Present".to_string(),
                bullet_points: vec![
                    "Spearheaded the development of a new client-facing analytics dashboard, \
                     resulting in a 40% increase in user engagement."
                        .to_string(),
                    "Mentored and coached a team of 4 junior developers, improving team \
                     productivity and code quality."
                        .to_string(),
                    "Optimized backend APIs and database queries, leading to a 20% reduction \
                     in application response time."
                        .to_string(),
                ],
            },
            Experience {
                id: 2,
                job_title: "Software Engineer".to_string(),
                company: "Innovate Co.".to_string(),
                dates: "Jun 2017 - Dec 2019".to_string(),
                bullet_points: vec![
                    "Contributed to the development of the core product REST API serving \
                     over 1 million requests per day."
                        .to_string(),
                    "Enhanced code quality by increasing unit test coverage from 60% to 95%."
                        .to_string(),
                    "Refactored a critical legacy module to a modern service architecture, \
                     improving maintainability and scalability."
                        .to_string(),
                ],
            },
        ],
        education: input.education.clone(),
        skills: input.skills.clone(),
    }
}
