//! The three template strategies. Each arranges the same fields its own
//! way; all values pass through `escape_html` on the way in.

use crate::models::resume::ResumeData;
use crate::render::{escape_html, ResumeTemplate};

/// Wraps rendered body markup in a standalone page. `width_px` matches the
/// on-screen document width and is what the PDF export derives its page
/// size from.
pub const DOCUMENT_WIDTH_PX: u32 = 794; // A4 width at 96dpi

fn document_shell(title: &str, style: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body {{ margin: 0; background: #fff; }}
#resume {{ width: {DOCUMENT_WIDTH_PX}px; margin: 0 auto; }}
{style}
</style>
</head>
<body>
<div id="resume">
{body}
</div>
</body>
</html>
"#
    )
}

fn bullet_list(points: &[String]) -> String {
    points
        .iter()
        .map(|p| format!("      <li>{}</li>", escape_html(p)))
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Modern ──────────────────────────────────────────────────────────────

pub struct ModernTemplate;

impl ResumeTemplate for ModernTemplate {
    fn name(&self) -> &'static str {
        "modern"
    }

    fn render(&self, data: &ResumeData) -> String {
        let info = &data.personal_info;

        let experience = data
            .experience
            .iter()
            .map(|exp| {
                format!(
                    r#"  <div class="entry">
    <div class="row"><h4>{}</h4><span class="dates">{}</span></div>
    <p class="company">{}</p>
    <ul>
{}
    </ul>
  </div>"#,
                    escape_html(&exp.job_title),
                    escape_html(&exp.dates),
                    escape_html(&exp.company),
                    bullet_list(&exp.bullet_points),
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let education = data
            .education
            .iter()
            .map(|edu| {
                format!(
                    r#"  <div class="row">
    <div><h4>{}</h4><p class="company">{}</p></div>
    <span class="dates">{}</span>
  </div>"#,
                    escape_html(&edu.degree),
                    escape_html(&edu.institution),
                    escape_html(&edu.dates),
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let skills = data
            .skills
            .iter()
            .map(|s| format!(r#"  <span class="pill">{}</span>"#, escape_html(&s.name)))
            .collect::<Vec<_>>()
            .join("\n");

        let body = format!(
            r#"<div class="page">
<header>
  <h1>{name}</h1>
  <h2>{title}</h2>
  <p class="contact">{email} &bull; {phone} &bull; {location}</p>
</header>
<section>
  <h3>Summary</h3>
  <p>{summary}</p>
</section>
<section>
  <h3>Experience</h3>
{experience}
</section>
<section>
  <h3>Education</h3>
{education}
</section>
<section>
  <h3>Skills</h3>
{skills}
</section>
</div>"#,
            name = escape_html(&info.name),
            title = escape_html(&info.title),
            email = escape_html(&info.email),
            phone = escape_html(&info.phone),
            location = escape_html(&info.location),
            summary = escape_html(&data.summary),
        );

        let style = r#"
.page { font-family: 'Helvetica Neue', Arial, sans-serif; color: #1f2937; padding: 32px; }
header { text-align: center; border-bottom: 2px solid #e5e7eb; padding-bottom: 16px; margin-bottom: 24px; }
header h1 { font-size: 34px; margin: 0; color: #111827; }
header h2 { font-size: 20px; margin: 4px 0; color: #4f46e5; font-weight: 500; }
.contact { font-size: 13px; color: #4b5563; }
section { margin-bottom: 20px; }
section h3 { font-size: 12px; text-transform: uppercase; letter-spacing: 0.08em; color: #4338ca; border-bottom: 1px solid #c7d2fe; padding-bottom: 4px; }
.entry { margin-bottom: 14px; }
.row { display: flex; justify-content: space-between; align-items: baseline; }
.row h4 { margin: 0; font-size: 15px; }
.dates { font-size: 11px; font-family: monospace; color: #6b7280; }
.company { font-size: 13px; font-style: italic; color: #4b5563; margin: 2px 0; }
ul { margin: 4px 0 0; padding-left: 18px; font-size: 13px; }
.pill { display: inline-block; background: #e0e7ff; color: #3730a3; font-size: 12px; padding: 3px 10px; border-radius: 999px; margin: 2px; }
"#;

        document_shell(&escape_html(&info.name), style, &body)
    }
}

// ── Creative ────────────────────────────────────────────────────────────

pub struct CreativeTemplate;

impl ResumeTemplate for CreativeTemplate {
    fn name(&self) -> &'static str {
        "creative"
    }

    fn render(&self, data: &ResumeData) -> String {
        let info = &data.personal_info;

        let picture = match &info.profile_picture_url {
            Some(uri) => format!(r#"<img class="avatar" src="{}" alt="{}">"#, uri, escape_html(&info.name)),
            None => r#"<div class="avatar placeholder"></div>"#.to_string(),
        };

        let mut contact_rows = vec![
            format!("<p>{}</p>", escape_html(&info.email)),
            format!("<p>{}</p>", escape_html(&info.phone)),
            format!("<p>{}</p>", escape_html(&info.location)),
        ];
        if let Some(linkedin) = &info.linkedin {
            contact_rows.push(format!("<p>{}</p>", escape_html(linkedin)));
        }
        if let Some(certs) = &info.certificates_url {
            contact_rows.push(format!("<p>{}</p>", escape_html(certs)));
        }
        let contact = contact_rows.join("\n    ");

        let skills = data
            .skills
            .iter()
            .map(|s| format!("      <li>{}</li>", escape_html(&s.name)))
            .collect::<Vec<_>>()
            .join("\n");

        let education = data
            .education
            .iter()
            .map(|edu| {
                format!(
                    r#"    <div class="edu">
      <h4>{}</h4>
      <p>{}</p>
      <p class="muted">{}</p>
    </div>"#,
                    escape_html(&edu.degree),
                    escape_html(&edu.institution),
                    escape_html(&edu.dates),
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let experience = data
            .experience
            .iter()
            .map(|exp| {
                format!(
                    r#"  <div class="entry">
    <div class="row"><h4>{}</h4><span class="dates">{}</span></div>
    <p class="company">{}</p>
    <ul>
{}
    </ul>
  </div>"#,
                    escape_html(&exp.job_title),
                    escape_html(&exp.dates),
                    escape_html(&exp.company),
                    bullet_list(&exp.bullet_points),
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let body = format!(
            r#"<div class="layout">
<aside>
  <div class="identity">
    {picture}
    <h1>{name}</h1>
    <h2>{title}</h2>
  </div>
  <div class="block">
    <h3>Contact</h3>
    {contact}
  </div>
  <div class="block">
    <h3>Skills</h3>
    <ul>
{skills}
    </ul>
  </div>
  <div class="block">
    <h3>Education</h3>
{education}
  </div>
</aside>
<main>
  <section>
    <h3>Summary</h3>
    <p>{summary}</p>
  </section>
  <section>
    <h3>Experience</h3>
{experience}
  </section>
</main>
</div>"#,
            name = escape_html(&info.name),
            title = escape_html(&info.title),
            summary = escape_html(&data.summary),
        );

        let style = r#"
.layout { display: flex; font-family: 'Helvetica Neue', Arial, sans-serif; }
aside { width: 33%; background: #1e293b; color: #f1f5f9; padding: 24px; box-sizing: border-box; }
main { width: 67%; padding: 32px; box-sizing: border-box; color: #1f2937; }
.identity { text-align: center; margin-bottom: 28px; }
.avatar { width: 96px; height: 96px; border-radius: 50%; object-fit: cover; border: 4px solid #475569; }
.placeholder { background: #334155; margin: 0 auto; }
aside h1 { font-size: 22px; margin: 12px 0 0; }
aside h2 { font-size: 14px; font-weight: 300; color: #cbd5e1; margin: 4px 0 0; }
aside h3 { font-size: 11px; text-transform: uppercase; letter-spacing: 0.12em; color: #94a3b8; border-bottom: 1px solid #475569; padding-bottom: 4px; }
.block { margin-top: 24px; font-size: 13px; }
.block ul { padding-left: 18px; margin: 6px 0; }
.edu { margin-bottom: 10px; }
.edu h4 { font-size: 13px; margin: 0; }
.edu p { font-size: 12px; margin: 1px 0; }
.muted { color: #94a3b8; }
main h3 { font-size: 19px; color: #1e293b; border-bottom: 2px solid #cbd5e1; padding-bottom: 4px; }
.entry { margin-bottom: 14px; }
.row { display: flex; justify-content: space-between; align-items: baseline; }
.row h4 { margin: 0; font-size: 15px; }
.dates { font-size: 11px; font-family: monospace; color: #6b7280; }
.company { font-size: 13px; font-style: italic; color: #4b5563; margin: 2px 0; }
main ul { margin: 4px 0 0; padding-left: 18px; font-size: 13px; }
"#;

        document_shell(&escape_html(&info.name), style, &body)
    }
}

// ── Classic ─────────────────────────────────────────────────────────────

pub struct ClassicTemplate;

impl ResumeTemplate for ClassicTemplate {
    fn name(&self) -> &'static str {
        "classic"
    }

    fn render(&self, data: &ResumeData) -> String {
        let info = &data.personal_info;

        let experience = data
            .experience
            .iter()
            .map(|exp| {
                format!(
                    r#"  <div class="entry">
    <div class="row">
      <div><h4>{}</h4><p class="role">{}</p></div>
      <p class="dates">{}</p>
    </div>
    <ul>
{}
    </ul>
  </div>"#,
                    escape_html(&exp.company),
                    escape_html(&exp.job_title),
                    escape_html(&exp.dates),
                    bullet_list(&exp.bullet_points),
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let education = data
            .education
            .iter()
            .map(|edu| {
                format!(
                    r#"  <div class="row">
    <div><h4>{}</h4><p class="role">{}</p></div>
    <p class="dates">{}</p>
  </div>"#,
                    escape_html(&edu.institution),
                    escape_html(&edu.degree),
                    escape_html(&edu.dates),
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        // Presentation-only join; the renderer never reshapes data.
        let skills = data
            .skills
            .iter()
            .map(|s| escape_html(&s.name))
            .collect::<Vec<_>>()
            .join(", ");

        let body = format!(
            r#"<div class="page">
<header>
  <h1>{name}</h1>
  <p>{location} | {phone} | {email}</p>
</header>
<section>
  <h2>Professional Summary</h2>
  <p>{summary}</p>
</section>
<section>
  <h2>Work Experience</h2>
{experience}
</section>
<section>
  <h2>Education</h2>
{education}
</section>
<section>
  <h2>Skills</h2>
  <p>{skills}</p>
</section>
</div>"#,
            name = escape_html(&info.name),
            location = escape_html(&info.location),
            phone = escape_html(&info.phone),
            email = escape_html(&info.email),
            summary = escape_html(&data.summary),
        );

        let style = r#"
.page { font-family: Georgia, 'Times New Roman', serif; color: #000; padding: 40px; }
header { text-align: center; margin-bottom: 24px; }
header h1 { font-size: 28px; letter-spacing: 0.05em; margin: 0; }
header p { font-size: 13px; margin: 4px 0 0; }
section { margin-bottom: 18px; }
section h2 { font-size: 16px; text-transform: uppercase; border-bottom: 1px solid #000; padding-bottom: 3px; }
.entry { margin-bottom: 12px; }
.row { display: flex; justify-content: space-between; align-items: flex-start; }
.row h4 { margin: 0; font-size: 14px; }
.role { font-size: 13px; font-style: italic; margin: 1px 0; }
.dates { font-size: 13px; margin: 0; }
ul { margin: 4px 0 0; padding-left: 20px; font-size: 13px; }
"#;

        document_shell(&escape_html(&info.name), style, &body)
    }
}
