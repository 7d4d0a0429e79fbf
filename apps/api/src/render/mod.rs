//! Template Renderer — pure mapping from the resume aggregate and a
//! template selector to a standalone HTML document.
//!
//! The three templates are interchangeable presentation strategies over one
//! data shape. None of them transforms data; formatting such as joining
//! skill names with a separator is template-local presentation only.

use crate::models::resume::{ResumeData, TemplateName};

pub mod handlers;
pub mod templates;

use templates::{ClassicTemplate, CreativeTemplate, ModernTemplate};

/// One visual arrangement of the resume fields.
pub trait ResumeTemplate: Send + Sync {
    fn name(&self) -> &'static str;
    fn render(&self, data: &ResumeData) -> String;
}

/// Renders the aggregate through the selected strategy. The selector enum
/// is total, so there is no failure path here.
pub fn render_resume(data: &ResumeData, template: TemplateName) -> String {
    let strategy = template_for(template);
    tracing::debug!(template = strategy.name(), "rendering resume");
    strategy.render(data)
}

fn template_for(template: TemplateName) -> &'static dyn ResumeTemplate {
    match template {
        TemplateName::Modern => &ModernTemplate,
        TemplateName::Creative => &CreativeTemplate,
        TemplateName::Classic => &ClassicTemplate,
    }
}

/// Minimal HTML escaping for user-supplied field values.
pub(crate) fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
