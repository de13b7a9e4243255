//! Plain-text rendering of the portfolio for non-TUI use.

use crate::model::{Dossier, Workflow};

pub struct TextSummary {
    pub lines: Vec<String>,
}

/// Render the whole portfolio as plain lines: hero, dossier, every workflow
/// with its stages and details, and the contact block.
pub fn build_text_summary(dossier: &Dossier, catalog: &[Workflow]) -> TextSummary {
    let mut lines = Vec::new();

    lines.push(dossier.name.to_string());
    lines.push(dossier.title.to_string());
    lines.push(dossier.specializations.join(" | "));
    lines.push(String::new());

    lines.push("About".to_string());
    lines.push(format!("  {}", dossier.about));
    lines.push(String::new());

    lines.push("Technical Arsenal".to_string());
    for category in &dossier.skills {
        lines.push(format!("  {}", category.name));
        for item in &category.items {
            lines.push(format!("    - {item}"));
        }
    }
    lines.push(String::new());

    lines.push("Experience".to_string());
    for job in &dossier.experience {
        lines.push(format!("  {}", job.title));
        lines.push(format!("  {}", job.tenure));
        for h in &job.highlights {
            lines.push(format!("    - {h}"));
        }
    }
    lines.push(String::new());

    lines.push("Projects".to_string());
    for project in &dossier.projects {
        lines.push(format!("  {}", project.name));
        lines.push(format!("    {}", project.summary));
    }
    lines.push(String::new());

    lines.push("Secure SDLC Pipelines".to_string());
    for wf in catalog {
        lines.push(format!("  {}", wf.name));
        lines.push(format!("    {}", wf.stages.join(" -> ")));
        for stage in &wf.stages {
            if let Some(d) = wf.detail(stage) {
                lines.push(format!("    {stage}: {}", d.description));
                lines.push(format!("      Tools: {}", d.tools.join(", ")));
            }
        }
    }
    lines.push(String::new());

    lines.push("Establish Secure Channel".to_string());
    lines.push(format!("  Email: {}", dossier.contact.email));
    lines.push(format!("  Phone: {}", dossier.contact.phone));
    lines.push(format!("  LinkedIn: {}", dossier.contact.linkedin));

    TextSummary { lines }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    #[test]
    fn summary_covers_every_workflow_and_stage() {
        let catalog = content::catalog();
        let summary = build_text_summary(&content::dossier(), &catalog);
        let text = summary.lines.join("\n");
        for wf in &catalog {
            assert!(text.contains(wf.name), "missing workflow {}", wf.name);
            for stage in &wf.stages {
                assert!(text.contains(stage), "missing stage {stage}");
            }
        }
        assert!(text.contains("OWASP ZAP"));
        assert!(text.contains("Establish Secure Channel"));
    }

    #[test]
    fn summary_leads_with_the_hero_header() {
        let summary = build_text_summary(&content::dossier(), &content::catalog());
        assert_eq!(summary.lines[0], "Ashish Reddy A");
        assert_eq!(summary.lines[1], "DevSecOps & Endpoint Security Architect");
    }
}
