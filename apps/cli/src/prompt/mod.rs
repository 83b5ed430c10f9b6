//! Prompt builder — composes the single optimization instruction sent to
//! the model, plus best-effort contact-field extraction from the resume.

pub mod templates;

use std::sync::LazyLock;

use regex::Regex;

use crate::extract::structure::StructuralSummary;
use crate::prompt::templates::{LATEX_SKELETON, OPTIMIZE_PROMPT_TEMPLATE};

static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z\s]+").unwrap());
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+").unwrap());
static LINKEDIN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"linkedin\.com/in/[a-zA-Z0-9_-]+").unwrap());
static GITHUB_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"github\.com/[a-zA-Z0-9_-]+").unwrap());

/// Contact details scraped from the raw resume text.
///
/// Informational only: the instruction carries the full resume text, so
/// these feed the "Detected candidate" console line rather than the
/// prompt itself. Each field falls back to a fixed placeholder when its
/// scan misses.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
}

pub fn extract_contact_fields(resume_text: &str) -> ContactFields {
    let name = NAME_PATTERN
        .find(resume_text)
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "Name".to_string());

    let email = EMAIL_PATTERN
        .find(resume_text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| "email@example.com".to_string());

    let linkedin = LINKEDIN_PATTERN
        .find(resume_text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| "linkedin.com/in/username".to_string());

    let github = GITHUB_PATTERN
        .find(resume_text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| "github.com/username".to_string());

    ContactFields {
        name,
        email,
        linkedin,
        github,
    }
}

/// Builds the full optimization instruction. Pure and deterministic: the
/// same inputs always produce the same string.
pub fn build_optimization_prompt(
    resume_text: &str,
    structure: &StructuralSummary,
    job_description: &str,
    additional_details: &str,
) -> String {
    OPTIMIZE_PROMPT_TEMPLATE
        .replace("{latex_skeleton}", LATEX_SKELETON)
        .replace("{sections}", &structure.sections.join(", "))
        .replace("{has_bullets}", yes_no(structure.has_bullet_points))
        .replace("{has_tables}", yes_no(structure.has_tables))
        .replace("{indentation}", structure.indentation_style.as_str())
        .replace("{job_description}", job_description)
        .replace("{resume_text}", resume_text)
        .replace("{additional_details}", additional_details)
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::structure::analyze_structure;

    const SAMPLE_RESUME: &str = "Jane Doe\n512-555-0100 jane.doe+work@example.com\n\
        linkedin.com/in/janedoe github.com/janedoe\nEXPERIENCE\n\u{2022} Did a thing";

    #[test]
    fn test_contact_fields_extracted() {
        let contact = extract_contact_fields(SAMPLE_RESUME);
        assert_eq!(contact.name, "Jane Doe");
        assert_eq!(contact.email, "jane.doe+work@example.com");
        assert_eq!(contact.linkedin, "linkedin.com/in/janedoe");
        assert_eq!(contact.github, "github.com/janedoe");
    }

    #[test]
    fn test_contact_fields_fall_back_to_placeholders() {
        let contact = extract_contact_fields("123 Main St (no leading letters)");
        assert_eq!(contact.name, "Name");
        assert_eq!(contact.email, "email@example.com");
        assert_eq!(contact.linkedin, "linkedin.com/in/username");
        assert_eq!(contact.github, "github.com/username");
    }

    #[test]
    fn test_name_is_leading_letter_run_only() {
        let contact = extract_contact_fields("Jane Doe 42\nmore text");
        // The digit terminates the leading run.
        assert_eq!(contact.name, "Jane Doe");
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let structure = analyze_structure(SAMPLE_RESUME);
        let a = build_optimization_prompt(SAMPLE_RESUME, &structure, "JD text", "details");
        let b = build_optimization_prompt(SAMPLE_RESUME, &structure, "JD text", "details");
        assert_eq!(a, b);
    }

    #[test]
    fn test_prompt_carries_all_inputs_and_summary() {
        let structure = analyze_structure(SAMPLE_RESUME);
        let prompt = build_optimization_prompt(
            SAMPLE_RESUME,
            &structure,
            "Senior Rust Engineer",
            "prefers remote work",
        );

        assert!(prompt.contains("JOB DESCRIPTION:\nSenior Rust Engineer"));
        assert!(prompt.contains("Jane Doe"));
        assert!(prompt.contains("prefers remote work"));
        assert!(prompt.contains("- Sections detected: EXPERIENCE"));
        assert!(prompt.contains("- Uses bullet points: Yes"));
    }

    #[test]
    fn test_prompt_embeds_skeleton_and_directives() {
        let structure = analyze_structure("");
        let prompt = build_optimization_prompt("", &structure, "", "");

        assert!(prompt.contains(r"\resumeSubheading"));
        assert!(prompt.contains(r"\resumeProjectHeading"));
        assert!(prompt.contains(r"\resumeItem"));
        assert!(prompt.contains(r"\section{Technical Skills}"));
        assert!(prompt.ends_with(
            "Return ONLY the LaTeX code for the resume. Do not include any explanations or markdown."
        ));
        // No placeholder survives substitution.
        assert!(!prompt.contains("{latex_skeleton}"));
        assert!(!prompt.contains("{sections}"));
    }
}
