//! Tolerant scanner for the templated LaTeX reply.
//!
//! The model's output is expected, not guaranteed, to follow the
//! instruction skeleton. Every block therefore parses into an optional,
//! partially-filled record: unrecognized, truncated, or unbalanced markup
//! is skipped and never fails the scan.

use std::sync::LazyLock;

use regex::Regex;

const SECTION_MARKER: &str = "\\section{";
const END_MARKER: &str = "\\end{document}";
const SUBHEADING_MARKER: &str = "\\resumeSubheading";
const PROJECT_MARKER: &str = "\\resumeProjectHeading";
const ITEM_MARKER: &str = "\\resumeItem{";
const HEADER_MARKER: &str = "\\textbf{\\Huge \\scshape ";
const CONTACT_MARKER: &str = "\\small ";
const SKILL_MARKER: &str = "\\textbf{";
/// The one section whose body is additionally scanned for skill rows.
pub const SKILLS_SECTION: &str = "Technical Skills";

static HREF_UNDERLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\href\{[^}]+\}\{\\underline\{([^}]+)\}\}").unwrap());
static TEXTBF: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\textbf\{([^}]*)\}").unwrap());
static EMPH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\emph\{([^}]*)\}").unwrap());

// ────────────────────────────────────────────────────────────────────────────
// Parsed records
// ────────────────────────────────────────────────────────────────────────────

/// Everything the drawing pass can recover from a reply. All fields may be
/// absent or empty; the renderer draws whatever is here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResumeMarkup {
    pub name: Option<String>,
    pub contact: Option<String>,
    pub sections: Vec<SectionBlock>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionBlock {
    pub title: String,
    pub subheadings: Vec<SubHeading>,
    pub projects: Vec<ProjectHeading>,
    pub bullets: Vec<String>,
    pub skills: Vec<SkillRow>,
}

/// One work/education entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SubHeading {
    pub organization: String,
    pub location: String,
    pub title: String,
    pub dates: String,
}

/// One project entry. `label` has inline `\textbf`/`\emph` wrappers
/// already stripped.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectHeading {
    pub label: String,
    pub dates: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillRow {
    pub category: String,
    pub items: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Scanner
// ────────────────────────────────────────────────────────────────────────────

pub fn parse_reply(reply: &str) -> ResumeMarkup {
    ResumeMarkup {
        name: parse_name(reply),
        contact: parse_contact(reply),
        sections: parse_sections(reply),
    }
}

fn parse_name(reply: &str) -> Option<String> {
    let start = reply.find(HEADER_MARKER)? + HEADER_MARKER.len();
    let rest = &reply[start..];
    let end = rest.find('}')?;
    let name = rest[..end].trim();
    (!name.is_empty()).then(|| name.to_string())
}

fn parse_contact(reply: &str) -> Option<String> {
    let start = reply.find(CONTACT_MARKER)? + CONTACT_MARKER.len();
    let line = reply[start..].lines().next().unwrap_or("");
    Some(strip_contact_markup(line))
}

/// Strips link/underline wrapping and the `$|$` separator glyph, leaving a
/// plain printable contact line.
fn strip_contact_markup(line: &str) -> String {
    let stripped = HREF_UNDERLINE.replace_all(line, "$1");
    stripped.replace("$|$", "|").trim().to_string()
}

/// Non-overlapping section blocks: title group plus body text running to
/// the next section marker, the end-of-document marker, or end of input.
fn parse_sections(reply: &str) -> Vec<SectionBlock> {
    let mut sections = Vec::new();
    let mut cursor = 0;

    while let Some(found) = reply[cursor..].find(SECTION_MARKER) {
        let marker_pos = cursor + found;
        let brace_pos = marker_pos + SECTION_MARKER.len() - 1;
        let Some((title, body_start)) = read_group(reply, brace_pos) else {
            // Unbalanced title group: skip the marker and keep scanning.
            cursor = marker_pos + SECTION_MARKER.len();
            continue;
        };

        let rest = &reply[body_start..];
        let body_end = rest
            .find(SECTION_MARKER)
            .or_else(|| rest.find(END_MARKER))
            .unwrap_or(rest.len());

        sections.push(parse_section_block(title.trim(), &rest[..body_end]));
        cursor = body_start + body_end;
    }

    sections
}

/// Scans a section body for each block kind independently. The scans are
/// not mutually exclusive and not order-sensitive.
fn parse_section_block(title: &str, body: &str) -> SectionBlock {
    let mut block = SectionBlock {
        title: title.to_string(),
        ..Default::default()
    };

    let mut cursor = 0;
    while let Some(found) = body[cursor..].find(SUBHEADING_MARKER) {
        let after = cursor + found + SUBHEADING_MARKER.len();
        match read_groups(body, after, 4) {
            Some((mut groups, next)) => {
                let dates = groups.pop().unwrap_or_default();
                let sub_title = groups.pop().unwrap_or_default();
                let location = groups.pop().unwrap_or_default();
                let organization = groups.pop().unwrap_or_default();
                block.subheadings.push(SubHeading {
                    organization,
                    location,
                    title: sub_title,
                    dates,
                });
                cursor = next;
            }
            None => cursor = after,
        }
    }

    cursor = 0;
    while let Some(found) = body[cursor..].find(PROJECT_MARKER) {
        let after = cursor + found + PROJECT_MARKER.len();
        match read_groups(body, after, 2) {
            Some((mut groups, next)) => {
                let dates = groups.pop().unwrap_or_default();
                let label = strip_inline_markup(&groups.pop().unwrap_or_default());
                block.projects.push(ProjectHeading { label, dates });
                cursor = next;
            }
            None => cursor = after,
        }
    }

    cursor = 0;
    while let Some(found) = body[cursor..].find(ITEM_MARKER) {
        let brace_pos = cursor + found + ITEM_MARKER.len() - 1;
        match read_group(body, brace_pos) {
            Some((text, next)) => {
                block.bullets.push(text.trim().to_string());
                cursor = next;
            }
            None => cursor = brace_pos + 1,
        }
    }

    if block.title == SKILLS_SECTION {
        block.skills = parse_skill_rows(body);
    }

    block
}

/// `\textbf{Category}{: item, item, ...}` pairs within a skills body.
fn parse_skill_rows(body: &str) -> Vec<SkillRow> {
    let mut rows = Vec::new();
    let mut cursor = 0;

    while let Some(found) = body[cursor..].find(SKILL_MARKER) {
        let brace_pos = cursor + found + SKILL_MARKER.len() - 1;
        let Some((category, after)) = read_group(body, brace_pos) else {
            cursor = brace_pos + 1;
            continue;
        };
        let Some((value, next)) = read_group(body, after) else {
            cursor = after;
            continue;
        };
        if let Some(items) = value.strip_prefix(": ") {
            rows.push(SkillRow {
                category: category.trim().to_string(),
                items: items.trim().to_string(),
            });
        }
        cursor = next;
    }

    rows
}

fn strip_inline_markup(label: &str) -> String {
    let label = TEXTBF.replace_all(label, "$1");
    let label = EMPH.replace_all(&label, "$1");
    label.trim().to_string()
}

// ────────────────────────────────────────────────────────────────────────────
// Balanced-brace group reading
// ────────────────────────────────────────────────────────────────────────────

/// Reads one balanced `{...}` group whose opening brace sits at byte
/// `pos`. Returns the group body and the index just past the closing
/// brace. Anything else (wrong start byte, unbalanced input) is `None`
/// and the caller skips the block.
fn read_group(input: &str, pos: usize) -> Option<(&str, usize)> {
    let bytes = input.as_bytes();
    if bytes.get(pos) != Some(&b'{') {
        return None;
    }

    let mut depth = 0usize;
    for (i, &b) in bytes.iter().enumerate().skip(pos) {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some((&input[pos + 1..i], i + 1));
                }
            }
            _ => {}
        }
    }
    None
}

/// Reads `n` consecutive whitespace-separated groups starting at `pos`.
fn read_groups(input: &str, mut pos: usize, n: usize) -> Option<(Vec<String>, usize)> {
    let mut groups = Vec::with_capacity(n);
    for _ in 0..n {
        pos = skip_ws(input, pos);
        let (body, next) = read_group(input, pos)?;
        groups.push(body.trim().to_string());
        pos = next;
    }
    Some((groups, pos))
}

fn skip_ws(input: &str, mut pos: usize) -> usize {
    let bytes = input.as_bytes();
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// A reply that mirrors the instruction skeleton exactly: one header,
    /// one experience section, one skills section.
    const TEMPLATE_REPLY: &str = r#"\begin{document}

\begin{center}
    \textbf{\Huge \scshape Jane Doe} \\ \vspace{1pt}
    \small 512-555-0100 $|$ \href{mailto:jane@x.com}{\underline{jane@x.com}} $|$
    \href{https://linkedin.com/in/janedoe}{\underline{linkedin.com/in/janedoe}}
\end{center}

\section{Experience}
  \resumeSubHeadingListStart
    \resumeSubheading
      {Acme}{Austin, TX}
      {Staff Engineer}{2020 -- Present}
      \resumeItemListStart
        \resumeItem{Did a thing well}
      \resumeItemListEnd
  \resumeSubHeadingListEnd

\section{Projects}
    \resumeSubHeadingListStart
      \resumeProjectHeading
          {\textbf{Gitlytics} $|$ \emph{Python, Flask}}{June 2020 -- Present}
    \resumeSubHeadingListEnd

\section{Technical Skills}
 \begin{itemize}[leftmargin=0.15in, label={}]
    \small{\item{
     \textbf{Languages}{: Rust, Python, SQL} \\
     \textbf{Developer Tools}{: Git, Docker} \\
    }}
 \end{itemize}

\end{document}"#;

    #[test]
    fn test_header_fields_extracted() {
        let markup = parse_reply(TEMPLATE_REPLY);
        assert_eq!(markup.name.as_deref(), Some("Jane Doe"));
        let contact = markup.contact.unwrap();
        assert!(contact.contains("512-555-0100"));
        assert!(contact.contains("jane@x.com"));
        // Decorations are gone.
        assert!(!contact.contains("\\href"));
        assert!(!contact.contains("$|$"));
        assert!(contact.contains('|'));
    }

    #[test]
    fn test_sections_are_non_overlapping_and_ordered() {
        let markup = parse_reply(TEMPLATE_REPLY);
        let titles: Vec<&str> = markup.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Experience", "Projects", "Technical Skills"]);
    }

    #[test]
    fn test_subheading_block_fields() {
        let markup = parse_reply(TEMPLATE_REPLY);
        let sub = &markup.sections[0].subheadings[0];
        assert_eq!(sub.organization, "Acme");
        assert_eq!(sub.location, "Austin, TX");
        assert_eq!(sub.title, "Staff Engineer");
        assert_eq!(sub.dates, "2020 -- Present");
    }

    #[test]
    fn test_bullet_scoped_to_its_section() {
        let markup = parse_reply(TEMPLATE_REPLY);
        assert_eq!(markup.sections[0].bullets, vec!["Did a thing well"]);
        assert!(markup.sections[1].bullets.is_empty());
    }

    #[test]
    fn test_project_label_has_wrappers_stripped() {
        let markup = parse_reply(TEMPLATE_REPLY);
        let project = &markup.sections[1].projects[0];
        assert_eq!(project.label, "Gitlytics $|$ Python, Flask");
        assert_eq!(project.dates, "June 2020 -- Present");
    }

    #[test]
    fn test_skill_rows_only_in_technical_skills_section() {
        let markup = parse_reply(TEMPLATE_REPLY);
        let skills = &markup.sections[2].skills;
        assert_eq!(skills.len(), 2);
        assert_eq!(skills[0].category, "Languages");
        assert_eq!(skills[0].items, "Rust, Python, SQL");
        // The Projects section contains \textbf too, but is not scanned.
        assert!(markup.sections[1].skills.is_empty());
    }

    #[test]
    fn test_markerless_reply_yields_placeholders_not_panics() {
        let markup = parse_reply("Sorry, here is an essay about resumes instead.");
        assert_eq!(markup.name, None);
        assert_eq!(markup.contact, None);
        assert!(markup.sections.is_empty());
    }

    #[test]
    fn test_unbalanced_braces_are_skipped() {
        let reply = r"\section{Experience
          \resumeSubheading{Acme}{Austin";
        let markup = parse_reply(reply);
        // Nothing usable, but also no panic and no bogus records.
        assert!(markup.sections.is_empty() || markup.sections[0].subheadings.is_empty());
    }

    #[test]
    fn test_truncated_subheading_is_dropped_without_losing_section() {
        let reply = "\\section{Experience}\n\\resumeSubheading\n{Acme}{Austin, TX}\n\\end{document}";
        let markup = parse_reply(reply);
        assert_eq!(markup.sections.len(), 1);
        assert!(markup.sections[0].subheadings.is_empty());
    }

    #[test]
    fn test_nested_braces_inside_group() {
        let reply = "\\section{Experience}\n\\resumeItem{Shipped \\emph{fast} pipelines}\n\\end{document}";
        let markup = parse_reply(reply);
        assert_eq!(
            markup.sections[0].bullets,
            vec!["Shipped \\emph{fast} pipelines"]
        );
    }

    #[test]
    fn test_section_without_end_marker_runs_to_end_of_input() {
        let reply = "\\section{Experience}\n\\resumeItem{Did a thing}";
        let markup = parse_reply(reply);
        assert_eq!(markup.sections.len(), 1);
        assert_eq!(markup.sections[0].bullets, vec!["Did a thing"]);
    }

    #[test]
    fn test_empty_name_falls_back_to_absent() {
        let reply = "\\textbf{\\Huge \\scshape }\\section{X}\\end{document}";
        assert_eq!(parse_reply(reply).name, None);
    }
}
