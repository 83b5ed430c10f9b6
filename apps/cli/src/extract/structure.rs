//! Structure analyzer — a lightweight descriptive fingerprint of the
//! resume: detected sections, bullet usage, table-likeness, indentation.
//!
//! The fingerprint is advisory only. It becomes four summary lines inside
//! the optimization instruction and never drives control flow, which is
//! why the table check tolerates false positives.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Canonical section vocabulary. Detected sections are emitted in THIS
/// order, not the order they appear in the document.
pub const SECTION_VOCABULARY: [&str; 10] = [
    "EXPERIENCE",
    "EDUCATION",
    "SKILLS",
    "PROJECTS",
    "CERTIFICATIONS",
    "SUMMARY",
    "OBJECTIVE",
    "CONTACT",
    "REFERENCES",
    "PUBLICATIONS",
];

/// Bullet glyphs seen across common resume exports.
const BULLET_GLYPHS: &str = "\u{2022}\u{25CF}\u{25A0}\u{25E6}\u{25CB}\u{25D8}\u{25BA}\u{25AA}\u{25AB}\u{25B8}\u{25B9}\u{25C6}";

static SECTION_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    SECTION_VOCABULARY
        .iter()
        .map(|name| {
            let pattern = format!(r"(?i)\b{name}\b");
            (*name, Regex::new(&pattern).expect("section pattern"))
        })
        .collect()
});

static SPACE_INDENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n {2,}").unwrap());
static TAB_INDENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\t").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IndentationStyle {
    Spaces,
    Tabs,
    Unknown,
}

impl IndentationStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndentationStyle::Spaces => "spaces",
            IndentationStyle::Tabs => "tabs",
            IndentationStyle::Unknown => "unknown",
        }
    }
}

/// Descriptive fingerprint of a resume's text. Every field may be
/// empty/false/unknown; analysis is total and never fails.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuralSummary {
    pub sections: Vec<String>,
    pub has_bullet_points: bool,
    pub has_tables: bool,
    pub indentation_style: IndentationStyle,
}

pub fn analyze_structure(text: &str) -> StructuralSummary {
    let sections = SECTION_PATTERNS
        .iter()
        .filter(|(_, pattern)| pattern.is_match(text))
        .map(|(name, _)| name.to_string())
        .collect();

    let has_bullet_points = text.chars().any(|c| BULLET_GLYPHS.contains(c));

    StructuralSummary {
        sections,
        has_bullet_points,
        has_tables: detect_table(text),
        indentation_style: detect_indentation(text),
    }
}

/// Weak table heuristic: take the first run of three consecutive
/// non-empty lines and flag a table when their word counts collapse to at
/// most two distinct values. Only the first triplet is consulted.
fn detect_table(text: &str) -> bool {
    let lines: Vec<&str> = text.lines().collect();
    for window in lines.windows(3) {
        if window.iter().any(|line| line.is_empty()) {
            continue;
        }
        let word_counts: HashSet<usize> = window
            .iter()
            .map(|line| line.split_whitespace().count())
            .collect();
        return word_counts.len() <= 2;
    }
    false
}

/// Spaces take priority over tabs when both indentation forms appear.
fn detect_indentation(text: &str) -> IndentationStyle {
    if SPACE_INDENT.is_match(text) {
        IndentationStyle::Spaces
    } else if TAB_INDENT.is_match(text) {
        IndentationStyle::Tabs
    } else {
        IndentationStyle::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_match_case_insensitively() {
        let summary = analyze_structure("Education\nwork history\nskills");
        assert!(summary.sections.contains(&"EDUCATION".to_string()));
        assert!(summary.sections.contains(&"SKILLS".to_string()));
    }

    #[test]
    fn test_sections_emitted_in_vocabulary_order() {
        // Document order is EDUCATION before EXPERIENCE; the summary still
        // lists EXPERIENCE first because the vocabulary does.
        let summary = analyze_structure("EDUCATION\n...\nEXPERIENCE\n...");
        assert_eq!(summary.sections, vec!["EXPERIENCE", "EDUCATION"]);
    }

    #[test]
    fn test_section_requires_whole_word() {
        let summary = analyze_structure("microskillset inexperienced");
        assert!(summary.sections.is_empty());
    }

    #[test]
    fn test_no_bullet_glyphs_reports_false() {
        let summary = analyze_structure("plain text - with hyphens * and stars");
        assert!(!summary.has_bullet_points);
    }

    #[test]
    fn test_any_bullet_glyph_reports_true() {
        for glyph in ["\u{2022}", "\u{25AA}", "\u{25C6}"] {
            let text = format!("line one\n{glyph} item");
            assert!(
                analyze_structure(&text).has_bullet_points,
                "glyph {glyph} should be detected"
            );
        }
    }

    #[test]
    fn test_spaces_take_priority_over_tabs() {
        let summary = analyze_structure("a\n  spaced\nb\n\ttabbed");
        assert_eq!(summary.indentation_style, IndentationStyle::Spaces);
    }

    #[test]
    fn test_tabs_detected_without_spaces() {
        let summary = analyze_structure("a\n\ttabbed");
        assert_eq!(summary.indentation_style, IndentationStyle::Tabs);
    }

    #[test]
    fn test_indentation_unknown_when_flush_left() {
        let summary = analyze_structure("a\nb\nc");
        assert_eq!(summary.indentation_style, IndentationStyle::Unknown);
    }

    #[test]
    fn test_table_detected_for_uniform_word_counts() {
        let summary = analyze_structure("one two three\nfour five six\nseven eight nine");
        assert!(summary.has_tables);
    }

    #[test]
    fn test_table_not_detected_for_varied_word_counts() {
        let summary = analyze_structure("one\ntwo three\nfour five six seven");
        assert!(!summary.has_tables);
    }

    #[test]
    fn test_table_check_only_consults_first_triplet() {
        // First run of three non-empty lines has three distinct word
        // counts, so the later uniform triplet is never examined.
        let text = "one\ntwo three\nfour five six seven\na b\nc d\ne f";
        assert!(!analyze_structure(text).has_tables);
    }

    #[test]
    fn test_empty_text_is_fully_populated() {
        let summary = analyze_structure("");
        assert!(summary.sections.is_empty());
        assert!(!summary.has_bullet_points);
        assert!(!summary.has_tables);
        assert_eq!(summary.indentation_style, IndentationStyle::Unknown);
    }
}
