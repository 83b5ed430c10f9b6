//! Document extraction — pulls plain text out of the dropped PDF and
//! fingerprints its structure.

pub mod structure;

use std::path::Path;

use anyhow::{anyhow, Result};

use crate::extract::structure::{analyze_structure, StructuralSummary};

/// Everything downstream stages need from the source document. Built once
/// per run and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    pub raw_text: String,
    pub structure: StructuralSummary,
}

/// Reads every page of the PDF, joins the page texts with a newline, and
/// fingerprints the result.
///
/// The caller treats any error here as a halting gate; nothing is retried.
pub fn extract_from_pdf(path: &Path) -> Result<ExtractedDocument> {
    let pages = pdf_extract::extract_text_by_pages(path).map_err(|e| anyhow!("{e}"))?;
    let raw_text = pages.join("\n");
    let structure = analyze_structure(&raw_text);

    Ok(ExtractedDocument {
        raw_text,
        structure,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_unreadable_pdf_reports_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"this is not a pdf at all").unwrap();

        let result = extract_from_pdf(file.path());
        assert!(result.is_err(), "garbage bytes must not extract");
    }

    #[test]
    fn test_missing_file_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = extract_from_pdf(&dir.path().join("does_not_exist.pdf"));
        assert!(result.is_err());
    }
}
