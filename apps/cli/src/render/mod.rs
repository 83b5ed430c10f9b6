//! Layout renderer — parses the model's templated reply and draws a
//! best-effort paginated preview.
//!
//! The reply format is not contractually guaranteed, so the scan degrades
//! to empty records and the drawing pass renders whatever was recovered.
//! The caller treats any error here as non-fatal: the saved `.tex`
//! artifact stays valid even when no preview is produced.

pub mod markup;
pub mod metrics;
pub mod pdf;

use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PDF build error: {0}")]
    Pdf(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Renders `reply` to `output_path`. If the destination is not itself the
/// raw-text form, the reply is first re-saved verbatim to the sibling
/// `.tex` artifact (idempotent; re-saving the same bytes is harmless).
pub fn render_preview(reply: &str, output_path: &Path) -> Result<(), RenderError> {
    if output_path.extension().is_none_or(|ext| ext != "tex") {
        std::fs::write(output_path.with_extension("tex"), reply)?;
    }

    let parsed = markup::parse_reply(reply);
    pdf::draw_preview(&parsed, output_path)
}
