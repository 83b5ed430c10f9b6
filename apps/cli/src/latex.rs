//! Best-effort `pdflatex` invocation over the saved `.tex` artifact.

use std::path::Path;
use std::process::Command;

use tracing::{info, warn};

/// Runs `pdflatex -output-directory <out> <tex>` to completion and reports
/// the outcome by exit code. A missing binary or any spawn failure is
/// reported the same way; nothing here ever halts the run, since the
/// printpdf preview already exists as the fallback.
pub fn compile_tex(output_dir: &Path, tex_path: &Path) {
    info!("Attempting to compile LaTeX file to PDF...");

    let result = Command::new("pdflatex")
        .arg("-output-directory")
        .arg(output_dir)
        .arg(tex_path)
        .output();

    match result {
        Ok(output) if output.status.success() => {
            info!(
                "LaTeX compilation successful. PDF created in: {}",
                output_dir.display()
            );
        }
        Ok(output) => {
            warn!("LaTeX compilation had issues. Using basic PDF version instead.");
            warn!(
                "Error details: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Err(e) => {
            warn!("Could not compile LaTeX: {e}");
            warn!("Using basic PDF version instead.");
        }
    }
}
