//! Orchestrator — the linear gate sequence from drop folder to artifacts.
//!
//! Each gate converts its failure into a console line. Fatal gates return
//! a `PipelineError` whose message is the user-facing summary; the preview
//! and LaTeX steps are non-fatal because the saved `.tex` artifact stays
//! valid without them.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::config::Config;
use crate::errors::PipelineError;
use crate::extract;
use crate::latex;
use crate::llm_client::{LlmError, OptimizeBackend};
use crate::prompt::{build_optimization_prompt, extract_contact_fields};
use crate::render;

pub async fn run(config: &Config, llm: &dyn OptimizeBackend) -> Result<(), PipelineError> {
    // Gate 1: the drop folder. A newly created folder halts the run;
    // there is nothing to process yet.
    if !config.resume_dir.exists() {
        fs::create_dir_all(&config.resume_dir)?;
        info!(
            "Created '{}' folder. Please place your resume PDF there.",
            config.resume_dir.display()
        );
        return Ok(());
    }

    // Gate 2: the output folder (non-halting).
    if !config.output_dir.exists() {
        fs::create_dir_all(&config.output_dir)?;
    }

    // Gate 3: the input document, first match in filesystem order.
    let resume_path = find_first_pdf(&config.resume_dir)?.ok_or(PipelineError::NoResume)?;
    info!(
        "Found resume: {}",
        resume_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    );

    // Gate 4: the job description.
    if !config.job_description_path.exists() {
        return Err(PipelineError::MissingJobDescription);
    }

    // Gate 5: optional free-text details (non-halting).
    let additional_details = load_additional_details(&config.additional_details_path);

    // Gate 6: extraction.
    let document = match extract::extract_from_pdf(&resume_path) {
        Ok(document) => document,
        Err(e) => {
            error!("Error extracting text from PDF: {e}");
            return Err(PipelineError::Extraction);
        }
    };

    let contact = extract_contact_fields(&document.raw_text);
    info!(
        "Detected candidate: {} <{}> ({}, {})",
        contact.name, contact.email, contact.linkedin, contact.github
    );

    // Gate 7: the remote optimization call.
    let job_description = fs::read_to_string(&config.job_description_path)?;
    let instruction = build_optimization_prompt(
        &document.raw_text,
        &document.structure,
        &job_description,
        &additional_details,
    );
    let optimized = match llm.optimize(&instruction).await {
        Ok(reply) => reply,
        Err(LlmError::MissingApiKey) => {
            error!("Error: GEMINI_API_KEY not found in environment variables.");
            error!("Please set it before running, e.g. `export GEMINI_API_KEY=<your key>`.");
            return Err(PipelineError::Optimization);
        }
        Err(e) => {
            error!("Error from the Gemini API: {e}");
            return Err(PipelineError::Optimization);
        }
    };

    // Gate 8: persist the raw reply.
    let stem = resume_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("resume");
    let tex_path = config.output_dir.join(format!("optimized_{stem}.tex"));
    fs::write(&tex_path, &optimized)?;
    info!("Optimized resume saved to: {}", tex_path.display());
    info!("Resume optimization complete!");

    // Gate 9: preview render (non-halting).
    let preview_path = config.output_dir.join(format!("optimized_{stem}.pdf"));
    match render::render_preview(&optimized, &preview_path) {
        Ok(()) => info!("PDF preview created at: {}", preview_path.display()),
        Err(e) => warn!("Error creating PDF preview: {e}"),
    }

    // Gate 10: best-effort LaTeX compilation (non-halting).
    latex::compile_tex(&config.output_dir, &tex_path);

    Ok(())
}

/// First `.pdf` entry in the drop folder, in whatever order the
/// filesystem yields entries.
fn find_first_pdf(dir: &Path) -> Result<Option<PathBuf>, std::io::Error> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_pdf = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));
        if path.is_file() && is_pdf {
            return Ok(Some(path));
        }
    }
    Ok(None)
}

/// Reads the optional details file. UTF-8 first, then a byte-preserving
/// Latin-1 decode, so no byte sequence can fail this gate; a missing file
/// means empty details.
fn load_additional_details(path: &Path) -> String {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(_) => {
            info!("No 'additional_details.txt' file found. Only using existing resume content.");
            return String::new();
        }
    };

    match String::from_utf8(bytes) {
        Ok(text) => {
            info!("Found additional details file. This information will be incorporated into the resume.");
            text
        }
        Err(e) => {
            info!("Found additional details file (using alternate encoding). This information will be incorporated into the resume.");
            e.into_bytes().iter().map(|&b| b as char).collect()
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
