use thiserror::Error;

/// Fatal gate failures in the optimization pipeline.
///
/// Each variant's message is the user-facing console line printed when the
/// run halts; detail lines (extraction errors, API errors, the credential
/// remediation hint) are logged at the boundary where the failure occurred.
/// None of these affect the process exit status.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("No PDF resume found in the 'resume' folder. Please add a resume.")]
    NoResume,

    #[error("Job description file 'job_description.txt' not found. Please create this file with the job requirements.")]
    MissingJobDescription,

    #[error("Failed to extract text from the resume.")]
    Extraction,

    #[error("Failed to optimize the resume.")]
    Optimization,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
