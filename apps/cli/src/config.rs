use std::path::PathBuf;

/// Drop-folder name the user places their resume PDF into.
pub const RESUME_DIR: &str = "resume";
/// Output folder for the optimized artifacts.
pub const OUTPUT_DIR: &str = "newresume";
/// Required job description file.
pub const JOB_DESCRIPTION_FILE: &str = "job_description.txt";
/// Optional free-text details file.
pub const ADDITIONAL_DETAILS_FILE: &str = "additional_details.txt";

/// Application configuration: the fixed filesystem layout plus
/// environment-sourced settings.
///
/// All paths are relative to the working directory and not configurable;
/// the tool takes no CLI flags. The Gemini credential is optional here;
/// its absence only fails the optimization step, not startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub resume_dir: PathBuf,
    pub output_dir: PathBuf,
    pub job_description_path: PathBuf,
    pub additional_details_path: PathBuf,
    pub gemini_api_key: Option<String>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Config {
            resume_dir: PathBuf::from(RESUME_DIR),
            output_dir: PathBuf::from(OUTPUT_DIR),
            job_description_path: PathBuf::from(JOB_DESCRIPTION_FILE),
            additional_details_path: PathBuf::from(ADDITIONAL_DETAILS_FILE),
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .ok()
                .filter(|k| !k.is_empty()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }
}
