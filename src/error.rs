use miette::Diagnostic;
use thiserror::Error;

// display strings for Gemini and Http double as the failure markers
// the narrative sanitizer looks for, keep the prefixes in sync
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    #[error("Google API Error: {0}")]
    Gemini(String),

    #[error("Missing API key. Set GEMINI_API_KEY or GOOGLE_API_KEY, or pass --api-key")]
    MissingApiKey,

    #[error("Network Error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error: {0}")]
    Server(String),
}
