// medguard library - medication interaction risk checks

pub mod cli;
mod core;
mod error;
mod output;
mod server;

pub use self::core::{
    AiStatus, Assessment, FAILURE_MARKERS, Gemini, RiskEngine, RiskEvaluation, RiskLevel,
    UNAVAILABLE_MESSAGE, assess, clean_medicine_text, clean_medicines, fallback_message,
    is_ai_unavailable, narrative_text, sanitize, split_medications,
};
pub use error::Error;
pub use output::Output;
pub use server::Server;
