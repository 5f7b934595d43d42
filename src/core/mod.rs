// core logic - risk rules, text cleanup, and ai notes

mod ai;
mod assess;
mod narrative;
mod risk;
mod text;

pub use ai::Gemini;
pub use assess::{AiStatus, Assessment, assess};
pub use narrative::{
    FAILURE_MARKERS, UNAVAILABLE_MESSAGE, fallback_message, is_ai_unavailable, narrative_text,
    sanitize,
};
pub use risk::{RiskEngine, RiskEvaluation, RiskLevel};
pub use text::{clean_medicine_text, clean_medicines, split_medications};
