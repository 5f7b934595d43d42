// one full check - rule result plus optional ai notes

use serde::Serialize;

use super::ai::Gemini;
use super::narrative::{is_ai_unavailable, narrative_text, sanitize};
use super::risk::{RiskEngine, RiskLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AiStatus {
    Skipped,
    Available,
    Unavailable,
}

#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub medications: Vec<String>,
    pub level: RiskLevel,
    pub explanation: String,
    pub ai_status: AiStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_insight: Option<String>,
}

/// Evaluates `medications` and, when a client is given, attaches sanitized
/// ai notes. The rule based fields are filled in no matter what the ai does.
pub async fn assess(medications: Vec<String>, ai: Option<&Gemini>) -> Assessment {
    let evaluation = RiskEngine::evaluate(&medications);

    let (ai_status, ai_insight) = match ai {
        None => (AiStatus::Skipped, None),
        Some(gemini) => {
            let raw = narrative_text(gemini.check_interactions(&medications).await);
            let insight = sanitize(&raw);
            // a reply the sanitizer replaced counts as unavailable too
            let status = if is_ai_unavailable(&raw) || insight != raw {
                AiStatus::Unavailable
            } else {
                AiStatus::Available
            };
            (status, Some(insight))
        }
    };

    Assessment {
        medications,
        level: evaluation.level(),
        explanation: evaluation.explanation().to_string(),
        ai_status,
        ai_insight,
    }
}
