// turns ai results into something safe to show a patient
// the rule based result is always shown, this only guards the extra text

use crate::Error;

/// Prefixes carried by failed narrative text.
pub const FAILURE_MARKERS: &[&str] = &["Network Error", "Google API Error"];

pub const UNAVAILABLE_MESSAGE: &str = "AI analysis is temporarily unavailable. The rule-based safety assessment above should be followed.";

// anything mentioning these gets replaced
const SUSPECT_WORDS: &[&str] = &["quota", "rate", "billing", "limit", "network", "error"];

pub fn is_ai_unavailable(text: &str) -> bool {
    FAILURE_MARKERS.iter().any(|m| text.starts_with(m))
}

/// Collapses a narrative result into text. Failures become their error
/// message, which always starts with one of [`FAILURE_MARKERS`].
pub fn narrative_text(result: Result<String, Error>) -> String {
    match result {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = %e, "ai notes unavailable");
            e.to_string()
        }
    }
}

pub fn sanitize(raw: &str) -> String {
    let lower = raw.to_lowercase();
    if SUSPECT_WORDS.iter().any(|w| lower.contains(w)) {
        UNAVAILABLE_MESSAGE.to_string()
    } else {
        raw.to_string()
    }
}

pub fn fallback_message(original: &str) -> String {
    format!(
        "Detailed AI explanation is temporarily unavailable.\n\
         The safety assessment below is based on established medication interaction rules.\n\
         \n\
         {original}"
    )
}
