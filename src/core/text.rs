// medication text handling - typed lists and scanner output

use regex::Regex;
use std::sync::LazyLock;

static DOSAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d+\s?(mg|ml|mcg|g)\b").expect("valid dosage pattern"));

static FORM_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(tablet|tab|capsule|cap|syrup|injection|inj)\b").expect("valid form pattern")
});

static BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[()\[\]]").expect("valid bracket pattern"));

/// Splits user input on commas and newlines into trimmed, non-empty names.
/// Duplicates are kept.
pub fn split_medications(input: &str) -> Vec<String> {
    input
        .split([',', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Cleans raw scanner or typed text into display-ready medicine names.
pub fn clean_medicines(raw: &str) -> Vec<String> {
    let lower = raw.to_lowercase();
    let text = DOSAGE.replace_all(&lower, "");
    let text = FORM_WORDS.replace_all(&text, "");
    let text = BRACKETS.replace_all(&text, "");

    let mut seen: Vec<String> = Vec::new();
    for entry in split_medications(&text) {
        if !seen.contains(&entry) {
            seen.push(entry);
        }
    }

    seen.iter().map(|s| capitalize(s)).collect()
}

/// Same as [`clean_medicines`] but joined back into editable text.
pub fn clean_medicine_text(raw: &str) -> String {
    clean_medicines(raw).join(", ")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
