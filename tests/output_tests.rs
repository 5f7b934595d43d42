// tests for report rendering

use medguard::{AiStatus, Assessment, Output, RiskLevel, UNAVAILABLE_MESSAGE};

const BLEEDING: &str =
    "Combining aspirin with warfarin greatly increases the risk of internal bleeding.";

fn assessment(level: RiskLevel, ai_status: AiStatus, ai_insight: Option<&str>) -> Assessment {
    Assessment {
        medications: vec!["aspirin".to_string(), "warfarin".to_string()],
        level,
        explanation: BLEEDING.to_string(),
        ai_status,
        ai_insight: ai_insight.map(str::to_string),
    }
}

#[test]
fn test_report_sections() {
    let report = Output::render(&assessment(RiskLevel::High, AiStatus::Skipped, None));

    assert!(report.contains("medications: aspirin, warfarin"));
    assert!(report.contains("HIGH RISK"));
    assert!(report.contains("Why this matters:\nCombining aspirin"));
    assert!(report.contains("Medical Disclaimer:"));
    assert!(!report.contains("AI Insight:"));
}

#[test]
fn test_bars_follow_level() {
    let report = Output::render(&assessment(RiskLevel::High, AiStatus::Skipped, None));
    let high = report.lines().find(|l| l.starts_with("High")).unwrap();
    let low = report.lines().find(|l| l.starts_with("Low")).unwrap();

    assert_eq!(high.chars().filter(|&c| c == '█').count(), 30);
    assert_eq!(low.chars().filter(|&c| c == '█').count(), 3);
}

#[test]
fn test_ai_insight_shown() {
    let report = Output::render(&assessment(
        RiskLevel::High,
        AiStatus::Available,
        Some("Both thin the blood."),
    ));
    assert!(report.contains("AI Insight:\nBoth thin the blood."));
}

#[test]
fn test_unavailable_ai_uses_fallback() {
    let report = Output::render(&assessment(
        RiskLevel::High,
        AiStatus::Unavailable,
        Some(UNAVAILABLE_MESSAGE),
    ));
    assert!(report.contains("Detailed AI explanation is temporarily unavailable."));
    assert!(report.contains(BLEEDING));
    // only one notice, not a second one under an insight heading
    assert!(!report.contains("AI Insight:"));
    assert!(!report.contains(UNAVAILABLE_MESSAGE));
}
