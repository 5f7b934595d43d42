// output formatting - readable report or raw json

use crate::core::{AiStatus, Assessment, fallback_message};

const BAR_WIDTH: f32 = 30.0;

const DISCLAIMER: &str = "MedGuard provides informational medication safety insights only. \
It is not a diagnostic tool and does not replace professional medical advice. \
Always consult a qualified healthcare professional before starting, stopping, \
or combining medications.";

pub struct Output;

impl Output {
    // report for humans
    pub fn pretty(assessment: &Assessment) {
        println!("{}", Self::render(assessment));
    }

    // raw json for scripts
    pub fn raw(assessment: &Assessment) {
        println!("{}", serde_json::to_string(assessment).unwrap_or_default());
    }

    pub fn render(assessment: &Assessment) -> String {
        let mut out = String::new();

        out.push_str(&format!("medications: {}\n\n", assessment.medications.join(", ")));
        out.push_str(&format!("{}\n\n", assessment.level.label()));

        let (low, moderate, high) = assessment.level.bar_weights();
        for (label, weight) in [("Low", low), ("Moderate", moderate), ("High", high)] {
            out.push_str(&format!("{label:<9}{}\n", bar(weight)));
        }
        out.push('\n');

        // a failed ai gets one notice ahead of the rule result, no insight block
        match (assessment.ai_status, &assessment.ai_insight) {
            (AiStatus::Unavailable, _) => {
                let why = fallback_message(&assessment.explanation);
                out.push_str(&format!("Why this matters:\n{why}\n"));
            }
            (_, insight) => {
                out.push_str(&format!("Why this matters:\n{}\n", assessment.explanation));
                if let Some(insight) = insight {
                    out.push_str(&format!("\nAI Insight:\n{insight}\n"));
                }
            }
        }

        out.push_str(&format!("\nMedical Disclaimer:\n{DISCLAIMER}"));
        out
    }
}

fn bar(weight: f32) -> String {
    let width = (weight.clamp(0.0, 1.0) * BAR_WIDTH).round() as usize;
    "█".repeat(width.max(1))
}
