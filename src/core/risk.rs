// rule based interaction checks
// first matching rule wins, so order matters

use serde::{Deserialize, Serialize};

const ILLEGAL: &[&str] = &[
    "cocaine",
    "heroin",
    "meth",
    "methamphetamine",
    "mdma",
    "ecstasy",
    "lsd",
];

const OPIOIDS: &[&str] = &["morphine", "oxycodone", "hydrocodone", "codeine", "fentanyl"];

const BENZOS: &[&str] = &["diazepam", "alprazolam", "lorazepam", "clonazepam"];

const ALCOHOL: &[&str] = &["alcohol", "ethanol", "beer", "wine", "whiskey"];

const NSAIDS: &[&str] = &["ibuprofen", "naproxen", "diclofenac", "indomethacin"];

const POLYPHARMACY_THRESHOLD: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW RISK",
            Self::Moderate => "MODERATE RISK",
            Self::High => "HIGH RISK",
        }
    }

    /// Relative bar widths (low, moderate, high) for the risk graph.
    pub fn bar_weights(self) -> (f32, f32, f32) {
        match self {
            Self::Low => (1.0, 0.3, 0.1),
            Self::Moderate => (0.3, 1.0, 0.3),
            Self::High => (0.1, 0.3, 1.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskEvaluation {
    level: RiskLevel,
    explanation: String,
}

impl RiskEvaluation {
    fn new(level: RiskLevel, explanation: &str) -> Self {
        Self {
            level,
            explanation: explanation.to_string(),
        }
    }

    pub fn level(&self) -> RiskLevel {
        self.level
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }
}

pub struct RiskEngine;

impl RiskEngine {
    pub fn evaluate<S: AsRef<str>>(medications: &[S]) -> RiskEvaluation {
        let meds: Vec<String> = medications
            .iter()
            .map(|m| m.as_ref().trim().to_lowercase())
            .collect();

        let evaluation = Self::cascade(&meds);
        tracing::debug!(
            medications = meds.len(),
            level = ?evaluation.level,
            "evaluated medication list"
        );
        evaluation
    }

    fn cascade(meds: &[String]) -> RiskEvaluation {
        let has = |table: &[&str]| meds.iter().any(|m| table.contains(&m.as_str()));
        let named = |name: &str| meds.iter().any(|m| m == name);

        if has(ILLEGAL) {
            return RiskEvaluation::new(
                RiskLevel::High,
                "Use of illegal or recreational substances poses severe health risks and unpredictable interactions.",
            );
        }

        if has(OPIOIDS) && (has(BENZOS) || has(ALCOHOL)) {
            return RiskEvaluation::new(
                RiskLevel::High,
                "Combining opioids with benzodiazepines or alcohol significantly increases the risk of respiratory depression and overdose.",
            );
        }

        if has(BENZOS) && has(ALCOHOL) {
            return RiskEvaluation::new(
                RiskLevel::High,
                "Using benzodiazepines together with alcohol can cause extreme sedation, breathing suppression, and coma.",
            );
        }

        if named("aspirin") && named("warfarin") {
            return RiskEvaluation::new(
                RiskLevel::High,
                "Combining aspirin with warfarin greatly increases the risk of internal bleeding.",
            );
        }

        // duplicates count here
        if meds.iter().filter(|m| NSAIDS.contains(&m.as_str())).count() >= 2 {
            return RiskEvaluation::new(
                RiskLevel::Moderate,
                "Using multiple NSAIDs together increases the risk of stomach bleeding and kidney damage.",
            );
        }

        if meds.len() >= POLYPHARMACY_THRESHOLD {
            return RiskEvaluation::new(
                RiskLevel::Moderate,
                "Taking many medications together increases the likelihood of unintended drug interactions.",
            );
        }

        RiskEvaluation::new(
            RiskLevel::Low,
            "No high-risk interactions detected based on the entered medications.",
        )
    }
}
