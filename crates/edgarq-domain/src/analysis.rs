//! Content analysis results

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tri-level intensity used for risk severity and requested risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Strong language (material, significant, ...)
    High,
    /// No intensity cue either way
    #[default]
    Medium,
    /// Hedged language (minor, limited, ...)
    Low,
}

impl Severity {
    /// Lowercase label
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An accounting standard detected in text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptMatch {
    /// Standard code, e.g. `ASC 606`
    pub standard: String,

    /// The first keyword of the standard found in the text
    pub concept: String,

    /// Heuristic score in [0.0, 1.0]
    pub confidence: f64,

    /// Text surrounding the first mention of `concept`
    pub context: String,
}

/// An accounting policy disclosure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyMatch {
    /// Policy label, e.g. `Revenue Recognition`
    pub category: String,

    /// Whitespace-normalized excerpt around the mention
    pub content: String,

    /// Heuristic score in [0.0, 1.0]
    pub confidence: f64,
}

/// A risk factor mention
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskMatch {
    /// Risk label, e.g. `Regulatory`
    pub category: String,

    /// Whitespace-normalized excerpt around the mention
    pub content: String,

    /// Intensity of the surrounding language
    pub severity: Severity,

    /// Heuristic score in [0.0, 1.0]
    pub confidence: f64,
}

/// Which policy categories one company's filings disclose
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyComparison {
    /// Company display name
    pub company: String,

    /// Policy categories found, in detection order
    pub categories: Vec<String>,
}

/// Everything the analyzers found in a corpus
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisBundle {
    /// Accounting standards
    pub concepts: Vec<ConceptMatch>,

    /// Policy disclosures
    pub policies: Vec<PolicyMatch>,

    /// Risk factors
    pub risks: Vec<RiskMatch>,

    /// Per-company policy breakdown (comparison queries only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comparisons: Vec<PolicyComparison>,
}

impl AnalysisBundle {
    /// True when no analyzer found anything
    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
            && self.policies.is_empty()
            && self.risks.is_empty()
            && self.comparisons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_default_is_medium() {
        assert_eq!(Severity::default(), Severity::Medium);
    }

    #[test]
    fn test_severity_serde() {
        assert_eq!(serde_json::to_string(&Severity::High).unwrap(), "\"high\"");
        let parsed: Severity = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(parsed, Severity::Low);
    }

    #[test]
    fn test_empty_bundle() {
        let mut bundle = AnalysisBundle::default();
        assert!(bundle.is_empty());

        bundle.policies.push(PolicyMatch {
            category: "Goodwill".to_string(),
            content: "goodwill is tested annually".to_string(),
            confidence: 0.6,
        });
        assert!(!bundle.is_empty());
    }
}
