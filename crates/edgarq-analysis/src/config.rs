//! Keyword tables and window sizes for the analyzers

use crate::error::AnalysisError;
use edgarq_domain::MatchMode;
use serde::{Deserialize, Serialize};

/// An accounting standard and the phrases that signal it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardEntry {
    /// Standard code, e.g. `ASC 606`
    pub code: String,
    /// Phrases in priority order; the first one present names the concept
    pub keywords: Vec<String>,
}

/// A policy keyword and the terms that corroborate it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyEntry {
    /// Policy phrase
    pub keyword: String,
    /// Terms whose presence raises confidence
    #[serde(default)]
    pub related: Vec<String>,
}

/// Intensity vocabulary used to grade risk severity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeverityWords {
    /// Words that promote a risk to high
    pub high: Vec<String>,
    /// Words that count toward confidence but leave severity at medium
    pub medium: Vec<String>,
    /// Words that demote a risk to low
    pub low: Vec<String>,
}

impl SeverityWords {
    /// All words across the three levels
    pub fn all(&self) -> impl Iterator<Item = &String> {
        self.high.iter().chain(&self.medium).chain(&self.low)
    }
}

/// Where the severity vocabulary is looked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityScope {
    /// Anywhere in the analyzed text
    ///
    /// A single "material" anywhere marks every risk high.
    #[default]
    Document,
    /// Only inside the risk's own excerpt
    Window,
}

/// Configuration for the content analyzers
///
/// Scalar settings come first so the TOML form keeps its tables at the end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Keyword matching mode
    #[serde(default)]
    pub match_mode: MatchMode,

    /// Bytes of context kept on each side of a concept mention
    pub concept_window: usize,

    /// Bytes of context kept before a policy mention
    pub policy_window_before: usize,

    /// Bytes of context kept after a policy mention
    pub policy_window_after: usize,

    /// Bytes of context kept on each side of a risk mention
    pub risk_window: usize,

    /// Where severity words are searched
    #[serde(default)]
    pub severity_scope: SeverityScope,

    /// Characters of stripped text kept as a document summary
    pub summary_chars: usize,

    /// Risk keywords, in reporting order
    pub risk_keywords: Vec<String>,

    /// Standards the concept detector knows about
    pub standards: Vec<StandardEntry>,

    /// Policy keywords, in reporting order
    pub policies: Vec<PolicyEntry>,

    /// Severity vocabulary
    pub severity: SeverityWords,
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn standard(code: &str, keywords: &[&str]) -> StandardEntry {
    StandardEntry {
        code: code.to_string(),
        keywords: words(keywords),
    }
}

fn policy(keyword: &str, related: &[&str]) -> PolicyEntry {
    PolicyEntry {
        keyword: keyword.to_string(),
        related: words(related),
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::Substring,
            standards: vec![
                standard(
                    "ASC 606",
                    &["revenue recognition", "contracts", "performance obligations", "revenue from contracts"],
                ),
                standard("ASC 842", &["leases", "right of use", "lease payments", "lease liabilities"]),
                standard("ASC 350", &["goodwill", "intangibles", "impairment"]),
                standard("ASC 860", &["transfers", "servicing", "financial assets"]),
            ],
            concept_window: 100,
            policies: vec![
                policy("revenue recognition", &["revenue", "recognition", "contracts", "obligations"]),
                policy("lease accounting", &["lease", "right of use", "liabilities", "assets"]),
                policy("goodwill", &["goodwill", "impairment", "intangibles"]),
                policy("intangibles", &[]),
                policy("impairment", &[]),
                policy("transfers", &["transfers", "servicing", "financial"]),
                policy("servicing", &[]),
                policy("financial assets", &[]),
            ],
            policy_window_before: 200,
            policy_window_after: 500,
            risk_keywords: words(&[
                "revenue recognition",
                "lease accounting",
                "goodwill",
                "impairment",
                "regulatory",
                "compliance",
                "material",
                "significant",
                "impact",
            ]),
            risk_window: 300,
            severity: SeverityWords {
                high: words(&["material", "significant", "substantial", "major", "critical"]),
                medium: words(&["moderate", "considerable", "notable", "important"]),
                low: words(&["minor", "minimal", "limited", "small"]),
            },
            severity_scope: SeverityScope::Document,
            summary_chars: 1000,
        }
    }
}

impl AnalysisConfig {
    /// Strict preset: word-start matching and window-scoped severity
    pub fn strict() -> Self {
        Self {
            match_mode: MatchMode::WordStart,
            severity_scope: SeverityScope::Window,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.standards.is_empty() {
            return Err("standards must not be empty".to_string());
        }
        for entry in &self.standards {
            if entry.code.trim().is_empty() {
                return Err("standard code must not be empty".to_string());
            }
            if entry.keywords.is_empty() {
                return Err(format!("standard {} has no keywords", entry.code));
            }
            if entry.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(format!("standard {} has an empty keyword", entry.code));
            }
        }
        if self.policies.iter().any(|p| p.keyword.trim().is_empty()) {
            return Err("policy keyword must not be empty".to_string());
        }
        if self.risk_keywords.iter().any(|k| k.trim().is_empty()) {
            return Err("risk keyword must not be empty".to_string());
        }
        if self.severity.all().any(|w| w.trim().is_empty()) {
            return Err("severity word must not be empty".to_string());
        }
        if self.summary_chars == 0 {
            return Err("summary_chars must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, AnalysisError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate().map_err(AnalysisError::Config)?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AnalysisConfig::default().validate().is_ok());
    }

    #[test]
    fn test_strict_config_is_valid() {
        let config = AnalysisConfig::strict();
        assert!(config.validate().is_ok());
        assert_eq!(config.match_mode, MatchMode::WordStart);
        assert_eq!(config.severity_scope, SeverityScope::Window);
    }

    #[test]
    fn test_empty_standards_rejected() {
        let mut config = AnalysisConfig::default();
        config.standards.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_keyword_rejected() {
        let mut config = AnalysisConfig::default();
        config.standards[0].keywords.push("  ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_summary_rejected() {
        let mut config = AnalysisConfig::default();
        config.summary_chars = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AnalysisConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = AnalysisConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config.standards, parsed.standards);
        assert_eq!(config.policies, parsed.policies);
        assert_eq!(config.risk_window, parsed.risk_window);
        assert_eq!(config.severity_scope, parsed.severity_scope);
    }

    #[test]
    fn test_from_toml_rejects_invalid() {
        let mut config = AnalysisConfig::default();
        config.summary_chars = 0;
        let toml_str = config.to_toml().unwrap();
        assert!(matches!(
            AnalysisConfig::from_toml(&toml_str),
            Err(AnalysisError::Config(_))
        ));
    }
}
