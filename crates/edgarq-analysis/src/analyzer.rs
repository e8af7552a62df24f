//! Runs every analyzer over one corpus

use crate::concept::ConceptDetector;
use crate::config::AnalysisConfig;
use crate::document::DocumentParser;
use crate::error::AnalysisError;
use crate::policy::PolicyExtractor;
use crate::risk::RiskAnalyzer;
use edgarq_domain::{AnalysisBundle, PolicyComparison};
use tracing::info;

/// Concept detector, policy extractor and risk analyzer built from one config
#[derive(Debug, Clone)]
pub struct ContentAnalyzer {
    concepts: ConceptDetector,
    policies: PolicyExtractor,
    risks: RiskAnalyzer,
    documents: DocumentParser,
}

impl ContentAnalyzer {
    /// Create an analyzer after validating the configuration
    pub fn new(config: AnalysisConfig) -> Result<Self, AnalysisError> {
        config.validate().map_err(AnalysisError::Config)?;
        Ok(Self::build(&config))
    }

    /// Create an analyzer with the built-in tables
    pub fn default_config() -> Self {
        Self::build(&AnalysisConfig::default())
    }

    fn build(config: &AnalysisConfig) -> Self {
        Self {
            concepts: ConceptDetector::new(config),
            policies: PolicyExtractor::new(config),
            risks: RiskAnalyzer::new(config),
            documents: DocumentParser::new(config.summary_chars),
        }
    }

    /// Run all three analyzers over `text`
    pub fn analyze(&self, text: &str) -> AnalysisBundle {
        let bundle = AnalysisBundle {
            concepts: self.concepts.detect(text),
            policies: self.policies.extract(text),
            risks: self.risks.identify(text),
            comparisons: Vec::new(),
        };

        info!(
            concepts = bundle.concepts.len(),
            policies = bundle.policies.len(),
            risks = bundle.risks.len(),
            "analysis complete"
        );
        bundle
    }

    /// Policy categories one company's text discloses
    pub fn compare_policies(&self, company: &str, text: &str) -> PolicyComparison {
        PolicyComparison {
            company: company.to_string(),
            categories: self
                .policies
                .extract(text)
                .into_iter()
                .map(|p| p.category)
                .collect(),
        }
    }

    /// Concept detector
    pub fn concepts(&self) -> &ConceptDetector {
        &self.concepts
    }

    /// Policy extractor
    pub fn policies(&self) -> &PolicyExtractor {
        &self.policies
    }

    /// Risk analyzer
    pub fn risks(&self) -> &RiskAnalyzer {
        &self.risks
    }

    /// Document parser sharing this analyzer's summary length
    pub fn documents(&self) -> &DocumentParser {
        &self.documents
    }
}

impl Default for ContentAnalyzer {
    fn default() -> Self {
        Self::default_config()
    }
}
