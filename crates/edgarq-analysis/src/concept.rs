//! Accounting standard detection

use crate::config::{AnalysisConfig, StandardEntry};
use edgarq_domain::text::{self, MatchMode};
use edgarq_domain::ConceptMatch;
use tracing::debug;

/// Baseline confidence for any standard with at least one keyword hit
const BASE_CONFIDENCE: f64 = 0.5;
/// Added per distinct keyword present
const PER_KEYWORD: f64 = 0.1;
/// Ceiling on the keyword contribution
const KEYWORD_CAP: f64 = 0.5;
/// Added when the standard's own code appears in the text
const CODE_BONUS: f64 = 0.2;

/// Confidence for a standard with `hits` distinct keywords present
///
/// Non-decreasing in `hits` and always within [0.0, 1.0].
pub fn concept_confidence(hits: usize, code_present: bool) -> f64 {
    let mut confidence = BASE_CONFIDENCE + (PER_KEYWORD * hits as f64).min(KEYWORD_CAP);
    if code_present {
        confidence += CODE_BONUS;
    }
    confidence.min(1.0)
}

/// Finds accounting standards referenced in free text
#[derive(Debug, Clone)]
pub struct ConceptDetector {
    standards: Vec<StandardEntry>,
    window: usize,
    mode: MatchMode,
}

impl ConceptDetector {
    /// Build a detector from the configured standards table
    pub fn new(config: &AnalysisConfig) -> Self {
        let standards = config
            .standards
            .iter()
            .map(|s| StandardEntry {
                code: s.code.clone(),
                keywords: s.keywords.iter().map(|k| text::lower(k)).collect(),
            })
            .collect();

        Self {
            standards,
            window: config.concept_window,
            mode: config.match_mode,
        }
    }

    /// One match per standard with at least one keyword present, in table order
    pub fn detect(&self, input: &str) -> Vec<ConceptMatch> {
        let lowered = text::lower(input);
        let matches: Vec<ConceptMatch> = self
            .standards
            .iter()
            .filter_map(|standard| self.match_standard(input, &lowered, standard))
            .collect();

        debug!(count = matches.len(), "detected accounting concepts");
        matches
    }

    fn match_standard(
        &self,
        input: &str,
        lowered: &str,
        standard: &StandardEntry,
    ) -> Option<ConceptMatch> {
        let (concept, pos) = standard
            .keywords
            .iter()
            .find_map(|k| text::find(lowered, k, self.mode).map(|pos| (k, pos)))?;

        let hits = standard
            .keywords
            .iter()
            .filter(|k| text::contains(lowered, k, self.mode))
            .count();
        let code_present = text::contains(lowered, &text::lower(&standard.code), self.mode);

        let context = text::window(input, pos, concept.len(), self.window, self.window)
            .trim()
            .to_string();

        Some(ConceptMatch {
            standard: standard.code.clone(),
            concept: concept.clone(),
            confidence: concept_confidence(hits, code_present),
            context,
        })
    }
}
