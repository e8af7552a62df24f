//! Accounting policy extraction

use crate::config::{AnalysisConfig, PolicyEntry};
use edgarq_domain::text::{self, MatchMode};
use edgarq_domain::PolicyMatch;
use tracing::debug;

/// Pulls policy disclosures out of filing text
#[derive(Debug, Clone)]
pub struct PolicyExtractor {
    entries: Vec<PolicyEntry>,
    before: usize,
    after: usize,
    mode: MatchMode,
}

impl PolicyExtractor {
    /// Build an extractor from the configured policy table
    pub fn new(config: &AnalysisConfig) -> Self {
        let entries = config
            .policies
            .iter()
            .map(|p| PolicyEntry {
                keyword: text::lower(&p.keyword),
                related: p.related.iter().map(|r| text::lower(r)).collect(),
            })
            .collect();

        Self {
            entries,
            before: config.policy_window_before,
            after: config.policy_window_after,
            mode: config.match_mode,
        }
    }

    /// One match per policy keyword present, in table order
    pub fn extract(&self, input: &str) -> Vec<PolicyMatch> {
        let lowered = text::lower(input);
        let mut policies = Vec::new();

        for entry in &self.entries {
            let Some(pos) = text::find(&lowered, &entry.keyword, self.mode) else {
                continue;
            };

            let content = text::collapse_whitespace(text::window(
                input,
                pos,
                entry.keyword.len(),
                self.before,
                self.after,
            ));
            if content.is_empty() {
                continue;
            }

            policies.push(PolicyMatch {
                category: text::title_case(&entry.keyword),
                content,
                confidence: self.confidence(&lowered, entry),
            });
        }

        debug!(count = policies.len(), "extracted policies");
        policies
    }

    fn confidence(&self, lowered: &str, entry: &PolicyEntry) -> f64 {
        let occurrences = text::count(lowered, &entry.keyword, self.mode);
        let related = entry
            .related
            .iter()
            .filter(|term| text::contains(lowered, term, self.mode))
            .count();

        let confidence = 0.5 + (0.1 * occurrences as f64).min(0.3) + (0.05 * related as f64).min(0.2);
        confidence.min(1.0)
    }
}
