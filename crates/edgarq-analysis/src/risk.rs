//! Risk factor identification and severity grading

use crate::config::{AnalysisConfig, SeverityScope, SeverityWords};
use edgarq_domain::text::{self, MatchMode};
use edgarq_domain::{RiskMatch, Severity};
use tracing::debug;

/// Finds risk factor mentions and grades how strongly they are worded
#[derive(Debug, Clone)]
pub struct RiskAnalyzer {
    keywords: Vec<String>,
    window: usize,
    severity: SeverityWords,
    scope: SeverityScope,
    mode: MatchMode,
}

fn lowered(list: &[String]) -> Vec<String> {
    list.iter().map(|w| text::lower(w)).collect()
}

impl RiskAnalyzer {
    /// Build an analyzer from the configured risk tables
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            keywords: lowered(&config.risk_keywords),
            window: config.risk_window,
            severity: SeverityWords {
                high: lowered(&config.severity.high),
                medium: lowered(&config.severity.medium),
                low: lowered(&config.severity.low),
            },
            scope: config.severity_scope,
            mode: config.match_mode,
        }
    }

    /// One match per risk keyword present, in table order
    pub fn identify(&self, input: &str) -> Vec<RiskMatch> {
        let lowered = text::lower(input);
        let indicator_bonus = self.indicator_bonus(&lowered);
        let mut risks = Vec::new();

        for keyword in &self.keywords {
            let Some(pos) = text::find(&lowered, keyword, self.mode) else {
                continue;
            };

            let excerpt = text::window(input, pos, keyword.len(), self.window, self.window);
            let content = text::collapse_whitespace(excerpt);
            if content.is_empty() {
                continue;
            }

            let severity = match self.scope {
                SeverityScope::Document => self.assess_severity(&lowered),
                SeverityScope::Window => self.assess_severity(&text::lower(excerpt)),
            };

            let occurrences = text::count(&lowered, keyword, self.mode);
            let confidence = (0.5 + (0.1 * occurrences as f64).min(0.3) + indicator_bonus).min(1.0);

            risks.push(RiskMatch {
                category: text::title_case(keyword),
                content,
                severity,
                confidence,
            });
        }

        debug!(count = risks.len(), scope = ?self.scope, "identified risks");
        risks
    }

    /// Medium unless a high word is present (high) or, failing that, a low word (low)
    pub fn assess_severity(&self, lowered: &str) -> Severity {
        if self.any_present(lowered, &self.severity.high) {
            Severity::High
        } else if self.any_present(lowered, &self.severity.low) {
            Severity::Low
        } else {
            Severity::Medium
        }
    }

    fn any_present(&self, lowered: &str, words: &[String]) -> bool {
        words.iter().any(|w| text::contains(lowered, w, self.mode))
    }

    fn indicator_bonus(&self, lowered: &str) -> f64 {
        let indicators = self
            .severity
            .all()
            .filter(|w| text::contains(lowered, w, self.mode))
            .count();
        (0.05 * indicators as f64).min(0.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> RiskAnalyzer {
        RiskAnalyzer::new(&AnalysisConfig::default())
    }

    #[test]
    fn test_risk_factor_identification() {
        let text = "
        Risk Factors:
        Changes in revenue recognition policies could materially affect financial statements.
        Lease accounting changes may impact reported assets and liabilities.
        Regulatory changes could increase compliance costs.
        ";
        let risks = analyzer().identify(text);
        let categories: Vec<&str> = risks.iter().map(|r| r.category.as_str()).collect();

        assert!(risks.len() >= 3);
        assert!(categories.contains(&"Revenue Recognition"));
        assert!(categories.contains(&"Lease Accounting"));
        assert!(categories.contains(&"Regulatory"));
    }

    #[test]
    fn test_severity_high_from_material() {
        let text = "Material changes in accounting policies could significantly impact financial results.";
        let risks = analyzer().identify(text);

        assert!(!risks.is_empty());
        assert!(risks.iter().all(|r| r.severity == Severity::High));
        assert!(risks.iter().any(|r| r.content.to_lowercase().contains("material")));
    }

    #[test]
    fn test_severity_levels() {
        let analyzer = analyzer();
        assert_eq!(analyzer.assess_severity("a critical failure"), Severity::High);
        assert_eq!(analyzer.assess_severity("a minor delay"), Severity::Low);
        assert_eq!(analyzer.assess_severity("a delay"), Severity::Medium);
        // high wins over low
        assert_eq!(analyzer.assess_severity("minor but major"), Severity::High);
    }

    #[test]
    fn test_document_scope_leaks_across_mentions() {
        // "critical" is far from the regulatory mention but still grades it
        let padding = "x ".repeat(400);
        let text = format!("Regulatory review is pending. {} A critical outage occurred.", padding);
        let risks = analyzer().identify(&text);
        let regulatory = risks.iter().find(|r| r.category == "Regulatory").unwrap();
        assert_eq!(regulatory.severity, Severity::High);
    }

    #[test]
    fn test_window_scope_stays_local() {
        let mut config = AnalysisConfig::default();
        config.severity_scope = SeverityScope::Window;
        let analyzer = RiskAnalyzer::new(&config);

        let padding = "x ".repeat(400);
        let text = format!("Regulatory review is pending. {} A critical outage occurred.", padding);
        let risks = analyzer.identify(&text);
        let regulatory = risks.iter().find(|r| r.category == "Regulatory").unwrap();
        assert_eq!(regulatory.severity, Severity::Medium);
    }

    #[test]
    fn test_confidence_bounded() {
        let text = "material significant substantial major critical impact ".repeat(20);
        for risk in analyzer().identify(&text) {
            assert!(risk.confidence <= 1.0);
            assert!(risk.confidence >= 0.5);
        }
    }

    #[test]
    fn test_no_risks() {
        assert!(analyzer().identify("Board meeting scheduled.").is_empty());
    }
}
