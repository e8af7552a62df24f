//! Integration tests for the content analyzers

#[cfg(test)]
mod tests {
    use crate::{AnalysisConfig, AnalysisError, ContentAnalyzer, DocumentParser, SeverityScope};
    use edgarq_domain::{MatchMode, Severity};

    const TEN_K: &str = r#"
        <html>
            <head><style>body { font-family: serif; }</style></head>
            <body>
                <h1>Item 1. Business</h1>
                <p>The Company adopted ASC 606 Revenue from Contracts with Customers.
                Revenue recognition occurs when performance obligations are satisfied.</p>
                <h2>Item 1A. Risk Factors</h2>
                <p>Changes in revenue recognition guidance could have a material effect.
                Regulatory changes could increase compliance costs.</p>
                <h2>Item 8. Leases</h2>
                <p>Under ASC 842 the Company records right of use assets and lease liabilities.</p>
            </body>
        </html>
    "#;

    #[test]
    fn test_html_to_findings() {
        let analyzer = ContentAnalyzer::default_config();
        let doc = analyzer.documents().parse(TEN_K);

        assert_eq!(doc.sections.len(), 3);
        assert!(!doc.text.contains('<'));
        assert!(!doc.text.contains("font-family"));

        let bundle = analyzer.analyze(&doc.text);

        let standards: Vec<&str> = bundle.concepts.iter().map(|c| c.standard.as_str()).collect();
        assert_eq!(standards, vec!["ASC 606", "ASC 842"]);

        let categories: Vec<&str> = bundle.policies.iter().map(|p| p.category.as_str()).collect();
        assert!(categories.contains(&"Revenue Recognition"));

        assert!(bundle.risks.iter().any(|r| r.category == "Regulatory"));
        assert!(bundle.risks.iter().all(|r| r.severity == Severity::High));
        assert!(bundle.comparisons.is_empty());
    }

    #[test]
    fn test_every_confidence_in_unit_range() {
        let analyzer = ContentAnalyzer::default_config();
        let text = DocumentParser::default().parse(TEN_K).text.repeat(5);
        let bundle = analyzer.analyze(&text);

        let scores = bundle
            .concepts
            .iter()
            .map(|c| c.confidence)
            .chain(bundle.policies.iter().map(|p| p.confidence))
            .chain(bundle.risks.iter().map(|r| r.confidence));
        for score in scores {
            assert!((0.0..=1.0).contains(&score));
        }
    }

    #[test]
    fn test_empty_text_yields_empty_bundle() {
        let bundle = ContentAnalyzer::default_config().analyze("");
        assert!(bundle.is_empty());
    }

    #[test]
    fn test_compare_policies() {
        let analyzer = ContentAnalyzer::default_config();
        let comparison = analyzer.compare_policies(
            "Apple",
            "Revenue recognition follows the five-step model. Goodwill is tested annually.",
        );

        assert_eq!(comparison.company, "Apple");
        assert_eq!(comparison.categories, vec!["Revenue Recognition", "Goodwill"]);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = AnalysisConfig::default();
        config.standards.clear();

        let result = ContentAnalyzer::new(config);
        assert!(matches!(result, Err(AnalysisError::Config(_))));
    }

    #[test]
    fn test_custom_config_from_toml() {
        let mut config = AnalysisConfig::strict();
        config.summary_chars = 20;
        let toml_str = config.to_toml().unwrap();

        let loaded = AnalysisConfig::from_toml(&toml_str).unwrap();
        assert_eq!(loaded.match_mode, MatchMode::WordStart);
        assert_eq!(loaded.severity_scope, SeverityScope::Window);

        let analyzer = ContentAnalyzer::new(loaded).unwrap();
        let doc = analyzer.documents().parse(TEN_K);
        assert_eq!(doc.summary.chars().count(), 20);
    }

    #[test]
    fn test_strict_mode_skips_embedded_words() {
        let text = "Our subcontracts are immaterial.";
        let lenient = ContentAnalyzer::default_config().analyze(text);
        let strict = ContentAnalyzer::new(AnalysisConfig::strict()).unwrap().analyze(text);

        // "contracts" inside "subcontracts", "material" inside "immaterial"
        assert!(lenient.concepts.iter().any(|c| c.standard == "ASC 606"));
        assert!(lenient.risks.iter().any(|r| r.category == "Material"));
        assert!(strict.concepts.is_empty());
        assert!(strict.risks.is_empty());
    }

    #[test]
    fn test_malformed_toml() {
        let result = AnalysisConfig::from_toml("concept_window = \"wide\"");
        assert!(matches!(result, Err(AnalysisError::Toml(_))));
    }
}
