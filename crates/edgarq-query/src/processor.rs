//! End-to-end question processing
//!
//! Parse, retrieve, optionally fetch documents, analyze, then summarize.
//! Retrieval problems degrade to empty filing lists; `process` itself
//! always returns a result.

use crate::error::QueryError;
use crate::lexicon::Lexicon;
use crate::parser::QueryParser;
use chrono::{Months, NaiveDate, Utc};
use edgarq_analysis::{AnalysisConfig, ContentAnalyzer};
use edgarq_domain::{
    AnalysisBundle, FilingRecord, FilingSource, Intent, ParsedQuery, QueryResult, TimeWindow,
    Timeframe,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Pipeline settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Fetch and parse primary documents before analysis
    pub fetch_documents: bool,

    /// Upper bound on documents fetched per question
    pub max_documents: usize,

    /// Date that timeframes count back from; today when unset
    pub reference_date: Option<NaiveDate>,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            fetch_documents: false,
            max_documents: 3,
            reference_date: None,
        }
    }
}

impl ProcessorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.fetch_documents && self.max_documents == 0 {
            return Err("max_documents must be greater than 0 when fetch_documents is set".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, QueryError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate().map_err(QueryError::Config)?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

/// Filings retrieved for one company
#[derive(Debug, Clone)]
struct CompanyFilings {
    company: String,
    filings: Vec<FilingRecord>,
}

/// Runs a question through parsing, retrieval and analysis
pub struct QueryProcessor<S: FilingSource> {
    parser: QueryParser,
    analyzer: ContentAnalyzer,
    source: S,
    config: ProcessorConfig,
}

impl<S: FilingSource> QueryProcessor<S> {
    /// Create a processor after validating every configuration
    pub fn new(
        source: S,
        lexicon: Lexicon,
        analysis: AnalysisConfig,
        config: ProcessorConfig,
    ) -> Result<Self, QueryError> {
        lexicon.validate().map_err(QueryError::Config)?;
        config.validate().map_err(QueryError::Config)?;
        let analyzer = ContentAnalyzer::new(analysis)?;

        Ok(Self {
            parser: QueryParser::new(lexicon),
            analyzer,
            source,
            config,
        })
    }

    /// Create a processor with the built-in tables and settings
    pub fn with_defaults(source: S) -> Self {
        Self {
            parser: QueryParser::default(),
            analyzer: ContentAnalyzer::default_config(),
            source,
            config: ProcessorConfig::default(),
        }
    }

    /// Query parser
    pub fn parser(&self) -> &QueryParser {
        &self.parser
    }

    /// Content analyzer
    pub fn analyzer(&self) -> &ContentAnalyzer {
        &self.analyzer
    }

    /// Filing source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Pipeline settings
    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Answer one question
    pub fn process(&self, query: &str) -> QueryResult {
        let parsed = self.parser.parse(query);

        let mut groups = self.retrieve(&parsed);
        if self.config.fetch_documents {
            self.attach_documents(&mut groups);
        }

        let analysis = self.analyze(query, &parsed, &groups);
        let filings: Vec<FilingRecord> = groups.into_iter().flat_map(|g| g.filings).collect();

        let summary = summarize(&parsed, filings.len());
        let confidence = score(&parsed, &filings, &analysis);
        info!(filings = filings.len(), confidence, "processed query");

        QueryResult {
            query: query.to_string(),
            parsed,
            filings,
            analysis,
            summary,
            confidence,
        }
    }

    fn retrieve(&self, parsed: &ParsedQuery) -> Vec<CompanyFilings> {
        parsed
            .target_companies()
            .into_iter()
            .map(|company| {
                let filings = match self.parser.lexicon().cik_for(company) {
                    Some(cik) => {
                        let fetched = self.source.fetch_filings(cik, parsed.filing_type);
                        self.apply_timeframe(fetched, parsed.timeframe)
                    }
                    None => {
                        warn!(company, "no CIK for company; skipping retrieval");
                        Vec::new()
                    }
                };
                info!(company, count = filings.len(), "retrieved filings");
                CompanyFilings {
                    company: company.to_string(),
                    filings,
                }
            })
            .collect()
    }

    fn apply_timeframe(
        &self,
        filings: Vec<FilingRecord>,
        timeframe: Option<Timeframe>,
    ) -> Vec<FilingRecord> {
        let Some(timeframe) = timeframe else {
            return filings;
        };

        match timeframe.window() {
            TimeWindow::Filings(n) => filings.into_iter().take(n).collect(),
            TimeWindow::Months(months) => {
                let reference = self
                    .config
                    .reference_date
                    .unwrap_or_else(|| Utc::now().date_naive());
                let Some(cutoff) = reference.checked_sub_months(Months::new(months)) else {
                    return filings;
                };
                filings
                    .into_iter()
                    .filter(|f| match NaiveDate::parse_from_str(&f.filing_date, "%Y-%m-%d") {
                        Ok(date) => date >= cutoff,
                        Err(_) => {
                            debug!(date = %f.filing_date, "unparseable filing date kept");
                            true
                        }
                    })
                    .collect()
            }
        }
    }

    fn attach_documents(&self, groups: &mut [CompanyFilings]) {
        let parser = self.analyzer.documents();
        let mut remaining = self.config.max_documents;

        for record in groups.iter_mut().flat_map(|g| g.filings.iter_mut()) {
            if remaining == 0 {
                break;
            }
            if record.has_text() {
                continue;
            }
            remaining -= 1;

            match self.source.fetch_document(record) {
                Some(html) => {
                    let doc = parser.parse(&html);
                    debug!(
                        accession = %record.accession_number,
                        sections = doc.sections.len(),
                        "attached document text"
                    );
                    *record = record.with_text(doc.text);
                }
                None => warn!(url = %record.url, "document unavailable"),
            }
        }
    }

    fn analyze(&self, query: &str, parsed: &ParsedQuery, groups: &[CompanyFilings]) -> AnalysisBundle {
        let texts: Vec<&str> = groups
            .iter()
            .flat_map(|g| &g.filings)
            .filter(|f| f.has_text())
            .map(|f| f.text.as_str())
            .collect();
        let corpus = if texts.is_empty() {
            query.to_string()
        } else {
            texts.join("\n\n")
        };

        let mut bundle = self.analyzer.analyze(&corpus);

        if parsed.intent == Intent::ComparePolicies {
            bundle.comparisons = groups
                .iter()
                .map(|g| {
                    let own: Vec<&str> = g
                        .filings
                        .iter()
                        .filter(|f| f.has_text())
                        .map(|f| f.text.as_str())
                        .collect();
                    let text = if own.is_empty() {
                        query.to_string()
                    } else {
                        own.join("\n\n")
                    };
                    self.analyzer.compare_policies(&g.company, &text)
                })
                .collect();
        }

        bundle
    }
}

/// `Found {n} {type} filings from {company} with relevant analysis.`
pub fn summarize(parsed: &ParsedQuery, filing_count: usize) -> String {
    let filing_type = parsed.filing_type.map_or("filing", |ft| ft.code());
    let company = match parsed.intent {
        Intent::ComparePolicies if !parsed.companies.is_empty() => parsed.companies.join(" and "),
        _ => parsed.company.clone().unwrap_or_else(|| "Company".to_string()),
    };
    format!(
        "Found {} {} filings from {} with relevant analysis.",
        filing_count, filing_type, company
    )
}

/// Heuristic confidence: 0.5 base plus credit for each signal found
pub fn score(parsed: &ParsedQuery, filings: &[FilingRecord], analysis: &AnalysisBundle) -> f64 {
    let mut confidence = 0.5;
    if parsed.filing_type.is_some() {
        confidence += 0.2;
    }
    if parsed.company.is_some() {
        confidence += 0.2;
    }
    if !filings.is_empty() {
        confidence += 0.1;
    }
    if !analysis.concepts.is_empty() {
        confidence += 0.1;
    }
    f64::min(confidence, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use edgarq_domain::{ConceptMatch, FilingType};

    #[test]
    fn test_summary_defaults() {
        let parsed = ParsedQuery::default();
        assert_eq!(
            summarize(&parsed, 0),
            "Found 0 filing filings from Company with relevant analysis."
        );
    }

    #[test]
    fn test_summary_with_type_and_company() {
        let parsed = ParsedQuery {
            filing_type: Some(FilingType::Form8K),
            company: Some("Tesla".to_string()),
            ..Default::default()
        };
        assert_eq!(
            summarize(&parsed, 2),
            "Found 2 8-K filings from Tesla with relevant analysis."
        );
    }

    #[test]
    fn test_summary_joins_compared_companies() {
        let parsed = ParsedQuery {
            intent: Intent::ComparePolicies,
            filing_type: Some(FilingType::Form10K),
            company: Some("Apple".to_string()),
            companies: vec!["Apple".to_string(), "Microsoft".to_string()],
            ..Default::default()
        };
        assert_eq!(
            summarize(&parsed, 4),
            "Found 4 10-K filings from Apple and Microsoft with relevant analysis."
        );
    }

    #[test]
    fn test_score_bounds() {
        assert!((score(&ParsedQuery::default(), &[], &AnalysisBundle::default()) - 0.5).abs() < 1e-9);

        let parsed = ParsedQuery {
            filing_type: Some(FilingType::Form10K),
            company: Some("Apple".to_string()),
            ..Default::default()
        };
        let filing = FilingRecord {
            accession_number: "a".to_string(),
            cik: "320193".to_string(),
            company_name: "Apple Inc.".to_string(),
            form_type: "10-K".to_string(),
            filing_date: "2024-11-01".to_string(),
            text: String::new(),
            url: String::new(),
            attachments: Vec::new(),
        };
        let analysis = AnalysisBundle {
            concepts: vec![ConceptMatch {
                standard: "ASC 606".to_string(),
                concept: "contracts".to_string(),
                confidence: 0.9,
                context: String::new(),
            }],
            ..Default::default()
        };
        assert_eq!(score(&parsed, &[filing], &analysis), 1.0);
    }

    #[test]
    fn test_processor_config_toml() {
        let config = ProcessorConfig::from_toml(
            "fetch_documents = true\nmax_documents = 5\nreference_date = \"2024-12-31\"\n",
        )
        .unwrap();
        assert!(config.fetch_documents);
        assert_eq!(config.max_documents, 5);
        assert_eq!(config.reference_date, NaiveDate::from_ymd_opt(2024, 12, 31));

        let round_trip = ProcessorConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(config, round_trip);
    }

    #[test]
    fn test_processor_config_rejects_zero_documents() {
        let result = ProcessorConfig::from_toml("fetch_documents = true\nmax_documents = 0\n");
        assert!(matches!(result, Err(QueryError::Config(_))));
    }
}
