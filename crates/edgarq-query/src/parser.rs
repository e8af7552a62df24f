//! Natural-language question parsing
//!
//! Every field is a case-insensitive table lookup. Fields the question
//! doesn't mention stay empty.

use crate::lexicon::Lexicon;
use edgarq_domain::text;
use edgarq_domain::{FilingType, Intent, ParsedQuery, RiskLevel, Timeframe};
use tracing::info;

/// Turns a free-text question into a [`ParsedQuery`]
#[derive(Debug, Clone, Default)]
pub struct QueryParser {
    lexicon: Lexicon,
}

impl QueryParser {
    /// Create a parser over the given tables
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Tables this parser reads
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Parse a question
    pub fn parse(&self, query: &str) -> ParsedQuery {
        let lowered = text::lower(query);
        let intent = self.intent(&lowered);

        let parsed = ParsedQuery {
            intent,
            filing_type: self.filing_type(&lowered),
            timeframe: self.timeframe(&lowered),
            company: self.company(&lowered),
            companies: match intent {
                Intent::ComparePolicies => self.companies(&lowered),
                Intent::SearchFilings => Vec::new(),
            },
            accounting_concepts: self.accounting_concepts(&lowered),
            sector: self.sector(&lowered),
            risk_level: self.risk_level(&lowered),
            keywords: self.keywords(&lowered),
        };

        info!(
            intent = %parsed.intent,
            filing_type = ?parsed.filing_type.map(|ft| ft.code()),
            company = ?parsed.company,
            keywords = parsed.keywords.len(),
            "parsed query"
        );
        parsed
    }

    fn position(&self, lowered: &str, phrase: &str) -> Option<usize> {
        text::find(lowered, &text::lower(phrase), self.lexicon.match_mode)
    }

    fn has(&self, lowered: &str, phrase: &str) -> bool {
        self.position(lowered, phrase).is_some()
    }

    fn intent(&self, lowered: &str) -> Intent {
        if self.lexicon.compare_words.iter().any(|w| self.has(lowered, w)) {
            Intent::ComparePolicies
        } else {
            Intent::SearchFilings
        }
    }

    fn filing_type(&self, lowered: &str) -> Option<FilingType> {
        FilingType::ALL
            .into_iter()
            .find(|ft| self.has(lowered, ft.code()))
    }

    fn timeframe(&self, lowered: &str) -> Option<Timeframe> {
        self.lexicon
            .timeframes
            .iter()
            .find(|t| self.has(lowered, &t.phrase))
            .map(|t| t.timeframe)
    }

    fn company(&self, lowered: &str) -> Option<String> {
        self.lexicon
            .companies
            .iter()
            .find(|c| self.has(lowered, &c.name))
            .map(|c| text::title_case(&c.name))
    }

    /// Every known company, ordered by first mention
    fn companies(&self, lowered: &str) -> Vec<String> {
        let mut found: Vec<(usize, String)> = self
            .lexicon
            .companies
            .iter()
            .filter_map(|c| {
                self.position(lowered, &c.name)
                    .map(|pos| (pos, text::title_case(&c.name)))
            })
            .collect();
        found.sort_by_key(|(pos, _)| *pos);
        found.into_iter().map(|(_, name)| name).collect()
    }

    fn accounting_concepts(&self, lowered: &str) -> Vec<String> {
        self.lexicon
            .concepts
            .iter()
            .filter(|c| self.has(lowered, &c.code) || c.phrases.iter().any(|p| self.has(lowered, p)))
            .map(|c| c.code.clone())
            .fold(Vec::new(), |mut codes, code| {
                if !codes.contains(&code) {
                    codes.push(code);
                }
                codes
            })
    }

    fn sector(&self, lowered: &str) -> Option<String> {
        self.lexicon
            .sectors
            .iter()
            .find(|s| s.phrases.iter().any(|p| self.has(lowered, p)))
            .map(|s| s.sector.clone())
    }

    fn risk_level(&self, lowered: &str) -> Option<RiskLevel> {
        self.lexicon
            .risk_levels
            .iter()
            .find(|r| self.has(lowered, &r.phrase))
            .map(|r| r.level)
    }

    fn keywords(&self, lowered: &str) -> Vec<String> {
        self.lexicon
            .keywords
            .iter()
            .filter(|k| self.has(lowered, k))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edgarq_domain::MatchMode;

    fn parse(query: &str) -> ParsedQuery {
        QueryParser::default().parse(query)
    }

    #[test]
    fn test_filing_type_first_in_list_order() {
        assert_eq!(parse("Find 8-K filings").filing_type, Some(FilingType::Form8K));
        assert_eq!(parse("latest 10-q").filing_type, Some(FilingType::Form10Q));
        assert_eq!(parse("any 424b3 prospectus").filing_type, Some(FilingType::Form424B3));
        // 8-K precedes 10-K in the scan
        assert_eq!(parse("10-K or 8-K").filing_type, Some(FilingType::Form8K));
        assert_eq!(parse("annual reports").filing_type, None);
    }

    #[test]
    fn test_timeframe_phrases() {
        assert_eq!(parse("in the past three years").timeframe, Some(Timeframe::ThreeYears));
        assert_eq!(parse("over the past year").timeframe, Some(Timeframe::OneYear));
        assert_eq!(parse("the last five 10-Q filings").timeframe, Some(Timeframe::LastFiveFilings));
        assert_eq!(parse("filed within 12 months").timeframe, Some(Timeframe::TwelveMonths));
        assert_eq!(parse("in the last 6 months").timeframe, Some(Timeframe::SixMonths));
        assert_eq!(parse("recently").timeframe, None);
    }

    #[test]
    fn test_company_title_cased() {
        assert_eq!(parse("what did APPLE file").company.as_deref(), Some("Apple"));
        assert_eq!(parse("nothing known").company, None);
    }

    #[test]
    fn test_company_is_first_in_table_order() {
        // Microsoft precedes Tesla in the table even though Tesla is mentioned first
        assert_eq!(parse("Tesla and Microsoft").company.as_deref(), Some("Microsoft"));
    }

    #[test]
    fn test_companies_only_for_comparison() {
        let search = parse("Tesla and Microsoft 10-K filings");
        assert!(search.companies.is_empty());

        let compare = parse("Compare Tesla and Microsoft");
        assert_eq!(compare.intent, Intent::ComparePolicies);
        assert_eq!(compare.companies, vec!["Tesla", "Microsoft"]);
    }

    #[test]
    fn test_intent() {
        assert_eq!(parse("COMPARE lease policies").intent, Intent::ComparePolicies);
        assert_eq!(parse("show lease policies").intent, Intent::SearchFilings);
    }

    #[test]
    fn test_keywords_in_table_order() {
        let parsed = parse("goodwill impairment and restatements");
        assert_eq!(parsed.keywords, vec!["restatement", "goodwill", "impairment"]);
    }

    #[test]
    fn test_accounting_concepts_from_codes_and_topics() {
        let parsed = parse("ASC 842 disclosures and revenue recognition");
        assert_eq!(parsed.accounting_concepts, vec!["ASC 606", "ASC 842"]);

        let parsed = parse("asc 860 transfers");
        assert_eq!(parsed.accounting_concepts, vec!["ASC 860"]);

        assert!(parse("dividends").accounting_concepts.is_empty());
    }

    #[test]
    fn test_sector_and_risk_level() {
        let parsed = parse("high-risk disclosures from tech companies");
        assert_eq!(parsed.sector.as_deref(), Some("Technology"));
        assert_eq!(parsed.risk_level, Some(RiskLevel::High));

        let parsed = parse("low risk banks");
        assert_eq!(parsed.sector.as_deref(), Some("Financial"));
        assert_eq!(parsed.risk_level, Some(RiskLevel::Low));

        // a recognized company never implies a sector
        assert_eq!(parse("Apple 10-K filings").sector, None);
    }

    #[test]
    fn test_empty_query() {
        assert_eq!(parse(""), ParsedQuery::default());
    }

    #[test]
    fn test_substring_mode_matches_embedded_words() {
        // "pineapple" contains "apple"
        assert_eq!(parse("pineapple exports").company.as_deref(), Some("Apple"));

        let lexicon = Lexicon {
            match_mode: MatchMode::WordStart,
            ..Lexicon::default()
        };
        let parser = QueryParser::new(lexicon);
        assert_eq!(parser.parse("pineapple exports").company, None);
        assert_eq!(parser.parse("Apple's exports").company.as_deref(), Some("Apple"));
    }
}
