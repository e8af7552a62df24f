//! Parsed query model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use crate::analysis::Severity as RiskLevel;

/// What the caller wants done with the filings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    /// Find filings matching the filters
    #[default]
    SearchFilings,
    /// Compare disclosed policies across companies
    ComparePolicies,
}

impl Intent {
    /// Wire name (`SEARCH_FILINGS` / `COMPARE_POLICIES`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::SearchFilings => "SEARCH_FILINGS",
            Intent::ComparePolicies => "COMPARE_POLICIES",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// SEC form codes the parser recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilingType {
    /// Current report
    #[serde(rename = "8-K")]
    Form8K,
    /// Annual report
    #[serde(rename = "10-K")]
    Form10K,
    /// Quarterly report
    #[serde(rename = "10-Q")]
    Form10Q,
    /// Registration statement
    #[serde(rename = "S-1")]
    FormS1,
    /// Simplified registration statement
    #[serde(rename = "S-3")]
    FormS3,
    /// Prospectus
    #[serde(rename = "424B3")]
    Form424B3,
}

impl FilingType {
    /// All form codes, in the order the parser scans them
    pub const ALL: [FilingType; 6] = [
        FilingType::Form8K,
        FilingType::Form10K,
        FilingType::Form10Q,
        FilingType::FormS1,
        FilingType::FormS3,
        FilingType::Form424B3,
    ];

    /// Uppercase form code as EDGAR reports it
    pub fn code(&self) -> &'static str {
        match self {
            FilingType::Form8K => "8-K",
            FilingType::Form10K => "10-K",
            FilingType::Form10Q => "10-Q",
            FilingType::FormS1 => "S-1",
            FilingType::FormS3 => "S-3",
            FilingType::Form424B3 => "424B3",
        }
    }

    /// Whether an EDGAR `form` value is this filing type
    pub fn matches(&self, form: &str) -> bool {
        form.eq_ignore_ascii_case(self.code())
    }
}

impl fmt::Display for FilingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for FilingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        FilingType::ALL
            .into_iter()
            .find(|ft| ft.matches(s))
            .ok_or_else(|| format!("Unknown filing type: {}", s))
    }
}

/// Normalized relative-date phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    /// Past six months
    #[serde(rename = "6months")]
    SixMonths,
    /// Past twelve months
    #[serde(rename = "12months")]
    TwelveMonths,
    /// Past year
    #[serde(rename = "1year")]
    OneYear,
    /// Past two years
    #[serde(rename = "2years")]
    TwoYears,
    /// Past three years
    #[serde(rename = "3years")]
    ThreeYears,
    /// Past five years
    #[serde(rename = "5years")]
    FiveYears,
    /// Most recent five filings, regardless of date
    #[serde(rename = "5filings")]
    LastFiveFilings,
}

/// How a timeframe narrows a filing list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeWindow {
    /// Keep filings dated within this many months
    Months(u32),
    /// Keep this many of the most recent filings
    Filings(usize),
}

impl Timeframe {
    /// Token code (`3years`, `5filings`, ...)
    pub fn code(&self) -> &'static str {
        match self {
            Timeframe::SixMonths => "6months",
            Timeframe::TwelveMonths => "12months",
            Timeframe::OneYear => "1year",
            Timeframe::TwoYears => "2years",
            Timeframe::ThreeYears => "3years",
            Timeframe::FiveYears => "5years",
            Timeframe::LastFiveFilings => "5filings",
        }
    }

    /// The filter this timeframe implies
    pub fn window(&self) -> TimeWindow {
        match self {
            Timeframe::SixMonths => TimeWindow::Months(6),
            Timeframe::TwelveMonths | Timeframe::OneYear => TimeWindow::Months(12),
            Timeframe::TwoYears => TimeWindow::Months(24),
            Timeframe::ThreeYears => TimeWindow::Months(36),
            Timeframe::FiveYears => TimeWindow::Months(60),
            Timeframe::LastFiveFilings => TimeWindow::Filings(5),
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Structured filters extracted from a natural-language question
///
/// Fields the question doesn't mention stay `None` or empty; nothing is
/// filled in by guesswork.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedQuery {
    /// Search or compare
    pub intent: Intent,

    /// Requested form type
    pub filing_type: Option<FilingType>,

    /// Relative date constraint
    pub timeframe: Option<Timeframe>,

    /// First known company mentioned
    pub company: Option<String>,

    /// All companies named in a comparison, in order of mention
    pub companies: Vec<String>,

    /// Standard codes (e.g. `ASC 606`) the question refers to
    pub accounting_concepts: Vec<String>,

    /// Industry sector
    pub sector: Option<String>,

    /// Requested risk level
    pub risk_level: Option<RiskLevel>,

    /// Topic phrases found in the question
    pub keywords: Vec<String>,
}

impl ParsedQuery {
    /// Companies whose filings should be retrieved
    pub fn target_companies(&self) -> Vec<&str> {
        match self.intent {
            Intent::ComparePolicies if !self.companies.is_empty() => {
                self.companies.iter().map(String::as_str).collect()
            }
            _ => self.company.as_deref().into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filing_type_from_str_is_case_insensitive() {
        assert_eq!("10-k".parse::<FilingType>().unwrap(), FilingType::Form10K);
        assert_eq!("424b3".parse::<FilingType>().unwrap(), FilingType::Form424B3);
        assert_eq!(" S-1 ".parse::<FilingType>().unwrap(), FilingType::FormS1);
        assert!("20-F".parse::<FilingType>().is_err());
    }

    #[test]
    fn test_filing_type_serializes_as_code() {
        let json = serde_json::to_string(&FilingType::Form8K).unwrap();
        assert_eq!(json, "\"8-K\"");
    }

    #[test]
    fn test_intent_wire_names() {
        assert_eq!(
            serde_json::to_string(&Intent::ComparePolicies).unwrap(),
            "\"COMPARE_POLICIES\""
        );
        assert_eq!(Intent::default(), Intent::SearchFilings);
    }

    #[test]
    fn test_timeframe_windows() {
        assert_eq!(Timeframe::ThreeYears.window(), TimeWindow::Months(36));
        assert_eq!(Timeframe::LastFiveFilings.window(), TimeWindow::Filings(5));
        assert_eq!(Timeframe::TwelveMonths.code(), "12months");
    }

    #[test]
    fn test_target_companies_for_comparison() {
        let parsed = ParsedQuery {
            intent: Intent::ComparePolicies,
            company: Some("Apple".to_string()),
            companies: vec!["Apple".to_string(), "Microsoft".to_string()],
            ..Default::default()
        };
        assert_eq!(parsed.target_companies(), vec!["Apple", "Microsoft"]);
    }

    #[test]
    fn test_target_companies_for_search() {
        let parsed = ParsedQuery {
            company: Some("Tesla".to_string()),
            ..Default::default()
        };
        assert_eq!(parsed.target_companies(), vec!["Tesla"]);
        assert!(ParsedQuery::default().target_companies().is_empty());
    }
}
