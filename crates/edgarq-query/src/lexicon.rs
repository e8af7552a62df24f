//! Keyword tables for the query parser

use crate::error::QueryError;
use edgarq_domain::{MatchMode, RiskLevel, Timeframe};
use serde::{Deserialize, Serialize};

/// A relative-date phrase and the timeframe it means
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeframePhrase {
    /// Phrase to look for
    pub phrase: String,
    /// Timeframe it stands for
    pub timeframe: Timeframe,
}

/// A company the parser can recognize and resolve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyEntry {
    /// Name as it appears in questions
    pub name: String,
    /// Central Index Key
    pub cik: String,
}

/// A standard code and the topic phrases that imply it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptEntry {
    /// Standard code; its literal appearance also counts
    pub code: String,
    /// Topic phrases
    #[serde(default)]
    pub phrases: Vec<String>,
}

/// Sector phrases
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorEntry {
    /// Sector name reported on a match
    pub sector: String,
    /// Phrases that name the sector
    pub phrases: Vec<String>,
}

/// A risk-level phrase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskPhrase {
    /// Phrase to look for
    pub phrase: String,
    /// Level it stands for
    pub level: RiskLevel,
}

/// Every table the query parser consults
///
/// Tables are scanned in order and the first hit wins wherever a single
/// value is extracted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lexicon {
    /// Keyword matching mode
    #[serde(default)]
    pub match_mode: MatchMode,

    /// Topic phrases reported as keywords
    pub keywords: Vec<String>,

    /// Words that turn a question into a comparison
    pub compare_words: Vec<String>,

    /// Relative-date phrases
    pub timeframes: Vec<TimeframePhrase>,

    /// Known companies
    pub companies: Vec<CompanyEntry>,

    /// Accounting standards
    pub concepts: Vec<ConceptEntry>,

    /// Industry sectors
    pub sectors: Vec<SectorEntry>,

    /// Risk-level phrases
    pub risk_levels: Vec<RiskPhrase>,
}

fn timeframe(phrase: &str, timeframe: Timeframe) -> TimeframePhrase {
    TimeframePhrase {
        phrase: phrase.to_string(),
        timeframe,
    }
}

fn company(name: &str, cik: &str) -> CompanyEntry {
    CompanyEntry {
        name: name.to_string(),
        cik: cik.to_string(),
    }
}

fn concept(code: &str, phrases: &[&str]) -> ConceptEntry {
    ConceptEntry {
        code: code.to_string(),
        phrases: phrases.iter().map(|p| p.to_string()).collect(),
    }
}

fn sector(sector: &str, phrases: &[&str]) -> SectorEntry {
    SectorEntry {
        sector: sector.to_string(),
        phrases: phrases.iter().map(|p| p.to_string()).collect(),
    }
}

fn risk(phrase: &str, level: RiskLevel) -> RiskPhrase {
    RiskPhrase {
        phrase: phrase.to_string(),
        level,
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::Substring,
            keywords: [
                "restatement",
                "revenue recognition",
                "lease accounting",
                "goodwill",
                "impairment",
                "material weakness",
                "going concern",
                "cybersecurity",
            ]
            .iter()
            .map(|k| k.to_string())
            .collect(),
            compare_words: vec!["compare".to_string()],
            timeframes: vec![
                timeframe("past three years", Timeframe::ThreeYears),
                timeframe("3 years", Timeframe::ThreeYears),
                timeframe("past five years", Timeframe::FiveYears),
                timeframe("5 years", Timeframe::FiveYears),
                timeframe("2 years", Timeframe::TwoYears),
                timeframe("two years", Timeframe::TwoYears),
                timeframe("past year", Timeframe::OneYear),
                timeframe("last five", Timeframe::LastFiveFilings),
                timeframe("within 12 months", Timeframe::TwelveMonths),
                timeframe("12 months", Timeframe::TwelveMonths),
                timeframe("6 months", Timeframe::SixMonths),
            ],
            companies: vec![
                company("Apple", "320193"),
                company("Microsoft", "789019"),
                company("Tesla", "1318605"),
                company("Amazon", "1018724"),
                company("Google", "1652044"),
            ],
            concepts: vec![
                concept("ASC 606", &["revenue recognition"]),
                concept("ASC 842", &["lease accounting", "leases"]),
                concept("ASC 350", &["goodwill"]),
                concept("ASC 860", &[]),
            ],
            sectors: vec![
                sector("Technology", &["technology", "tech companies"]),
                sector("Healthcare", &["healthcare", "pharmaceutical"]),
                sector("Financial", &["banking", "banks"]),
                sector("Energy", &["energy"]),
                sector("Industrial", &["industrial"]),
                sector("Consumer", &["consumer"]),
            ],
            risk_levels: vec![
                risk("high-risk", RiskLevel::High),
                risk("high risk", RiskLevel::High),
                risk("medium-risk", RiskLevel::Medium),
                risk("moderate risk", RiskLevel::Medium),
                risk("low-risk", RiskLevel::Low),
                risk("low risk", RiskLevel::Low),
            ],
        }
    }
}

impl Lexicon {
    /// Look up a company by name, ignoring case
    pub fn company(&self, name: &str) -> Option<&CompanyEntry> {
        self.companies
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
    }

    /// CIK for a company name
    pub fn cik_for(&self, name: &str) -> Option<&str> {
        self.company(name)
            .map(|c| c.cik.trim())
            .filter(|cik| !cik.is_empty())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.companies.is_empty() {
            return Err("companies must not be empty".to_string());
        }
        for entry in &self.companies {
            if entry.name.trim().is_empty() {
                return Err("company name must not be empty".to_string());
            }
            if !entry.cik.trim().chars().all(|c| c.is_ascii_digit()) {
                return Err(format!("CIK for {} must be numeric, got '{}'", entry.name, entry.cik));
            }
        }

        let phrases = self
            .keywords
            .iter()
            .chain(&self.compare_words)
            .chain(self.timeframes.iter().map(|t| &t.phrase))
            .chain(self.concepts.iter().map(|c| &c.code))
            .chain(self.concepts.iter().flat_map(|c| &c.phrases))
            .chain(self.sectors.iter().flat_map(|s| &s.phrases))
            .chain(self.risk_levels.iter().map(|r| &r.phrase));
        for phrase in phrases {
            if phrase.trim().is_empty() {
                return Err("lexicon phrases must not be empty".to_string());
            }
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, QueryError> {
        let lexicon: Self = toml::from_str(toml_str)?;
        lexicon.validate().map_err(QueryError::Config)?;
        Ok(lexicon)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
