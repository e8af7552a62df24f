//! edgarq Query Understanding
//!
//! Turns a natural-language question about SEC filings into a
//! [`QueryResult`](edgarq_domain::QueryResult).
//!
//! The pipeline:
//! 1. [`QueryParser`] extracts filters using the tables in a [`Lexicon`]
//! 2. companies are resolved to CIKs and their filings retrieved from a
//!    [`FilingSource`](edgarq_domain::FilingSource), then narrowed to the
//!    requested timeframe
//! 3. optionally, primary documents are fetched and reduced to text
//! 4. the content analyzers run over the collected text
//! 5. a one-line summary and a heuristic confidence are attached
//!
//! # Examples
//!
//! ```
//! use edgarq_query::QueryParser;
//! use edgarq_domain::{FilingType, Intent};
//!
//! let parsed = QueryParser::default().parse("Find 8-K filings about restatements");
//! assert_eq!(parsed.filing_type, Some(FilingType::Form8K));
//! assert_eq!(parsed.intent, Intent::SearchFilings);
//! assert!(parsed.keywords.contains(&"restatement".to_string()));
//! ```

#![warn(missing_docs)]

mod error;
mod lexicon;
mod parser;
mod processor;

pub use error::QueryError;
pub use lexicon::{CompanyEntry, ConceptEntry, Lexicon, RiskPhrase, SectorEntry, TimeframePhrase};
pub use parser::QueryParser;
pub use processor::{score, summarize, ProcessorConfig, QueryProcessor};
