//! edgarq Analysis
//!
//! Keyword-driven content analysis of SEC filing text.
//!
//! # Overview
//!
//! Each analyzer scans text against an immutable table from
//! [`AnalysisConfig`] and returns plain value records:
//!
//! - **ConceptDetector**: accounting standards (ASC 606, ASC 842, ...)
//! - **PolicyExtractor**: accounting policy disclosures
//! - **RiskAnalyzer**: risk factor mentions with a severity grade
//! - **DocumentParser**: HTML to text, plus header-delimited sections
//!
//! Scanning never fails. Out-of-range excerpt windows are clamped, and text
//! with no hits yields empty lists.
//!
//! # Example Usage
//!
//! ```
//! use edgarq_analysis::{ContentAnalyzer, DocumentParser};
//!
//! let html = "<h1>Item 1. Business</h1><p>The Company adopted ASC 606.</p>";
//! let doc = DocumentParser::default().parse(html);
//! assert!(doc.sections.contains_key("Item 1. Business"));
//!
//! let analyzer = ContentAnalyzer::default_config();
//! let bundle = analyzer.analyze("Revenue from contracts is recognized under ASC 606.");
//! assert_eq!(bundle.concepts[0].standard, "ASC 606");
//! ```

#![warn(missing_docs)]

mod analyzer;
mod concept;
mod config;
mod document;
mod error;
mod policy;
mod risk;

#[cfg(test)]
mod tests;

pub use analyzer::ContentAnalyzer;
pub use concept::{concept_confidence, ConceptDetector};
pub use config::{AnalysisConfig, PolicyEntry, SeverityScope, SeverityWords, StandardEntry};
pub use document::{extract_sections, strip_tags, DocumentParser, ParsedDocument, Sections};
pub use error::AnalysisError;
pub use policy::PolicyExtractor;
pub use risk::RiskAnalyzer;
