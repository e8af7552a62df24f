//! edgarq SEC Filings Layer
//!
//! Implementations of the `FilingSource` trait from `edgarq-domain`.
//!
//! # Sources
//!
//! - `EdgarClient`: the public EDGAR submissions API
//! - `MockSource`: canned filings and documents for testing
//!
//! Both are fail-soft through the trait: a failed lookup is logged and
//! comes back empty. `EdgarClient::try_fetch_filings` exposes the cause for
//! callers that want it.
//!
//! # Examples
//!
//! ```
//! use edgarq_domain::{FilingSource, FilingType};
//! use edgarq_sec::MockSource;
//!
//! let mut source = MockSource::default();
//! source.add_filing(MockSource::record("320193", "Apple Inc.", "10-K", "2024-11-01"));
//! source.add_filing(MockSource::record("320193", "Apple Inc.", "8-K", "2024-10-31"));
//!
//! let annual = source.fetch_filings("320193", Some(FilingType::Form10K));
//! assert_eq!(annual.len(), 1);
//! assert_eq!(source.filing_calls(), 1);
//! ```

#![warn(missing_docs)]

pub mod client;
pub mod columnar;
pub mod config;

use edgarq_domain::{FilingRecord, FilingSource, FilingType};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use client::{EdgarClient, SubmissionRow};
pub use columnar::ColumnarBatch;
pub use config::SecConfig;

/// Errors that can occur while talking to EDGAR
#[derive(Error, Debug)]
pub enum SecError {
    /// Network failure before a status was received
    #[error("Communication error: {0}")]
    Transport(String),

    /// Non-success HTTP status
    #[error("HTTP {status} from {url}")]
    Status {
        /// Status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// Body was not the expected JSON
    #[error("Invalid response: {0}")]
    Json(String),

    /// Configuration rejected
    #[error("Configuration error: {0}")]
    Config(String),
}

/// In-memory filing source for deterministic testing
///
/// Filings are keyed by CIK and documents by URL. Clones share their
/// tables and call counters.
#[derive(Debug, Clone, Default)]
pub struct MockSource {
    filings: Arc<Mutex<HashMap<String, Vec<FilingRecord>>>>,
    documents: Arc<Mutex<HashMap<String, String>>>,
    filing_calls: Arc<Mutex<usize>>,
    document_calls: Arc<Mutex<usize>>,
}

impl MockSource {
    /// A filing record with a predictable accession number and URL
    pub fn record(cik: &str, company_name: &str, form_type: &str, filing_date: &str) -> FilingRecord {
        let accession_number = format!("{:0>10}-{}", cik, filing_date.replace('-', ""));
        FilingRecord {
            url: format!(
                "https://www.sec.gov/Archives/edgar/data/{}/{}/{}.htm",
                cik,
                accession_number.replace('-', ""),
                form_type.to_ascii_lowercase()
            ),
            accession_number,
            cik: cik.to_string(),
            company_name: company_name.to_string(),
            form_type: form_type.to_string(),
            filing_date: filing_date.to_string(),
            text: String::new(),
            attachments: Vec::new(),
        }
    }

    /// Register a filing under its CIK; insertion order is retrieval order
    pub fn add_filing(&mut self, record: FilingRecord) {
        self.filings
            .lock()
            .unwrap()
            .entry(record.cik.clone())
            .or_default()
            .push(record);
    }

    /// Register the document served at `url`
    pub fn add_document(&mut self, url: impl Into<String>, body: impl Into<String>) {
        self.documents.lock().unwrap().insert(url.into(), body.into());
    }

    /// Number of `fetch_filings` calls
    pub fn filing_calls(&self) -> usize {
        *self.filing_calls.lock().unwrap()
    }

    /// Number of `fetch_document` calls
    pub fn document_calls(&self) -> usize {
        *self.document_calls.lock().unwrap()
    }

    /// Reset both call counters
    pub fn reset_call_counts(&self) {
        *self.filing_calls.lock().unwrap() = 0;
        *self.document_calls.lock().unwrap() = 0;
    }
}

impl FilingSource for MockSource {
    fn fetch_filings(&self, cik: &str, form_type: Option<FilingType>) -> Vec<FilingRecord> {
        *self.filing_calls.lock().unwrap() += 1;

        let filings = self.filings.lock().unwrap();
        filings
            .get(cik)
            .map(|records| {
                records
                    .iter()
                    .filter(|r| form_type.map_or(true, |ft| ft.matches(&r.form_type)))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    fn fetch_document(&self, record: &FilingRecord) -> Option<String> {
        *self.document_calls.lock().unwrap() += 1;
        self.documents.lock().unwrap().get(&record.url).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> MockSource {
        let mut source = MockSource::default();
        source.add_filing(MockSource::record("320193", "Apple Inc.", "10-K", "2024-11-01"));
        source.add_filing(MockSource::record("320193", "Apple Inc.", "8-K", "2024-10-31"));
        source.add_filing(MockSource::record("789019", "Microsoft Corp", "10-K", "2024-07-30"));
        source
    }

    #[test]
    fn test_mock_filings_by_cik() {
        let source = source();
        assert_eq!(source.fetch_filings("320193", None).len(), 2);
        assert_eq!(source.fetch_filings("789019", None).len(), 1);
        assert!(source.fetch_filings("1318605", None).is_empty());
    }

    #[test]
    fn test_mock_form_filter() {
        let source = source();
        let filings = source.fetch_filings("320193", Some(FilingType::Form8K));
        assert_eq!(filings.len(), 1);
        assert_eq!(filings[0].form_type, "8-K");
    }

    #[test]
    fn test_mock_documents() {
        let mut source = source();
        let record = source.fetch_filings("789019", None).remove(0);
        assert!(source.fetch_document(&record).is_none());

        source.add_document(record.url.clone(), "<p>Leases</p>");
        assert_eq!(source.fetch_document(&record).as_deref(), Some("<p>Leases</p>"));
        assert_eq!(source.document_calls(), 2);
    }

    #[test]
    fn test_mock_call_counts_shared_between_clones() {
        let source = source();
        let clone = source.clone();

        clone.fetch_filings("320193", None);
        assert_eq!(source.filing_calls(), 1);

        source.reset_call_counts();
        assert_eq!(clone.filing_calls(), 0);
    }

    #[test]
    fn test_mock_record_shape() {
        let record = MockSource::record("320193", "Apple Inc.", "10-K", "2024-11-01");
        assert_eq!(record.accession_number, "0000320193-20241101");
        assert!(record.url.ends_with("/320193/000032019320241101/10-k.htm"));
        assert!(!record.has_text());
    }

    #[test]
    fn test_status_error_display() {
        let err = SecError::Status {
            status: 503,
            url: "https://data.sec.gov/submissions/CIK0000320193.json".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "HTTP 503 from https://data.sec.gov/submissions/CIK0000320193.json"
        );
    }
}
