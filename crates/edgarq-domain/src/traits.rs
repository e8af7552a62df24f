//! Trait definitions for external interactions
//!
//! The pipeline only ever sees filings through `FilingSource`; the HTTP
//! client and the test doubles live in `edgarq-sec`.

use crate::{FilingRecord, FilingType};

/// Where filings come from
///
/// Implementations are fail-soft: transport or decoding problems are logged
/// and surface as an empty list (or `None`), never as an error.
pub trait FilingSource {
    /// Recent filings for a company, optionally restricted to one form type
    fn fetch_filings(&self, cik: &str, form_type: Option<FilingType>) -> Vec<FilingRecord>;

    /// Raw primary document for a filing
    fn fetch_document(&self, record: &FilingRecord) -> Option<String>;
}

impl<T: FilingSource + ?Sized> FilingSource for &T {
    fn fetch_filings(&self, cik: &str, form_type: Option<FilingType>) -> Vec<FilingRecord> {
        (**self).fetch_filings(cik, form_type)
    }

    fn fetch_document(&self, record: &FilingRecord) -> Option<String> {
        (**self).fetch_document(record)
    }
}

impl<T: FilingSource + ?Sized> FilingSource for Box<T> {
    fn fetch_filings(&self, cik: &str, form_type: Option<FilingType>) -> Vec<FilingRecord> {
        (**self).fetch_filings(cik, form_type)
    }

    fn fetch_document(&self, record: &FilingRecord) -> Option<String> {
        (**self).fetch_document(record)
    }
}
