//! Filing metadata

use serde::{Deserialize, Serialize};

/// One SEC filing as returned by a retrieval call
///
/// Built once per retrieval row and never mutated; attaching fetched
/// document text yields a new record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilingRecord {
    /// EDGAR accession number (`0000320193-24-000123`)
    pub accession_number: String,

    /// Filer's Central Index Key, as requested
    pub cik: String,

    /// Filer's registered name
    pub company_name: String,

    /// Form code as EDGAR reports it
    pub form_type: String,

    /// `YYYY-MM-DD`
    pub filing_date: String,

    /// Extracted document text; empty until the document is fetched
    #[serde(default)]
    pub text: String,

    /// Primary document URL
    pub url: String,

    /// Exhibit document names
    #[serde(default)]
    pub attachments: Vec<String>,
}

impl FilingRecord {
    /// Copy of this record carrying the given document text
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..self.clone()
        }
    }

    /// Whether document text has been attached
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }
}
