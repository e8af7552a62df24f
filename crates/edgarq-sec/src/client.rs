//! EDGAR submissions client
//!
//! Blocking HTTP against the public submissions API. Every request is
//! preceded by a fixed pause so a burst of lookups stays under EDGAR's
//! fair-access limit.
//!
//! # Examples
//!
//! ```no_run
//! use edgarq_domain::{FilingSource, FilingType};
//! use edgarq_sec::{EdgarClient, SecConfig};
//!
//! let client = EdgarClient::new(SecConfig::default()).unwrap();
//! let filings = client.fetch_filings("320193", Some(FilingType::Form10K));
//! ```

use crate::columnar::ColumnarBatch;
use crate::config::SecConfig;
use crate::SecError;
use edgarq_domain::{FilingRecord, FilingSource, FilingType};
use serde::Deserialize;
use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Top level of a `submissions/CIK##########.json` document
#[derive(Debug, Deserialize)]
struct Submissions {
    #[serde(default)]
    name: String,
    #[serde(default)]
    filings: SubmissionFilings,
}

#[derive(Debug, Default, Deserialize)]
struct SubmissionFilings {
    #[serde(default)]
    recent: ColumnarBatch,
}

/// One row of `filings.recent`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmissionRow {
    /// `0000320193-24-000123`
    pub accession_number: String,
    /// Form code
    pub form: String,
    /// `YYYY-MM-DD`
    pub filing_date: String,
    /// File name of the primary document
    pub primary_document: String,
}

/// Client for the EDGAR submissions API
#[derive(Debug, Clone)]
pub struct EdgarClient {
    config: SecConfig,
    client: reqwest::blocking::Client,
}

impl EdgarClient {
    /// Create a client after validating the configuration
    pub fn new(config: SecConfig) -> Result<Self, SecError> {
        config.validate().map_err(SecError::Config)?;

        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SecError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Client configuration
    pub fn config(&self) -> &SecConfig {
        &self.config
    }

    /// Submissions URL for a CIK, zero-padded to ten digits
    pub fn submissions_url(&self, cik: &str) -> String {
        format!(
            "{}/submissions/CIK{:0>10}.json",
            self.config.base_url.trim_end_matches('/'),
            cik.trim()
        )
    }

    /// Archive URL of a filing's primary document
    pub fn document_url(&self, cik: &str, accession_number: &str, primary_document: &str) -> String {
        let cik = cik.trim().trim_start_matches('0');
        format!(
            "{}/Archives/edgar/data/{}/{}/{}",
            self.config.archive_base_url.trim_end_matches('/'),
            if cik.is_empty() { "0" } else { cik },
            accession_number.replace('-', ""),
            primary_document
        )
    }

    /// Recent filings for a CIK, surfacing the failure cause
    ///
    /// At most `max_recent` rows are read; the form filter applies after
    /// that cap, so a filtered result may be shorter.
    pub fn try_fetch_filings(
        &self,
        cik: &str,
        form_type: Option<FilingType>,
    ) -> Result<Vec<FilingRecord>, SecError> {
        let url = self.submissions_url(cik);
        let body = self.get(&url)?;
        let submissions: Submissions =
            serde_json::from_str(&body).map_err(|e| SecError::Json(e.to_string()))?;

        let rows: Vec<SubmissionRow> = submissions.filings.recent.rows_as(self.config.max_recent);
        debug!(cik, rows = rows.len(), "decoded recent filings");

        let records: Vec<FilingRecord> = rows
            .into_iter()
            .filter(|row| form_type.map_or(true, |ft| ft.matches(&row.form)))
            .map(|row| FilingRecord {
                url: self.document_url(cik, &row.accession_number, &row.primary_document),
                accession_number: row.accession_number,
                cik: cik.to_string(),
                company_name: submissions.name.clone(),
                form_type: row.form,
                filing_date: row.filing_date,
                text: String::new(),
                attachments: Vec::new(),
            })
            .collect();

        info!(
            cik,
            company = %submissions.name,
            form = ?form_type.map(|ft| ft.code()),
            count = records.len(),
            "retrieved filings"
        );
        Ok(records)
    }

    /// Raw body of a document URL, surfacing the failure cause
    pub fn try_fetch_document(&self, url: &str) -> Result<String, SecError> {
        self.get(url)
    }

    fn get(&self, url: &str) -> Result<String, SecError> {
        thread::sleep(Duration::from_millis(self.config.rate_limit_delay_ms));
        debug!(url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| SecError::Transport(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SecError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .text()
            .map_err(|e| SecError::Transport(format!("Failed to read body: {}", e)))
    }
}

impl FilingSource for EdgarClient {
    fn fetch_filings(&self, cik: &str, form_type: Option<FilingType>) -> Vec<FilingRecord> {
        self.try_fetch_filings(cik, form_type).unwrap_or_else(|e| {
            warn!(cik, error = %e, "filing retrieval failed");
            Vec::new()
        })
    }

    fn fetch_document(&self, record: &FilingRecord) -> Option<String> {
        match self.try_fetch_document(&record.url) {
            Ok(body) => Some(body),
            Err(e) => {
                warn!(url = %record.url, error = %e, "document fetch failed");
                None
            }
        }
    }
}
