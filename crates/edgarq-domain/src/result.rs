//! Query result

use crate::{AnalysisBundle, FilingRecord, ParsedQuery};
use serde::{Deserialize, Serialize};

/// Everything one question produced
///
/// Built once at the end of the pipeline and not mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    /// The question as asked
    pub query: String,

    /// Filters extracted from the question
    pub parsed: ParsedQuery,

    /// Filings retrieved for the question
    pub filings: Vec<FilingRecord>,

    /// Findings across the retrieved text
    pub analysis: AnalysisBundle,

    /// One-line human-readable summary
    pub summary: String,

    /// Heuristic score in [0.0, 1.0]
    pub confidence: f64,
}
