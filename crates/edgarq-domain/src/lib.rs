//! edgarq Domain Layer
//!
//! Value types and trait boundaries shared by every edgarq crate. Nothing in
//! here performs I/O; the filings client, the analyzers and the query
//! pipeline all live in their own crates and meet here.
//!
//! ## Key Concepts
//!
//! - **ParsedQuery**: structured filters pulled out of a free-text question
//! - **FilingRecord**: one filing's metadata (and, optionally, its text)
//! - **Matches**: concept, policy and risk hits found in filing text
//! - **QueryResult**: everything a single question produced
//!
//! ## Architecture
//!
//! - Plain immutable records; no shared mutable state
//! - `FilingSource` is the seam between the pipeline and the network
//! - `text` holds the matching primitives every scanner builds on

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod filing;
pub mod query;
pub mod result;
pub mod text;
pub mod traits;

// Re-exports for convenience
pub use analysis::{AnalysisBundle, ConceptMatch, PolicyComparison, PolicyMatch, RiskMatch, Severity};
pub use filing::FilingRecord;
pub use query::{FilingType, Intent, ParsedQuery, RiskLevel, TimeWindow, Timeframe};
pub use result::QueryResult;
pub use text::MatchMode;
pub use traits::FilingSource;
