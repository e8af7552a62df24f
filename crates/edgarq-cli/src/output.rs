//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use edgarq_analysis::ParsedDocument;
use edgarq_domain::text::truncate_chars;
use edgarq_domain::{AnalysisBundle, FilingRecord, ParsedQuery, QueryResult, Severity};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

const EXCERPT_CHARS: usize = 60;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a full query result.
    pub fn format_result(&self, result: &QueryResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            OutputFormat::Quiet => Ok(result.summary.clone()),
            OutputFormat::Table => {
                let mut out = vec![
                    self.colorize(&result.summary, "cyan"),
                    format!("Confidence: {:.2}", result.confidence),
                ];
                if !result.filings.is_empty() {
                    out.push(self.filings_table(&result.filings));
                }
                out.push(self.findings_table(&result.analysis));
                for comparison in &result.analysis.comparisons {
                    let categories = if comparison.categories.is_empty() {
                        "(none)".to_string()
                    } else {
                        comparison.categories.join(", ")
                    };
                    out.push(format!("{}: {}", comparison.company, categories));
                }
                Ok(out.join("\n"))
            }
        }
    }

    /// Format the parsed form of a question.
    pub fn format_parsed(&self, parsed: &ParsedQuery) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(parsed)?),
            OutputFormat::Quiet => Ok(parsed.intent.to_string()),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                builder.push_record(["intent".to_string(), parsed.intent.to_string()]);
                builder.push_record(["filing_type".to_string(), display_opt(&parsed.filing_type)]);
                builder.push_record(["timeframe".to_string(), display_opt(&parsed.timeframe)]);
                builder.push_record(["company".to_string(), display_opt(&parsed.company)]);
                builder.push_record(["companies".to_string(), parsed.companies.join(", ")]);
                builder.push_record(["concepts".to_string(), parsed.accounting_concepts.join(", ")]);
                builder.push_record(["sector".to_string(), display_opt(&parsed.sector)]);
                builder.push_record(["risk_level".to_string(), display_opt(&parsed.risk_level)]);
                builder.push_record(["keywords".to_string(), parsed.keywords.join(", ")]);
                Ok(finish(builder))
            }
        }
    }

    /// Format a filing list.
    pub fn format_filings(&self, filings: &[FilingRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(filings)?),
            OutputFormat::Quiet => Ok(filings
                .iter()
                .map(|f| f.accession_number.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if filings.is_empty() {
                    return Ok(self.colorize("No filings found.", "yellow"));
                }
                Ok(self.filings_table(filings))
            }
        }
    }

    /// Format a parsed document together with its analysis.
    pub fn format_document(&self, document: &ParsedDocument, analysis: &AnalysisBundle) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "sections": document.sections,
                    "summary": document.summary,
                    "analysis": analysis,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Quiet => Ok(document.summary.clone()),
            OutputFormat::Table => {
                let mut out = Vec::new();
                if document.sections.is_empty() {
                    out.push(self.info("No sections found"));
                } else {
                    let mut builder = Builder::default();
                    builder.push_record(["Section", "Content"]);
                    for (header, content) in &document.sections {
                        builder.push_record([header.as_str(), excerpt(content)]);
                    }
                    out.push(finish(builder));
                }
                out.push(self.findings_table(analysis));
                Ok(out.join("\n"))
            }
        }
    }

    fn filings_table(&self, filings: &[FilingRecord]) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Date", "Form", "Company", "Accession", "Text"]);
        for filing in filings {
            builder.push_record([
                filing.filing_date.as_str(),
                filing.form_type.as_str(),
                filing.company_name.as_str(),
                filing.accession_number.as_str(),
                if filing.has_text() { "yes" } else { "-" },
            ]);
        }
        finish(builder)
    }

    fn findings_table(&self, analysis: &AnalysisBundle) -> String {
        if analysis.concepts.is_empty() && analysis.policies.is_empty() && analysis.risks.is_empty() {
            return self.colorize("No findings.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Kind", "Name", "Severity", "Confidence", "Excerpt"]);
        for concept in &analysis.concepts {
            builder.push_record([
                "standard".to_string(),
                concept.standard.clone(),
                "-".to_string(),
                format!("{:.2}", concept.confidence),
                excerpt(&concept.context).to_string(),
            ]);
        }
        for policy in &analysis.policies {
            builder.push_record([
                "policy".to_string(),
                policy.category.clone(),
                "-".to_string(),
                format!("{:.2}", policy.confidence),
                excerpt(&policy.content).to_string(),
            ]);
        }
        for risk in &analysis.risks {
            builder.push_record([
                "risk".to_string(),
                risk.category.clone(),
                self.severity(risk.severity),
                format!("{:.2}", risk.confidence),
                excerpt(&risk.content).to_string(),
            ]);
        }
        finish(builder)
    }

    /// Severity label, colored by intensity.
    pub fn severity(&self, severity: Severity) -> String {
        let color = match severity {
            Severity::High => "red",
            Severity::Medium => "yellow",
            Severity::Low => "green",
        };
        self.colorize(severity.as_str(), color)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn finish(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn excerpt(text: &str) -> &str {
    truncate_chars(text, EXCERPT_CHARS)
}

fn display_opt<T: std::fmt::Display>(value: &Option<T>) -> String {
    value.as_ref().map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}
