//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::error::Result;
use crate::output::Formatter;
use edgarq_analysis::{ContentAnalyzer, ParsedDocument};
use edgarq_domain::AnalysisBundle;
use std::fs;
use std::path::Path;

/// Execute the analyze command.
pub fn execute_analyze(args: AnalyzeArgs, formatter: &Formatter) -> Result<()> {
    let (document, analysis) = analyze_file(&args.file, &ContentAnalyzer::default())?;
    println!("{}", formatter.format_document(&document, &analysis)?);
    Ok(())
}

/// Parse an HTML file and run the analyzers over its text.
pub fn analyze_file(path: &Path, analyzer: &ContentAnalyzer) -> Result<(ParsedDocument, AnalysisBundle)> {
    let html = fs::read_to_string(path)?;
    let document = analyzer.documents().parse(&html);
    let analysis = analyzer.analyze(&document.text);
    Ok((document, analysis))
}
