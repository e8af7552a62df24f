//! Ask command implementation.

use crate::cli::AskArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use edgarq_analysis::AnalysisConfig;
use edgarq_domain::{FilingSource, QueryResult};
use edgarq_query::{Lexicon, ProcessorConfig, QueryProcessor};
use edgarq_sec::EdgarClient;

/// Execute the ask command.
pub fn execute_ask(args: AskArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let question = args.question();
    if question.trim().is_empty() {
        return Err(CliError::InvalidInput("Question cannot be empty".to_string()));
    }

    let mut processor_config = config.processor.clone();
    if args.fetch_documents {
        processor_config.fetch_documents = true;
    }

    let client = EdgarClient::new(config.sec.clone())?;
    let result = answer(client, &question, processor_config)?;

    println!("{}", formatter.format_result(&result)?);
    if result.filings.is_empty() && result.parsed.company.is_some() {
        eprintln!("{}", formatter.warning("No filings retrieved; check the company name and network access"));
    }

    Ok(())
}

/// Run the full pipeline for one question against `source`.
pub fn answer<S: FilingSource>(
    source: S,
    question: &str,
    config: ProcessorConfig,
) -> Result<QueryResult> {
    let processor = QueryProcessor::new(source, Lexicon::default(), AnalysisConfig::default(), config)?;
    Ok(processor.process(question))
}

#[cfg(test)]
mod tests {
    use super::*;
    use edgarq_domain::Intent;
    use edgarq_sec::MockSource;

    const FILING: &str = "<h1>Item 8. Financial Statements</h1>\
        <p>Goodwill is tested for impairment annually. Lease liabilities are recognized under ASC 842.</p>";

    fn source() -> MockSource {
        let mut source = MockSource::default();
        let record = MockSource::record("789019", "Microsoft Corp", "10-K", "2024-07-30");
        source.add_document(record.url.clone(), FILING);
        source.add_filing(record);
        source.add_filing(MockSource::record("789019", "Microsoft Corp", "8-K", "2024-07-02"));
        source
    }

    #[test]
    fn test_answer_without_documents() {
        let source = source();
        let result = answer(&source, "Microsoft 10-K filings", ProcessorConfig::default()).unwrap();

        assert_eq!(result.parsed.intent, Intent::SearchFilings);
        assert_eq!(result.filings.len(), 1);
        assert_eq!(source.document_calls(), 0);
    }

    #[test]
    fn test_answer_with_documents() {
        let source = source();
        let config = ProcessorConfig {
            fetch_documents: true,
            ..ProcessorConfig::default()
        };
        let result = answer(&source, "Microsoft 10-K filings", config).unwrap();

        assert_eq!(source.document_calls(), 1);
        let standards: Vec<&str> = result.analysis.concepts.iter().map(|c| c.standard.as_str()).collect();
        assert_eq!(standards, vec!["ASC 842", "ASC 350"]);
    }

    #[test]
    fn test_invalid_processor_config() {
        let config = ProcessorConfig {
            fetch_documents: true,
            max_documents: 0,
            ..ProcessorConfig::default()
        };
        let result = answer(MockSource::default(), "Microsoft 10-K filings", config);
        assert!(matches!(result, Err(CliError::Query(_))));
    }
}
