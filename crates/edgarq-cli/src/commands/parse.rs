//! Parse command implementation.

use crate::cli::ParseArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use edgarq_query::QueryParser;

/// Execute the parse command.
pub fn execute_parse(args: ParseArgs, formatter: &Formatter) -> Result<()> {
    let question = args.question();
    if question.trim().is_empty() {
        return Err(CliError::InvalidInput("Question cannot be empty".to_string()));
    }

    let parsed = QueryParser::default().parse(&question);
    println!("{}", formatter.format_parsed(&parsed)?);
    Ok(())
}
