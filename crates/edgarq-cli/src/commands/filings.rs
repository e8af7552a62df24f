//! Filings command implementation.

use crate::cli::FilingsArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use edgarq_sec::EdgarClient;

/// Execute the filings command.
pub fn execute_filings(args: FilingsArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let cik = normalize_cik(&args.cik)?;
    let client = EdgarClient::new(config.sec.clone())?;
    let filings = client.try_fetch_filings(&cik, args.form)?;

    println!("{}", formatter.format_filings(&filings)?);
    Ok(())
}

/// Trim a CIK and check that it is all digits.
pub fn normalize_cik(cik: &str) -> Result<String> {
    let cik = cik.trim();
    if cik.is_empty() || !cik.chars().all(|c| c.is_ascii_digit()) {
        return Err(CliError::InvalidInput(format!(
            "CIK must be numeric, got '{}'",
            cik
        )));
    }
    if cik.len() > 10 {
        return Err(CliError::InvalidInput(format!(
            "CIK has at most 10 digits, got {}",
            cik.len()
        )));
    }
    Ok(cik.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_cik() {
        assert_eq!(normalize_cik(" 320193 ").unwrap(), "320193");
        assert_eq!(normalize_cik("0000320193").unwrap(), "0000320193");
    }

    #[test]
    fn test_rejects_non_numeric_cik() {
        assert!(matches!(normalize_cik("AAPL"), Err(CliError::InvalidInput(_))));
        assert!(matches!(normalize_cik(""), Err(CliError::InvalidInput(_))));
        assert!(matches!(normalize_cik("12345678901"), Err(CliError::InvalidInput(_))));
    }
}
