//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use edgarq_domain::FilingType;
use std::path::PathBuf;

/// edgarq - Ask questions about SEC filings.
#[derive(Debug, Parser)]
#[command(name = "edgarq")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "EDGARQ_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (summary line or identifiers only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Answer a question: parse, retrieve filings, analyze
    Ask(AskArgs),

    /// List a company's recent filings
    Filings(FilingsArgs),

    /// Analyze a local HTML filing
    Analyze(AnalyzeArgs),

    /// Show how a question is parsed, without retrieving anything
    Parse(ParseArgs),

    /// Show or create the configuration file
    Config(ConfigArgs),
}

/// Arguments for the ask command.
#[derive(Debug, Parser)]
pub struct AskArgs {
    /// Question text
    #[arg(required = true, num_args = 1..)]
    pub question: Vec<String>,

    /// Fetch and analyze primary documents
    #[arg(long)]
    pub fetch_documents: bool,
}

impl AskArgs {
    /// Question words joined back into one string
    pub fn question(&self) -> String {
        self.question.join(" ")
    }
}

/// Arguments for the filings command.
#[derive(Debug, Parser)]
pub struct FilingsArgs {
    /// Central Index Key (e.g., 320193)
    pub cik: String,

    /// Only this form type (e.g., 10-K)
    #[arg(long)]
    pub form: Option<FilingType>,
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// HTML file to analyze
    pub file: PathBuf,
}

/// Arguments for the parse command.
#[derive(Debug, Parser)]
pub struct ParseArgs {
    /// Question text
    #[arg(required = true, num_args = 1..)]
    pub question: Vec<String>,
}

impl ParseArgs {
    /// Question words joined back into one string
    pub fn question(&self) -> String {
        self.question.join(" ")
    }
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_joins_words() {
        let cli = Cli::parse_from(["edgarq", "ask", "Find", "8-K", "filings", "--fetch-documents"]);
        match cli.command {
            Command::Ask(args) => {
                assert_eq!(args.question(), "Find 8-K filings");
                assert!(args.fetch_documents);
            }
            _ => panic!("Expected Ask command"),
        }
    }

    #[test]
    fn test_filings_form_parsed() {
        let cli = Cli::parse_from(["edgarq", "filings", "320193", "--form", "10-k"]);
        match cli.command {
            Command::Filings(args) => {
                assert_eq!(args.cik, "320193");
                assert_eq!(args.form, Some(FilingType::Form10K));
            }
            _ => panic!("Expected Filings command"),
        }
    }

    #[test]
    fn test_unknown_form_rejected() {
        let result = Cli::try_parse_from(["edgarq", "filings", "320193", "--form", "20-F"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["edgarq", "parse", "compare", "leases", "--format", "json", "-v"]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert!(cli.verbose);
    }

    #[test]
    fn test_config_init() {
        let cli = Cli::parse_from(["edgarq", "config", "init", "--force"]);
        match cli.command {
            Command::Config(ConfigArgs {
                action: ConfigAction::Init { force },
            }) => assert!(force),
            _ => panic!("Expected Config Init command"),
        }
    }

    #[test]
    fn test_question_required() {
        assert!(Cli::try_parse_from(["edgarq", "ask"]).is_err());
    }
}
