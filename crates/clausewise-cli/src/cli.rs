//! CLI argument parsing.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Clausewise - Ask a local LLM about a contract PDF.
#[derive(Debug, Parser)]
#[command(name = "clausewise")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the contract PDF (prompted for when omitted)
    pub path: Option<PathBuf>,

    /// Run the risk checklist before the question loop
    #[arg(long)]
    pub checklist: bool,

    /// Model identifier
    #[arg(short, long, env = "CLAUSEWISE_MODEL")]
    pub model: Option<String>,

    /// Ollama endpoint (e.g., http://localhost:11434)
    #[arg(short, long, env = "CLAUSEWISE_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Attempts per model call, first try included
    #[arg(long)]
    pub retries: Option<u32>,

    /// Output format for checklist results
    #[arg(short, long, value_enum)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::parse_from(["clausewise"]);
        assert!(cli.path.is_none());
        assert!(!cli.checklist);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_path_and_checklist() {
        let cli = Cli::parse_from(["clausewise", "msa.pdf", "--checklist"]);
        assert_eq!(cli.path, Some(PathBuf::from("msa.pdf")));
        assert!(cli.checklist);
    }

    #[test]
    fn test_model_overrides() {
        let cli = Cli::parse_from([
            "clausewise",
            "nda.pdf",
            "--model",
            "llama3",
            "--endpoint",
            "http://gpu-box:11434",
            "--timeout",
            "30",
            "--retries",
            "5",
            "-vv",
        ]);
        assert_eq!(cli.model.as_deref(), Some("llama3"));
        assert_eq!(cli.endpoint.as_deref(), Some("http://gpu-box:11434"));
        assert_eq!(cli.timeout, Some(30));
        assert_eq!(cli.retries, Some(5));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_format_conversion() {
        let cli = Cli::parse_from(["clausewise", "--format", "json"]);
        let format: OutputFormat = cli.format.unwrap().into();
        assert!(matches!(format, OutputFormat::Json));
    }
}
