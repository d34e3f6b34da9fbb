//! Clausewise - ask a local LLM about a contract PDF.

use clap::Parser;
use clausewise_analyzer::Analyzer;
use clausewise_cli::{
    Cli, Config, Driver, Formatter, ReadlineSource, SessionOptions, TerminalSink,
};
use clausewise_pdf::PdfTextExtractor;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

/// Log to stderr. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> clausewise_cli::Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_overrides(&cli);
    config.validate()?;

    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(config.settings.format, color_enabled);

    tracing::info!(
        "Using model {} at {}",
        config.model.model,
        config.model.endpoint
    );
    let analyzer = Analyzer::new(config.provider(), config.analysis.clone());

    let history_path = Config::dir().ok().map(|dir| dir.join("history.txt"));
    let mut input = ReadlineSource::new(history_path)?;
    let mut sink = TerminalSink::new();

    let options = SessionOptions {
        path: cli.path.clone(),
        checklist: cli.checklist,
    };

    let result = Driver::new(&analyzer, &formatter, &mut sink)
        .run(&PdfTextExtractor::new(), &mut input, &options)
        .await;

    input.save_history();
    result.map(|_| ())
}
