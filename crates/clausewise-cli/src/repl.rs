//! Interactive session: load the contract once, then answer questions.

use crate::config::OutputFormat;
use crate::error::{CliError, Result};
use crate::output::{Formatter, OutputSink};
use clausewise_analyzer::{Analyzer, AnalyzerError, ChecklistOutcome};
use clausewise_domain::{ChatProvider, ContractText, TextExtractor};
use clausewise_llm::LlmError;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::collections::VecDeque;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const PATH_PROMPT: &str = "Enter the path to the contract PDF: ";
const QUESTION_PROMPT: &str = "Enter your question about the contract (or type 'exit' to quit): ";

/// One read from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A line of text
    Line(String),
    /// Ctrl-C
    Interrupted,
    /// End of input
    Eof,
}

/// Source of user input lines.
pub trait LineSource {
    /// Show `prompt` and read one line.
    fn read_line(&mut self, prompt: &str) -> Result<Input>;
}

/// Line editor with persistent history.
pub struct ReadlineSource {
    editor: DefaultEditor,
    history_path: Option<PathBuf>,
}

impl ReadlineSource {
    /// Create an editor, loading history from `history_path` when given.
    pub fn new(history_path: Option<PathBuf>) -> Result<Self> {
        let mut editor = DefaultEditor::new().map_err(|e| {
            CliError::Io(std::io::Error::other(format!(
                "Failed to initialize editor: {}",
                e
            )))
        })?;

        if let Some(path) = &history_path {
            let _ = editor.load_history(path);
        }

        Ok(Self {
            editor,
            history_path,
        })
    }

    /// Write history back to disk.
    pub fn save_history(&mut self) {
        if let Some(path) = &self.history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            self.editor.save_history(path).ok();
        }
    }
}

impl LineSource for ReadlineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Input> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str()).ok();
                }
                Ok(Input::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
            Err(ReadlineError::Eof) => Ok(Input::Eof),
            Err(err) => Err(CliError::Io(std::io::Error::other(format!(
                "Failed to read input: {}",
                err
            )))),
        }
    }
}

/// Pre-recorded input, for scripts and tests. Reports end of input once
/// the lines run out.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    inputs: VecDeque<Input>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    /// Create from a list of lines.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_inputs(lines.into_iter().map(|line| Input::Line(line.into())))
    }

    /// Create from raw reads, interrupts included.
    pub fn from_inputs<I>(inputs: I) -> Self
    where
        I: IntoIterator<Item = Input>,
    {
        Self {
            inputs: inputs.into_iter().collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts shown so far.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> Result<Input> {
        self.prompts.push(prompt.to_string());
        Ok(self.inputs.pop_front().unwrap_or(Input::Eof))
    }
}

/// Command typed at the question prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Blank line
    Empty,
    /// End the session
    Exit,
    /// Show help
    Help,
    /// Run the risk checklist
    Checklist,
    /// Ask the model a question
    Ask(String),
}

/// Parse a line typed at the question prompt.
pub fn parse_repl_command(line: &str) -> ReplCommand {
    let line = line.trim();
    if line.is_empty() {
        return ReplCommand::Empty;
    }
    if line.eq_ignore_ascii_case("exit") {
        return ReplCommand::Exit;
    }
    match line {
        "/exit" | "/quit" => ReplCommand::Exit,
        "/help" => ReplCommand::Help,
        "/checklist" => ReplCommand::Checklist,
        _ => ReplCommand::Ask(line.to_string()),
    }
}

/// Options for one session.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Contract path; prompted for when absent
    pub path: Option<PathBuf>,
    /// Run the checklist before the question loop
    pub checklist: bool,
}

/// What happened during a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Questions answered by the model
    pub questions_answered: usize,
    /// Checklist runs that produced output
    pub checklist_runs: usize,
    /// Turns that failed and were skipped
    pub failed_turns: usize,
}

/// Drives one session from contract loading to exit.
pub struct Driver<'a, P, O>
where
    P: ChatProvider<Error = LlmError>,
    O: OutputSink,
{
    analyzer: &'a Analyzer<P>,
    formatter: &'a Formatter,
    sink: &'a mut O,
    summary: SessionSummary,
}

impl<'a, P, O> Driver<'a, P, O>
where
    P: ChatProvider<Error = LlmError>,
    O: OutputSink,
{
    /// Create a driver.
    pub fn new(analyzer: &'a Analyzer<P>, formatter: &'a Formatter, sink: &'a mut O) -> Self {
        Self {
            analyzer,
            formatter,
            sink,
            summary: SessionSummary::default(),
        }
    }

    /// Run a full session.
    ///
    /// Fails only while loading the contract (missing file, extraction
    /// error, no path given). Failures after that are reported per turn.
    pub async fn run<X, I>(
        mut self,
        extractor: &X,
        input: &mut I,
        options: &SessionOptions,
    ) -> Result<SessionSummary>
    where
        X: TextExtractor,
        X::Error: Display,
        I: LineSource,
    {
        let contract = self.load_contract(extractor, input, options.path.as_deref())?;

        if options.checklist {
            self.run_checklist(&contract).await;
        }

        self.interact(&contract, input).await
    }

    /// Resolve the path, check it exists, and extract the text once.
    pub fn load_contract<X, I>(
        &mut self,
        extractor: &X,
        input: &mut I,
        path: Option<&Path>,
    ) -> Result<ContractText>
    where
        X: TextExtractor,
        X::Error: Display,
        I: LineSource,
    {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => prompt_for_path(input)?,
        };

        let path = resolve_contract_path(&path)?;

        self.sink.print_line(
            &self
                .formatter
                .info(&format!("Extracting text from {}...", path.display())),
        );
        let contract = extractor
            .extract(&path)
            .map_err(|e| CliError::Extraction(e.to_string()))?;

        info!(
            "Loaded {} ({} pages, {} chars)",
            path.display(),
            contract.page_count(),
            contract.char_count()
        );
        self.sink.print_line(&self.formatter.success(&format!(
            "Text extracted successfully ({} page(s)). Now you can ask questions about the contract.",
            contract.page_count()
        )));

        Ok(contract)
    }

    /// Run the checklist once and print the result. Never fails the session.
    pub async fn run_checklist(&mut self, contract: &ContractText) {
        self.sink
            .print_line(&self.formatter.info("Running risk checklist..."));

        match self.analyzer.checklist().run_or_raw(contract).await {
            Ok(outcome) => {
                self.show_checklist(&outcome);
                self.summary.checklist_runs += 1;
            }
            Err(e) => self.report_turn_error(&e),
        }
    }

    /// Question loop until `exit` or end of input.
    pub async fn interact<I>(
        mut self,
        contract: &ContractText,
        input: &mut I,
    ) -> Result<SessionSummary>
    where
        I: LineSource,
    {
        loop {
            let line = match input.read_line(QUESTION_PROMPT)? {
                Input::Line(line) => line,
                Input::Interrupted => {
                    self.sink.print_line(&self.formatter.info("Type 'exit' to quit"));
                    continue;
                }
                Input::Eof => break,
            };

            match parse_repl_command(&line) {
                ReplCommand::Empty => continue,
                ReplCommand::Exit => {
                    self.sink.print_line(
                        &self
                            .formatter
                            .info("Exiting the contract analyzer. Goodbye!"),
                    );
                    break;
                }
                ReplCommand::Help => self.print_help(),
                ReplCommand::Checklist => self.run_checklist(contract).await,
                ReplCommand::Ask(question) => self.answer(contract, &question).await,
            }
        }

        debug!(summary = ?self.summary, "Session finished");
        Ok(self.summary)
    }

    async fn answer(&mut self, contract: &ContractText, question: &str) {
        match self.analyzer.ask(contract, question).await {
            Ok(answer) => {
                self.sink.print_line(&self.formatter.answer(&answer));
                self.sink.print_line("");
                self.summary.questions_answered += 1;
            }
            Err(e) => self.report_turn_error(&e),
        }
    }

    fn show_checklist(&mut self, outcome: &ChecklistOutcome) {
        match outcome {
            ChecklistOutcome::Parsed(report) => match self.formatter.format() {
                OutputFormat::Table => {
                    let table = self.formatter.checklist_table(&report.findings());
                    self.sink.print_table(&table);
                }
                OutputFormat::Json => match self.formatter.checklist_json(report) {
                    Ok(json) => self.sink.print_line(&json),
                    Err(e) => self.sink.print_error(&self.formatter.error(&e.to_string())),
                },
            },
            ChecklistOutcome::Malformed { raw, reason } => {
                self.sink.print_line(&self.formatter.warning(&format!(
                    "The model's checklist reply could not be parsed ({}). Raw reply:",
                    reason
                )));
                self.sink.print_line(raw);
            }
        }
    }

    fn report_turn_error(&mut self, error: &AnalyzerError) {
        self.summary.failed_turns += 1;
        let message = if error.is_service_unavailable() {
            format!("{}. Is the Ollama server running?", error)
        } else {
            error.to_string()
        };
        self.sink.print_error(&self.formatter.error(&message));
    }

    fn print_help(&mut self) {
        self.sink.print_line(&self.formatter.info("Available commands:"));
        self.sink.print_line("  <question>    - Ask about the contract");
        self.sink.print_line("  /checklist    - Run the risk checklist");
        self.sink.print_line("  /help         - Show this help");
        self.sink.print_line("  exit          - Quit");
    }
}

/// Check that `path` references an existing file.
pub fn resolve_contract_path(path: &Path) -> Result<PathBuf> {
    if path.is_file() {
        Ok(path.to_path_buf())
    } else {
        Err(CliError::FileNotFound(path.to_path_buf()))
    }
}

fn prompt_for_path<I: LineSource>(input: &mut I) -> Result<PathBuf> {
    loop {
        match input.read_line(PATH_PROMPT)? {
            Input::Line(line) => {
                // Terminals quote dragged-in paths
                let cleaned = line.trim().trim_matches(|c| c == '"' || c == '\'');
                if !cleaned.is_empty() {
                    return Ok(PathBuf::from(cleaned));
                }
            }
            Input::Interrupted | Input::Eof => {
                return Err(CliError::InvalidInput("No contract path given".to_string()))
            }
        }
    }
}
