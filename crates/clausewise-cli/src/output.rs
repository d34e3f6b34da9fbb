//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use clausewise_analyzer::ChecklistReport;
use clausewise_domain::{RiskFinding, RiskLevel};
use colored::*;
use tabled::{
    builder::Builder,
    settings::{
        object::{Columns, Rows},
        Alignment, Modify, Style, Width,
    },
};

/// Width at which checklist summaries wrap.
const SUMMARY_WIDTH: usize = 60;

/// A table ready to be drawn by an [`OutputSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableData {
    /// Column headers
    pub headers: Vec<String>,
    /// Rows, one cell per header
    pub rows: Vec<Vec<String>>,
}

/// Destination for everything the session prints.
pub trait OutputSink {
    /// Print one line of text.
    fn print_line(&mut self, line: &str);

    /// Print a table.
    fn print_table(&mut self, table: &TableData);

    /// Print an error line.
    fn print_error(&mut self, line: &str) {
        self.print_line(line);
    }
}

/// Writes to the terminal: stdout for output, stderr for errors.
#[derive(Debug, Default)]
pub struct TerminalSink;

impl TerminalSink {
    /// Create a new terminal sink.
    pub fn new() -> Self {
        Self
    }
}

impl OutputSink for TerminalSink {
    fn print_line(&mut self, line: &str) {
        println!("{}", line);
    }

    fn print_table(&mut self, table: &TableData) {
        println!("{}", render_table(table));
    }

    fn print_error(&mut self, line: &str) {
        eprintln!("{}", line);
    }
}

/// Records output in memory.
#[derive(Debug, Default)]
pub struct CaptureSink {
    /// Printed lines, errors included
    pub lines: Vec<String>,
    /// Printed tables
    pub tables: Vec<TableData>,
    /// Printed error lines
    pub errors: Vec<String>,
}

impl CaptureSink {
    /// Create an empty capture sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All printed lines joined with newlines.
    pub fn output(&self) -> String {
        self.lines.join("\n")
    }
}

impl OutputSink for CaptureSink {
    fn print_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn print_table(&mut self, table: &TableData) {
        self.tables.push(table.clone());
    }

    fn print_error(&mut self, line: &str) {
        self.errors.push(line.to_string());
        self.lines.push(line.to_string());
    }
}

/// Draw a table with rounded borders and wrapped summaries.
pub fn render_table(table: &TableData) -> String {
    let mut builder = Builder::default();
    builder.push_record(table.headers.iter().map(String::as_str));
    for row in &table.rows {
        builder.push_record(row.iter().map(String::as_str));
    }

    let mut rendered = builder.build();
    rendered
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .with(Modify::new(Columns::single(1)).with(Width::wrap(SUMMARY_WIDTH)));

    rendered.to_string()
}

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

    /// The configured output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Checklist findings as a three-column table.
    pub fn checklist_table(&self, findings: &[RiskFinding]) -> TableData {
        TableData {
            headers: vec![
                "Risk area".to_string(),
                "Summary".to_string(),
                "Risk level".to_string(),
            ],
            rows: findings
                .iter()
                .map(|finding| {
                    vec![
                        finding.area.label().to_string(),
                        finding.summary.clone(),
                        level_cell(finding.level),
                    ]
                })
                .collect(),
        }
    }

    /// Checklist report as pretty JSON, with the detected level per area.
    pub fn checklist_json(&self, report: &ChecklistReport) -> Result<String> {
        let mut object = serde_json::Map::new();
        for finding in report.findings() {
            object.insert(
                finding.area.key().to_string(),
                serde_json::json!({
                    "summary": finding.summary,
                    "risk_level": finding.level.map(|level| level.as_str()),
                }),
            );
        }
        Ok(serde_json::to_string_pretty(&serde_json::Value::Object(
            object,
        ))?)
    }

    /// Format a free-form answer.
    pub fn answer(&self, text: &str) -> String {
        let label = if self.color_enabled {
            "Answer:".bold().to_string()
        } else {
            "Answer:".to_string()
        };
        format!("{} {}", label, text)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn level_cell(level: Option<RiskLevel>) -> String {
    match level {
        Some(level) => level.as_str().to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clausewise_domain::RiskArea;

    fn report() -> ChecklistReport {
        ChecklistReport {
            termination: "Either party, 30 days notice (risk: low)".to_string(),
            liability_cap: "Capped at fees paid (risk: medium)".to_string(),
            ip_ownership: "Vendor keeps all IP (risk: high)".to_string(),
            jurisdiction: "England and Wales".to_string(),
        }
    }

    #[test]
    fn test_checklist_table_has_three_populated_columns() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let table = formatter.checklist_table(&report().findings());

        assert_eq!(table.headers, vec!["Risk area", "Summary", "Risk level"]);
        assert_eq!(table.rows.len(), 4);
        assert!(table.rows.iter().all(|row| row.len() == 3));
        assert_eq!(
            table.rows[0],
            vec![
                "Termination".to_string(),
                "Either party, 30 days notice (risk: low)".to_string(),
                "low".to_string()
            ]
        );
        assert_eq!(table.rows[2][2], "high");
        assert_eq!(table.rows[3][2], "-");
    }

    #[test]
    fn test_render_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let rendered = render_table(&formatter.checklist_table(&report().findings()));
        assert!(rendered.contains("Risk area"));
        assert!(rendered.contains("Liability cap"));
        assert!(rendered.contains("medium"));
        assert!(rendered.contains('╭'));
    }

    #[test]
    fn test_long_summary_wraps() {
        let finding = RiskFinding::new(RiskArea::Termination, "word ".repeat(40));
        let formatter = Formatter::new(OutputFormat::Table, false);
        let rendered = render_table(&formatter.checklist_table(&[finding]));
        assert!(rendered.lines().count() > 5);
    }

    #[test]
    fn test_checklist_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.checklist_json(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["termination"]["risk_level"], "low");
        assert_eq!(value["ip_ownership"]["risk_level"], "high");
        assert!(value["jurisdiction"]["risk_level"].is_null());
        assert_eq!(value["liability_cap"]["summary"], "Capped at fees paid (risk: medium)");
    }

    #[test]
    fn test_answer_line() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.answer("Net 30."), "Answer: Net 30.");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.error("bad"), "✗ bad");
    }

    #[test]
    fn test_capture_sink() {
        let mut sink = CaptureSink::new();
        sink.print_line("one");
        sink.print_error("two");
        sink.print_table(&TableData {
            headers: vec!["h".to_string()],
            rows: vec![],
        });
        assert_eq!(sink.output(), "one\ntwo");
        assert_eq!(sink.errors, vec!["two"]);
        assert_eq!(sink.tables.len(), 1);
    }
}
