//! Clausewise Analyzer
//!
//! Sends contract text to a chat model and interprets the reply.
//!
//! # Overview
//!
//! Two workflows share one [`Analyzer`]:
//!
//! - **Questions**: the full contract plus a free-form question, answered as
//!   plain text.
//! - **Risk checklist**: the full contract plus a fixed instruction asking for
//!   a JSON object with one summary per [`RiskArea`](clausewise_domain::RiskArea).
//!   The reply is validated strictly into a [`ChecklistReport`].
//!
//! # Architecture
//!
//! ```text
//! ContractText → prompt → ChatProvider → reply → (checklist) parser → ChecklistReport
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use clausewise_analyzer::{Analyzer, AnalyzerConfig};
//! use clausewise_domain::ContractText;
//! use clausewise_llm::OllamaProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = OllamaProvider::default_endpoint("gemma3:4b");
//! let analyzer = Analyzer::new(provider, AnalyzerConfig::default());
//! let contract = ContractText::new("This Agreement terminates on 31 December 2026.", 1);
//!
//! let answer = analyzer.ask(&contract, "When does the agreement end?").await?;
//! println!("{}", answer);
//!
//! let report = analyzer.checklist().run(&contract).await?;
//! println!("{}", report.termination);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod analyzer;
mod checklist;
mod config;
mod error;
mod parser;
pub mod prompt;
mod types;


pub use analyzer::Analyzer;
pub use checklist::ChecklistRunner;
pub use config::AnalyzerConfig;
pub use error::AnalyzerError;
pub use parser::parse_checklist_response;
pub use types::{ChecklistOutcome, ChecklistReport};
