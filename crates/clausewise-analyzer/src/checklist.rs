//! Checklist-driven risk extraction

use crate::analyzer::Analyzer;
use crate::error::AnalyzerError;
use crate::parser::parse_checklist_response;
use crate::prompt::checklist_request;
use crate::types::{ChecklistOutcome, ChecklistReport};
use clausewise_domain::{ChatProvider, ContractText};
use clausewise_llm::LlmError;
use tracing::{info, warn};

/// Runs the fixed risk checklist: one model call, then strict parsing
pub struct ChecklistRunner<'a, P>
where
    P: ChatProvider<Error = LlmError>,
{
    analyzer: &'a Analyzer<P>,
}

impl<'a, P> ChecklistRunner<'a, P>
where
    P: ChatProvider<Error = LlmError>,
{
    pub(crate) fn new(analyzer: &'a Analyzer<P>) -> Self {
        Self { analyzer }
    }

    /// Run the checklist and require a valid reply.
    ///
    /// A reply that is not the expected JSON object fails with
    /// [`AnalyzerError::MalformedChecklistResponse`], which carries the raw
    /// text.
    pub async fn run(&self, contract: &ContractText) -> Result<ChecklistReport, AnalyzerError> {
        self.analyzer.check_contract(contract)?;

        info!(
            "Running risk checklist on contract ({} chars)",
            contract.char_count()
        );
        let response = self
            .analyzer
            .complete(&checklist_request(contract.as_str()))
            .await?;

        let report = parse_checklist_response(&response)?;
        info!("Checklist complete");
        Ok(report)
    }

    /// Run the checklist, keeping a malformed reply instead of failing.
    ///
    /// Only format errors are absorbed; service and input errors still
    /// propagate.
    pub async fn run_or_raw(
        &self,
        contract: &ContractText,
    ) -> Result<ChecklistOutcome, AnalyzerError> {
        match self.run(contract).await {
            Ok(report) => Ok(ChecklistOutcome::Parsed(report)),
            Err(AnalyzerError::MalformedChecklistResponse { reason, raw }) => {
                warn!("Checklist reply did not validate: {}", reason);
                Ok(ChecklistOutcome::Malformed { raw, reason })
            }
            Err(e) => Err(e),
        }
    }
}
