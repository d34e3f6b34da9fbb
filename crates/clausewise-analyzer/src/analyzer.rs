//! Core Analyzer implementation

use crate::checklist::ChecklistRunner;
use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use crate::prompt::question_request;
use clausewise_domain::{ChatProvider, ChatRequest, ContractText};
use clausewise_llm::LlmError;
use tokio::time::timeout;
use tracing::{debug, info};

/// Answers questions about a contract and runs the risk checklist
pub struct Analyzer<P>
where
    P: ChatProvider<Error = LlmError>,
{
    provider: P,
    config: AnalyzerConfig,
}

impl<P> Analyzer<P>
where
    P: ChatProvider<Error = LlmError>,
{
    /// Create a new Analyzer
    pub fn new(provider: P, config: AnalyzerConfig) -> Self {
        Self { provider, config }
    }

    /// The underlying provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The analyzer configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Answer a free-form question about the contract
    pub async fn ask(
        &self,
        contract: &ContractText,
        question: &str,
    ) -> Result<String, AnalyzerError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(AnalyzerError::EmptyQuestion);
        }
        self.check_contract(contract)?;

        info!(
            "Asking {} about contract ({} chars)",
            self.provider.model_name(),
            contract.char_count()
        );
        let answer = self
            .complete(&question_request(contract.as_str(), question))
            .await?;
        Ok(answer.trim().to_string())
    }

    /// Checklist runner bound to this analyzer
    pub fn checklist(&self) -> ChecklistRunner<'_, P> {
        ChecklistRunner::new(self)
    }

    /// Reject contracts the model should not be sent
    pub(crate) fn check_contract(&self, contract: &ContractText) -> Result<(), AnalyzerError> {
        if contract.is_empty() {
            return Err(AnalyzerError::EmptyContract);
        }
        let chars = contract.char_count();
        if chars > self.config.max_contract_chars {
            return Err(AnalyzerError::TextTooLong(
                chars,
                self.config.max_contract_chars,
            ));
        }
        Ok(())
    }

    /// One provider call under the analysis timeout
    pub(crate) async fn complete(&self, request: &ChatRequest) -> Result<String, AnalyzerError> {
        debug!("Prompt length: {} chars", request.user.len());

        let response = timeout(self.config.analysis_timeout(), self.provider.complete(request))
            .await
            .map_err(|_| AnalyzerError::Timeout(self.config.analysis_timeout_secs))??;

        debug!("LLM response length: {} chars", response.len());
        Ok(response)
    }
}
