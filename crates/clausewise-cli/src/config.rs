//! Configuration management for the CLI.

use crate::cli::Cli;
use crate::error::{CliError, Result};
use clausewise_analyzer::AnalyzerConfig;
use clausewise_llm::ollama::{DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use clausewise_llm::retry::{
    DEFAULT_INITIAL_BACKOFF_MS, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_BACKOFF_MS,
};
use clausewise_llm::{OllamaProvider, RetryPolicy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Model service settings
    #[serde(default)]
    pub model: ModelSettings,

    /// Analysis limits
    #[serde(default)]
    pub analysis: AnalyzerConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Model service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSettings {
    /// Ollama endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Per-request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Attempts per call, first try included
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Delay before the first retry (milliseconds)
    #[serde(default = "default_initial_backoff_ms")]
    pub initial_backoff_ms: u64,

    /// Upper bound on a retry delay (milliseconds)
    #[serde(default = "default_max_backoff_ms")]
    pub max_backoff_ms: u64,

    /// Sampling temperature (model default when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
}

impl Config {
    /// Directory holding the config file and REPL history.
    pub fn dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".clausewise"))
    }

    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        Ok(Self::dir()?.join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default path is used
    /// when present and built-in defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(CliError::Config(format!(
                        "Config file '{}' does not exist",
                        path.display()
                    )));
                }
                Self::load_from(path)
            }
            None => {
                let path = Self::path()?;
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Apply command-line overrides.
    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(model) = &cli.model {
            self.model.model = model.clone();
        }
        if let Some(endpoint) = &cli.endpoint {
            self.model.endpoint = endpoint.clone();
        }
        if let Some(timeout) = cli.timeout {
            self.model.timeout_secs = timeout;
        }
        if let Some(retries) = cli.retries {
            self.model.max_attempts = retries;
        }
        if let Some(format) = cli.format {
            self.settings.format = format.into();
        }
        if cli.no_color {
            self.settings.color = false;
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.model.endpoint.trim().is_empty() {
            return Err(CliError::Config("model.endpoint must not be empty".into()));
        }
        if self.model.model.trim().is_empty() {
            return Err(CliError::Config("model.model must not be empty".into()));
        }
        if self.model.timeout_secs == 0 {
            return Err(CliError::Config(
                "model.timeout_secs must be greater than 0".into(),
            ));
        }
        if self.model.max_attempts == 0 {
            return Err(CliError::Config(
                "model.max_attempts must be greater than 0".into(),
            ));
        }
        if self.model.initial_backoff_ms > self.model.max_backoff_ms {
            return Err(CliError::Config(
                "model.initial_backoff_ms cannot exceed model.max_backoff_ms".into(),
            ));
        }
        self.analysis.validate().map_err(CliError::Config)
    }

    /// Retry policy for model calls.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.model.max_attempts,
            self.model.initial_backoff_ms,
            self.model.max_backoff_ms,
        )
    }

    /// Build the model provider described by this configuration.
    pub fn provider(&self) -> OllamaProvider {
        let provider = OllamaProvider::new(&self.model.endpoint, &self.model.model)
            .with_timeout(Duration::from_secs(self.model.timeout_secs))
            .with_retry_policy(self.retry_policy());

        match self.model.temperature {
            Some(temperature) => provider.with_temperature(temperature),
            None => provider,
        }
    }
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
            max_attempts: default_max_attempts(),
            initial_backoff_ms: default_initial_backoff_ms(),
            max_backoff_ms: default_max_backoff_ms(),
            temperature: None,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

fn default_initial_backoff_ms() -> u64 {
    DEFAULT_INITIAL_BACKOFF_MS
}

fn default_max_backoff_ms() -> u64 {
    DEFAULT_MAX_BACKOFF_MS
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use clausewise_domain::ChatProvider;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.model.endpoint, "http://localhost:11434");
        assert_eq!(config.model.model, "gemma3:4b");
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[model]\nmodel = \"llama3\"\n\n[settings]\nformat = \"json\"\n\n[analysis]\nmax_contract_chars = 1000"
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.model.model, "llama3");
        assert_eq!(config.model.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.settings.format, OutputFormat::Json);
        assert!(config.settings.color);
        assert_eq!(config.analysis.max_contract_chars, 1000);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let result = Config::load(Some(Path::new("/nonexistent/clausewise.toml")));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[model\nmodel = ").unwrap();
        assert!(matches!(
            Config::load_from(file.path()),
            Err(CliError::Toml(_))
        ));
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "clausewise",
            "--model",
            "mistral",
            "--endpoint",
            "http://10.0.0.5:11434",
            "--timeout",
            "15",
            "--retries",
            "1",
            "--format",
            "json",
            "--no-color",
        ]);
        let mut config = Config::default();
        config.apply_overrides(&cli);

        assert_eq!(config.model.model, "mistral");
        assert_eq!(config.model.endpoint, "http://10.0.0.5:11434");
        assert_eq!(config.model.timeout_secs, 15);
        assert_eq!(config.retry_policy().max_attempts(), 1);
        assert_eq!(config.settings.format, OutputFormat::Json);
        assert!(!config.settings.color);

        let provider = config.provider();
        assert_eq!(provider.model_name(), "mistral");
        assert_eq!(provider.endpoint(), "http://10.0.0.5:11434");
    }

    #[test]
    fn test_validation_rejects_bad_backoff() {
        let mut config = Config::default();
        config.model.initial_backoff_ms = 10_000;
        config.model.max_backoff_ms = 100;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_attempts() {
        let mut config = Config::default();
        config.model.max_attempts = 0;
        assert!(config.validate().is_err());
    }
}
