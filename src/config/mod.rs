pub mod toml_config;

#[cfg(feature = "cli")]
use crate::adapters::DEFAULT_PAIR_ENDPOINT;
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, validate_positive_number, validate_url, Validate};
#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use std::collections::HashMap;
#[cfg(feature = "cli")]
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "patent-term")]
#[command(about = "Calculate US patent expiration dates and explain how they were reached")]
pub struct CliConfig {
    /// Patent numbers to look up (commas and a leading "US" are accepted)
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    pub patents: Vec<String>,

    #[arg(long, default_value = DEFAULT_PAIR_ENDPOINT)]
    pub endpoint: String,

    /// TOML file with [source] and [output] settings
    #[arg(short, long)]
    pub config: Option<String>,

    /// Answer from a saved PAIR response instead of querying the registry
    #[arg(long)]
    pub records: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Output format; overrides [output] format from --config
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    fn headers(&self) -> HashMap<String, String> {
        HashMap::new()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;

        if let Some(timeout) = self.timeout_seconds {
            validate_positive_number("timeout_seconds", timeout, 1)?;
        }
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        if let Some(records) = &self.records {
            validate_path("records", records)?;
        }

        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let config = CliConfig::parse_from(["patent-term", "9675757"]);

        assert_eq!(config.patents, vec!["9675757".to_string()]);
        assert_eq!(config.endpoint, DEFAULT_PAIR_ENDPOINT);
        assert!(config.format.is_none());
        assert!(config.timeout().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_multiple_patents_and_flags() {
        let config = CliConfig::parse_from([
            "patent-term",
            "--format",
            "json",
            "--timeout-seconds",
            "10",
            "4,000,000",
            "9675757",
        ]);

        assert_eq!(config.patents.len(), 2);
        assert_eq!(config.format, Some(OutputFormat::Json));
        assert_eq!(config.timeout(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_patent_number_is_required() {
        assert!(CliConfig::try_parse_from(["patent-term"]).is_err());
    }

    #[test]
    fn test_validation_rejects_bad_endpoint_and_timeout() {
        let config = CliConfig::parse_from(["patent-term", "--endpoint", "not-a-url", "1"]);
        assert!(config.validate().is_err());

        let config = CliConfig::parse_from(["patent-term", "--timeout-seconds", "0", "1"]);
        assert!(config.validate().is_err());
    }
}
