use crate::adapters::DEFAULT_PAIR_ENDPOINT;
use crate::config::OutputFormat;
use crate::core::ConfigProvider;
use crate::utils::error::{PatentError, Result};
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
    pub headers: Option<HashMap<String, String>>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: None,
            headers: None,
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_PAIR_ENDPOINT.to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // 固定的 pattern，編譯不會失敗
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").unwrap())
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PatentError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PatentError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PAIR_API_KEY})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output.format
    }
}

impl ConfigProvider for TomlConfig {
    fn endpoint(&self) -> &str {
        &self.source.endpoint
    }

    fn timeout(&self) -> Option<Duration> {
        self.source.timeout_seconds.map(Duration::from_secs)
    }

    fn headers(&self) -> HashMap<String, String> {
        self.source.headers.clone().unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("source.endpoint", &self.source.endpoint)?;

        if let Some(timeout) = self.source.timeout_seconds {
            validate_positive_number("source.timeout_seconds", timeout, 1)?;
        }

        if let Some(headers) = &self.source.headers {
            for (name, value) in headers {
                // 未替換的 ${VAR} 代表環境變數沒有設定
                if env_var_pattern().is_match(value) {
                    return Err(PatentError::InvalidConfigValueError {
                        field: format!("source.headers.{}", name),
                        value: value.clone(),
                        reason: "environment variable is not set".to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}
