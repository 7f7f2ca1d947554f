use crate::adapters::pair::{extract_documents, search_body, to_record};
use crate::core::{ConfigProvider, PatentNumber, PatentRecord, PatentSource};
use crate::utils::error::{PatentError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, StatusCode};

pub const DEFAULT_PAIR_ENDPOINT: &str = "https://ped.uspto.gov/api/queries";

/// Looks up patents through the USPTO PAIR bulk-data query API.
pub struct PairClient {
    client: Client,
    endpoint: String,
}

impl PairClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (name, value) in config.headers() {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                PatentError::InvalidConfigValueError {
                    field: "source.headers".to_string(),
                    value: name.clone(),
                    reason: e.to_string(),
                }
            })?;
            let header_value =
                HeaderValue::from_str(&value).map_err(|e| PatentError::InvalidConfigValueError {
                    field: format!("source.headers.{}", name),
                    value: value.clone(),
                    reason: e.to_string(),
                })?;
            headers.insert(header_name, header_value);
        }

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.endpoint().to_string(),
        })
    }
}

#[async_trait]
impl PatentSource for PairClient {
    async fn fetch(&self, number: PatentNumber) -> Result<Option<PatentRecord>> {
        tracing::debug!("Making PAIR request to: {}", self.endpoint);

        // 連線失敗與查無資料要分開處理，不重試
        let response = self
            .client
            .post(&self.endpoint)
            .json(&search_body(number))
            .send()
            .await
            .map_err(|e| PatentError::UpstreamUnavailable {
                message: e.to_string(),
            })?;

        let status = response.status();
        tracing::debug!("PAIR response status: {}", status);

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(PatentError::UpstreamUnavailable {
                message: format!("registry responded with HTTP {}", status),
            });
        }

        let payload: serde_json::Value = response.json().await?;
        let documents = extract_documents(&payload)?;
        tracing::debug!("PAIR returned {} document(s) for {}", documents.len(), number);

        match documents.first() {
            Some(document) => Ok(Some(to_record(number, document)?)),
            None => Ok(None),
        }
    }
}
