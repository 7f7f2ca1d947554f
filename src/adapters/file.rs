use crate::adapters::pair::{document_number, extract_documents, to_record, PairDocument};
use crate::core::{PatentNumber, PatentRecord, PatentSource};
use crate::utils::error::{PatentError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::Path;

/// Serves lookups from a saved PAIR response instead of the live registry.
#[derive(Debug, Clone, Default)]
pub struct JsonFileSource {
    documents: HashMap<u64, PairDocument>,
}

impl JsonFileSource {
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(&path).await?;
        tracing::debug!(
            "Loaded {} bytes of saved records from {}",
            content.len(),
            path.as_ref().display()
        );
        Self::from_json_str(&content)
    }

    /// Accepts a PAIR response (any envelope depth) or a bare array of documents.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let payload: Value = serde_json::from_str(content)?;
        let documents: Vec<PairDocument> = if payload.is_array() {
            serde_json::from_value(payload)?
        } else {
            extract_documents(&payload)?
        };

        let mut indexed = HashMap::new();
        for document in documents {
            let number = document_number(&document).ok_or_else(|| {
                PatentError::UnexpectedPayload {
                    message: "saved document is missing 'patentNumber'".to_string(),
                }
            })?;
            // 與線上查詢一致：同號碼以第一筆為準
            match indexed.entry(number) {
                Entry::Vacant(slot) => {
                    slot.insert(document);
                }
                Entry::Occupied(_) => {
                    tracing::warn!(
                        "⚠️ Duplicate saved record for patent {}, keeping the first one",
                        number
                    );
                }
            }
        }

        Ok(Self { documents: indexed })
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[async_trait]
impl PatentSource for JsonFileSource {
    async fn fetch(&self, number: PatentNumber) -> Result<Option<PatentRecord>> {
        self.documents
            .get(&number.get())
            .map(|document| to_record(number, document))
            .transpose()
    }
}
