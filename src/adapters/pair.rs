//! USPTO PAIR bulk-data response handling shared by the HTTP and file sources.

use crate::core::dates::parse_date;
use crate::domain::model::{PatentNumber, PatentRecord};
use crate::utils::error::{PatentError, Result};
use serde::Deserialize;
use serde_json::Value;

pub const TERMINAL_DISCLAIMER_ACTION: &str = "Terminal Disclaimer Filed";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairDocument {
    pub patent_number: Option<Value>,
    pub patent_title: Option<String>,
    pub app_filing_date: Option<String>,
    pub patent_issue_date: Option<String>,
    /// PAIR embeds the term data as a JSON string inside the document.
    pub patent_term_json: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatentTermData {
    pub patent_term_adjustment_data: Option<TermAdjustmentData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermAdjustmentData {
    pub adjustment_total_quantity: Option<Value>,
    #[serde(default)]
    pub patent_term_adjustment_history_data: Vec<TermHistoryEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermHistoryEntry {
    #[serde(default)]
    pub case_action_description_text: String,
}

/// Request body for a PAIR search by patent number.
pub fn search_body(number: PatentNumber) -> Value {
    serde_json::json!({
        "searchText": format!("patentNumber:({})", number.get()),
        "fl": "*",
        "df": "patentTitle",
        "qf": "patentNumber",
        "facet": "false",
        "sort": "applId asc",
        "start": "0",
    })
}

/// Finds the document list in a PAIR response.
///
/// Accepts the full query envelope, the inner `response` object, or a bare
/// `docs` wrapper.
pub fn extract_documents(payload: &Value) -> Result<Vec<PairDocument>> {
    let docs = payload
        .pointer("/queryResults/searchResponse/response/docs")
        .or_else(|| payload.pointer("/response/docs"))
        .or_else(|| payload.get("docs"))
        .ok_or_else(|| PatentError::UnexpectedPayload {
            message: "response has no 'docs' list".to_string(),
        })?;

    Ok(serde_json::from_value(docs.clone())?)
}

pub fn has_terminal_disclaimer(history: &[TermHistoryEntry]) -> bool {
    history
        .iter()
        .any(|entry| entry.case_action_description_text == TERMINAL_DISCLAIMER_ACTION)
}

pub fn parse_term_data(raw: Option<&str>) -> Result<PatentTermData> {
    // 99 年以前的專利沒有 patentTermJson
    match raw.map(str::trim) {
        None | Some("") => Ok(PatentTermData::default()),
        Some(text) => Ok(serde_json::from_str(text)?),
    }
}

fn adjustment_days(value: Option<&Value>) -> Result<u32> {
    match value {
        None | Some(Value::Null) => Ok(0),
        Some(Value::Number(n)) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| PatentError::UnexpectedPayload {
                message: format!("invalid adjustmentTotalQuantity: {}", n),
            }),
        Some(Value::String(s)) => s.trim().parse().map_err(|_| PatentError::UnexpectedPayload {
            message: format!("invalid adjustmentTotalQuantity: {}", s),
        }),
        Some(other) => Err(PatentError::UnexpectedPayload {
            message: format!("invalid adjustmentTotalQuantity: {}", other),
        }),
    }
}

fn required<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str> {
    value
        .as_deref()
        .ok_or_else(|| PatentError::UnexpectedPayload {
            message: format!("document is missing '{}'", field),
        })
}

/// Reads the patent number a document claims to describe, if present.
pub fn document_number(document: &PairDocument) -> Option<u64> {
    match document.patent_number.as_ref()? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => PatentNumber::parse(s).ok().map(PatentNumber::get),
        _ => None,
    }
}

pub fn to_record(number: PatentNumber, document: &PairDocument) -> Result<PatentRecord> {
    let term_data = parse_term_data(document.patent_term_json.as_deref())?;
    let adjustment = term_data.patent_term_adjustment_data.unwrap_or_default();

    Ok(PatentRecord {
        number,
        title: required(&document.patent_title, "patentTitle")?.trim().to_string(),
        filing_date: parse_date(required(&document.app_filing_date, "appFilingDate")?)?,
        issue_date: parse_date(required(&document.patent_issue_date, "patentIssueDate")?)?,
        term_adjustment_days: adjustment_days(adjustment.adjustment_total_quantity.as_ref())?,
        has_terminal_disclaimer: has_terminal_disclaimer(
            &adjustment.patent_term_adjustment_history_data,
        ),
    })
}
