use crate::core::explain::{explain_result, malformed_message, not_found_message};
use crate::core::term;
use crate::core::{PatentNumber, PatentSource, TermResult};
use crate::utils::error::{PatentError, Result};

pub struct TermEngine<S: PatentSource> {
    source: S,
}

impl<S: PatentSource> TermEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Picks the term regime for `number`, fetching the record only when needed.
    pub async fn compute(&self, number: PatentNumber) -> Result<TermResult> {
        if term::is_shortcut_expired(number) {
            tracing::debug!("Patent {} is below the lookup floor, skipping fetch", number);
            return Ok(term::shortcut_expired(number));
        }

        tracing::debug!("Fetching record for patent {}", number);
        let record = self
            .source
            .fetch(number)
            .await?
            .ok_or(PatentError::NotFound { number })?;

        tracing::debug!(
            "Patent {} filed {} issued {} with {} adjustment days",
            number,
            record.filing_date,
            record.issue_date,
            record.term_adjustment_days
        );
        if record.has_terminal_disclaimer {
            tracing::info!("Patent {} has a terminal disclaimer (not applied)", number);
        }

        term::calculate(&record)
    }

    /// Parses raw input and computes the term.
    pub async fn lookup(&self, input: &str) -> Result<TermResult> {
        let number = PatentNumber::parse(input)?;
        self.compute(number).await
    }

    /// Renders the explanation for `input`.
    ///
    /// Not-found and malformed numbers come back as text; only failures to
    /// reach the registry (or a broken response) are returned as `Err`.
    pub async fn explain(&self, input: &str) -> Result<String> {
        match self.lookup(input).await {
            Ok(result) => {
                tracing::info!("✅ Computed term for patent {}", result.patent_number);
                Ok(explain_result(&result))
            }
            Err(e) => render_business_failure(input, e),
        }
    }

    /// Structured counterpart of [`TermEngine::explain`] for JSON output.
    pub async fn report(&self, input: &str) -> Result<serde_json::Value> {
        match self.lookup(input).await {
            Ok(result) => {
                let mut value = serde_json::to_value(&result)?;
                value["message"] = explain_result(&result).into();
                Ok(value)
            }
            Err(e) if e.is_business_failure() => {
                let error = e.to_string();
                let message = render_business_failure(input, e)?;
                Ok(serde_json::json!({
                    "patent": input.trim(),
                    "error": error,
                    "message": message,
                }))
            }
            Err(e) => Err(e),
        }
    }

    /// Explains each input in order; one failed lookup never discards the others.
    pub async fn explain_all(&self, inputs: &[String]) -> Vec<Result<String>> {
        let mut explanations = Vec::with_capacity(inputs.len());
        for input in inputs {
            explanations.push(self.explain(input).await);
        }
        explanations
    }

    /// JSON counterpart of [`TermEngine::explain_all`]; failed lookups become error objects.
    pub async fn report_all(
        &self,
        inputs: &[String],
    ) -> (Vec<serde_json::Value>, Option<PatentError>) {
        let mut reports = Vec::with_capacity(inputs.len());
        let mut worst: Option<PatentError> = None;
        for input in inputs {
            match self.report(input).await {
                Ok(report) => reports.push(report),
                Err(e) => {
                    reports.push(failure_report(input, &e));
                    if worst.as_ref().map_or(true, |w| e.exit_code() > w.exit_code()) {
                        worst = Some(e);
                    }
                }
            }
        }
        (reports, worst)
    }
}

/// Error object for a lookup that could not be answered at all.
pub fn failure_report(input: &str, error: &PatentError) -> serde_json::Value {
    serde_json::json!({
        "patent": input.trim(),
        "error": error.to_string(),
        "message": serde_json::Value::Null,
    })
}

/// Converts a business failure into its user-facing text; anything else is passed through.
pub fn render_business_failure(input: &str, error: PatentError) -> Result<String> {
    match error {
        PatentError::NotFound { number } => {
            tracing::warn!("⚠️ Patent {} not found", number);
            Ok(not_found_message(number))
        }
        PatentError::MalformedInput { input, reason } => {
            tracing::warn!("⚠️ Malformed patent number '{}': {}", input, reason);
            Ok(malformed_message(&input, &reason))
        }
        other => {
            tracing::error!("❌ Lookup for '{}' failed: {}", input.trim(), other);
            Err(other)
        }
    }
}
