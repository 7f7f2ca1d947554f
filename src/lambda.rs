#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use patent_term::utils::logger;
#[cfg(feature = "lambda")]
use patent_term::utils::validation::{validate_required_field, Validate};
#[cfg(feature = "lambda")]
use patent_term::{PairClient, TermEngine, TomlConfig};
#[cfg(feature = "lambda")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "lambda")]
use std::sync::Arc;

#[cfg(feature = "lambda")]
#[derive(Deserialize)]
pub struct Request {
    pub patent_number: Option<String>,
}

#[cfg(feature = "lambda")]
#[derive(Serialize)]
pub struct Response {
    pub message: String,
    pub expiration_date: Option<String>,
}

#[cfg(feature = "lambda")]
async fn function_handler(
    engine: Arc<TermEngine<PairClient>>,
    event: LambdaEvent<Request>,
) -> Result<Response, Error> {
    let patent_number = validate_required_field("patent_number", &event.payload.patent_number)
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    tracing::info!("Computing patent term for {}", patent_number);

    let report = engine
        .report(patent_number)
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    Ok(Response {
        message: report["message"].as_str().unwrap_or_default().to_string(),
        expiration_date: report["expiration_date"].as_str().map(str::to_string),
    })
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_logger(false, logger::LogFormat::Json);

    // 端點與標頭從 PATENT_TERM_CONFIG 指向的 TOML 讀取，未設定則用預設值
    let config = match std::env::var("PATENT_TERM_CONFIG") {
        Ok(path) => TomlConfig::from_file(path)?,
        Err(_) => TomlConfig::default(),
    };
    config.validate()?;
    let engine = Arc::new(TermEngine::new(PairClient::new(&config)?));

    run(service_fn(move |event| {
        let engine = Arc::clone(&engine);
        async move { function_handler(engine, event).await }
    }))
    .await
}
