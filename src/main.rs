use clap::Parser;
use patent_term::utils::{logger, validation::Validate};
use patent_term::{
    CliConfig, JsonFileSource, OutputFormat, PairClient, PatentError, PatentSource, TermEngine,
    TomlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(config.verbose, logger::LogFormat::Compact);

    tracing::info!("Starting patent-term CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }

    let toml_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let loaded = TomlConfig::from_file(path).and_then(|c| c.validate().map(|_| c));
            match loaded {
                Ok(c) => Some(c),
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    std::process::exit(e.exit_code());
                }
            }
        }
        None => None,
    };

    let format = config
        .format
        .or_else(|| toml_config.as_ref().map(TomlConfig::output_format))
        .unwrap_or_default();

    let outcome = match (&config.records, &toml_config) {
        (Some(path), _) => {
            tracing::info!("📁 Answering from saved records: {}", path);
            match JsonFileSource::from_file(path).await {
                Ok(source) => run(TermEngine::new(source), &config.patents, format).await,
                Err(e) => Err(e),
            }
        }
        (None, Some(toml)) => match PairClient::new(toml) {
            Ok(client) => run(TermEngine::new(client), &config.patents, format).await,
            Err(e) => Err(e),
        },
        (None, None) => match PairClient::new(&config) {
            Ok(client) => run(TermEngine::new(client), &config.patents, format).await,
            Err(e) => Err(e),
        },
    };

    if let Err(e) = outcome {
        tracing::error!("❌ Patent lookup failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }

    Ok(())
}

async fn run<S: PatentSource>(
    engine: TermEngine<S>,
    patents: &[String],
    format: OutputFormat,
) -> Result<(), PatentError> {
    // 每筆獨立處理，最後以最嚴重的錯誤決定 exit code
    let worst = match format {
        OutputFormat::Text => {
            let mut worst: Option<PatentError> = None;
            let explanations = engine.explain_all(patents).await;
            for (patent, explanation) in patents.iter().zip(explanations) {
                match explanation {
                    Ok(explanation) => println!("{}", explanation),
                    Err(e) => {
                        eprintln!("❌ {}: {}", patent.trim(), e);
                        if worst.as_ref().map_or(true, |w| e.exit_code() > w.exit_code()) {
                            worst = Some(e);
                        }
                    }
                }
            }
            worst
        }
        OutputFormat::Json => {
            let (reports, worst) = engine.report_all(patents).await;
            println!("{}", serde_json::to_string_pretty(&reports)?);
            worst
        }
    };

    match worst {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
