pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{JsonFileSource, PairClient};
pub use config::{toml_config::TomlConfig, OutputFormat};
pub use crate::core::engine::TermEngine;
pub use domain::model::{PatentNumber, PatentRecord, TermBasis, TermResult};
pub use domain::ports::{ConfigProvider, PatentSource};
pub use utils::error::{PatentError, Result};
