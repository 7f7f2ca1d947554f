pub mod dates;
pub mod engine;
pub mod explain;
pub mod term;

pub use crate::domain::model::{PatentNumber, PatentRecord, TermBasis, TermResult};
pub use crate::domain::ports::{ConfigProvider, PatentSource};
pub use crate::utils::error::Result;
