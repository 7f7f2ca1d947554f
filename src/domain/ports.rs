use crate::domain::model::{PatentNumber, PatentRecord};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

/// A registry that can look up patent metadata by number.
///
/// `Ok(None)` means the registry answered and has no such patent; `Err`
/// means the registry could not be asked at all.
#[async_trait]
pub trait PatentSource: Send + Sync {
    async fn fetch(&self, number: PatentNumber) -> Result<Option<PatentRecord>>;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn timeout(&self) -> Option<Duration>;
    fn headers(&self) -> HashMap<String, String>;
}
