use crate::utils::error::Result;
use async_trait::async_trait;

/// Where the raw dataset comes from. Read once at startup.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<u8>>;

    /// Human-readable location, used in logs and error messages.
    fn describe(&self) -> String;
}
