use crate::core::CatalogSource;
use crate::utils::error::Result;
use async_trait::async_trait;

pub const EMBEDDED_DATASET: &str = include_str!("../../data/courses.json");

/// The dataset compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

#[async_trait]
impl CatalogSource for EmbeddedSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        Ok(EMBEDDED_DATASET.as_bytes().to_vec())
    }

    fn describe(&self) -> String {
        "embedded dataset".to_string()
    }
}
