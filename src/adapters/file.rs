use crate::core::CatalogSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        let data = tokio::fs::read(&self.path).await?;
        Ok(data)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
