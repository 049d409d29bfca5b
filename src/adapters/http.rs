use crate::core::CatalogSource;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Downloads the dataset document with a single GET.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: Client,
}

impl HttpSource {
    pub fn new(url: String, timeout: Duration) -> Result<Self> {
        validate_url("catalog.location", &url)?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { url, client })
    }
}

#[async_trait]
impl CatalogSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        tracing::debug!("Making dataset request to: {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        tracing::debug!("Dataset response status: {}", response.status());

        if !response.status().is_success() {
            return Err(CatalogError::SourceStatusError {
                location: self.url.clone(),
                status: response.status().as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }

    fn describe(&self) -> String {
        format!("url {}", self.url)
    }
}
