// Adapters layer: concrete dataset sources (embedded, local file, http).

pub mod embedded;
pub mod file;
pub mod http;

pub use embedded::EmbeddedSource;
pub use file::FileSource;
pub use http::HttpSource;

use crate::config::toml_config::{CatalogConfig, SourceKind};
use crate::core::CatalogSource;
use crate::utils::error::Result;
use crate::utils::validation::validate_required_field;
use std::time::Duration;

/// Builds the dataset source selected by the catalog configuration.
pub fn source_from_config(config: &CatalogConfig) -> Result<Box<dyn CatalogSource>> {
    let source: Box<dyn CatalogSource> = match config.source {
        SourceKind::Embedded => Box::new(EmbeddedSource),
        SourceKind::File => {
            let path = validate_required_field("catalog.location", &config.location)?;
            Box::new(FileSource::new(path))
        }
        SourceKind::Http => {
            let url = validate_required_field("catalog.location", &config.location)?;
            Box::new(HttpSource::new(
                url.clone(),
                Duration::from_secs(config.fetch_timeout_seconds),
            )?)
        }
    };
    Ok(source)
}
