pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{source_from_config, EmbeddedSource, FileSource, HttpSource};
pub use core::catalog::CatalogService;
pub use domain::model::{Catalog, Course, CourseId};
pub use domain::ports::CatalogSource;
pub use server::{build_router, start_server};
pub use utils::error::{CatalogError, Result};
