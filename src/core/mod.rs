pub mod catalog;
pub mod loader;

pub use crate::domain::model::{Catalog, Course, CourseId};
pub use crate::domain::ports::CatalogSource;
pub use crate::utils::error::Result;
