use crate::core::{Catalog, CatalogSource, Course, CourseId, Result};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Read-only queries over a loaded catalog. Cloning is cheap; all clones
/// share the same collection.
#[derive(Debug, Clone)]
pub struct CatalogService {
    catalog: Arc<Catalog>,
}

impl CatalogService {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    pub async fn from_source(source: &dyn CatalogSource) -> Result<Self> {
        let catalog = super::loader::load_catalog(source).await?;
        Ok(Self::new(catalog))
    }

    /// Every course, in dataset order.
    pub fn list(&self) -> &[Course] {
        self.catalog.courses()
    }

    /// Looks up a course from raw caller input. Unparsable input never
    /// matches.
    pub fn get_by_id(&self, raw_id: &str) -> Option<&Course> {
        match CourseId::parse(raw_id) {
            Some(id) => self.find(id),
            None => {
                tracing::debug!("Rejected malformed course id {:?}", raw_id);
                None
            }
        }
    }

    pub fn find(&self, id: CourseId) -> Option<&Course> {
        self.catalog.get(id)
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.catalog.loaded_at()
    }
}
