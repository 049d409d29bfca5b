use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(pub u64);

impl CourseId {
    /// Parses a caller-supplied identifier. Anything other than a plain
    /// positive decimal number yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        match raw.parse::<u64>() {
            Ok(0) | Err(_) => None,
            Ok(id) => Some(Self(id)),
        }
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single catalog record. Fields other than `id` and `title` are carried
/// through untouched, in authoring order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// The loaded, immutable collection.
#[derive(Debug)]
pub struct Catalog {
    courses: Vec<Course>,
    index: HashMap<CourseId, usize>,
    loaded_at: DateTime<Utc>,
}

impl Catalog {
    /// Callers guarantee unique ids; the loader checks this before building.
    pub(crate) fn from_unique(courses: Vec<Course>) -> Self {
        let index = courses
            .iter()
            .enumerate()
            .map(|(position, course)| (course.id, position))
            .collect();
        Self {
            courses,
            index,
            loaded_at: Utc::now(),
        }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn get(&self, id: CourseId) -> Option<&Course> {
        self.index
            .get(&id)
            .and_then(|&position| self.courses.get(position))
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}
