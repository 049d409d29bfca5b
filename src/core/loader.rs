use crate::core::{Catalog, CatalogSource, Course, CourseId, Result};
use crate::utils::error::CatalogError;
use std::collections::HashMap;

/// Fetches the dataset from `source` and builds the catalog. Any failure is
/// fatal for startup.
pub async fn load_catalog(source: &dyn CatalogSource) -> Result<Catalog> {
    tracing::info!("📥 Loading course dataset from {}", source.describe());
    let bytes = source.fetch().await?;
    tracing::debug!("Fetched {} bytes", bytes.len());

    let catalog = parse_catalog(&bytes)?;
    if catalog.is_empty() {
        tracing::warn!("⚠️ Dataset from {} contains no courses", source.describe());
    }
    tracing::info!("✅ Loaded {} courses", catalog.len());
    Ok(catalog)
}

pub fn parse_catalog(bytes: &[u8]) -> Result<Catalog> {
    let document: serde_json::Value = serde_json::from_slice(bytes)?;

    let serde_json::Value::Array(items) = document else {
        return Err(CatalogError::DatasetError {
            message: format!("expected a JSON array, found {}", kind_of(&document)),
        });
    };

    let mut courses = Vec::with_capacity(items.len());
    let mut seen: HashMap<CourseId, usize> = HashMap::with_capacity(items.len());

    for (index, item) in items.into_iter().enumerate() {
        let course = parse_course(index, item)?;
        if let Some(&first) = seen.get(&course.id) {
            return Err(CatalogError::DuplicateCourseIdError {
                id: course.id.0,
                first,
                second: index,
            });
        }
        seen.insert(course.id, index);
        courses.push(course);
    }

    Ok(Catalog::from_unique(courses))
}

fn parse_course(index: usize, item: serde_json::Value) -> Result<Course> {
    let invalid = |reason: String| CatalogError::InvalidCourseError { index, reason };

    let serde_json::Value::Object(mut fields) = item else {
        return Err(invalid(format!("expected an object, found {}", kind_of(&item))));
    };

    let id = match fields.shift_remove("id") {
        Some(value) => match value.as_u64() {
            Some(id) if id > 0 => CourseId(id),
            _ => return Err(invalid(format!("'id' must be a positive integer, found {}", value))),
        },
        None => return Err(invalid("missing 'id'".to_string())),
    };

    let title = match fields.shift_remove("title") {
        Some(serde_json::Value::String(title)) if !title.trim().is_empty() => title,
        Some(serde_json::Value::String(_)) => return Err(invalid("'title' is empty".to_string())),
        Some(other) => return Err(invalid(format!("'title' must be a string, found {}", kind_of(&other)))),
        None => return Err(invalid("missing 'title'".to_string())),
    };

    Ok(Course {
        id,
        title,
        extra: fields,
    })
}

fn kind_of(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_dataset_order() {
        let catalog = parse_catalog(
            br#"[
                {"id": 5, "title": "Networking"},
                {"id": 1, "title": "Intro to Cloud", "instructor": "A. Chen"},
                {"id": 3, "title": "Docker Essentials"}
            ]"#,
        )
        .unwrap();

        let ids: Vec<u64> = catalog.courses().iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![5, 1, 3]);
        assert_eq!(
            catalog.get(CourseId(1)).unwrap().extra.get("instructor"),
            Some(&serde_json::json!("A. Chen"))
        );
    }

    #[test]
    fn test_empty_array_is_accepted() {
        let catalog = parse_catalog(b"[]").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_rejects_non_array_document() {
        let err = parse_catalog(br#"{"courses": []}"#).unwrap_err();
        assert!(matches!(err, CatalogError::DatasetError { .. }));
    }

    #[test]
    fn test_rejects_invalid_json() {
        let err = parse_catalog(b"[{\"id\": 1,").unwrap_err();
        assert!(matches!(err, CatalogError::SerializationError(_)));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = parse_catalog(
            br#"[{"id": 1, "title": "A"}, {"id": 2, "title": "B"}, {"id": 1, "title": "C"}]"#,
        )
        .unwrap_err();

        match err {
            CatalogError::DuplicateCourseIdError { id, first, second } => {
                assert_eq!((id, first, second), (1, 0, 2));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_bad_ids() {
        for body in [
            r#"[{"title": "No id"}]"#,
            r#"[{"id": 0, "title": "Zero"}]"#,
            r#"[{"id": -4, "title": "Negative"}]"#,
            r#"[{"id": 1.5, "title": "Fraction"}]"#,
            r#"[{"id": "1", "title": "String id"}]"#,
        ] {
            let err = parse_catalog(body.as_bytes()).unwrap_err();
            assert!(
                matches!(err, CatalogError::InvalidCourseError { index: 0, .. }),
                "{body} -> {err:?}"
            );
        }
    }

    #[test]
    fn test_rejects_bad_titles() {
        for body in [
            r#"[{"id": 1}]"#,
            r#"[{"id": 1, "title": ""}]"#,
            r#"[{"id": 1, "title": "   "}]"#,
            r#"[{"id": 1, "title": 12}]"#,
        ] {
            assert!(parse_catalog(body.as_bytes()).is_err(), "{body}");
        }
    }

    #[test]
    fn test_rejects_non_object_entries() {
        let err = parse_catalog(br#"[{"id": 1, "title": "A"}, "oops"]"#).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidCourseError { index: 1, .. }));
    }
}
