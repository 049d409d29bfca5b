use anyhow::Result;
use course_catalog::config::toml_config::{CatalogConfig, SourceKind};
use course_catalog::{
    source_from_config, CatalogError, CatalogService, CatalogSource, CourseId, FileSource,
    HttpSource,
};
use httpmock::prelude::*;
use std::time::Duration;
use tempfile::TempDir;

#[tokio::test]
async fn test_loads_catalog_from_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("courses.json");
    tokio::fs::write(
        &path,
        r#"[{"id": 1, "title": "Intro to Cloud"}, {"id": 2, "title": "Terraform Basics"}]"#,
    )
    .await?;

    let source = FileSource::new(&path);
    let service = CatalogService::from_source(&source).await?;

    assert_eq!(service.len(), 2);
    assert_eq!(service.find(CourseId(2)).map(|c| c.title.as_str()), Some("Terraform Basics"));
    Ok(())
}

#[tokio::test]
async fn test_missing_file_is_fatal() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let source = FileSource::new(temp_dir.path().join("absent.json"));

    let err = CatalogService::from_source(&source).await.unwrap_err();
    assert!(matches!(err, CatalogError::IoError(_)));
    Ok(())
}

#[tokio::test]
async fn test_malformed_file_is_fatal() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("courses.json");
    tokio::fs::write(&path, r#"[{"id": 1, "title": "A"}, {"id": 1, "title": "B"}]"#).await?;

    let err = CatalogService::from_source(&FileSource::new(&path))
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateCourseIdError { id: 1, .. }));
    Ok(())
}

#[tokio::test]
async fn test_loads_catalog_over_http() -> Result<()> {
    let server = MockServer::start();
    let dataset_mock = server.mock(|when, then| {
        when.method(GET).path("/courses.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"id": 4, "title": "Running Containers on ECS", "instructor": "Alice Chen"}
            ]));
    });

    let source = HttpSource::new(server.url("/courses.json"), Duration::from_secs(5))?;
    let service = CatalogService::from_source(&source).await?;

    dataset_mock.assert();
    let course = service.get_by_id("4").expect("course 4 should be loaded");
    assert_eq!(course.extra.get("instructor"), Some(&serde_json::json!("Alice Chen")));
    Ok(())
}

#[tokio::test]
async fn test_http_error_status_is_fatal() -> Result<()> {
    let server = MockServer::start();
    let dataset_mock = server.mock(|when, then| {
        when.method(GET).path("/courses.json");
        then.status(503);
    });

    let source = HttpSource::new(server.url("/courses.json"), Duration::from_secs(5))?;
    let err = source.fetch().await.unwrap_err();

    dataset_mock.assert();
    assert!(matches!(err, CatalogError::SourceStatusError { status: 503, .. }));
    Ok(())
}

#[tokio::test]
async fn test_http_source_rejects_bad_url() {
    let err = HttpSource::new("ftp://example.com/courses.json".to_string(), Duration::from_secs(1))
        .unwrap_err();
    assert!(matches!(err, CatalogError::InvalidConfigValueError { .. }));
}

#[tokio::test]
async fn test_source_from_config() -> Result<()> {
    let embedded = source_from_config(&CatalogConfig::default())?;
    assert_eq!(embedded.describe(), "embedded dataset");
    assert!(!CatalogService::from_source(embedded.as_ref()).await?.is_empty());

    let mut file = CatalogConfig::default();
    file.set_location("./data/courses.json");
    assert!(source_from_config(&file)?.describe().contains("courses.json"));

    let missing = CatalogConfig {
        source: SourceKind::Http,
        location: None,
        fetch_timeout_seconds: 1,
    };
    assert!(matches!(
        source_from_config(&missing),
        Err(CatalogError::MissingConfigError { .. })
    ));
    Ok(())
}
