use crate::utils::error::{CatalogError, Result};
use std::net::IpAddr;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: impl ToString, reason: impl Into<String>) -> CatalogError {
    CatalogError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(invalid(
                field_name,
                url_str,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(invalid(field_name, url_str, format!("Invalid URL format: {}", e))),
    }
}

/// CORS origins are scheme + host (+ port) only, no path.
pub fn validate_origin(field_name: &str, origin: &str) -> Result<()> {
    validate_url(field_name, origin)?;
    if origin.trim_end_matches('/') != origin || origin.matches('/').count() > 2 {
        return Err(invalid(field_name, origin, "Origin must not contain a path"));
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }

    Ok(())
}

pub fn validate_file_extension(field_name: &str, path: &str, allowed_extensions: &[&str]) -> Result<()> {
    match std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed_extensions.contains(&extension) => Ok(()),
        Some(extension) => Err(invalid(
            field_name,
            path,
            format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        )),
        None => Err(invalid(field_name, path, "File has no extension or invalid filename")),
    }
}

pub fn validate_host(field_name: &str, host: &str) -> Result<()> {
    validate_non_empty_string(field_name, host)?;
    if host == "localhost" || host.parse::<IpAddr>().is_ok() {
        return Ok(());
    }
    Err(invalid(field_name, host, "Host must be an IP address or 'localhost'"))
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| CatalogError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field_name, value, "Value cannot be empty or whitespace-only"));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(invalid(field_name, value, format!("Value must be between {} and {}", min, max)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("catalog.location", "https://example.com/courses.json").is_ok());
        assert!(validate_url("catalog.location", "http://example.com").is_ok());
        assert!(validate_url("catalog.location", "").is_err());
        assert!(validate_url("catalog.location", "invalid-url").is_err());
        assert!(validate_url("catalog.location", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_origin() {
        assert!(validate_origin("cors.allowed_origins", "http://localhost:3000").is_ok());
        assert!(validate_origin("cors.allowed_origins", "https://courses.example.com").is_ok());
        assert!(validate_origin("cors.allowed_origins", "https://courses.example.com/").is_err());
        assert!(validate_origin("cors.allowed_origins", "https://example.com/app").is_err());
    }

    #[test]
    fn test_validate_host() {
        assert!(validate_host("server.host", "0.0.0.0").is_ok());
        assert!(validate_host("server.host", "::1").is_ok());
        assert!(validate_host("server.host", "localhost").is_ok());
        assert!(validate_host("server.host", "").is_err());
        assert!(validate_host("server.host", "not a host").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("catalog.location", "data/courses.json", &["json"]).is_ok());
        assert!(validate_file_extension("catalog.location", "data/courses.csv", &["json"]).is_err());
        assert!(validate_file_extension("catalog.location", "data/courses", &["json"]).is_err());
    }

    #[test]
    fn test_validate_range_and_required() {
        assert!(validate_range("server.port", 8080u16, 1, u16::MAX).is_ok());
        assert!(validate_range("server.port", 0u16, 1, u16::MAX).is_err());
        assert!(validate_range("server.request_timeout_seconds", 0u64, 1, 300).is_err());

        let missing: Option<String> = None;
        assert!(matches!(
            validate_required_field("catalog.location", &missing),
            Err(CatalogError::MissingConfigError { .. })
        ));
    }
}
