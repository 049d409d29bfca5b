use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_seconds: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            request_timeout_seconds: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Embedded,
    File,
    Http,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub source: SourceKind,
    /// File path or URL, depending on `source`.
    pub location: Option<String>,
    pub fetch_timeout_seconds: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::Embedded,
            location: None,
            fetch_timeout_seconds: 10,
        }
    }
}

impl CatalogConfig {
    /// Points the catalog at `location`, picking http for http(s) URLs and
    /// file for anything else.
    pub fn set_location(&mut self, location: &str) {
        self.source = if location.starts_with("http://") || location.starts_with("https://") {
            SourceKind::Http
        } else {
            SourceKind::File
        };
        self.location = Some(location.to_string());
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Empty means any origin.
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: LogFormat,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CatalogError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATASET_URL})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn bind_address(&self) -> Result<SocketAddr> {
        let host = if self.server.host == "localhost" {
            "127.0.0.1"
        } else {
            self.server.host.as_str()
        };
        let ip = host
            .parse::<std::net::IpAddr>()
            .map_err(|e| CatalogError::InvalidConfigValueError {
                field: "server.host".to_string(),
                value: self.server.host.clone(),
                reason: e.to_string(),
            })?;
        Ok(SocketAddr::new(ip, self.server.port))
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors.allowed_origins.is_empty() || self.cors.allowed_origins.iter().any(|o| o == "*")
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_host("server.host", &self.server.host)?;
        validation::validate_range("server.port", self.server.port, 1, u16::MAX)?;
        validation::validate_range(
            "server.request_timeout_seconds",
            self.server.request_timeout_seconds,
            1,
            300,
        )?;

        match self.catalog.source {
            SourceKind::Embedded => {
                if let Some(location) = &self.catalog.location {
                    tracing::warn!("catalog.location '{}' ignored for embedded source", location);
                }
            }
            SourceKind::File => {
                let path = validation::validate_required_field("catalog.location", &self.catalog.location)?;
                validation::validate_path("catalog.location", path)?;
                validation::validate_file_extension("catalog.location", path, &["json"])?;
            }
            SourceKind::Http => {
                let url = validation::validate_required_field("catalog.location", &self.catalog.location)?;
                validation::validate_url("catalog.location", url)?;
            }
        }
        validation::validate_range(
            "catalog.fetch_timeout_seconds",
            self.catalog.fetch_timeout_seconds,
            1,
            300,
        )?;

        for origin in self.cors.allowed_origins.iter().filter(|o| o.as_str() != "*") {
            validation::validate_origin("cors.allowed_origins", origin)?;
        }

        if let Some(level) = &self.logging.level {
            if !LOG_LEVELS.contains(&level.as_str()) {
                return Err(CatalogError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.clone(),
                    reason: format!("Valid levels: {}", LOG_LEVELS.join(", ")),
                });
            }
        }

        Ok(())
    }
}
