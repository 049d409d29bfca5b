use crate::config::toml_config::{LogFormat, TomlConfig};
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "course-catalog")]
#[command(about = "Read-only course catalog API")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "CATALOG_CONFIG")]
    pub config: Option<String>,

    #[arg(long, env = "CATALOG_HOST")]
    pub host: Option<String>,

    #[arg(short, long, env = "CATALOG_PORT")]
    pub port: Option<u16>,

    /// Dataset file path or http(s) URL
    #[arg(short, long, env = "CATALOG_DATASET")]
    pub dataset: Option<String>,

    #[arg(long, help = "Log as JSON lines")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 載入設定檔 (若有) 並套用命令列覆蓋設定
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(dataset) = &self.dataset {
            config.catalog.set_location(dataset);
        }
        if self.json_logs {
            config.logging.format = LogFormat::Json;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::SourceKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_flags() {
        let cli = CliConfig::try_parse_from([
            "course-catalog",
            "--port",
            "3001",
            "--dataset",
            "https://example.com/courses.json",
            "--json-logs",
        ])
        .unwrap();

        let config = cli.resolve().unwrap();
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.catalog.source, SourceKind::Http);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\nhost = \"127.0.0.1\"\nport = 9000\n")
            .unwrap();

        let cli = CliConfig {
            config: Some(temp_file.path().to_str().unwrap().to_string()),
            port: Some(9100),
            ..Default::default()
        };

        let config = cli.resolve().unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.catalog.source, SourceKind::Embedded);
    }

    #[test]
    fn test_missing_config_file_fails() {
        let cli = CliConfig {
            config: Some("/definitely/not/here.toml".to_string()),
            ..Default::default()
        };
        assert!(cli.resolve().is_err());
    }
}
