pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extension, validate_log_level, validate_path, validate_socket_addr, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "uni-rankings")]
#[command(about = "Serve a sortable university ranking table with per-university detail pages")]
pub struct CliConfig {
    #[arg(long, short = 'c', help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Address to listen on (overrides [server] bind)")]
    pub bind: Option<String>,

    #[arg(long, help = "JSON or TOML dataset (overrides [data] path)")]
    pub data_file: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併 TOML 檔與命令列參數；命令列優先
    pub fn resolve(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        Ok(Settings::from_parts(
            file,
            self.bind.clone(),
            self.data_file.clone(),
            self.verbose,
            self.json_logs,
        ))
    }
}

/// Fully resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub bind: String,
    pub data_path: Option<String>,
    pub log_level: Option<String>,
    pub verbose: bool,
    pub json_logs: bool,
}

impl Settings {
    pub fn from_parts(
        file: TomlConfig,
        bind: Option<String>,
        data_path: Option<String>,
        verbose: bool,
        json_logs: bool,
    ) -> Self {
        let file_bind = file.bind().to_string();
        Self {
            bind: bind.unwrap_or(file_bind),
            data_path: data_path.or(file.data.path),
            log_level: file.logging.level,
            verbose,
            json_logs: json_logs || file.logging.json.unwrap_or(false),
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        validate_socket_addr("bind", &self.bind)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_parts(TomlConfig::default(), None, None, false, false)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        self.socket_addr()?;
        if let Some(path) = &self.data_path {
            validate_path("data_file", path)?;
            validate_file_extension("data_file", path, &["json", "toml"])?;
        }
        if let Some(level) = &self.log_level {
            validate_log_level("logging.level", level)?;
        }
        Ok(())
    }
}

impl ConfigProvider for Settings {
    fn bind_addr(&self) -> &str {
        &self.bind
    }

    fn data_path(&self) -> Option<&str> {
        self.data_path.as_deref()
    }

    fn json_logs(&self) -> bool {
        self.json_logs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.bind_addr(), toml_config::DEFAULT_BIND);
        assert_eq!(settings.data_path(), None);
        assert!(!settings.json_logs());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = TomlConfig::from_toml_str(
            r#"
[server]
bind = "0.0.0.0:8080"

[data]
path = "from-file.json"

[logging]
json = true
"#,
        )
        .unwrap();

        let settings = Settings::from_parts(
            file,
            Some("127.0.0.1:9000".to_string()),
            None,
            true,
            false,
        );

        assert_eq!(settings.bind_addr(), "127.0.0.1:9000");
        assert_eq!(settings.data_path(), Some("from-file.json"));
        assert!(settings.json_logs());
        assert!(settings.verbose);
    }

    #[test]
    fn test_invalid_settings() {
        let mut settings = Settings::default();
        settings.data_path = Some("rankings.xlsx".to_string());
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.bind = "not-an-address".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_bad_log_level_from_file_fails_validation() {
        let file = TomlConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        let settings = Settings::from_parts(file, None, None, false, false);

        assert_eq!(settings.log_level.as_deref(), Some("loud"));
        assert!(settings.validate().is_err());

        let file = TomlConfig::from_toml_str("[logging]\nlevel = \"warn\"\n").unwrap();
        let settings = Settings::from_parts(file, None, None, false, false);
        assert!(settings.validate().is_ok());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_parsing() {
        let cli = CliConfig::parse_from([
            "uni-rankings",
            "--bind",
            "127.0.0.1:8081",
            "--data-file",
            "data.toml",
            "--json-logs",
        ]);
        let settings = cli.resolve().unwrap();
        assert_eq!(settings.bind, "127.0.0.1:8081");
        assert_eq!(settings.data_path.as_deref(), Some("data.toml"));
        assert!(settings.json_logs);
        assert!(!settings.verbose);
    }
}
