use crate::utils::error::{RankingError, Result};
use std::net::SocketAddr;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Accepts an absolute http(s) URL or a site-relative path such as `/logos/mit.svg`.
pub fn validate_asset_ref(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(RankingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Asset reference cannot be empty".to_string(),
        });
    }

    if value.starts_with('/') && !value.starts_with("//") {
        return Ok(());
    }

    match Url::parse(value) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(RankingError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(RankingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RankingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RankingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extension(field_name: &str, file: &str, allowed_extensions: &[&str]) -> Result<()> {
    match std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed_extensions.contains(&extension) => Ok(()),
        Some(extension) => Err(RankingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(RankingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_socket_addr(field_name: &str, value: &str) -> Result<SocketAddr> {
    value
        .parse::<SocketAddr>()
        .map_err(|e| RankingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Invalid socket address: {}", e),
        })
}

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

pub fn validate_log_level(field_name: &str, level: &str) -> Result<()> {
    if !LOG_LEVELS.contains(&level) {
        return Err(RankingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: level.to_string(),
            reason: format!("Unsupported level. Valid levels: {}", LOG_LEVELS.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RankingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // NaN fails both comparisons, so check containment rather than exclusion
    if !(value >= min && value <= max) {
        return Err(RankingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_asset_ref() {
        assert!(validate_asset_ref("logo", "https://example.com/logo.png").is_ok());
        assert!(validate_asset_ref("logo", "/logos/mit.svg").is_ok());
        assert!(validate_asset_ref("logo", "").is_err());
        assert!(validate_asset_ref("logo", "logo.png").is_err());
        assert!(validate_asset_ref("logo", "ftp://example.com/logo.png").is_err());
        assert!(validate_asset_ref("logo", "//cdn.example.com/logo.png").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("data.path", "data/universities.json", &["json", "toml"]).is_ok());
        assert!(validate_file_extension("data.path", "data/universities.toml", &["json", "toml"]).is_ok());
        assert!(validate_file_extension("data.path", "data/universities.csv", &["json", "toml"]).is_err());
        assert!(validate_file_extension("data.path", "data/universities", &["json", "toml"]).is_err());
    }

    #[test]
    fn test_validate_socket_addr() {
        assert!(validate_socket_addr("server.bind", "127.0.0.1:3000").is_ok());
        assert!(validate_socket_addr("server.bind", "[::1]:8080").is_ok());
        assert!(validate_socket_addr("server.bind", "localhost").is_err());
    }

    #[test]
    fn test_validate_log_level() {
        assert!(validate_log_level("logging.level", "debug").is_ok());
        assert!(validate_log_level("logging.level", "loud").is_err());
        assert!(validate_log_level("logging.level", "INFO").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("score", 98.5, 0.0, 100.0).is_ok());
        assert!(validate_range("score", 100.1, 0.0, 100.0).is_err());
        assert!(validate_range("score", f64::NAN, 0.0, 100.0).is_err());
    }
}
