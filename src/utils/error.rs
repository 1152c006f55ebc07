use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankingError {
    #[error("University not found: {id}")]
    NotFound { id: String },

    #[error("Duplicate university id: {id}")]
    DuplicateId { id: u32 },

    #[error("Invalid record {id}: {field} {reason}")]
    InvalidRecord {
        id: u32,
        field: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("TOML parsing error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// 錯誤分類，用於日誌與退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lookup,
    Data,
    Configuration,
    System,
}

impl RankingError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound { .. } => ErrorCategory::Lookup,
            Self::DuplicateId { .. }
            | Self::InvalidRecord { .. }
            | Self::SerializationError(_)
            | Self::TomlParseError(_) => ErrorCategory::Data,
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError(_) | Self::CsvError(_) => ErrorCategory::System,
        }
    }

    /// HTTP status code for this error when it reaches a handler
    pub fn status_code(&self) -> u16 {
        match self.category() {
            ErrorCategory::Lookup => 404,
            _ => 500,
        }
    }

    /// Process exit code used by the binary on startup failures
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 2,
            ErrorCategory::Data => 3,
            ErrorCategory::Lookup | ErrorCategory::System => 1,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Lookup => "Check the university id in the URL",
            ErrorCategory::Data => "Fix the dataset file and restart the server",
            ErrorCategory::Configuration => "Check the CLI flags and the TOML configuration file",
            ErrorCategory::System => "Check file permissions and that the bind address is free",
        }
    }
}

pub type Result<T> = std::result::Result<T, RankingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = RankingError::not_found("42");
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.to_string(), "University not found: 42");
    }

    #[test]
    fn test_config_errors_exit_with_2() {
        let err = RankingError::InvalidConfigValueError {
            field: "server.bind".to_string(),
            value: "nowhere".to_string(),
            reason: "not a socket address".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.status_code(), 500);
    }
}
