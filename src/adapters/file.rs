use crate::core::{Result, University, UniversitySource};
use crate::utils::error::RankingError;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Loads the dataset from a `.json` array or a `.toml` file with
/// `[[universities]]` tables.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct TomlDataset {
    #[serde(default)]
    universities: Vec<University>,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 依副檔名解析內容
    pub fn parse(path: &Path, content: &str) -> Result<Vec<University>> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(serde_json::from_str(content)?),
            Some("toml") => {
                let dataset: TomlDataset = toml::from_str(content)?;
                Ok(dataset.universities)
            }
            other => Err(RankingError::InvalidConfigValueError {
                field: "data.path".to_string(),
                value: path.display().to_string(),
                reason: format!(
                    "Unsupported data file extension: {}",
                    other.unwrap_or("<none>")
                ),
            }),
        }
    }
}

#[async_trait]
impl UniversitySource for FileSource {
    async fn load(&self) -> Result<Vec<University>> {
        tracing::debug!("Reading dataset from {}", self.path.display());
        let content = tokio::fs::read_to_string(&self.path).await?;
        let universities = Self::parse(&self.path, &content)?;
        tracing::debug!("Parsed {} records from {}", universities.len(), self.path.display());
        Ok(universities)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
