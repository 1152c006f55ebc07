use crate::domain::model::University;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Supplies the full dataset once at startup.
#[async_trait]
pub trait UniversitySource: Send + Sync {
    async fn load(&self) -> Result<Vec<University>>;

    /// Human readable description for startup logs.
    fn describe(&self) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_addr(&self) -> &str;
    fn data_path(&self) -> Option<&str>;
    fn json_logs(&self) -> bool;
}
