use crate::core::lookup::{find_by_id, parse_id};
use crate::domain::model::University;
use crate::domain::ports::UniversitySource;
use crate::utils::error::{RankingError, Result};
use crate::utils::validation::{validate_asset_ref, validate_non_empty_string, validate_range};
use chrono::Datelike;
use std::collections::HashSet;

/// The frozen dataset. Built once at startup and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    universities: Vec<University>,
}

impl Catalog {
    /// 驗證每筆記錄後建立目錄；id 必須唯一
    pub fn from_records(universities: Vec<University>) -> Result<Self> {
        let current_year = chrono::Utc::now().year();
        let mut seen = HashSet::with_capacity(universities.len());

        for university in &universities {
            if !seen.insert(university.id) {
                return Err(RankingError::DuplicateId { id: university.id });
            }
            validate_record(university, current_year)?;
        }

        tracing::debug!("Catalog built with {} universities", universities.len());
        Ok(Self { universities })
    }

    /// 從資料來源載入並建立目錄
    pub async fn load(source: &dyn UniversitySource) -> Result<Self> {
        tracing::info!("📚 Loading universities from {}", source.describe());
        let universities = source.load().await?;
        Self::from_records(universities)
    }

    pub fn all(&self) -> &[University] {
        &self.universities
    }

    pub fn len(&self) -> usize {
        self.universities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.universities.is_empty()
    }

    pub fn get(&self, id: u32) -> Result<&University> {
        find_by_id(&self.universities, id).ok_or_else(|| RankingError::not_found(id.to_string()))
    }

    /// Resolves a raw route segment. Anything that is not a plain decimal id is not found.
    pub fn resolve(&self, raw_id: &str) -> Result<&University> {
        parse_id(raw_id)
            .and_then(|id| find_by_id(&self.universities, id))
            .ok_or_else(|| RankingError::not_found(raw_id))
    }
}

fn validate_record(university: &University, current_year: i32) -> Result<()> {
    let id = university.id;
    let invalid = |field: &str, err: RankingError| RankingError::InvalidRecord {
        id,
        field: field.to_string(),
        reason: err.to_string(),
    };

    validate_non_empty_string("name", &university.name).map_err(|e| invalid("name", e))?;
    validate_range("score", university.score, 0.0, 100.0).map_err(|e| invalid("score", e))?;
    validate_range("foundedYear", university.founded_year, i32::MIN, current_year)
        .map_err(|e| invalid("foundedYear", e))?;

    if let Some(logo) = &university.logo {
        validate_asset_ref("logo", logo).map_err(|e| invalid("logo", e))?;
    }

    for (name, value) in university.metrics.indicators() {
        validate_range(name, value, 0.0, 100.0).map_err(|e| invalid(name, e))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::builtin::builtin_universities;

    #[test]
    fn test_builtin_dataset_is_valid() {
        let catalog = Catalog::from_records(builtin_universities()).unwrap();
        assert_eq!(catalog.len(), 10);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let mut records = builtin_universities();
        records[1].id = records[0].id;

        let err = Catalog::from_records(records).unwrap_err();
        assert!(matches!(err, RankingError::DuplicateId { .. }));
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        let mut records = builtin_universities();
        records[0].score = 101.0;
        assert!(matches!(
            Catalog::from_records(records).unwrap_err(),
            RankingError::InvalidRecord { ref field, .. } if field == "score"
        ));

        let mut records = builtin_universities();
        records[2].metrics.citations = -1.0;
        assert!(matches!(
            Catalog::from_records(records).unwrap_err(),
            RankingError::InvalidRecord { ref field, .. } if field == "citations"
        ));

        let mut records = builtin_universities();
        records[3].founded_year = 9999;
        assert!(Catalog::from_records(records).is_err());

        let mut records = builtin_universities();
        records[4].logo = Some("logo.png".to_string());
        assert!(Catalog::from_records(records).is_err());
    }

    #[test]
    fn test_get_and_resolve() {
        let catalog = Catalog::from_records(builtin_universities()).unwrap();

        assert_eq!(catalog.get(1).unwrap().id, 1);
        assert_eq!(catalog.resolve("2").unwrap().id, 2);

        assert!(matches!(catalog.get(404), Err(RankingError::NotFound { .. })));
        assert!(matches!(catalog.resolve("abc"), Err(RankingError::NotFound { .. })));
        assert!(matches!(catalog.resolve("404"), Err(RankingError::NotFound { .. })));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_records(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.get(1).is_err());
    }
}
