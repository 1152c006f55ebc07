use crate::domain::model::University;

/// Linear scan; the dataset is small enough that an index buys nothing.
pub fn find_by_id(universities: &[University], id: u32) -> Option<&University> {
    universities.iter().find(|u| u.id == id)
}

/// 解析路由中的 id，只接受純十進位數字
pub fn parse_id(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::builtin::builtin_universities;

    #[test]
    fn test_find_existing_id() {
        let records = builtin_universities();
        for record in &records {
            let found = find_by_id(&records, record.id).unwrap();
            assert_eq!(found, record);
        }
    }

    #[test]
    fn test_find_unknown_id() {
        let records = builtin_universities();
        assert!(find_by_id(&records, 9999).is_none());
        assert!(find_by_id(&[], 1).is_none());
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("7"), Some(7));
        assert_eq!(parse_id("007"), Some(7));
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("3abc"), None);
        assert_eq!(parse_id("-1"), None);
        assert_eq!(parse_id("+1"), None);
        assert_eq!(parse_id("99999999999"), None);
    }
}
