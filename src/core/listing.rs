use crate::core::sorting::{sort_universities, SortDirection, SortField, SortSpec};
use crate::domain::model::University;

/// 表頭欄位：標籤、切換排序用的連結，以及是否為目前排序欄位
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub label: &'static str,
    pub sort: Option<SortLink>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SortLink {
    pub field: SortField,
    pub href: String,
    /// Direction currently applied when this column is the active one.
    pub active: Option<SortDirection>,
}

#[derive(Debug, Clone)]
pub struct ListingView<'a> {
    pub spec: SortSpec,
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<&'a University>,
}

impl<'a> ListingView<'a> {
    pub fn build(universities: &'a [University], spec: SortSpec) -> Self {
        Self {
            spec,
            headers: headers(spec),
            rows: sort_universities(universities, spec),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}

fn headers(spec: SortSpec) -> Vec<HeaderCell> {
    let sortable = |label: &'static str, field: SortField| HeaderCell {
        label,
        sort: Some(SortLink {
            field,
            href: spec.toggle(field).query_string(),
            active: (spec.field == field).then_some(spec.direction),
        }),
    };
    let plain = |label: &'static str| HeaderCell { label, sort: None };

    vec![
        sortable("Rank", SortField::Rank),
        plain("Logo"),
        sortable("University", SortField::Name),
        sortable("Country", SortField::Country),
        sortable("Score", SortField::Score),
        sortable("Students", SortField::StudentCount),
        sortable("Faculty", SortField::FacultyCount),
        sortable("Founded", SortField::FoundedYear),
        plain("Details"),
        plain(""),
    ]
}
