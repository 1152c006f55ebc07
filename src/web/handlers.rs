use crate::core::details::DetailView;
use crate::core::listing::ListingView;
use crate::core::sorting::{sort_universities, SortSpec};
use crate::domain::model::University;
use crate::utils::error::{RankingError, Result};
use crate::web::error::{AppError, AppResult};
use crate::web::{html, AppState};
use axum::{
    extract::{Path, RawQuery, State},
    http::header,
    response::{Html, IntoResponse, Response},
    Json,
};

/// `?sort=<field>&order=<asc|desc>`; both optional.
#[derive(Debug, Default, PartialEq)]
pub struct SortQuery {
    pub sort: Option<String>,
    pub order: Option<String>,
}

impl SortQuery {
    /// Repeated keys keep their first value; unknown keys are ignored.
    pub fn from_raw(raw: Option<&str>) -> Self {
        let mut query = Self::default();
        for (key, value) in url::form_urlencoded::parse(raw.unwrap_or_default().as_bytes()) {
            match key.as_ref() {
                "sort" if query.sort.is_none() => query.sort = Some(value.into_owned()),
                "order" if query.order.is_none() => query.order = Some(value.into_owned()),
                _ => {}
            }
        }
        query
    }

    pub fn spec(&self) -> SortSpec {
        let spec = SortSpec::from_params(self.sort.as_deref(), self.order.as_deref());
        tracing::debug!(
            "Resolved sort {:?}/{:?} to {}/{}",
            self.sort,
            self.order,
            spec.field,
            spec.direction
        );
        spec
    }
}

pub async fn listing_handler(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Html<String> {
    let query = SortQuery::from_raw(raw.as_deref());
    let view = ListingView::build(state.catalog.all(), query.spec());
    Html(html::listing_page(&view))
}

pub async fn detail_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    let university = state.catalog.resolve(&id).inspect_err(|e| {
        tracing::warn!("⚠️ {}", e);
    })?;
    Ok(Html(html::detail_page(&DetailView::from_university(university))))
}

pub async fn api_list_handler(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Json<Vec<University>> {
    let query = SortQuery::from_raw(raw.as_deref());
    let sorted = sort_universities(state.catalog.all(), query.spec());
    Json(sorted.into_iter().cloned().collect())
}

pub async fn api_detail_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<University>> {
    let university = state.catalog.resolve(&id).map_err(|e| {
        tracing::warn!("⚠️ {}", e);
        AppError::from(e).json()
    })?;
    Ok(Json(university.clone()))
}

pub async fn csv_export_handler(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> AppResult<Response> {
    let query = SortQuery::from_raw(raw.as_deref());
    let sorted = sort_universities(state.catalog.all(), query.spec());
    let body = write_csv(&sorted)?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"universities.csv\"",
            ),
        ],
        body,
    )
        .into_response())
}

/// 依目前排序輸出 CSV
pub fn write_csv(universities: &[&University]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "rank",
        "name",
        "country",
        "city",
        "score",
        "studentCount",
        "facultyCount",
        "foundedYear",
    ])?;

    for u in universities {
        writer.write_record([
            u.rank.to_string(),
            u.name.clone(),
            u.country.clone(),
            u.city.clone(),
            u.score.to_string(),
            u.student_count.to_string(),
            u.faculty_count.to_string(),
            u.founded_year.to_string(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes)
        .map_err(|e| RankingError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

pub async fn health_handler() -> &'static str {
    "ok"
}

pub async fn fallback_handler() -> AppError {
    AppError::not_found("Page not found")
}
