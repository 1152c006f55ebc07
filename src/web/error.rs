use crate::utils::error::RankingError;
use crate::web::html;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

pub type AppResult<T> = Result<T, AppError>;

/// How the error body is rendered: HTML pages for browsers, JSON for `/api`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorFormat {
    Html,
    Json,
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
    pub format: ErrorFormat,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            format: ErrorFormat::Html,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn json(mut self) -> Self {
        self.format = ErrorFormat::Json;
        self
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.format {
            ErrorFormat::Json => {
                let body = Json(json!({
                    "error": {
                        "message": self.message,
                        "status": self.status.as_u16(),
                    }
                }));
                (self.status, body).into_response()
            }
            ErrorFormat::Html => {
                let page = if self.status == StatusCode::NOT_FOUND {
                    html::not_found_page()
                } else {
                    html::error_page(self.status.as_u16(), &self.message)
                };
                (self.status, Html(page)).into_response()
            }
        }
    }
}

impl From<RankingError> for AppError {
    fn from(err: RankingError) -> Self {
        let status = StatusCode::from_u16(err.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self::new(status, err.to_string())
    }
}
