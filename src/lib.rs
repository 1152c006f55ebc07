pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;
pub mod web;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::Settings;
pub use crate::core::{catalog::Catalog, sorting::SortSpec};
pub use crate::utils::error::{RankingError, Result};
pub use crate::web::{create_app, AppState};
