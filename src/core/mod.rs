pub mod catalog;
pub mod details;
pub mod listing;
pub mod lookup;
pub mod sorting;

pub use crate::domain::model::{Metrics, Program, University};
pub use crate::domain::ports::{ConfigProvider, UniversitySource};
pub use crate::utils::error::Result;
