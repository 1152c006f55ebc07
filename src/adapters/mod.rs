// Adapters layer: concrete data sources behind the UniversitySource port.

pub mod builtin;
pub mod file;

use crate::core::UniversitySource;

pub use builtin::BuiltinSource;
pub use file::FileSource;

/// Picks the file source when a path is configured, the built-in dataset otherwise.
pub fn source_for(data_path: Option<&str>) -> Box<dyn UniversitySource> {
    match data_path {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(BuiltinSource),
    }
}
