//! Input handling module

pub mod file_reader;
pub mod glob_resolver;
pub mod records;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;
pub use records::{MetadataRecord, RecordSet, DEFAULT_TITLE_FIELD};

/// A title together with where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleInput {
    /// Human-readable origin, e.g. `titles.txt:3` or `arg 1`
    pub source: String,
    /// The raw title, untrimmed
    pub title: String,
}

impl TitleInput {
    pub fn new(source: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            title: title.into(),
        }
    }
}
