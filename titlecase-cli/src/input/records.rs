//! Metadata record files
//!
//! A records file is a JSON array of repository items:
//!
//! ```json
//! [
//!   { "identifier": "oai:repo:1", "metadata": { "title": "A Study of Urban Development" } }
//! ]
//! ```
//!
//! Items whose `metadata` is missing, null or empty are skipped. A title
//! field may be a string or an array of strings.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;

use super::TitleInput;
use crate::error::CliError;

/// One repository item
#[derive(Debug, Clone, Deserialize)]
pub struct MetadataRecord {
    /// Item identifier; strings and numbers are both accepted
    pub identifier: Value,
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
}

impl MetadataRecord {
    /// Identifier rendered as plain text
    pub fn id(&self) -> String {
        match &self.identifier {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// Titles stored under the `field` metadata key
    pub fn titles(&self, field: &str) -> Vec<String> {
        let Some(title) = self.metadata.as_ref().and_then(|m| m.get(field)) else {
            return Vec::new();
        };

        match title {
            Value::String(s) => vec![s.clone()],
            Value::Array(items) => items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }

    fn has_metadata(&self) -> bool {
        self.metadata.as_ref().is_some_and(|m| !m.is_empty())
    }
}

/// Metadata key holding titles unless another is requested
pub const DEFAULT_TITLE_FIELD: &str = "title";

/// Parsed records file
#[derive(Debug, Clone)]
pub struct RecordSet {
    records: Vec<MetadataRecord>,
}

impl RecordSet {
    /// Load records from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read records file: {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to load records from {}", path.display()))
    }

    /// Parse records from JSON text
    pub fn parse(json: &str) -> Result<Self> {
        let records: Vec<MetadataRecord> = serde_json::from_str(json)
            .map_err(|e| CliError::InvalidRecords(e.to_string()))?;

        let total = records.len();
        let records: Vec<MetadataRecord> =
            records.into_iter().filter(MetadataRecord::has_metadata).collect();
        if records.len() < total {
            log::info!("Skipped {} record(s) without metadata", total - records.len());
        }

        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find a record by identifier
    pub fn find(&self, id: &str) -> Option<&MetadataRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Titles under `field` of all records, or of the record with `id`
    /// when given
    pub fn titles(&self, id: Option<&str>, field: &str) -> Result<Vec<TitleInput>> {
        let selected: Vec<&MetadataRecord> = match id {
            Some(id) => vec![self
                .find(id)
                .ok_or_else(|| CliError::RecordNotFound(id.to_string()))?],
            None => self.records.iter().collect(),
        };

        let mut titles = Vec::new();
        for record in selected {
            let record_titles = record.titles(field);
            if record_titles.is_empty() {
                log::warn!("Record {} has no '{field}' field", record.id());
            }
            titles.extend(
                record_titles
                    .into_iter()
                    .map(|title| TitleInput::new(record.id(), title)),
            );
        }

        Ok(titles)
    }
}
