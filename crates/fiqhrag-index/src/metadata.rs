//! Ordered chunk metadata, aligned 1:1 with the vector index by position.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use fiqhrag_core::types::DocumentChunk;
use fiqhrag_core::{Error, Result};

/// The fields exposed to exact-match metadata scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataField {
    Book,
    Chapter,
    Madhhab,
    Author,
}

impl FromStr for MetadataField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "book" => Ok(Self::Book),
            "chapter" => Ok(Self::Chapter),
            "madhhab" => Ok(Self::Madhhab),
            "author" => Ok(Self::Author),
            other => Err(Error::UnknownField(other.to_string())),
        }
    }
}

/// In-memory store backed by a UTF-8 JSON array on disk, loaded wholesale at
/// startup and rewritten after every append.
#[derive(Debug, Default)]
pub struct MetadataStore {
    records: Vec<DocumentChunk>,
}

impl MetadataStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<DocumentChunk>) -> Self {
        Self { records }
    }

    /// A missing file yields an empty store; the retriever's startup
    /// length check decides whether that is acceptable.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::warn!("metadata file not found at {}", path.display());
            return Ok(Self::new());
        }
        let raw = fs::read_to_string(path)?;
        let records = serde_json::from_str(&raw)?;
        Ok(Self { records })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(&self.records)?;
        fs::write(path, raw)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&DocumentChunk> {
        self.records.get(position)
    }

    pub fn records(&self) -> &[DocumentChunk] {
        &self.records
    }

    pub fn extend(&mut self, records: Vec<DocumentChunk>) {
        self.records.extend(records);
    }

    /// Exact-match linear scan, storage order preserved. O(n); the corpus is
    /// small enough that no secondary index is warranted.
    pub fn find(&self, field: MetadataField, value: &str) -> Vec<&DocumentChunk> {
        self.records
            .iter()
            .filter(|chunk| match field {
                MetadataField::Book => chunk.book == value,
                MetadataField::Chapter => chunk.chapter.as_deref() == Some(value),
                MetadataField::Madhhab => chunk.madhhab.as_deref() == Some(value),
                MetadataField::Author => chunk.author.as_deref() == Some(value),
            })
            .collect()
    }
}
