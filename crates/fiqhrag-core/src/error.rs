//! Error taxonomy shared across the workspace.
//!
//! Startup failures (`IndexNotFound`, `IndexCorrupt`, `InvalidConfig`) abort
//! initialization. `DimensionMismatch`, `LengthMismatch` and `InvalidTopK`
//! are caller errors and are rejected before any mutation. `Embedding` is the
//! only per-query failure; the answer layer converts it to a fallback reply.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("vector index not found at {0}")]
    IndexNotFound(PathBuf),

    #[error("vector index corrupt: {0}")]
    IndexCorrupt(String),

    #[error("index serialization failed: {0}")]
    IndexEncoding(String),

    #[error("embedding dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("vectors and metadata lengths differ: {vectors} vectors, {metadata} records")]
    LengthMismatch { vectors: usize, metadata: usize },

    #[error("top_k must be positive")]
    InvalidTopK,

    #[error("embedding failed: {0}")]
    Embedding(String),

    #[error("unknown metadata field: {0}")]
    UnknownField(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("metadata file error: {0}")]
    Metadata(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
