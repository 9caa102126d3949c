//! Domain types shared by the index and retrieval engines.

use serde::{Deserialize, Serialize};

/// One retrievable unit of fiqh text.
///
/// A chunk's identity is its ordinal position in the metadata file, which is
/// aligned 1:1 with the vector at the same position in the index. `book` is
/// always present; the remaining attributions are optional per record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentChunk {
    pub text: String,
    pub book: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub madhhab: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// A chunk joined with its similarity to one query. Created per query and
/// discarded once the caller consumes it.
#[derive(Debug, Clone, Serialize)]
pub struct RetrievedDocument {
    pub chunk: DocumentChunk,
    /// Ordinal position in the index/metadata pair.
    pub position: usize,
    /// `1 / (1 + L2_distance)`, in `(0, 1]`.
    pub similarity_score: f32,
}

/// Threshold-filtered retrieval output, ranked by descending similarity.
#[derive(Debug, Clone, Serialize)]
pub struct RetrievalResult {
    pub documents: Vec<RetrievedDocument>,
    /// Mean similarity over `documents`, `0.0` when empty.
    pub confidence: f32,
}

/// Source attribution carried on an assembled answer.
#[derive(Debug, Clone, Serialize)]
pub struct SourceAttribution {
    pub text: String,
    pub book: String,
    pub chapter: Option<String>,
    pub madhhab: Option<String>,
    pub relevance: f32,
}

/// The payload handed to the API/CLI layer.
#[derive(Debug, Clone, Serialize)]
pub struct Answer {
    pub query: String,
    pub context: String,
    pub sources: Vec<SourceAttribution>,
    pub confidence: f32,
    pub retrieval_count: usize,
}
