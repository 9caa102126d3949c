//! Arabic query processing: orthographic normalization, stop-word removal,
//! synonym expansion and keyword extraction.
//!
//! The same `process` transform must run at index-build time and query time
//! so token-level matching sees one canonical spelling.

pub mod normalize;
pub mod processor;
pub mod synonyms;

pub use normalize::normalize;
pub use processor::QueryProcessor;
pub use synonyms::FIQH_SYNONYMS;
