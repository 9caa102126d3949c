//! Retrieval orchestration and cited answer assembly.
//!
//! Each query is a stateless function of (query text, current index+metadata
//! snapshot): normalize, embed, nearest-neighbor search, positional metadata
//! join, threshold filter, confidence aggregate, context assembly.

pub mod chain;
pub mod retriever;

pub use chain::{append_citations, RagChain};
pub use retriever::{score_from_distance, Retriever};
