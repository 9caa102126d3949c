//! Flat L2 vector index and the positionally aligned chunk metadata store.
//!
//! The pair is the system's only persistent state. The write path keeps
//! `index.len() == metadata.len()`; a mismatch observed at load time means a
//! partial write and is fatal.

pub mod flat;
pub mod metadata;
pub mod persist;

pub use flat::FlatIndex;
pub use metadata::{MetadataField, MetadataStore};
