//! Semantic retriever over the (vector index, metadata store) pair.
//!
//! Reads run concurrently under a shared lock; `add_documents` takes the
//! write lock so no reader ever observes the index and metadata at unequal
//! lengths. Persistence happens inside the write window, index file first;
//! a crash between the two writes is caught at the next `open` as a length
//! mismatch.

use std::path::PathBuf;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use fiqhrag_core::config::{RetrievalConfig, StorageConfig};
use fiqhrag_core::traits::Embedder;
use fiqhrag_core::types::{DocumentChunk, RetrievalResult, RetrievedDocument};
use fiqhrag_core::{Error, Result};
use fiqhrag_index::persist::{load_index, save_index};
use fiqhrag_index::{FlatIndex, MetadataField, MetadataStore};
use fiqhrag_query::QueryProcessor;

/// Maps raw L2 distance into `(0, 1]`; distance 0 scores exactly 1.0.
/// Tied to the Euclidean metric: a different distance (cosine, inner
/// product) needs a different transform.
pub fn score_from_distance(distance: f32) -> f32 {
    1.0 / (1.0 + distance.max(0.0))
}

struct IndexState {
    index: FlatIndex,
    metadata: MetadataStore,
}

pub struct Retriever {
    embedder: Box<dyn Embedder>,
    processor: QueryProcessor,
    state: RwLock<IndexState>,
    config: RetrievalConfig,
    index_path: PathBuf,
    metadata_path: PathBuf,
}

impl std::fmt::Debug for Retriever {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Retriever")
            .field("config", &self.config)
            .field("index_path", &self.index_path)
            .field("metadata_path", &self.metadata_path)
            .finish_non_exhaustive()
    }
}

impl Retriever {
    /// Loads persisted state. Fails rather than serving queries from a
    /// missing or inconsistent index; `storage.create_if_missing` is the
    /// explicit development-mode escape for a missing index file.
    pub fn open(
        storage: &StorageConfig,
        config: RetrievalConfig,
        embedder: Box<dyn Embedder>,
    ) -> Result<Self> {
        let index_path = storage.index_path();
        let metadata_path = storage.metadata_path();

        let index = match load_index(&index_path) {
            Ok(index) => index,
            Err(Error::IndexNotFound(path)) if storage.create_if_missing => {
                tracing::warn!("no index at {}, starting empty (create_if_missing)", path.display());
                FlatIndex::new(embedder.dim())?
            }
            Err(e) => return Err(e),
        };
        let metadata = MetadataStore::load(&metadata_path)?;

        if index.len() != metadata.len() {
            return Err(Error::IndexCorrupt(format!(
                "index holds {} vectors but metadata has {} records",
                index.len(),
                metadata.len()
            )));
        }
        if index.dim() != embedder.dim() {
            return Err(Error::DimensionMismatch { expected: embedder.dim(), got: index.dim() });
        }
        tracing::info!(documents = metadata.len(), dim = index.dim(), "retriever initialized");

        Ok(Self {
            embedder,
            processor: QueryProcessor::new(),
            state: RwLock::new(IndexState { index, metadata }),
            config,
            index_path,
            metadata_path,
        })
    }

    /// Assembles a retriever from in-memory parts, validating dimensions but
    /// not lengths. Used by the index builder before anything is persisted.
    pub fn from_parts(
        embedder: Box<dyn Embedder>,
        index: FlatIndex,
        metadata: MetadataStore,
        config: RetrievalConfig,
        storage: &StorageConfig,
    ) -> Result<Self> {
        if index.dim() != embedder.dim() {
            return Err(Error::DimensionMismatch { expected: embedder.dim(), got: index.dim() });
        }
        Ok(Self {
            embedder,
            processor: QueryProcessor::new(),
            state: RwLock::new(IndexState { index, metadata }),
            config,
            index_path: storage.index_path(),
            metadata_path: storage.metadata_path(),
        })
    }

    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    pub fn document_count(&self) -> usize {
        self.read_state().index.len()
    }

    /// Top-k semantic retrieval, ranked by descending similarity.
    pub fn retrieve(&self, query: &str, top_k: Option<usize>) -> Result<Vec<RetrievedDocument>> {
        let k = top_k.unwrap_or(self.config.top_k);
        if k == 0 {
            return Err(Error::InvalidTopK);
        }
        let processed = self.processor.process(query, false);
        let embedding =
            self.embedder.embed(&processed).map_err(|e| Error::Embedding(e.to_string()))?;

        let state = self.read_state();
        let hits = state.index.search(&embedding, k)?;
        let mut documents = Vec::with_capacity(hits.len());
        for (distance, position) in hits {
            let Some(chunk) = state.metadata.get(position) else {
                // Violates the 1:1 alignment invariant; skip, never fabricate.
                tracing::warn!(
                    position,
                    metadata_len = state.metadata.len(),
                    "index position has no metadata record, skipping"
                );
                continue;
            };
            documents.push(RetrievedDocument {
                chunk: chunk.clone(),
                position,
                similarity_score: score_from_distance(distance),
            });
        }
        Ok(documents)
    }

    /// Retrieval plus threshold filtering. Confidence is the mean similarity
    /// over the documents that survive the filter, 0.0 when none do.
    pub fn retrieve_with_threshold(
        &self,
        query: &str,
        top_k: Option<usize>,
    ) -> Result<RetrievalResult> {
        let threshold = self.config.score_threshold;
        let documents: Vec<RetrievedDocument> = self
            .retrieve(query, top_k)?
            .into_iter()
            .filter(|d| d.similarity_score >= threshold)
            .collect();
        let confidence = if documents.is_empty() {
            0.0
        } else {
            documents.iter().map(|d| d.similarity_score).sum::<f32>() / documents.len() as f32
        };
        Ok(RetrievalResult { documents, confidence })
    }

    /// Appends aligned vectors and metadata records as one logical
    /// transaction, then persists both files inside the write window.
    pub fn add_documents(&self, vectors: Vec<Vec<f32>>, records: Vec<DocumentChunk>) -> Result<()> {
        if vectors.len() != records.len() {
            return Err(Error::LengthMismatch {
                vectors: vectors.len(),
                metadata: records.len(),
            });
        }
        let mut state = self.write_state();
        state.index.add(&vectors)?;
        state.metadata.extend(records);
        save_index(&state.index, &self.index_path)?;
        state.metadata.save(&self.metadata_path)?;
        tracing::info!(added = vectors.len(), total = state.index.len(), "documents added");
        Ok(())
    }

    /// Exact-match metadata scan; order preserved from storage.
    pub fn search_by_metadata(&self, field: MetadataField, value: &str) -> Vec<DocumentChunk> {
        let state = self.read_state();
        state.metadata.find(field, value).into_iter().cloned().collect()
    }

    fn read_state(&self) -> RwLockReadGuard<'_, IndexState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, IndexState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
