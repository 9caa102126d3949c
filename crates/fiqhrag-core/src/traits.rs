use anyhow::Result;

/// A text embedding model. Vectors are fixed-dimension for the lifetime of
/// the model; `dim` must match the index the embeddings are stored in.
pub trait Embedder: Send + Sync {
    fn dim(&self) -> usize;
    fn embed(&self, text: &str) -> Result<Vec<f32>>;
}
