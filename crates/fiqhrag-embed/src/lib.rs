//! Embedding model invocation.
//!
//! The real embedder runs a local BERT-family Arabic model through candle
//! with attention-masked mean pooling and L2 normalization. The fake
//! embedder hashes tokens into a fixed-dimension vector deterministically;
//! it exists for tests and offline development and is selected with
//! `APP_USE_FAKE_EMBEDDINGS=1`.

pub mod device;
pub mod model;
pub mod pooling;
pub mod tokenize;

use std::hash::{Hash, Hasher};

use anyhow::Result;
use twox_hash::XxHash64;

use fiqhrag_core::config::EmbeddingConfig;
use fiqhrag_core::traits::Embedder;

pub use model::CandleEmbedder;

const FAKE_EMBEDDING_DIM: usize = 768;

/// Deterministic hashing embedder. Same text, same vector, always.
pub struct FakeEmbedder {
    dim: usize,
}

impl FakeEmbedder {
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }
}

impl Embedder for FakeEmbedder {
    fn dim(&self) -> usize {
        self.dim
    }

    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut v = vec![0f32; self.dim];
        for (i, token) in text.split_whitespace().enumerate() {
            let mut hasher = XxHash64::with_seed(0);
            token.hash(&mut hasher);
            let h = hasher.finish();
            let idx = (h as usize) % self.dim;
            let val = (((h >> 32) as u32) as f32) / (u32::MAX as f32);
            v[idx] += val + (i % 3) as f32 * 0.01;
        }
        let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt().max(1e-6);
        for x in &mut v {
            *x /= norm;
        }
        Ok(v)
    }
}

/// Builds the embedder named by the configuration, honoring the
/// `APP_USE_FAKE_EMBEDDINGS` escape hatch.
pub fn build_embedder(config: &EmbeddingConfig) -> Result<Box<dyn Embedder>> {
    let use_fake = std::env::var("APP_USE_FAKE_EMBEDDINGS")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    if use_fake {
        tracing::info!(dim = FAKE_EMBEDDING_DIM, "using fake embedder");
        return Ok(Box::new(FakeEmbedder::new(FAKE_EMBEDDING_DIM)));
    }
    Ok(Box::new(CandleEmbedder::load(config)?))
}
