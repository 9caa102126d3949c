//! Flat (exact) nearest-neighbor index over Euclidean distance.

use serde::{Deserialize, Serialize};

use fiqhrag_core::{Error, Result};

/// Append-only index of fixed-dimension `f32` vectors, stored contiguously.
/// Search is an exact O(n·d) scan, which is the right trade-off at corpus
/// sizes of a few tens of thousands of chunks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlatIndex {
    dim: usize,
    data: Vec<f32>,
}

impl FlatIndex {
    pub fn new(dim: usize) -> Result<Self> {
        if dim == 0 {
            return Err(Error::InvalidConfig("index dimension must be positive".to_string()));
        }
        Ok(Self { dim, data: Vec::new() })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn len(&self) -> usize {
        self.data.len() / self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Appends vectors. Every vector's length is validated before any is
    /// stored, so a failed call leaves the index unchanged.
    pub fn add(&mut self, vectors: &[Vec<f32>]) -> Result<()> {
        for v in vectors {
            if v.len() != self.dim {
                return Err(Error::DimensionMismatch { expected: self.dim, got: v.len() });
            }
        }
        for v in vectors {
            self.data.extend_from_slice(v);
        }
        Ok(())
    }

    /// Returns up to `k` entries as `(distance, position)`, ascending by L2
    /// distance, ties broken by insertion order. Fewer than `k` stored
    /// vectors yields all of them.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<(f32, usize)>> {
        if query.len() != self.dim {
            return Err(Error::DimensionMismatch { expected: self.dim, got: query.len() });
        }
        let mut hits: Vec<(f32, usize)> = self
            .data
            .chunks_exact(self.dim)
            .enumerate()
            .map(|(position, row)| (l2_distance(query, row), position))
            .collect();
        hits.sort_by(|a, b| {
            a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal).then(a.1.cmp(&b.1))
        });
        hits.truncate(k);
        Ok(hits)
    }
}

fn l2_distance(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum::<f32>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_self_is_zero() {
        let v = [0.3f32, -0.7, 0.2];
        assert_eq!(l2_distance(&v, &v), 0.0);
    }

    #[test]
    fn distance_matches_euclidean() {
        let d = l2_distance(&[0.0, 0.0], &[3.0, 4.0]);
        assert!((d - 5.0).abs() < 1e-6);
    }
}
