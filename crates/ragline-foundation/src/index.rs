//! Flat nearest-neighbor index.
//!
//! A brute-force scan over every stored vector: no approximation, so
//! recall is exact and results are a deterministic function of the
//! stored vectors and the query.

use ragline_kernel::error::{RagError, RagResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// A flat vector index using squared-L2 distance.
///
/// Row `i` of the index holds the vector for row `i` of the corpus; the
/// index never reorders or drops rows. Distances are squared Euclidean
/// (no square root); ascending means closer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlatIndex {
    dim: usize,
    vectors: Vec<Vec<f32>>,
}

impl FlatIndex {
    /// Create an empty index for vectors of the given dimensionality.
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            vectors: Vec::new(),
        }
    }

    /// Build an index directly from a batch of vectors.
    pub fn build(dim: usize, vectors: Vec<Vec<f32>>) -> RagResult<Self> {
        let mut index = Self::new(dim);
        index.add(vectors)?;
        Ok(index)
    }

    /// Vector dimensionality this index was built for.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of rows in the index.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Whether the index holds no rows.
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Append vectors in order, rejecting rows of the wrong
    /// dimensionality.
    pub fn add(&mut self, vectors: Vec<Vec<f32>>) -> RagResult<()> {
        for (offset, vector) in vectors.iter().enumerate() {
            if vector.len() != self.dim {
                return Err(RagError::Data(format!(
                    "vector at offset {offset} has dimension {}, index expects {}",
                    vector.len(),
                    self.dim
                )));
            }
        }
        self.vectors.extend(vectors);
        Ok(())
    }

    /// Return the `min(k, len)` nearest rows as `(distance, row)` pairs,
    /// ascending by squared-L2 distance.
    ///
    /// Equal distances keep row order. Rows are only ever real corpus
    /// rows; there is no padding. An empty index returns an empty
    /// result for any query.
    pub fn search(&self, query: &[f32], k: usize) -> RagResult<Vec<(f32, usize)>> {
        if self.vectors.is_empty() {
            return Ok(Vec::new());
        }
        if query.len() != self.dim {
            return Err(RagError::Data(format!(
                "query has dimension {}, index expects {}",
                query.len(),
                self.dim
            )));
        }

        let mut scored: Vec<(f32, usize)> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(row, vector)| (squared_l2(query, vector), row))
            .collect();

        scored.sort_by(|a, b| {
            a.0.partial_cmp(&b.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.1.cmp(&b.1))
        });
        scored.truncate(k.min(self.vectors.len()));

        Ok(scored)
    }

    /// Persist the index as a single binary artifact, creating parent
    /// directories as needed.
    pub fn save(&self, path: &Path) -> RagResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let bytes =
            bincode::serialize(self).map_err(|e| RagError::Serialization(e.to_string()))?;
        std::fs::write(path, bytes)?;
        info!(
            rows = self.vectors.len(),
            dim = self.dim,
            path = %path.display(),
            "saved vector index artifact"
        );
        Ok(())
    }

    /// Load an index previously written by [`FlatIndex::save`].
    ///
    /// The reloaded index answers every search identically to the one
    /// that was saved.
    pub fn load(path: &Path) -> RagResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| {
            RagError::Config(format!(
                "vector index artifact not readable: {} ({e})",
                path.display()
            ))
        })?;
        let index: Self = bincode::deserialize(&bytes).map_err(|e| {
            RagError::Data(format!(
                "malformed vector index artifact '{}': {e}",
                path.display()
            ))
        })?;
        for (row, vector) in index.vectors.iter().enumerate() {
            if vector.len() != index.dim {
                return Err(RagError::Data(format!(
                    "vector index artifact '{}' row {row} has dimension {}, header says {}",
                    path.display(),
                    vector.len(),
                    index.dim
                )));
            }
        }
        Ok(index)
    }
}

/// Squared Euclidean distance (no square root).
fn squared_l2(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum()
}
