//! The corpus and its vector index as one logical table.
//!
//! Two artifacts on disk, one structure in memory: [`IndexedCorpus`]
//! owns both sides and keeps row `i` of the corpus aligned with row `i`
//! of the index. There is no operation that mutates one side without
//! the other.

use crate::corpus::Corpus;
use crate::index::FlatIndex;
use ragline_kernel::error::{RagError, RagResult};
use ragline_kernel::provider::EmbeddingProvider;
use ragline_kernel::types::{Chunk, ScoredChunk};
use std::path::Path;
use tracing::{debug, info};

/// An immutable, row-aligned pair of chunk corpus and vector index.
#[derive(Debug)]
pub struct IndexedCorpus {
    corpus: Corpus,
    index: FlatIndex,
}

impl IndexedCorpus {
    /// Embed every chunk and build the index, rows aligned with the
    /// order of `chunks`.
    ///
    /// Batches are dispatched concurrently but joined in submission
    /// order, so row alignment never depends on completion timing.
    /// Building from zero chunks yields a valid empty store.
    pub async fn build(
        chunks: Vec<Chunk>,
        provider: &dyn EmbeddingProvider,
        batch_size: usize,
    ) -> RagResult<Self> {
        if batch_size == 0 {
            return Err(RagError::InvalidInput(
                "batch_size must be greater than 0".to_string(),
            ));
        }
        if chunks.is_empty() {
            return Ok(Self {
                corpus: Corpus::new(chunks),
                index: FlatIndex::new(0),
            });
        }

        let texts: Vec<String> = chunks.iter().map(|c| c.content.clone()).collect();
        let batches: Vec<_> = texts
            .chunks(batch_size)
            .map(|batch| provider.embed_batch(batch))
            .collect();
        debug!(
            chunks = chunks.len(),
            batches = batches.len(),
            batch_size,
            model = provider.model(),
            "dispatching embedding batches"
        );

        let results = futures::future::try_join_all(batches).await?;
        let vectors: Vec<Vec<f32>> = results.into_iter().flatten().collect();
        if vectors.len() != chunks.len() {
            return Err(RagError::Invariant(format!(
                "embedding rows ({}) diverged from corpus rows ({})",
                vectors.len(),
                chunks.len()
            )));
        }

        let dim = vectors[0].len();
        let index = FlatIndex::build(dim, vectors)?;
        info!(rows = chunks.len(), dim, "built indexed corpus");

        Ok(Self {
            corpus: Corpus::new(chunks),
            index,
        })
    }

    /// Construct from parts already built elsewhere, checking alignment.
    pub fn from_parts(corpus: Corpus, index: FlatIndex) -> RagResult<Self> {
        if corpus.len() != index.len() {
            return Err(RagError::Invariant(format!(
                "corpus has {} chunks but index has {} vectors; the artifacts must be rebuilt together",
                corpus.len(),
                index.len()
            )));
        }
        Ok(Self { corpus, index })
    }

    /// Write both artifacts. They are only valid as a pair.
    pub fn save(&self, corpus_path: &Path, index_path: &Path) -> RagResult<()> {
        self.corpus.save(corpus_path)?;
        self.index.save(index_path)?;
        Ok(())
    }

    /// Load both artifacts, failing fast if either is missing or their
    /// row counts diverged.
    pub fn load(corpus_path: &Path, index_path: &Path) -> RagResult<Self> {
        let corpus = Corpus::load(corpus_path)?;
        let index = FlatIndex::load(index_path)?;
        let store = Self::from_parts(corpus, index)?;
        info!(
            rows = store.len(),
            dim = store.dim(),
            "loaded indexed corpus"
        );
        Ok(store)
    }

    /// Number of rows (equal on both sides by construction).
    pub fn len(&self) -> usize {
        self.corpus.len()
    }

    /// Whether the store holds no rows.
    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }

    /// Vector dimensionality of the index side.
    pub fn dim(&self) -> usize {
        self.index.dim()
    }

    /// Read-only view of the chunk side.
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Read-only view of the index side.
    pub fn index(&self) -> &FlatIndex {
        &self.index
    }

    /// Nearest rows for a query vector, resolved to chunk records.
    pub fn search(&self, query: &[f32], k: usize) -> RagResult<Vec<ScoredChunk>> {
        self.index
            .search(query, k)?
            .into_iter()
            .map(|(distance, row)| {
                self.corpus
                    .get(row)
                    .map(|chunk| ScoredChunk::new(chunk.clone(), distance, row))
                    .ok_or_else(|| {
                        RagError::Invariant(format!("index row {row} has no corpus record"))
                    })
            })
            .collect()
    }
}
