//! Query-time retrieval over an indexed corpus.

use crate::store::IndexedCorpus;
use async_trait::async_trait;
use ragline_kernel::error::{RagError, RagResult};
use ragline_kernel::pipeline::Retriever;
use ragline_kernel::provider::EmbeddingProvider;
use ragline_kernel::types::ScoredChunk;
use std::sync::Arc;
use tracing::debug;

/// Embeds the query and ranks corpus chunks by vector distance.
///
/// The store is read-only here; retrieval is a deterministic function
/// of the query, the corpus, and the embedding model.
pub struct SemanticRetriever {
    provider: Arc<dyn EmbeddingProvider>,
    store: IndexedCorpus,
}

impl SemanticRetriever {
    /// Create a retriever over an already built or loaded store.
    pub fn new(provider: Arc<dyn EmbeddingProvider>, store: IndexedCorpus) -> Self {
        Self { provider, store }
    }

    /// The underlying store.
    pub fn store(&self) -> &IndexedCorpus {
        &self.store
    }
}

#[async_trait]
impl Retriever for SemanticRetriever {
    async fn retrieve(&self, query: &str, top_k: usize) -> RagResult<Vec<ScoredChunk>> {
        if top_k == 0 {
            return Err(RagError::InvalidInput(
                "top_k must be greater than 0".to_string(),
            ));
        }
        if self.store.is_empty() {
            return Ok(Vec::new());
        }

        let query_vec = self.provider.embed(query).await?;
        let hits = self.store.search(&query_vec, top_k)?;
        debug!(top_k, returned = hits.len(), "retrieved context chunks");
        Ok(hits)
    }
}
