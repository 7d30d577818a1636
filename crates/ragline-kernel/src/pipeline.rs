//! Pipeline contracts: retrieval and grounded generation.
//!
//! The engine in `ragline-foundation` composes one implementation of
//! each into a single `answer(question)` operation.

use crate::error::RagResult;
use crate::types::ScoredChunk;
use async_trait::async_trait;

/// Given a query, return the corpus chunks most similar to it.
#[async_trait]
pub trait Retriever: Send + Sync {
    /// Top-`top_k` chunks by ascending distance, ties kept in index
    /// order.
    ///
    /// `top_k == 0` is invalid input. A `top_k` larger than the corpus
    /// returns every chunk exactly once; an empty corpus returns an
    /// empty list, not an error.
    async fn retrieve(&self, query: &str, top_k: usize) -> RagResult<Vec<ScoredChunk>>;
}

/// Compose retrieved context chunks into a grounded answer.
#[async_trait]
pub trait AnswerGenerator: Send + Sync {
    /// Generate an answer to `question` constrained to the information
    /// in `context_chunks`.
    async fn generate(&self, question: &str, context_chunks: &[String]) -> RagResult<String>;
}
