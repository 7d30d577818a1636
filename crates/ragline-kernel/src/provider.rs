//! Capability traits for the external embedding and chat services.
//!
//! All network access in the pipeline goes through these two traits, so
//! a test double can substitute deterministic fixed vectors or canned
//! answers without touching any network code.

use crate::error::{ProviderError, ProviderResult};
use async_trait::async_trait;

/// Boundary to an external embedding service.
///
/// The model id is fixed configuration of the implementation, not a
/// per-call parameter; all vectors from one provider instance share one
/// dimensionality.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Identifier of the configured embedding model.
    fn model(&self) -> &str;

    /// Embed a batch of texts: one vector per input, order preserved.
    ///
    /// Implementations must surface service failures as errors rather
    /// than substituting zero vectors.
    async fn embed_batch(&self, texts: &[String]) -> ProviderResult<Vec<Vec<f32>>>;

    /// Embed a single text (the query-time path).
    async fn embed(&self, text: &str) -> ProviderResult<Vec<f32>> {
        let input = [text.to_string()];
        let mut vectors = self.embed_batch(&input).await?;
        match vectors.len() {
            1 => Ok(vectors.swap_remove(0)),
            n => Err(ProviderError::MalformedResponse(format!(
                "expected 1 embedding, got {n}"
            ))),
        }
    }
}

/// Boundary to an external chat-completion service.
///
/// Decoding parameters (temperature, output length bound) are fixed
/// configuration of the implementation; `complete` only carries the
/// two instructions.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Identifier of the configured chat model.
    fn model(&self) -> &str;

    /// Run one completion with a system instruction and a user
    /// instruction, returning the generated text.
    async fn complete(&self, system: &str, user: &str) -> ProviderResult<String>;
}
