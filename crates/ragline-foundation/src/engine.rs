//! The retrieve-then-generate orchestrator.

use crate::config::RagConfig;
use crate::generator::GroundedGenerator;
use crate::openai::{OpenAIChat, OpenAIEmbeddings};
use crate::retriever::SemanticRetriever;
use crate::store::IndexedCorpus;
use ragline_kernel::error::RagResult;
use ragline_kernel::pipeline::{AnswerGenerator, Retriever};
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Default number of context chunks per answer.
pub const DEFAULT_TOP_K: usize = 3;

/// Composes a retriever and a generator into a single
/// `answer(question)` operation.
///
/// Holds no state beyond its two components; every call is independent
/// and there is no conversation memory.
pub struct RagEngine {
    retriever: Box<dyn Retriever>,
    generator: Box<dyn AnswerGenerator>,
    default_top_k: usize,
}

impl fmt::Debug for RagEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RagEngine")
            .field("default_top_k", &self.default_top_k)
            .finish_non_exhaustive()
    }
}

impl RagEngine {
    /// Build an engine from existing components.
    pub fn new(retriever: Box<dyn Retriever>, generator: Box<dyn AnswerGenerator>) -> Self {
        Self {
            retriever,
            generator,
            default_top_k: DEFAULT_TOP_K,
        }
    }

    /// Override the default top-k.
    pub fn with_default_top_k(mut self, top_k: usize) -> Self {
        self.default_top_k = top_k;
        self
    }

    /// Open an engine over previously built artifacts, with
    /// OpenAI-backed providers.
    ///
    /// Construction fails if either artifact is missing, malformed, or
    /// misaligned; the first query never discovers this later.
    pub fn open(config: &RagConfig, corpus_path: &Path, index_path: &Path) -> RagResult<Self> {
        let store = IndexedCorpus::load(corpus_path, index_path)?;
        info!(
            rows = store.len(),
            dim = store.dim(),
            embedding_model = %config.embedding_model,
            chat_model = %config.chat_model,
            "query pipeline ready"
        );

        let embeddings = Arc::new(OpenAIEmbeddings::new(config));
        let chat = Arc::new(OpenAIChat::new(config));

        Ok(Self::new(
            Box::new(SemanticRetriever::new(embeddings, store)),
            Box::new(GroundedGenerator::new(chat)),
        ))
    }

    /// Answer with the default top-k.
    pub async fn answer(&self, question: &str) -> RagResult<String> {
        self.answer_with_top_k(question, self.default_top_k).await
    }

    /// Retrieve the `top_k` most relevant chunks and generate a
    /// grounded answer from them.
    pub async fn answer_with_top_k(&self, question: &str, top_k: usize) -> RagResult<String> {
        let hits = self.retriever.retrieve(question, top_k).await?;
        let context: Vec<String> = hits.into_iter().map(|hit| hit.chunk.content).collect();
        self.generator.generate(question, &context).await
    }
}
