//! Ragline kernel: contracts and shared vocabulary for the retrieval
//! pipeline.
//!
//! The kernel defines what the pipeline is made of: the corpus vocabulary
//! (`Document`, `Chunk`, `ScoredChunk`), the error taxonomy, and the
//! capability traits for the external embedding and chat services.
//! Concrete stores, providers, and the engine live in `ragline-foundation`.

// error module
pub mod error;

// types module
pub mod types;

// provider module
pub mod provider;

// pipeline module
pub mod pipeline;

pub use error::{ProviderError, ProviderResult, RagError, RagResult};
pub use pipeline::{AnswerGenerator, Retriever};
pub use provider::{ChatProvider, EmbeddingProvider};
pub use types::{Chunk, Document, ScoredChunk, SourceMeta};
