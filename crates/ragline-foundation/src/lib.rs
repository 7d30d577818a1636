//! Ragline foundation: concrete implementations of the retrieval
//! pipeline.
//!
//! Build phase: documents are split into overlapping word windows
//! ([`WordChunker`]), embedded in order-aligned batches, and stored as
//! one logical table ([`IndexedCorpus`]) persisted as a pair of
//! artifacts. Query phase: [`RagEngine`] embeds the question, searches
//! the flat index ([`FlatIndex`]), and generates a grounded answer from
//! the retrieved chunks ([`GroundedGenerator`]).

pub mod chunker;
pub mod config;
pub mod corpus;
pub mod engine;
pub mod generator;
pub mod index;
pub mod loaders;
pub mod openai;
pub mod retriever;
pub mod store;

pub use chunker::{ChunkConfig, WordChunker};
pub use config::RagConfig;
pub use corpus::Corpus;
pub use engine::{DEFAULT_TOP_K, RagEngine};
pub use generator::GroundedGenerator;
pub use index::FlatIndex;
pub use loaders::{DocumentLoader, TextLoader, load_documents_from_dir};
pub use openai::{OpenAIChat, OpenAIEmbeddings};
pub use retriever::SemanticRetriever;
pub use store::IndexedCorpus;

// Re-export kernel types for convenience
pub use ragline_kernel::{
    AnswerGenerator, ChatProvider, Chunk, Document, EmbeddingProvider, ProviderError,
    ProviderResult, RagError, RagResult, Retriever, ScoredChunk, SourceMeta,
};
