//! Corpus vocabulary shared across the pipeline.
//!
//! Documents come in from an external collaborator as raw text tagged
//! with a source id; the chunker turns them into `Chunk` records, and
//! search returns `ScoredChunk` rows.

use serde::{Deserialize, Serialize};

/// Source attribution carried by every document and every chunk cut
/// from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceMeta {
    /// Identifier of the source this text came from (e.g. a file name)
    pub source_id: String,
}

impl SourceMeta {
    /// Create source metadata for the given id.
    pub fn new(source_id: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
        }
    }
}

/// A raw source document, produced once per ingested source and
/// immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// The full extracted text of the source
    pub content: String,
    /// Source attribution
    pub metadata: SourceMeta,
}

impl Document {
    /// Create a document from extracted text and its source id.
    pub fn new(content: impl Into<String>, source_id: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            metadata: SourceMeta::new(source_id),
        }
    }
}

/// A bounded word-window slice of a document; the unit of retrieval.
///
/// Chunks inherit the metadata of the document they were cut from.
/// Their position in the corpus is the same row number the vector
/// index reports, so `Chunk` itself carries no id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// The text payload of this chunk
    pub content: String,
    /// Source attribution inherited from the parent document
    pub metadata: SourceMeta,
}

impl Chunk {
    /// Create a chunk with the given content and source metadata.
    pub fn new(content: impl Into<String>, metadata: SourceMeta) -> Self {
        Self {
            content: content.into(),
            metadata,
        }
    }
}

/// A chunk returned from nearest-neighbor search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredChunk {
    /// The matched chunk record
    pub chunk: Chunk,
    /// Squared L2 distance to the query vector (lower is closer)
    pub distance: f32,
    /// Row of the chunk in the corpus/index table
    pub row: usize,
}

impl ScoredChunk {
    /// Create a scored chunk.
    pub fn new(chunk: Chunk, distance: f32, row: usize) -> Self {
        Self {
            chunk,
            distance,
            row,
        }
    }

    /// The chunk's text payload.
    pub fn content(&self) -> &str {
        &self.chunk.content
    }
}
