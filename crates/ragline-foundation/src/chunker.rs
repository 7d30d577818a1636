//! Word-window chunking for corpus build.
//!
//! Splits raw document text into fixed-size overlapping windows of
//! whitespace-delimited words, the unit the corpus store and the
//! vector index agree on.

use ragline_kernel::error::{RagError, RagResult};
use ragline_kernel::types::{Chunk, Document};

/// Chunking parameters, counted in words.
#[derive(Debug, Clone, Copy)]
pub struct ChunkConfig {
    /// Maximum number of words per chunk
    pub chunk_size: usize,
    /// Number of words shared between consecutive chunks
    pub overlap: usize,
}

impl ChunkConfig {
    /// Create a new chunk config with the given size and overlap.
    pub fn new(chunk_size: usize, overlap: usize) -> Self {
        Self {
            chunk_size,
            overlap,
        }
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            chunk_size: 200,
            overlap: 50,
        }
    }
}

/// Splits text into overlapping word windows.
///
/// Window `n` starts at word `n * (chunk_size - overlap)`; windows are
/// produced until the start reaches the end of the text, so the last
/// chunk may be shorter than `chunk_size`. Splitting is a pure function
/// of the input text and the configuration.
pub struct WordChunker {
    config: ChunkConfig,
}

impl WordChunker {
    /// Create a chunker, rejecting configurations whose window cannot
    /// advance.
    pub fn new(config: ChunkConfig) -> RagResult<Self> {
        if config.chunk_size == 0 {
            return Err(RagError::Invariant(
                "chunk_size must be greater than 0".to_string(),
            ));
        }
        if config.overlap >= config.chunk_size {
            return Err(RagError::Invariant(format!(
                "overlap ({}) must be smaller than chunk_size ({}); the window would never advance",
                config.overlap, config.chunk_size
            )));
        }
        Ok(Self { config })
    }

    /// Create a chunker with the default window (200 words, 50 overlap).
    pub fn with_defaults() -> Self {
        Self {
            config: ChunkConfig::default(),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> ChunkConfig {
        self.config
    }

    /// Split `text` into overlapping word windows.
    ///
    /// Empty input (or whitespace only) yields zero chunks.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.is_empty() {
            return Vec::new();
        }

        let step = self.config.chunk_size - self.config.overlap;
        let mut chunks = Vec::new();
        let mut start = 0;

        while start < words.len() {
            let end = (start + self.config.chunk_size).min(words.len());
            chunks.push(words[start..end].join(" "));
            start += step;
        }

        chunks
    }

    /// Chunk a document, tagging every window with the document's
    /// source metadata.
    pub fn chunk_document(&self, document: &Document) -> Vec<Chunk> {
        self.chunk(&document.content)
            .into_iter()
            .map(|content| Chunk::new(content, document.metadata.clone()))
            .collect()
    }

    /// Chunk a batch of documents into one ordered corpus sequence.
    pub fn chunk_documents(&self, documents: &[Document]) -> Vec<Chunk> {
        documents
            .iter()
            .flat_map(|document| self.chunk_document(document))
            .collect()
    }
}

impl Default for WordChunker {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        (0..n).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn empty_text_yields_no_chunks() {
        let chunker = WordChunker::with_defaults();
        assert!(chunker.chunk("").is_empty());
        assert!(chunker.chunk("   \n\t ").is_empty());
    }

    #[test]
    fn short_text_is_a_single_chunk() {
        let chunker = WordChunker::new(ChunkConfig::new(10, 3)).unwrap();
        let chunks = chunker.chunk("just a few words");
        assert_eq!(chunks, vec!["just a few words".to_string()]);
    }

    #[test]
    fn rejects_overlap_not_smaller_than_size() {
        assert!(WordChunker::new(ChunkConfig::new(10, 10)).is_err());
        assert!(WordChunker::new(ChunkConfig::new(10, 15)).is_err());
        assert!(WordChunker::new(ChunkConfig::new(0, 0)).is_err());
        assert!(WordChunker::new(ChunkConfig::new(10, 9)).is_ok());
    }

    #[test]
    fn all_chunks_but_the_last_are_full() {
        let chunker = WordChunker::new(ChunkConfig::new(8, 2)).unwrap();
        let chunks = chunker.chunk(&words(50));
        assert!(chunks.len() > 1);
        for chunk in &chunks[..chunks.len() - 1] {
            assert_eq!(chunk.split_whitespace().count(), 8);
        }
        assert!(chunks.last().unwrap().split_whitespace().count() <= 8);
    }

    #[test]
    fn adjacent_full_chunks_share_exactly_overlap_words() {
        let chunker = WordChunker::new(ChunkConfig::new(8, 3)).unwrap();
        let chunks = chunker.chunk(&words(40));

        for pair in chunks.windows(2) {
            let prev: Vec<&str> = pair[0].split_whitespace().collect();
            if prev.len() < 8 {
                continue; // a capped window may share fewer words
            }
            let next: Vec<&str> = pair[1].split_whitespace().collect();
            let shared = 3.min(next.len());
            assert_eq!(prev[prev.len() - shared..], next[..shared]);
        }
    }

    #[test]
    fn chunks_with_overlap_removed_reconstruct_the_text() {
        let chunker = WordChunker::new(ChunkConfig::new(7, 2)).unwrap();
        for total in [1, 6, 7, 8, 13, 20, 33, 100] {
            let text = words(total);
            let chunks = chunker.chunk(&text);

            let mut rebuilt: Vec<&str> = Vec::new();
            for (i, chunk) in chunks.iter().enumerate() {
                let skip = if i == 0 { 0 } else { 2 };
                rebuilt.extend(chunk.split_whitespace().skip(skip));
            }
            let original: Vec<&str> = text.split_whitespace().collect();
            assert_eq!(rebuilt, original, "lost words for total={total}");
        }
    }

    #[test]
    fn window_starts_follow_the_step() {
        // chunk_size 200, overlap 50 over 650 words: starts at
        // 0, 150, 300, 450, 600 -> five chunks
        let chunker = WordChunker::with_defaults();
        let chunks = chunker.chunk(&words(650));
        assert_eq!(chunks.len(), 5);
        assert!(chunks[1].starts_with("w150 "));
        assert!(chunks[4].starts_with("w600 "));
        assert_eq!(chunks[4].split_whitespace().count(), 50);
    }

    #[test]
    fn document_chunks_inherit_source_metadata() {
        let chunker = WordChunker::new(ChunkConfig::new(5, 1)).unwrap();
        let doc = Document::new(words(12), "report.txt");
        let chunks = chunker.chunk_document(&doc);
        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert_eq!(chunk.metadata.source_id, "report.txt");
        }
    }

    #[test]
    fn chunking_is_deterministic() {
        let chunker = WordChunker::with_defaults();
        let text = words(500);
        assert_eq!(chunker.chunk(&text), chunker.chunk(&text));
    }
}
