//! Ordered chunk storage and its JSON artifact.
//!
//! Row numbers in the corpus are the same row numbers the vector index
//! reports; keeping both sides aligned is the job of
//! [`crate::store::IndexedCorpus`].

use ragline_kernel::error::{RagError, RagResult};
use ragline_kernel::types::Chunk;
use std::path::Path;
use tracing::info;

/// The ordered list of corpus chunks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    chunks: Vec<Chunk>,
}

impl Corpus {
    /// Create a corpus from an ordered chunk sequence.
    pub fn new(chunks: Vec<Chunk>) -> Self {
        Self { chunks }
    }

    /// Number of chunks.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Whether the corpus holds no chunks.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// The chunk at the given row, if any.
    pub fn get(&self, row: usize) -> Option<&Chunk> {
        self.chunks.get(row)
    }

    /// All chunks in row order.
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// The chunk texts in row order (the embedding input).
    pub fn texts(&self) -> Vec<String> {
        self.chunks.iter().map(|c| c.content.clone()).collect()
    }

    /// Write the corpus as a JSON array, creating parent directories as
    /// needed.
    pub fn save(&self, path: &Path) -> RagResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.chunks)
            .map_err(|e| RagError::Serialization(e.to_string()))?;
        std::fs::write(path, json)?;
        info!(
            chunks = self.chunks.len(),
            path = %path.display(),
            "saved corpus artifact"
        );
        Ok(())
    }

    /// Load a corpus artifact.
    ///
    /// Anything that is not a JSON array of chunk records is a data
    /// error; a missing file is a configuration error.
    pub fn load(path: &Path) -> RagResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            RagError::Config(format!(
                "corpus artifact not readable: {} ({e})",
                path.display()
            ))
        })?;
        let chunks: Vec<Chunk> = serde_json::from_str(&raw).map_err(|e| {
            RagError::Data(format!(
                "malformed corpus artifact '{}': {e}",
                path.display()
            ))
        })?;
        Ok(Self { chunks })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ragline_kernel::types::SourceMeta;

    fn chunk(text: &str, source: &str) -> Chunk {
        Chunk::new(text, SourceMeta::new(source))
    }

    #[test]
    fn get_is_positional() {
        let corpus = Corpus::new(vec![chunk("a", "x.txt"), chunk("b", "y.txt")]);
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.get(1).unwrap().content, "b");
        assert!(corpus.get(2).is_none());
    }

    #[test]
    fn save_load_round_trip_preserves_order() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("chunks.json");

        let corpus = Corpus::new(vec![
            chunk("first", "a.txt"),
            chunk("second", "a.txt"),
            chunk("third", "b.txt"),
        ]);
        corpus.save(&path).unwrap();

        let reloaded = Corpus::load(&path).unwrap();
        assert_eq!(reloaded, corpus);
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("artifacts").join("chunks.json");
        Corpus::new(vec![chunk("a", "x.txt")]).save(&path).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn load_missing_artifact_is_config_error() {
        let err = Corpus::load(Path::new("/nonexistent/chunks.json")).unwrap_err();
        assert!(matches!(err, RagError::Config(_)));
    }

    #[test]
    fn load_non_array_is_data_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("chunks.json");
        std::fs::write(&path, r#"{"content": "not a list"}"#).unwrap();
        assert!(matches!(Corpus::load(&path), Err(RagError::Data(_))));
    }
}
