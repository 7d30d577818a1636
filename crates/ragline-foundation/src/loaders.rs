//! Document ingestion from plain-text sources.
//!
//! Format-specific parsing (PDF and friends) belongs to an external
//! collaborator; this module only covers sources that are already raw
//! text, turning each into a `Document` tagged with its source id.

use ragline_kernel::error::{RagError, RagResult};
use ragline_kernel::types::Document;
use std::path::Path;
use tracing::info;

/// Trait for turning a source location into a raw-text document.
pub trait DocumentLoader: Send + Sync {
    /// Load one document from the given path.
    fn load(&self, path: &Path) -> RagResult<Document>;
}

/// Loads a plain-text file into a single document, keyed by file name.
#[derive(Debug, Clone, Default)]
pub struct TextLoader;

impl TextLoader {
    /// Create a new text loader.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl DocumentLoader for TextLoader {
    fn load(&self, path: &Path) -> RagResult<Document> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| RagError::Io(format!("failed to read '{}': {e}", path.display())))?;

        if content.trim().is_empty() {
            return Err(RagError::Data(format!(
                "document is empty: {}",
                path.display()
            )));
        }

        let source_id = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Document::new(content, source_id))
    }
}

/// Load every file with the given extension directly under `dir`,
/// sorted by path so corpus order is stable across rebuilds.
pub fn load_documents_from_dir(
    dir: &Path,
    extension: &str,
    loader: &dyn DocumentLoader,
) -> RagResult<Vec<Document>> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| RagError::Io(format!("failed to read '{}': {e}", dir.display())))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| RagError::Io(format!("failed to read '{}': {e}", dir.display())))?
            .path();
        if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some(extension) {
            paths.push(path);
        }
    }
    paths.sort();

    let documents = paths
        .iter()
        .map(|path| loader.load(path))
        .collect::<RagResult<Vec<_>>>()?;
    info!(
        dir = %dir.display(),
        documents = documents.len(),
        "loaded source documents"
    );
    Ok(documents)
}
