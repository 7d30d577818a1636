//! Mock embedding and chat providers for `ragline-foundation`
//! integration tests.
//!
//! [`MockEmbeddings`] and [`MockChat`] are the canonical test doubles
//! for the pipeline end-to-end tests: deterministic (vectors and
//! responses registered at construction time, no random state),
//! observable (every call is recorded), and explicit about errors
//! (`fail_with` forces a typed `ProviderError`).

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use ragline_kernel::error::{ProviderError, ProviderResult};
use ragline_kernel::provider::{ChatProvider, EmbeddingProvider};

// ─────────────────────────────────────────────────────────────────────────────
// MockEmbeddings
// ─────────────────────────────────────────────────────────────────────────────

struct EmbeddingState {
    /// Every batch passed to `embed_batch`, in call order.
    batch_calls: Vec<Vec<String>>,
}

/// A deterministic, in-process embedding provider.
///
/// Texts registered through the builder map to fixed vectors;
/// unregistered texts fall back to a vector derived from the text's
/// word count, so distances stay deterministic either way.
pub struct MockEmbeddings {
    vectors: HashMap<String, Vec<f32>>,
    dim: usize,
    failure: Option<ProviderError>,
    state: Arc<Mutex<EmbeddingState>>,
}

impl MockEmbeddings {
    pub fn builder() -> MockEmbeddingsBuilder {
        MockEmbeddingsBuilder {
            vectors: HashMap::new(),
            dim: 2,
            failure: None,
        }
    }

    /// Number of `embed_batch` invocations so far.
    pub fn batch_call_count(&self) -> usize {
        self.state.lock().unwrap().batch_calls.len()
    }

    /// The most recent batch of texts, if any call happened.
    pub fn last_batch(&self) -> Option<Vec<String>> {
        self.state.lock().unwrap().batch_calls.last().cloned()
    }

    fn vector_for(&self, text: &str) -> Vec<f32> {
        if let Some(vector) = self.vectors.get(text) {
            return vector.clone();
        }
        let mut fallback = vec![0.0; self.dim];
        if let Some(first) = fallback.first_mut() {
            *first = text.split_whitespace().count() as f32;
        }
        fallback
    }
}

pub struct MockEmbeddingsBuilder {
    vectors: HashMap<String, Vec<f32>>,
    dim: usize,
    failure: Option<ProviderError>,
}

impl MockEmbeddingsBuilder {
    /// Dimensionality of fallback vectors for unregistered texts.
    pub fn dim(mut self, dim: usize) -> Self {
        self.dim = dim;
        self
    }

    /// Register a fixed vector for a text.
    pub fn vector(mut self, text: impl Into<String>, vector: Vec<f32>) -> Self {
        self.vectors.insert(text.into(), vector);
        self
    }

    /// Make every call fail with the given error.
    pub fn fail_with(mut self, error: ProviderError) -> Self {
        self.failure = Some(error);
        self
    }

    pub fn build(self) -> MockEmbeddings {
        MockEmbeddings {
            vectors: self.vectors,
            dim: self.dim,
            failure: self.failure,
            state: Arc::new(Mutex::new(EmbeddingState {
                batch_calls: Vec::new(),
            })),
        }
    }
}

#[async_trait]
impl EmbeddingProvider for MockEmbeddings {
    fn model(&self) -> &str {
        "mock-embedding"
    }

    async fn embed_batch(&self, texts: &[String]) -> ProviderResult<Vec<Vec<f32>>> {
        self.state.lock().unwrap().batch_calls.push(texts.to_vec());
        if let Some(ref error) = self.failure {
            return Err(error.clone());
        }
        Ok(texts.iter().map(|t| self.vector_for(t)).collect())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// MockChat
// ─────────────────────────────────────────────────────────────────────────────

struct ChatState {
    /// Every `(system, user)` instruction pair, in call order.
    calls: Vec<(String, String)>,
}

/// A deterministic, in-process chat provider returning a canned answer.
pub struct MockChat {
    response: String,
    failure: Option<ProviderError>,
    state: Arc<Mutex<ChatState>>,
}

impl MockChat {
    /// A provider that always answers with `response`.
    pub fn respond_with(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            failure: None,
            state: Arc::new(Mutex::new(ChatState { calls: Vec::new() })),
        }
    }

    /// A provider whose every call fails with the given error.
    pub fn fail_with(error: ProviderError) -> Self {
        Self {
            response: String::new(),
            failure: Some(error),
            state: Arc::new(Mutex::new(ChatState { calls: Vec::new() })),
        }
    }

    /// Number of `complete` invocations so far.
    pub fn call_count(&self) -> usize {
        self.state.lock().unwrap().calls.len()
    }

    /// The most recent `(system, user)` pair, if any call happened.
    pub fn last_call(&self) -> Option<(String, String)> {
        self.state.lock().unwrap().calls.last().cloned()
    }
}

#[async_trait]
impl ChatProvider for MockChat {
    fn model(&self) -> &str {
        "mock-chat"
    }

    async fn complete(&self, system: &str, user: &str) -> ProviderResult<String> {
        self.state
            .lock()
            .unwrap()
            .calls
            .push((system.to_string(), user.to_string()));
        if let Some(ref error) = self.failure {
            return Err(error.clone());
        }
        Ok(self.response.clone())
    }
}
