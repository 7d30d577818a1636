//! Pipeline configuration.
//!
//! An explicit struct handed to constructors. Nothing reads the
//! environment after startup, and there is no ambient client state.
//! Model ids and decoding parameters are fixed here, not per call.

use ragline_kernel::error::{RagError, RagResult};

/// Default embedding model.
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";

/// Default chat model.
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";

/// Configuration for the embedding and chat providers.
#[derive(Debug, Clone)]
pub struct RagConfig {
    /// Provider credential
    pub api_key: String,
    /// Base URL override for OpenAI-compatible services
    pub base_url: Option<String>,
    /// Embedding model id
    pub embedding_model: String,
    /// Chat model id
    pub chat_model: String,
    /// Sampling temperature for answer generation
    pub temperature: f32,
    /// Maximum answer length in tokens
    pub max_tokens: u32,
    /// Request timeout (seconds)
    pub timeout_secs: u64,
    /// Chunk texts per embedding request during corpus build
    pub embed_batch_size: usize,
}

impl RagConfig {
    /// Create a config with the given credential and default models and
    /// decoding parameters.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            temperature: 0.1,
            max_tokens: 200,
            timeout_secs: 60,
            embed_batch_size: 64,
        }
    }

    /// Read configuration from the environment.
    ///
    /// A missing or empty `OPENAI_API_KEY` is a startup failure, not
    /// something to discover on the first query.
    pub fn from_env() -> RagResult<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| RagError::Config("OPENAI_API_KEY is not set".to_string()))?;
        if api_key.trim().is_empty() {
            return Err(RagError::Config("OPENAI_API_KEY is empty".to_string()));
        }

        let mut config = Self::new(api_key);
        config.base_url = std::env::var("OPENAI_BASE_URL").ok();
        if let Ok(model) = std::env::var("RAGLINE_EMBEDDING_MODEL") {
            config.embedding_model = model;
        }
        if let Ok(model) = std::env::var("RAGLINE_CHAT_MODEL") {
            config.chat_model = model;
        }
        Ok(config)
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the embedding model.
    pub fn with_embedding_model(mut self, model: impl Into<String>) -> Self {
        self.embedding_model = model.into();
        self
    }

    /// Set the chat model.
    pub fn with_chat_model(mut self, model: impl Into<String>) -> Self {
        self.chat_model = model.into();
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the maximum answer length.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the embedding batch size used during corpus build.
    pub fn with_embed_batch_size(mut self, batch_size: usize) -> Self {
        self.embed_batch_size = batch_size;
        self
    }
}
