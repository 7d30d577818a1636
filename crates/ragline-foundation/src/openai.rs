//! OpenAI-backed providers for the embedding and chat boundaries.
//!
//! Works against api.openai.com and OpenAI-compatible services (Ollama,
//! vLLM, LocalAI, ...) through the configurable base URL. Failures are
//! converted to the typed [`ProviderError`] taxonomy; nothing here
//! retries.

use crate::config::RagConfig;
use async_openai::{
    Client,
    config::OpenAIConfig as AsyncOpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
        CreateEmbeddingRequestArgs,
    },
};
use async_trait::async_trait;
use ragline_kernel::error::{ProviderError, ProviderResult};
use ragline_kernel::provider::{ChatProvider, EmbeddingProvider};

fn client_for(config: &RagConfig) -> Client<AsyncOpenAIConfig> {
    let mut api_config = AsyncOpenAIConfig::new().with_api_key(&config.api_key);
    if let Some(ref base_url) = config.base_url {
        api_config = api_config.with_api_base(base_url);
    }
    Client::with_config(api_config)
}

fn convert_error(err: async_openai::error::OpenAIError) -> ProviderError {
    match err {
        async_openai::error::OpenAIError::ApiError(api_err) => {
            let code = api_err.code.clone();
            let message = api_err.message.clone();

            if message.contains("rate limit") {
                ProviderError::RateLimited(message)
            } else if message.contains("api key") || message.contains("authentication") {
                ProviderError::Auth(message)
            } else {
                ProviderError::Api { code, message }
            }
        }
        async_openai::error::OpenAIError::Reqwest(e) => {
            if e.is_timeout() {
                ProviderError::Timeout(e.to_string())
            } else {
                ProviderError::Network(e.to_string())
            }
        }
        async_openai::error::OpenAIError::JSONDeserialize(e) => {
            ProviderError::MalformedResponse(e.to_string())
        }
        async_openai::error::OpenAIError::InvalidArgument(msg) => {
            ProviderError::InvalidRequest(msg)
        }
        other => ProviderError::Api {
            code: None,
            message: other.to_string(),
        },
    }
}

/// Embedding boundary backed by the OpenAI embeddings API.
pub struct OpenAIEmbeddings {
    client: Client<AsyncOpenAIConfig>,
    model: String,
}

impl OpenAIEmbeddings {
    /// Create a provider for the configured embedding model.
    pub fn new(config: &RagConfig) -> Self {
        Self {
            client: client_for(config),
            model: config.embedding_model.clone(),
        }
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAIEmbeddings {
    fn model(&self) -> &str {
        &self.model
    }

    async fn embed_batch(&self, texts: &[String]) -> ProviderResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let request = CreateEmbeddingRequestArgs::default()
            .model(&self.model)
            .input(texts.to_vec())
            .build()
            .map_err(|e| ProviderError::InvalidRequest(e.to_string()))?;

        let response = self
            .client
            .embeddings()
            .create(request)
            .await
            .map_err(convert_error)?;

        if response.data.len() != texts.len() {
            return Err(ProviderError::MalformedResponse(format!(
                "requested {} embeddings, provider returned {}",
                texts.len(),
                response.data.len()
            )));
        }

        // Realign by the provider's own index field; the contract is
        // positional.
        let mut data = response.data;
        data.sort_by_key(|d| d.index);
        Ok(data.into_iter().map(|d| d.embedding).collect())
    }
}

/// Chat-completion boundary with fixed decoding parameters.
pub struct OpenAIChat {
    client: Client<AsyncOpenAIConfig>,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAIChat {
    /// Create a provider for the configured chat model.
    pub fn new(config: &RagConfig) -> Self {
        Self {
            client: client_for(config),
            model: config.chat_model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }
}

#[async_trait]
impl ChatProvider for OpenAIChat {
    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, system: &str, user: &str) -> ProviderResult<String> {
        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(system)
                .build()
                .map_err(|e| ProviderError::InvalidRequest(e.to_string()))?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(user)
                .build()
                .map_err(|e| ProviderError::InvalidRequest(e.to_string()))?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .temperature(self.temperature)
            .max_tokens(self.max_tokens)
            .build()
            .map_err(|e| ProviderError::InvalidRequest(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(convert_error)?;

        let choice = response.choices.into_iter().next().ok_or_else(|| {
            ProviderError::MalformedResponse("completion response had no choices".to_string())
        })?;
        choice.message.content.ok_or_else(|| {
            ProviderError::MalformedResponse("completion choice had no content".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn providers_carry_configured_models() {
        let config = RagConfig::new("sk-test")
            .with_embedding_model("text-embedding-3-large")
            .with_chat_model("gpt-4o");
        assert_eq!(OpenAIEmbeddings::new(&config).model(), "text-embedding-3-large");
        assert_eq!(OpenAIChat::new(&config).model(), "gpt-4o");
    }

    #[tokio::test]
    async fn empty_batch_is_answered_locally() {
        let config = RagConfig::new("sk-test");
        let provider = OpenAIEmbeddings::new(&config);
        // No network call happens for an empty batch
        assert!(provider.embed_batch(&[]).await.unwrap().is_empty());
    }
}
