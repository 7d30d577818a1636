//! Grounded answer generation.
//!
//! Assembles the retrieved chunks and the question into two fixed
//! instructions for the chat provider. The context-only constraint
//! lives in the prompt; there is no code path that checks it.

use async_trait::async_trait;
use ragline_kernel::error::RagResult;
use ragline_kernel::pipeline::AnswerGenerator;
use ragline_kernel::provider::ChatProvider;
use std::sync::Arc;

/// Fixed instruction constraining answers to the supplied context.
const SYSTEM_INSTRUCTION: &str = "You are a helpful assistant that answers questions based ONLY \
on the provided context. If the answer is not clearly contained in the context, respond politely \
that you cannot help with that specific point.";

/// Separator between context chunks in the assembled prompt.
const CONTEXT_SEPARATOR: &str = "\n\n";

/// Builds a context-grounded prompt and asks the chat provider for an
/// answer.
pub struct GroundedGenerator {
    provider: Arc<dyn ChatProvider>,
}

impl GroundedGenerator {
    /// Create a generator over a chat provider.
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self { provider }
    }

    /// Assemble the per-call user instruction: the context block, the
    /// literal question, and the grounding directive.
    fn user_instruction(question: &str, context_chunks: &[String]) -> String {
        let context = context_chunks.join(CONTEXT_SEPARATOR);
        format!(
            "Context:\n{context}\n\nQuestion: {question}\nAnswer concisely based only on the context above."
        )
    }
}

#[async_trait]
impl AnswerGenerator for GroundedGenerator {
    async fn generate(&self, question: &str, context_chunks: &[String]) -> RagResult<String> {
        let user = Self::user_instruction(question, context_chunks);
        let answer = self.provider.complete(SYSTEM_INSTRUCTION, &user).await?;
        Ok(answer)
    }
}
