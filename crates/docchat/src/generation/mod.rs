//! Prompt construction and completion-service invocation

pub mod gemini;
pub mod prompt;

pub use gemini::GeminiClient;
pub use prompt::PromptBuilder;

use async_trait::async_trait;

use crate::error::Result;

/// Boundary abstraction over the external generative-text service
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send one composed prompt and return the service's textual answer
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Provider name for logging
    fn name(&self) -> &str;

    /// Target model identifier
    fn model(&self) -> &str;
}
