//! docchat: document Q&A with persistent context accumulation
//!
//! Uploaded documents are reduced to plain text by a per-format extractor
//! registry, appended to a durable context store, and questions are
//! answered by a Gemini completion call over the full accumulated context.

pub mod config;
pub mod error;
pub mod extract;
pub mod generation;
pub mod server;
pub mod store;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use extract::{ExtractorRegistry, MediaType};
pub use generation::{CompletionProvider, PromptBuilder};
pub use store::ContextStore;
