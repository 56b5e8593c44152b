//! Application state shared across request handlers

use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::Result;
use crate::extract::ExtractorRegistry;
use crate::generation::{CompletionProvider, GeminiClient};
use crate::store::{ContextStore, FileContextStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AppConfig,
    registry: ExtractorRegistry,
    store: Arc<dyn ContextStore>,
    completion: Arc<dyn CompletionProvider>,
}

impl AppState {
    /// Wire up the default collaborators from configuration
    pub fn new(config: AppConfig) -> Result<Self> {
        let store = Arc::new(FileContextStore::new(config.store.context_file.clone()));
        let completion = Arc::new(GeminiClient::new(&config.llm)?);

        Ok(Self::with_parts(
            config,
            ExtractorRegistry::with_defaults(),
            store,
            completion,
        ))
    }

    /// Assemble state from explicit collaborators; tests substitute an
    /// in-memory store and a scripted completion provider here
    pub fn with_parts(
        config: AppConfig,
        registry: ExtractorRegistry,
        store: Arc<dyn ContextStore>,
        completion: Arc<dyn CompletionProvider>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                registry,
                store,
                completion,
            }),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn registry(&self) -> &ExtractorRegistry {
        &self.inner.registry
    }

    pub fn store(&self) -> &Arc<dyn ContextStore> {
        &self.inner.store
    }

    pub fn completion(&self) -> &Arc<dyn CompletionProvider> {
        &self.inner.completion
    }
}
