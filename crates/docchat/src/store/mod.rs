//! Persistent context accumulation
//!
//! The context store is an unbounded append-only text value. Every
//! extracted document text lands here, `"\n\n"`-delimited, and the chat
//! path reads it back whole.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;

use crate::error::{Error, Result};

/// Delimiter written before every appended entry
pub const ENTRY_DELIMITER: &str = "\n\n";

/// Durable, append-only text accumulator
///
/// Appends are monotonic: no deletion, no reordering, no deduplication.
/// The relative order of two concurrent appends is unspecified, but a
/// single append is never interleaved with another.
#[async_trait]
pub trait ContextStore: Send + Sync {
    /// Append one extracted text, prefixed with the entry delimiter
    async fn append(&self, text: &str) -> Result<()>;

    /// Read the entire accumulated context, or an empty string when
    /// nothing has ever been appended
    async fn read_all(&self) -> Result<String>;
}

/// File-backed store: one UTF-8 text file, created on first append
pub struct FileContextStore {
    path: PathBuf,
}

impl FileContextStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ContextStore for FileContextStore {
    async fn append(&self, text: &str) -> Result<()> {
        let mut file = tokio::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .await
            .map_err(Error::StorageWrite)?;

        // One write call per entry keeps concurrent appends contiguous.
        let mut entry = String::with_capacity(ENTRY_DELIMITER.len() + text.len());
        entry.push_str(ENTRY_DELIMITER);
        entry.push_str(text);

        file.write_all(entry.as_bytes())
            .await
            .map_err(Error::StorageWrite)?;
        file.flush().await.map_err(Error::StorageWrite)?;

        Ok(())
    }

    async fn read_all(&self) -> Result<String> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(Error::StorageRead(e)),
        }
    }
}

/// In-memory store for tests and ephemeral runs
#[derive(Default)]
pub struct MemoryContextStore {
    content: RwLock<String>,
}

impl MemoryContextStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContextStore for MemoryContextStore {
    async fn append(&self, text: &str) -> Result<()> {
        let mut content = self.content.write().await;
        content.push_str(ENTRY_DELIMITER);
        content.push_str(text);
        Ok(())
    }

    async fn read_all(&self) -> Result<String> {
        Ok(self.content.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn test_appends_concatenate_in_call_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileContextStore::new(dir.path().join("context.txt"));

        store.append("one").await.unwrap();
        store.append("two").await.unwrap();
        store.append("three").await.unwrap();

        assert_eq!(store.read_all().await.unwrap(), "\n\none\n\ntwo\n\nthree");
    }

    #[tokio::test]
    async fn test_read_all_before_first_append_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileContextStore::new(dir.path().join("context.txt"));

        assert_eq!(store.read_all().await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("context.txt");

        FileContextStore::new(&path).append("persisted").await.unwrap();

        let reopened = FileContextStore::new(&path);
        assert_eq!(reopened.read_all().await.unwrap(), "\n\npersisted");
    }

    #[tokio::test]
    async fn test_concurrent_appends_are_non_corrupting() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(FileContextStore::new(dir.path().join("context.txt")));

        let mut handles = Vec::new();
        for i in 0..16 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.append(&format!("entry-{i}")).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        // Relative order is unspecified; every entry must appear intact
        // exactly once.
        let content = store.read_all().await.unwrap();
        let mut entries: Vec<&str> = content
            .split(ENTRY_DELIMITER)
            .filter(|s| !s.is_empty())
            .collect();
        entries.sort();

        let mut expected: Vec<String> = (0..16).map(|i| format!("entry-{i}")).collect();
        expected.sort();

        assert_eq!(entries, expected);
    }

    #[tokio::test]
    async fn test_memory_store_matches_file_semantics() {
        let store = MemoryContextStore::new();
        assert_eq!(store.read_all().await.unwrap(), "");

        store.append("alpha").await.unwrap();
        store.append("beta").await.unwrap();
        assert_eq!(store.read_all().await.unwrap(), "\n\nalpha\n\nbeta");
    }
}
