//! File access trait.
//!
//! This module defines the `FileAccess` trait through which the generator
//! reads descriptors, templates and example files, and writes the README.

use crate::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads and writes text files relative to a working directory.
///
/// Implementations decide how paths are resolved and which paths are
/// permitted; callers only deal in the relative strings users typed.
///
/// # Type Safety
///
/// All implementations must be `Send + Sync` to work with Tokio's async runtime.
///
/// # Examples
///
/// ```
/// use action_docs_core::traits::FileAccess;
/// use action_docs_core::{Error, Result};
/// use async_trait::async_trait;
/// use std::collections::HashMap;
/// use std::path::PathBuf;
/// use std::sync::Mutex;
///
/// struct MemoryFiles {
///     files: Mutex<HashMap<String, String>>,
/// }
///
/// #[async_trait]
/// impl FileAccess for MemoryFiles {
///     async fn exists(&self, path: &str) -> Result<bool> {
///         Ok(self.files.lock().unwrap().contains_key(path))
///     }
///
///     async fn read(&self, path: &str) -> Result<String> {
///         self.files
///             .lock()
///             .unwrap()
///             .get(path)
///             .cloned()
///             .ok_or_else(|| Error::ResourceNotFound {
///                 resource: path.to_string(),
///             })
///     }
///
///     async fn write(&self, path: &str, content: &str) -> Result<PathBuf> {
///         self.files
///             .lock()
///             .unwrap()
///             .insert(path.to_string(), content.to_string());
///         Ok(PathBuf::from(path))
///     }
/// }
/// ```
#[async_trait]
pub trait FileAccess: Send + Sync {
    /// Returns `true` if `path` names an existing file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathTraversal`](crate::Error::PathTraversal) if the
    /// path is outside the permitted directory.
    async fn exists(&self, path: &str) -> Result<bool>;

    /// Reads the whole file as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ResourceNotFound`](crate::Error::ResourceNotFound) if
    /// the file does not exist, or an I/O error if reading fails.
    async fn read(&self, path: &str) -> Result<String>;

    /// Writes `content` to `path`, replacing any existing file, and returns
    /// the absolute path written.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory does not exist or the write
    /// fails.
    async fn write(&self, path: &str, content: &str) -> Result<PathBuf>;
}
