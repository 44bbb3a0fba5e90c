//! Base-directory sandbox backed by `tokio::fs`.

use action_docs_core::traits::FileAccess;
use action_docs_core::{Error, Result};
use async_trait::async_trait;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// File access confined to a base directory.
///
/// Paths are resolved lexically against the base: symlinks are not
/// followed during the check, and the base itself is never canonicalized.
#[derive(Debug, Clone)]
pub struct SandboxedFiles {
    base: PathBuf,
}

impl SandboxedFiles {
    /// Creates a sandbox rooted at `base`.
    ///
    /// A relative `base` is kept relative; pass an absolute path to get
    /// absolute results from [`FileAccess::write`].
    #[must_use]
    pub fn new(base: impl AsRef<Path>) -> Self {
        Self {
            base: normalize(base.as_ref()),
        }
    }

    /// Creates a sandbox rooted at the process working directory.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the working directory cannot be determined.
    pub fn from_current_dir() -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|source| Error::Io {
            path: ".".to_string(),
            source,
        })?;
        Ok(Self::new(cwd))
    }

    /// Returns the base directory.
    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Resolves `path` against the base directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathTraversal`] if the result lies outside the base.
    ///
    /// # Examples
    ///
    /// ```
    /// use action_docs_files::SandboxedFiles;
    /// use std::path::Path;
    ///
    /// let files = SandboxedFiles::new("/work");
    /// assert_eq!(files.resolve("docs/../README.md").unwrap(), Path::new("/work/README.md"));
    /// assert!(files.resolve("../etc/passwd").is_err());
    /// assert!(files.resolve("/etc/passwd").is_err());
    /// ```
    pub fn resolve(&self, path: &str) -> Result<PathBuf> {
        let resolved = normalize(&self.base.join(path));
        if resolved.starts_with(&self.base) {
            Ok(resolved)
        } else {
            debug!(path, base = %self.base.display(), "rejected path outside base");
            Err(Error::PathTraversal {
                path: path.to_string(),
            })
        }
    }
}

/// Collapses `.` and `..` without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() && !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

fn io_error(path: &Path, source: io::Error) -> Error {
    Error::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Temporary sibling used for atomic writes: `dir/.name.tmp`.
fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.tmp"))
}

#[async_trait]
impl FileAccess for SandboxedFiles {
    async fn exists(&self, path: &str) -> Result<bool> {
        let resolved = self.resolve(path)?;
        Ok(tokio::fs::try_exists(&resolved).await.unwrap_or(false))
    }

    async fn read(&self, path: &str) -> Result<String> {
        let resolved = self.resolve(path)?;
        tokio::fs::read_to_string(&resolved)
            .await
            .map_err(|source| match source.kind() {
                io::ErrorKind::NotFound => Error::ResourceNotFound {
                    resource: resolved.display().to_string(),
                },
                _ => io_error(&resolved, source),
            })
    }

    async fn write(&self, path: &str, content: &str) -> Result<PathBuf> {
        let resolved = self.resolve(path)?;
        let parent = resolved.parent().unwrap_or(self.base.as_path());

        if !tokio::fs::try_exists(parent).await.unwrap_or(false) {
            return Err(io_error(
                &resolved,
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("directory '{}' does not exist", parent.display()),
                ),
            ));
        }

        let temp = temp_path(&resolved);
        tokio::fs::write(&temp, content)
            .await
            .map_err(|source| io_error(&temp, source))?;
        if let Err(source) = tokio::fs::rename(&temp, &resolved).await {
            if let Err(err) = tokio::fs::remove_file(&temp).await {
                debug!(path = %temp.display(), error = %err, "failed to remove temp file");
            }
            return Err(io_error(&resolved, source));
        }

        debug!(path = %resolved.display(), bytes = content.len(), "wrote file");
        Ok(resolved)
    }
}
