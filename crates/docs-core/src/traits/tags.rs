//! Repository tag listing trait.

use crate::Result;
use async_trait::async_trait;

/// Lists the tag names of a hosted repository.
///
/// Used only for version auto-detection. Failures are not fatal to
/// generation: callers fall back to the default version.
#[async_trait]
pub trait TagSource: Send + Sync {
    /// Returns tag names for `owner/repo`, in the order the host reports them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RemoteRequestFailed`](crate::Error::RemoteRequestFailed)
    /// if the request fails or the response cannot be decoded.
    async fn list_tags(&self, owner: &str, repo: &str) -> Result<Vec<String>>;
}
