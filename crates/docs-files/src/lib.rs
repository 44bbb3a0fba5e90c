//! Sandboxed file access for action-docs.
//!
//! Every path the generator touches comes from user input (action inputs,
//! CLI flags), so all reads and writes go through [`SandboxedFiles`], which
//! confines them to one base directory.
//!
//! # Features
//!
//! - **Traversal rejection**: `..` segments and absolute paths that leave the
//!   base directory fail with `PathTraversal`
//! - **Atomic writes**: content goes to a temporary sibling, then is renamed
//! - **Async**: backed by `tokio::fs`
//!
//! # Examples
//!
//! ```
//! use action_docs_core::traits::FileAccess;
//! use action_docs_files::SandboxedFiles;
//! # use tempfile::TempDir;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> action_docs_core::Result<()> {
//! # let temp = TempDir::new().unwrap();
//! let files = SandboxedFiles::new(temp.path());
//!
//! files.write("README.md", "# Hello\n").await?;
//! assert!(files.exists("README.md").await?);
//! assert_eq!(files.read("README.md").await?, "# Hello\n");
//!
//! assert!(files.read("../outside").await.unwrap_err().is_path_traversal());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod sandbox;

pub use sandbox::SandboxedFiles;
