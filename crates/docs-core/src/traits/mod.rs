//! Collaborator traits.
//!
//! The generator touches the outside world in exactly two places: the file
//! system and the repository host's tag listing. Both sit behind the traits
//! below so the pipeline can run against in-memory fakes in tests.
//!
//! # Module Structure
//!
//! - `files` - Sandboxed text file access
//! - `tags` - Repository tag listing

mod files;
mod tags;

pub use files::FileAccess;
pub use tags::TagSource;
