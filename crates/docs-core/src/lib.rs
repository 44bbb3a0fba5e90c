//! Core types, checks, and errors for action-docs.
//!
//! This crate provides the foundational types and pure logic used across
//! all other crates in the action-docs workspace.
//!
//! # Architecture
//!
//! The core consists of:
//! - The normalized action model (`ActionMetadata`) and generator configuration
//! - Error hierarchy with stable codes
//! - Link safety checks (`security`)
//! - Latest-tag selection (`version`)
//! - Collaborator traits for file access and tag listing

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod error;

pub mod cli;
pub mod metadata;
pub mod security;
pub mod traits;
pub mod version;

pub use config::{
    Badge, DEFAULT_ACTION_PATH, DEFAULT_LICENSE, DEFAULT_OUTPUT_PATH, Example, GeneratorConfig,
    HeaderLevel, SectionName,
};
pub use error::{Error, Result};
pub use metadata::{ActionInput, ActionMetadata, ActionOutput, ActionRuns};
