//! Command implementations for the `action-docs` CLI.
//!
//! Each command module does its work through the library crates and formats
//! its summary according to the requested output format.

pub mod common;
pub mod completions;
pub mod generate;
pub mod validate;
