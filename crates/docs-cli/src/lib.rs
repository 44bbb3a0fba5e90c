//! `action-docs` CLI library.
//!
//! Exposes the command-line surface of the README generator as a library so
//! the commands can be tested without spawning the binary.
//!
//! # Architecture
//!
//! - `cli` - clap definitions
//! - `config` - raw inputs to a validated `GeneratorConfig`
//! - `github` - tag listing for `auto` versions
//! - `commands` - `generate`, `validate`, `completions`
//! - `workflow` - step outputs, job summary, error annotations
//! - `formatters` - json / text / pretty summaries
//! - `runner` - logging setup, dispatch, exit codes

#![allow(clippy::unused_async)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod formatters;
pub mod github;
pub mod runner;
pub mod workflow;

pub use cli::{Cli, Commands};
pub use config::{ConfigAssembler, ConfigInputs};
