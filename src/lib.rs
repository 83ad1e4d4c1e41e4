//! fee core library.
//!
//! This crate exposes programmatic APIs for scaffolding ESLint/Prettier
//! configuration and JetBrains file-watcher rules.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution (fee.toml).
//! - `models`: Answer set, ESLint/Prettier config objects, watch rules.
//! - `synth`: Deterministic answers-to-config synthesis.
//! - `severity`: Numeric-to-symbolic rule severity normalization.
//! - `modules`: npm package resolution for a synthesized config.
//! - `serialize`: Stable-key-order JSON/YAML config writing.
//! - `idea`: JetBrains watcher tasks and named-scope merging.
//! - `prompt`: Interactive question stages (dialoguer).
//! - `install`: npm invocation.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod idea;
pub mod install;
pub mod models;
pub mod modules;
pub mod prompt;
pub mod serialize;
pub mod severity;
pub mod synth;
pub mod utils;
