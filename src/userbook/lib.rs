//! # Userbook Architecture
//!
//! Userbook keeps a small list of users (name, age, email) in a JSON file and
//! offers create / add / list / search / remove on it. It is a library with a
//! CLI client, not a CLI with some library code.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Arguments, interactive menu, prompts, rendering          │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation and mutation, returns CmdResult               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore over a StorageBackend (fs or memory)         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain arguments and returns
//! `Result<CmdResult>`. It never prompts. Removal, which needs a human to
//! confirm or pick among same-named users, is exposed as a plan the caller
//! resolves (see [`commands::remove`]).
//!
//! Every operation is a full load, mutate, save cycle on the backing file.
//! There is no locking: two processes writing at once lose updates
//! (last save wins).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Backing file access and JSON encoding
//! - [`model`]: `Record`, `Scope`, seed data
//! - [`validation`]: Field rules for new records
//! - [`config`]: Per-scope configuration
//! - [`init`]: Scope and path resolution for the binary
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
pub mod validation;
