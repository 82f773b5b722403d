//! # Snips Architecture
//!
//! Snips is a library for finding code snippets in front-matter
//! delimited text files, with a CLI client on top. The library owns all
//! of the parsing, filtering, and persistence; the binary only parses
//! arguments and prints.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Wires search results into the last-search sidecar        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - get / last / export business logic                       │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract SnippetStore trait                              │
//! │  - FileStore (production), MemoryStore (testing)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Snippet File Format
//!
//! A snippet file is a sequence of records, each a front-matter block
//! (`---` delimited `key: value` lines) followed by a verbatim body:
//!
//! ```text
//! ---
//! language: go
//! tags: hello,cli
//! ---
//! fmt.Println("hi")
//! ```
//!
//! `id`, `language`, `tags`, and `description` are the reserved keys;
//! anything else is carried as opaque metadata. Records without an `id`
//! get one assigned the first time the file is parsed, and the file is
//! rewritten in place (after a `.bk` backup) to persist it; see
//! [`store::fs::FileStore`].
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns
//! `Result<CmdResult>`, and never touches stdout/stderr or
//! `std::process::exit`. The same core could serve an editor plugin or
//! a daemon.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The core [`model::Snippet`] type
//! - [`parse`]: The front-matter stream parser
//! - [`filter`]: Composable snippet predicates
//! - [`ident`]: Id generation and backfill
//! - [`index`]: The last-search ordinal sidecar
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod ident;
pub mod index;
pub mod model;
pub mod parse;
pub mod store;
