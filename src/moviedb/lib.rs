//! # moviedb Architecture
//!
//! moviedb keeps a personal movie catalog in a single plain file, either JSON or
//! CSV. The library owns everything that matters; the `moviedb` binary is one
//! thin client on top of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Subcommands, interactive menu, terminal rendering        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, normalizes inputs             │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Listing, statistics, search, sorting, website rendering  │
//! │  - Metadata lookup goes through the `MovieLookup` trait     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `CatalogStore` trait                                     │
//! │  - JSON and CSV files (production), InMemoryStore (testing) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Catalog
//!
//! A catalog maps a unique title to a record of loosely typed fields
//! (`rating`, `year`, `imdbID`, optional `poster_url` and `notes`). Titles are
//! the only identity; adding a title that already exists replaces its record.
//! See [`model`] for the exact shape and [`store`] for the file formats.
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain Rust arguments, returns
//! `Result<CmdResult>`, and never prints or exits. Network access is confined to
//! [`metadata::OmdbClient`], which the API receives as a `Box<dyn MovieLookup>`,
//! so every layer below the CLI is testable offline.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Logic for each command
//! - [`store`]: `CatalogStore` contract and its JSON / CSV backends
//! - [`model`]: `Catalog`, `Record`, `NewMovie`
//! - [`metadata`]: OMDb lookup
//! - [`config`]: Configuration management
//! - [`init`]: Wires config, store and lookup into a ready `MovieApi`
//! - [`error`]: Error types
//! - `cli`: Argument parsing, the menu and printing for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod metadata;
pub mod model;
pub mod store;

#[cfg(test)]
pub mod test_utils;
