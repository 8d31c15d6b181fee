//! # CLI Layer
//!
//! This module is **one possible UI client** for moviedb. It is the only place
//! that reads stdin, writes stdout/stderr, or decides exit codes.
//!
//! - `commands`: `run()`, logging setup and per-subcommand handlers
//! - `menu`: the interactive numbered menu
//! - `render`: turns `CmdResult` pieces into terminal text
//! - `setup`: argument parsing via clap

mod commands;
mod menu;
mod render;
pub mod setup;

pub use commands::run;
