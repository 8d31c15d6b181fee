//! # moviedb CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file only
//! invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/moviedb/cli/)                               │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Dispatch + logging setup (commands.rs)                   │
//! │  - Interactive numbered menu (menu.rs)                      │
//! │  - Terminal rendering (render.rs)                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!              moviedb::api::MovieApi (library)
//! ```
//!
//! Running `moviedb` without a subcommand starts the menu, which behaves like
//! the one-shot subcommands except that errors are printed and the loop goes on.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
