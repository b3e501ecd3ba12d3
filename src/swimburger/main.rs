//! # Swimburger CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/swimburger/cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/swimburger/cli/)                            │
//! │  - Flag filtering + clap parsing (args.rs)                  │
//! │  - Mode dispatch and stdout writes (commands.rs)            │
//! │  - Help text via templates (render.rs, templates/)          │
//! │  - Diagnostics to stderr (logging.rs)                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Library (mode.rs, render/, profile.rs)                     │
//! │  - Pure: flags -> OutputMode, Profile -> String             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Errors from any layer bubble up to here as a [`swimburger::error::CardError`]; this is the
//! only place that prints them (each message already reads `Error ...: <cause>`) and sets a
//! non-zero exit status.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
