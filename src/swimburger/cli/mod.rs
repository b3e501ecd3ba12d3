//! # CLI Behavior
//!
//! One invocation: filter and parse flags, pick one output mode, render, write, exit.
//!
//! ## Permissive Flags
//!
//! Only `--help`, `-h`, `--json`, `--yaml` and `--vcard` mean anything. Every other argument
//! is dropped before clap sees it, so `swimburger --bogus` still prints the card and exits 0.
//! Repeating a flag is harmless.
//!
//! ## Precedence
//!
//! Help beats everything; then `--json`, `--yaml`, `--vcard` in that order; the styled card is
//! the default. See [`swimburger::mode`].
//!
//! ## Module Structure
//!
//! - `args`: Flag filtering and clap parsing
//! - `commands`: Mode dispatch and output
//! - `logging`: tracing subscriber setup
//! - `render`: Help text rendering
//! - `templates`: Output templates

mod args;
mod commands;
mod logging;
mod render;
mod templates;

pub use commands::run;
