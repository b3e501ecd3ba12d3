//! # CLI Templates
//!
//! Templates live in `templates/` as stand-alone files and are embedded here with
//! `include_str!`. They are minijinja templates rendered through the swimburger theme; line
//! breaks are literal, and the file's trailing newline is part of the output.
pub const HELP_TEMPLATE: &str = include_str!("templates/help.tmp");
