//! # Swimburger Architecture
//!
//! Swimburger is a personal intro card: one fixed profile record, rendered in whichever
//! format the caller asks for. The library owns the record and every renderer; the binary
//! only picks a mode and writes the result.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Filters and parses flags, renders help text              │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Mode Selection (mode.rs)                                   │
//! │  - Resolves flags to exactly one OutputMode                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Renderers (render/)                                        │
//! │  - json, yaml, vcard, card: Profile -> String               │
//! │  - Pure functions, no I/O                                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Profile (profile.rs)                                       │
//! │  - The immutable record, in canonical field order           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Field Order Is A Contract
//!
//! Every output enumerates the profile fields in the order they are declared on
//! [`profile::Profile`]. JSON and YAML get it from serde's derive, vCard and the styled card
//! from their templates. Reordering the struct reorders every format.
//!
//! ## No I/O In The Library
//!
//! Renderers take a `&Profile` and return a `String` (or a [`error::Result`] when an encoder
//! is involved). They never print, never exit and never look at the terminal; colour support
//! is passed in by the caller.
//!
//! ## Module Overview
//!
//! - [`profile`]: The profile record and its link accessors
//! - [`mode`]: Output mode selection and precedence
//! - [`render`]: One renderer per output format
//! - [`theme`]: Named styles and the `style` template filter
//! - [`styles`]: The swimburger palette
//! - [`error`]: Error types
//! - `cli`: Argument parsing, help rendering and output for the binary (not part of the lib API)

pub mod error;
pub mod mode;
pub mod profile;
pub mod render;
pub mod styles;
pub mod theme;
