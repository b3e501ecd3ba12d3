//! Output mode selection.
//!
//! Flags are collected into [`ModeFlags`] once and resolved to a single [`OutputMode`] by an
//! ordered list of checks:
//!
//! 1. `--help` / `-h` wins over everything
//! 2. `--json`, then `--yaml`, then `--vcard`
//! 3. the styled card when nothing else matched

use std::fmt;

/// The recognised mode flags of one invocation. Unknown flags never get this far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeFlags {
    pub help: bool,
    pub json: bool,
    pub yaml: bool,
    pub vcard: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Help,
    Json,
    Yaml,
    VCard,
    Card,
}

impl OutputMode {
    pub fn select(flags: ModeFlags) -> Self {
        if flags.help {
            OutputMode::Help
        } else if flags.json {
            OutputMode::Json
        } else if flags.yaml {
            OutputMode::Yaml
        } else if flags.vcard {
            OutputMode::VCard
        } else {
            OutputMode::Card
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputMode::Help => "help",
            OutputMode::Json => "json",
            OutputMode::Yaml => "yaml",
            OutputMode::VCard => "vcard",
            OutputMode::Card => "card",
        };
        f.write_str(name)
    }
}
