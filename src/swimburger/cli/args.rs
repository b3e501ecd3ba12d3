use clap::Parser;
use std::ffi::OsString;
use swimburger::mode::ModeFlags;
use tracing::{debug, warn};

/// The only arguments the CLI reacts to. Anything else is ignored.
pub const RECOGNISED_FLAGS: &[&str] = &["--help", "-h", "--json", "--yaml", "--vcard"];

#[derive(Parser, Debug, Default)]
#[command(
    name = "swimburger",
    bin_name = "swimburger",
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
#[command(about = "Personal intro card for Niels Swimberghe (Swimburger)", long_about = None)]
pub struct Cli {
    /// Show this help message
    #[arg(short, long)]
    pub help: bool,

    /// Output profile data as JSON
    #[arg(long)]
    pub json: bool,

    /// Output profile data as YAML
    #[arg(long)]
    pub yaml: bool,

    /// Output profile data as vCard (VCF format)
    #[arg(long)]
    pub vcard: bool,
}

impl Cli {
    /// Parses a full argument list (binary name first), dropping unrecognised arguments.
    pub fn parse_permissive<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let bin = args.next().unwrap_or_else(|| OsString::from("swimburger"));

        let (known, ignored): (Vec<OsString>, Vec<OsString>) = args.partition(|arg| {
            arg.to_str().is_some_and(|s| RECOGNISED_FLAGS.contains(&s))
        });
        if !ignored.is_empty() {
            debug!(?ignored, "ignoring unrecognised arguments");
        }

        Cli::try_parse_from(std::iter::once(bin).chain(known)).unwrap_or_else(|e| {
            warn!(error = %e, "flag parsing failed, falling back to defaults");
            Cli::default()
        })
    }

    pub fn mode_flags(&self) -> ModeFlags {
        ModeFlags {
            help: self.help,
            json: self.json,
            yaml: self.yaml,
            vcard: self.vcard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swimburger::mode::OutputMode;

    fn mode(args: &[&str]) -> OutputMode {
        let argv = std::iter::once("swimburger").chain(args.iter().copied());
        OutputMode::select(Cli::parse_permissive(argv).mode_flags())
    }

    #[test]
    fn test_no_args_is_card() {
        assert_eq!(mode(&[]), OutputMode::Card);
    }

    #[test]
    fn test_each_flag() {
        assert_eq!(mode(&["--help"]), OutputMode::Help);
        assert_eq!(mode(&["-h"]), OutputMode::Help);
        assert_eq!(mode(&["--json"]), OutputMode::Json);
        assert_eq!(mode(&["--yaml"]), OutputMode::Yaml);
        assert_eq!(mode(&["--vcard"]), OutputMode::VCard);
    }

    #[test]
    fn test_help_after_format_flag_still_wins() {
        assert_eq!(mode(&["--json", "--help"]), OutputMode::Help);
        assert_eq!(mode(&["--vcard", "-h", "--yaml"]), OutputMode::Help);
    }

    #[test]
    fn test_priority_independent_of_argument_order() {
        assert_eq!(mode(&["--vcard", "--yaml", "--json"]), OutputMode::Json);
        assert_eq!(mode(&["--vcard", "--yaml"]), OutputMode::Yaml);
    }

    #[test]
    fn test_unknown_arguments_are_ignored() {
        assert_eq!(mode(&["--bogus"]), OutputMode::Card);
        assert_eq!(mode(&["extra", "--json", "-x"]), OutputMode::Json);
        assert_eq!(mode(&["--json=1"]), OutputMode::Card);
        assert_eq!(mode(&["--", "--yaml"]), OutputMode::Yaml);
    }

    #[test]
    fn test_repeated_flags_are_allowed() {
        assert_eq!(mode(&["--json", "--json"]), OutputMode::Json);
        assert_eq!(mode(&["-h", "--help", "-h"]), OutputMode::Help);
    }

    #[test]
    fn test_mode_flags_mirror_cli() {
        let cli = Cli::parse_permissive(["swimburger", "--yaml", "--vcard"]);
        assert_eq!(
            cli.mode_flags(),
            ModeFlags {
                help: false,
                json: false,
                yaml: true,
                vcard: true,
            }
        );
    }
}
